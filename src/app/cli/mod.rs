//! CLI Adapter.

mod logging;

use std::path::PathBuf;

use clap::Parser;
use tracing::{debug, error};

use crate::app::commands::generate::{
    DEFAULT_CONFIG_PATH, DEFAULT_DOCKERFILE_PATH, DEFAULT_MAKEFILE_PATH, GenerateOptions,
};

#[derive(Parser, Debug)]
#[command(name = "make-env")]
#[command(version)]
#[command(
    about = "Generate a Makefile and a Dockerfile that install the tools listed in make-env.yaml",
    long_about = None
)]
struct Cli {
    /// Tool manifest to read (YAML, or TOML by extension)
    #[arg(long, value_name = "PATH", default_value = DEFAULT_CONFIG_PATH)]
    config: String,
    /// Makefile to write; empty to skip
    #[arg(
        long,
        visible_alias = "makefile",
        value_name = "PATH",
        default_value = DEFAULT_MAKEFILE_PATH
    )]
    out: String,
    /// Dockerfile to write; empty to skip
    #[arg(long, value_name = "PATH", default_value = DEFAULT_DOCKERFILE_PATH)]
    dockerfile: String,
    /// Change to this directory before resolving any path
    #[arg(short = 'C', long, value_name = "DIR")]
    directory: Option<PathBuf>,
    /// Enable debug logging
    #[arg(long)]
    debug: bool,
}

impl Cli {
    fn options(self) -> GenerateOptions {
        GenerateOptions {
            config_path: self.config,
            makefile_path: self.out,
            dockerfile_path: self.dockerfile,
            directory: self.directory,
        }
    }
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    if !logging::init(cli.debug) {
        debug!("reusing the tracing subscriber already installed");
    }

    match crate::generate(&cli.options()) {
        Ok(report) => {
            for artifact in &report.artifacts {
                println!(
                    "✅ Wrote {} to {} ({} tools, {} bytes)",
                    artifact.kind, artifact.path, report.tools, artifact.bytes
                );
            }
        }
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    }
}
