use crate::harness::TestContext;
use crate::harness::test_context::JQ_CONFIG;
use predicates::prelude::*;

#[test]
fn generate_writes_makefile_and_dockerfile() {
    let ctx = TestContext::new();
    ctx.write_config(JQ_CONFIG);

    ctx.cli()
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote Makefile to make-env.Makefile"))
        .stdout(predicate::str::contains("Wrote Dockerfile to make-env.Dockerfile"));

    let makefile = ctx.read_file("make-env.Makefile");
    assert!(makefile.contains("JQ_URL ?= https://x/jq"));
    assert!(makefile.contains(".PHONY: jq"));

    let dockerfile = ctx.read_file("make-env.Dockerfile");
    assert!(dockerfile.starts_with("# syntax=docker/dockerfile:1"));
    assert!(dockerfile.contains("${JQ_URL}"));
    assert!(dockerfile.contains("AS make-env-jq"));
}

#[test]
fn generate_reads_toml_config() {
    let ctx = TestContext::new();
    ctx.write_file("tools.toml", "[tools.jq.http]\nurl = \"https://x/jq\"\n");

    ctx.cli().args(["--config", "tools.toml", "--out", "tools.mk"]).assert().success();

    assert!(ctx.read_file("tools.mk").contains("JQ_URL ?= https://x/jq"));
    assert!(ctx.read_file("tools.mk").contains("# Source: tools.toml (sha256:"));
}

#[test]
fn generate_creates_output_directories() {
    let ctx = TestContext::new();
    ctx.write_config(JQ_CONFIG);

    ctx.cli()
        .args(["--makefile", "build/tools.mk", "--dockerfile", "build/docker/Dockerfile"])
        .assert()
        .success();

    assert!(ctx.exists("build/tools.mk"));
    assert!(ctx.exists("build/docker/Dockerfile"));
}
