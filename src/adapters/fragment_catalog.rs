//! Fragment catalog backed by the templates embedded in the binary.

use std::path::Path;

use include_dir::{Dir, DirEntry, include_dir};

use crate::domain::{ArtifactKind, Fragment, TemplateError};
use crate::ports::FragmentCatalog;

/// Embedded template directory.
static TEMPLATES_DIR: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/src/assets/templates");

/// Fragments registered for every artifact kind.
const SHARED_DIR: &str = "common";

const FRAGMENT_EXTENSION: &str = "jinja";

/// Serves `common/` followed by the artifact kind's own directory.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedFragmentCatalog;

impl EmbeddedFragmentCatalog {
    pub fn new() -> Self {
        Self
    }
}

impl FragmentCatalog for EmbeddedFragmentCatalog {
    fn fragments(&self, kind: ArtifactKind) -> Result<Vec<Fragment>, TemplateError> {
        let mut fragments = load_dir(SHARED_DIR)?;
        fragments.extend(load_dir(kind.fragment_dir())?);
        Ok(fragments)
    }
}

fn load_dir(name: &str) -> Result<Vec<Fragment>, TemplateError> {
    let dir = TEMPLATES_DIR.get_dir(name).ok_or_else(|| TemplateError::NotFound(name.to_string()))?;
    let mut fragments = Vec::new();
    collect_fragments(dir, dir.path(), &mut fragments)?;
    fragments.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(fragments)
}

fn collect_fragments(
    dir: &Dir<'_>,
    base: &Path,
    fragments: &mut Vec<Fragment>,
) -> Result<(), TemplateError> {
    for entry in dir.entries() {
        match entry {
            DirEntry::File(file) => {
                let path = file.path();
                if path.extension().and_then(|ext| ext.to_str()) != Some(FRAGMENT_EXTENSION) {
                    continue;
                }
                let relative = path.strip_prefix(base).unwrap_or(path).with_extension("");
                let name = relative.to_string_lossy().replace('\\', "/");
                let source = file.contents_utf8().ok_or_else(|| TemplateError::Register {
                    name: name.clone(),
                    details: "fragment is not valid UTF-8".to_string(),
                })?;
                fragments.push(Fragment::new(name, source));
            }
            DirEntry::Dir(subdir) => collect_fragments(subdir, base, fragments)?,
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{FetchSource, Installer, PipxPackage};
    use crate::services::TemplateEngine;

    fn names(kind: ArtifactKind) -> Vec<String> {
        EmbeddedFragmentCatalog::new()
            .fragments(kind)
            .unwrap()
            .into_iter()
            .map(|fragment| fragment.name)
            .collect()
    }

    #[test]
    fn every_kind_has_entry_and_installer_fragments() {
        let installers = [
            Installer::Provided { default: "x".into() },
            Installer::Http(FetchSource { url: "u".into(), archive: None }),
            Installer::ObjectStore(FetchSource { url: "u".into(), archive: None }),
            Installer::PythonApp(PipxPackage { package: "x".into(), version: None, app: "x".into() }),
        ];
        for kind in ArtifactKind::ALL {
            let names = names(kind);
            assert!(names.iter().any(|n| n == kind.entry_fragment()), "{kind}: {names:?}");
            for installer in &installers {
                assert!(names.iter().any(|n| n == installer.fragment_name()), "{kind}: {names:?}");
            }
            for name in ["install/go", "install/maven", "extract/zip", "extract/tar"] {
                assert!(names.iter().any(|n| n == name), "{kind}: missing {name}");
            }
        }
    }

    #[test]
    fn shared_fragments_come_first() {
        let fragments = EmbeddedFragmentCatalog::new().fragments(ArtifactKind::Makefile).unwrap();
        let main = fragments.iter().position(|f| f.name == "main").unwrap();
        let http = fragments.iter().position(|f| f.name == "install/http").unwrap();
        assert!(http < main);
    }

    #[test]
    fn embedded_fragments_compile() {
        for kind in ArtifactKind::ALL {
            let fragments = EmbeddedFragmentCatalog::new().fragments(kind).unwrap();
            TemplateEngine::new(kind.reference(), fragments).unwrap();
        }
    }
}
