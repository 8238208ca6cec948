/// Validates a tool, tool-set, or variable name.
///
/// Checks:
/// - Non-empty
/// - No path separators (/, \)
/// - Not "." or ".."
/// - Characters are ASCII alphanumeric, '-', '_', or (optionally) '.'
pub fn validate_name(name: &str, allow_dots: bool) -> bool {
    if name.is_empty() {
        return false;
    }
    if name.contains('/') || name.contains('\\') {
        return false;
    }
    if name == "." || name == ".." {
        return false;
    }
    name.chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_' || (allow_dots && c == '.'))
}

/// Validates a literal variable identifier as used verbatim in both artifacts.
///
/// Must start with an ASCII letter or '_' and continue with ASCII
/// alphanumerics or '_', which is the intersection of what make and
/// Dockerfile `ARG` accept.
pub fn validate_variable_identifier(id: &str) -> bool {
    let mut chars = id.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[macro_export]
macro_rules! impl_validated_name {
    ($name:ident, $allow_dots:expr, $err_variant:path) => {
        impl $name {
            /// Validate and create a new instance.
            pub fn new(name: &str) -> Result<Self, $crate::domain::DescriptorError> {
                if $crate::domain::identifiers::validation::validate_name(name, $allow_dots) {
                    Ok(Self(name.to_string()))
                } else {
                    Err($err_variant(name.to_string()))
                }
            }

            /// Return the inner string value.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl std::ops::Deref for $name {
            type Target = str;
            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self
            }
        }

        impl std::borrow::Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_names() {
        assert!(validate_name("golangci-lint", false));
        assert!(validate_name("yaml_lint", false));
        assert!(validate_name("kubectl123", false));
    }

    #[test]
    fn valid_names_with_dots() {
        assert!(validate_name("helm.v3", true));
        assert!(!validate_name("helm.v3", false));
    }

    #[test]
    fn invalid_names() {
        assert!(!validate_name("", false));
        assert!(!validate_name("bin/jq", false));
        assert!(!validate_name("bin\\jq", false));
        assert!(!validate_name(".", true));
        assert!(!validate_name("..", true));
        assert!(!validate_name("has space", false));
        assert!(!validate_name("jq@1.7", true));
        assert!(!validate_name("ünïcode", false));
    }

    #[test]
    fn variable_identifiers() {
        assert!(validate_variable_identifier("LOCALBIN"));
        assert!(validate_variable_identifier("_TOOLS_DIR2"));
        assert!(!validate_variable_identifier("2BIN"));
        assert!(!validate_variable_identifier("LOCAL-BIN"));
        assert!(!validate_variable_identifier(""));
    }
}
