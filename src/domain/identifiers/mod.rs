pub mod naming;
pub mod validation;

use serde::Serialize;

use crate::domain::DescriptorError;
use crate::impl_validated_name;

/// A validated tool or tool-set name.
///
/// Guarantees:
/// - Non-empty
/// - Contains only ASCII alphanumeric characters, `-`, `_`, or `.`
/// - No path traversal components (/, \\, .., etc.)
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct ToolName(String);

impl_validated_name!(ToolName, true, DescriptorError::InvalidToolName);
