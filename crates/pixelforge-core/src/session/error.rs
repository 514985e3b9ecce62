//! Session error types.

use thiserror::Error;

use crate::encode::EncodeError;
use crate::tool::Tool;

/// Errors returned by [`super::EditSession`] operations.
///
/// All of them are recoverable: the session state is unchanged when one is
/// returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("No image loaded")]
    NoImage,

    #[error("Nothing copied: select a region before pasting")]
    NothingCopied,

    #[error("Tool is not active: {0}")]
    ToolNotActive(Tool),

    /// Encoding or writing the exported image failed
    #[error("Export failed: {0}")]
    Export(String),
}

impl From<EncodeError> for SessionError {
    fn from(err: EncodeError) -> Self {
        SessionError::Export(err.to_string())
    }
}
