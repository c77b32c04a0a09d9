//! Error types for algebra traits.
//!
//! These errors are used by the algebra layer and are intentionally
//! domain-specific rather than generic. Each one names the file whose
//! upload failed and how.

use std::fmt;

/// Error that can occur while uploading a single image.
///
/// This is the error type for [`ImageUploader`](super::ImageUploader)
/// operations. Any of these aborts the whole publishing run.
#[derive(Debug, Clone, PartialEq)]
pub enum UploadError {
    /// The resolved path does not exist in the checkout.
    FileNotFound { path: String },

    /// The file exists but could not be read.
    Unreadable { path: String, reason: String },

    /// The remote service refused the file (size, type, credentials).
    Rejected {
        code: String,
        message: String,
        status: u16,
    },

    /// The path does not stay inside the repository checkout.
    OutsideRepository { path: String },

    /// Network or transport error, with its cause chain.
    Transport { message: String },

    /// The upload succeeded but the response carried no usable URL.
    MalformedResponse { reason: String },
}

impl UploadError {
    /// Returns `true` if the file itself is the problem, not the remote side.
    pub fn is_local(&self) -> bool {
        matches!(
            self,
            Self::FileNotFound { .. } | Self::Unreadable { .. } | Self::OutsideRepository { .. }
        )
    }
}

impl fmt::Display for UploadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FileNotFound { path } => write!(f, "File not found: {}", path),
            Self::Unreadable { path, reason } => {
                write!(f, "Could not read {}: {}", path, reason)
            }
            Self::Rejected {
                code,
                message,
                status,
            } => write!(f, "Rejected by remote [{} {}]: {}", status, code, message),
            Self::OutsideRepository { path } => {
                write!(f, "Refusing to read {} outside the repository", path)
            }
            Self::Transport { message } => write!(f, "Transport error: {}", message),
            Self::MalformedResponse { reason } => write!(f, "Malformed response: {}", reason),
        }
    }
}

impl std::error::Error for UploadError {}

// ==============================================================================
// Conversion from existing errors
// ==============================================================================

impl From<crate::error::AppError> for UploadError {
    fn from(err: crate::error::AppError) -> Self {
        use crate::error::{error_chain, AppError};

        match err {
            AppError::RemoteSubmission {
                code,
                message,
                status,
            } => Self::Rejected {
                code: code.to_string(),
                message,
                status: status.as_u16(),
            },
            AppError::MalformedResponse(reason) => Self::MalformedResponse { reason },
            _ => Self::Transport {
                message: error_chain(&err),
            },
        }
    }
}
