// src/error.rs
//! Application error types with structured error handling.
//!
//! Every stage of the publishing run has its own variant, so the log line
//! written before a non-zero exit names the stage that failed and why.

use crate::algebras::UploadError;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Ghost Admin API error types as a typed vocabulary.
///
/// Ghost reports failures as `{"errors": [{"type": "...", "message": "..."}]}`;
/// the `type` string is mapped here instead of being matched ad hoc.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GhostErrorCode {
    /// Request body or field values were rejected
    Validation,
    /// Token missing, invalid or expired
    Unauthorized,
    /// Token is valid but lacks permission for this resource
    NoPermission,
    /// The requested resource does not exist
    NotFound,
    /// Uploaded file exceeds the configured size limit
    EntityTooLarge,
    /// Uploaded file type is not accepted
    UnsupportedMediaType,
    /// Ghost internal server error
    InternalServer,
    /// HTTP status code fallback when the error body is unparseable
    HttpStatus(u16),
    /// An error type this client doesn't recognize yet
    Unknown(String),
}

impl GhostErrorCode {
    /// Parse a Ghost error `type` string into the typed vocabulary.
    pub fn from_api_response(error_type: &str) -> Self {
        match error_type {
            "ValidationError" | "BadRequestError" => Self::Validation,
            "UnauthorizedError" => Self::Unauthorized,
            "NoPermissionError" => Self::NoPermission,
            "NotFoundError" => Self::NotFound,
            "RequestEntityTooLargeError" => Self::EntityTooLarge,
            "UnsupportedMediaTypeError" => Self::UnsupportedMediaType,
            "InternalServerError" => Self::InternalServer,
            other => Self::Unknown(other.to_string()),
        }
    }

    /// Create from an HTTP status code when the error body is unparseable.
    pub fn from_http_status(status: u16) -> Self {
        Self::HttpStatus(status)
    }

    /// Whether the credentials, not the request, are at fault.
    pub fn is_auth_failure(&self) -> bool {
        matches!(
            self,
            Self::Unauthorized | Self::NoPermission | Self::HttpStatus(401 | 403)
        )
    }
}

impl fmt::Display for GhostErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation => write!(f, "ValidationError"),
            Self::Unauthorized => write!(f, "UnauthorizedError"),
            Self::NoPermission => write!(f, "NoPermissionError"),
            Self::NotFound => write!(f, "NotFoundError"),
            Self::EntityTooLarge => write!(f, "RequestEntityTooLargeError"),
            Self::UnsupportedMediaType => write!(f, "UnsupportedMediaTypeError"),
            Self::InternalServer => write!(f, "InternalServerError"),
            Self::HttpStatus(code) => write!(f, "http_{}", code),
            Self::Unknown(code) => write!(f, "{}", code),
        }
    }
}

/// Main application error type.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Missing configuration: {0}")]
    MissingConfiguration(String),

    #[error("Could not determine the latest changed file: {0}")]
    Discovery(String),

    #[error("Expected file {path} is missing or unreadable: {source}")]
    MissingFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Malformed metadata in {path}: {source}")]
    MalformedMetadata {
        path: PathBuf,
        #[source]
        source: crate::model::MetadataError,
    },

    #[error(
        "Image reference '{reference}' climbs {levels} level(s) above '{article_dir}', which is only {depth} level(s) deep"
    )]
    PathResolution {
        reference: String,
        article_dir: String,
        levels: usize,
        depth: usize,
    },

    #[error("Image reference '{reference}' names an absolute path outside the repository")]
    AbsoluteReference { reference: String },

    #[error("Failed to upload image '{reference}' (resolved to {resolved}): {source}")]
    Upload {
        reference: String,
        resolved: String,
        #[source]
        source: UploadError,
    },

    #[error("Failed to render Markdown to HTML: {0}")]
    Render(String),

    #[error("Ghost rejected the post ({code}): {message}")]
    RemoteSubmission {
        code: GhostErrorCode,
        message: String,
        status: reqwest::StatusCode,
    },

    #[error("Failed to sign the Admin API token: {0}")]
    TokenSigning(#[from] jsonwebtoken::errors::Error),

    #[error("Network failure: {0}")]
    NetworkFailure(#[from] reqwest::Error),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Filesystem IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    ValidationError(#[from] crate::types::ValidationError),
}

impl AppError {
    /// Whether this failure means "nothing to publish" rather than a broken run.
    pub fn is_no_op(&self) -> bool {
        matches!(self, Self::Discovery(_))
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        // Keep the whole context chain; discovery is the only anyhow user.
        AppError::Discovery(format!("{:#}", err))
    }
}

impl From<std::fmt::Error> for AppError {
    fn from(err: std::fmt::Error) -> Self {
        AppError::Render(err.to_string())
    }
}

/// Renders an error followed by every underlying cause, `outer: inner: root`.
///
/// Causes whose text the message already contains are not repeated.
pub fn error_chain(err: &(dyn std::error::Error + 'static)) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}
