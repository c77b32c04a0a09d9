use thiserror::Error;

mod domain_types;
mod references;

pub use domain_types::*;
pub use references::*;

#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid URL: {url} - {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("Empty required field: {0}")]
    EmptyField(&'static str),

    #[error("Invalid admin API key: {reason}")]
    InvalidAdminKey { reason: String },

    #[error("Invalid article path: {path} - {reason}")]
    InvalidArticlePath { path: String, reason: String },
}
