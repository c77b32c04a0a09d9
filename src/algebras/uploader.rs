//! Image upload algebra.
//!
//! The rewriters depend on [`ImageUploader`], never on HTTP details, so the
//! whole rewrite pipeline runs against an in-memory uploader in tests.

use async_trait::async_trait;

use super::error::UploadError;

/// The ability to turn a local image into a remote URL.
///
/// # Laws
///
/// - **L1 (No local echo)**: a successful upload returns a URL that is not
///   the local path it was given.
/// - **L2 (No hidden retry)**: one call performs at most one logical upload;
///   retrying is the caller's decision, and the core never retries.
/// - **L3 (Failure is total)**: on `Err`, no URL is produced for that file.
#[async_trait]
pub trait ImageUploader: Send + Sync {
    /// Upload the file at `path` (relative to the repository root).
    async fn upload(&self, path: &str) -> Result<String, UploadError>;
}
