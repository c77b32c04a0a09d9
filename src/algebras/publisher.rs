//! Post publishing algebra.

use async_trait::async_trait;

use crate::error::AppError;
use crate::model::{DraftPost, PublishedPost};

/// The ability to create a post on the remote CMS.
///
/// # Laws
///
/// - **L1 (Draft only)**: the created post keeps the status carried by
///   [`DraftPost`]; implementations never publish on their own.
/// - **L2 (Verbatim fields)**: metadata fields are forwarded unmodified.
#[async_trait]
pub trait PostPublisher: Send + Sync {
    async fn create_post(&self, post: &DraftPost) -> Result<PublishedPost, AppError>;
}

#[cfg(test)]
pub(crate) mod mock {
    use super::*;
    use std::sync::Mutex;

    /// Publisher that keeps every submitted post in memory.
    pub struct MockPublisher {
        url: String,
        reject: bool,
        posts: Mutex<Vec<DraftPost>>,
    }

    impl MockPublisher {
        pub fn new(url: &str) -> Self {
            Self {
                url: url.to_string(),
                reject: false,
                posts: Mutex::new(Vec::new()),
            }
        }

        pub fn rejecting() -> Self {
            Self {
                reject: true,
                ..Self::new("")
            }
        }

        pub fn posts(&self) -> Vec<DraftPost> {
            self.posts.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl PostPublisher for MockPublisher {
        async fn create_post(&self, post: &DraftPost) -> Result<PublishedPost, AppError> {
            if self.reject {
                return Err(AppError::RemoteSubmission {
                    code: crate::error::GhostErrorCode::Validation,
                    message: "Title is required".to_string(),
                    status: reqwest::StatusCode::UNPROCESSABLE_ENTITY,
                });
            }
            self.posts.lock().unwrap().push(post.clone());
            Ok(PublishedPost {
                id: None,
                url: self.url.clone(),
            })
        }
    }
}
