// src/api/responses.rs
//! Wire shapes of the Ghost Admin API responses this client reads.

use crate::model::PublishedPost;
use serde::Deserialize;

/// Error envelope: `{"errors": [{"message": "...", "type": "..."}]}`.
#[derive(Debug, Clone, Deserialize)]
pub struct GhostErrorBody {
    pub errors: Vec<GhostErrorItem>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GhostErrorItem {
    pub message: String,
    #[serde(rename = "type")]
    pub error_type: String,
    #[serde(default)]
    pub context: Option<String>,
}

impl GhostErrorItem {
    /// Message with Ghost's extra context appended when present.
    pub fn describe(&self) -> String {
        match &self.context {
            Some(context) if !context.is_empty() => format!("{} ({})", self.message, context),
            _ => self.message.clone(),
        }
    }
}

/// Response of `POST /images/upload/`.
#[derive(Debug, Clone, Deserialize)]
pub struct ImagesResponse {
    pub images: Vec<UploadedImage>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UploadedImage {
    pub url: String,
}

/// Response of `POST /posts/`.
#[derive(Debug, Clone, Deserialize)]
pub struct PostsResponse {
    pub posts: Vec<PublishedPost>,
}
