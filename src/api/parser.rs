// src/api/parser.rs
//! Turns raw Admin API responses into domain values or typed errors.

use super::client::ApiResponse;
use super::responses::{GhostErrorBody, ImagesResponse, PostsResponse};
use crate::constants::ERROR_BODY_PREVIEW_LENGTH;
use crate::error::{AppError, GhostErrorCode};
use crate::model::PublishedPost;

/// Parse any Admin API response, mapping non-2xx statuses to `RemoteSubmission`.
pub fn parse_api_response<T>(result: ApiResponse<String>) -> Result<T, AppError>
where
    T: serde::de::DeserializeOwned,
{
    if result.status.is_success() {
        serde_json::from_str(&result.data).map_err(|e| {
            log::error!("Failed to parse response from {}: {}", result.url, e);
            AppError::MalformedResponse(format!("{} (body: {})", e, preview(&result.data)))
        })
    } else {
        Err(parse_error_response(&result))
    }
}

/// Builds the error for a failed request, preferring Ghost's own error body.
fn parse_error_response(result: &ApiResponse<String>) -> AppError {
    if let Ok(body) = serde_json::from_str::<GhostErrorBody>(&result.data) {
        if let Some(first) = body.errors.first() {
            return AppError::RemoteSubmission {
                code: GhostErrorCode::from_api_response(&first.error_type),
                message: first.describe(),
                status: result.status,
            };
        }
    }

    AppError::RemoteSubmission {
        code: GhostErrorCode::from_http_status(result.status.as_u16()),
        message: format!(
            "HTTP {} from {}: {}",
            result.status,
            result.url,
            preview(&result.data)
        ),
        status: result.status,
    }
}

/// The URL of the first uploaded image.
pub fn parse_uploaded_image_url(result: ApiResponse<String>) -> Result<String, AppError> {
    let response: ImagesResponse = parse_api_response(result)?;
    response
        .images
        .into_iter()
        .next()
        .map(|image| image.url)
        .filter(|url| !url.is_empty())
        .ok_or_else(|| AppError::MalformedResponse("upload response lists no image".to_string()))
}

/// The first post of a post-creation response.
pub fn parse_created_post(result: ApiResponse<String>) -> Result<PublishedPost, AppError> {
    let response: PostsResponse = parse_api_response(result)?;
    response
        .posts
        .into_iter()
        .next()
        .ok_or_else(|| AppError::MalformedResponse("post response lists no post".to_string()))
}

fn preview(body: &str) -> String {
    if body.chars().count() > ERROR_BODY_PREVIEW_LENGTH {
        let cut: String = body.chars().take(ERROR_BODY_PREVIEW_LENGTH).collect();
        format!("{}...", cut)
    } else {
        body.to_string()
    }
}
