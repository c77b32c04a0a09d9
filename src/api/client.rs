//! HTTP client for the Ghost Admin API.
//!
//! This module is a thin wrapper around reqwest: it authenticates every
//! request and hands raw responses to the parser. It also interprets the
//! two capabilities the pipeline needs, image upload and post creation.

use super::auth::admin_token_now;
use super::mime::image_type_for;
use super::parser::{parse_created_post, parse_uploaded_image_url};
use crate::algebras::{ImageUploader, PostPublisher, UploadError};
use crate::constants::{
    GHOST_API_VERSION, GHOST_IMAGES_ENDPOINT, GHOST_POSTS_ENDPOINT, POST_SOURCE_FORMAT,
};
use crate::error::AppError;
use crate::model::{DraftPost, PublishedPost};
use crate::types::{AdminApiKey, ValidatedUrl};
use reqwest::multipart::{Form, Part};
use reqwest::{header, Client, Response};
use std::path::{Component, Path, PathBuf};

/// A thin wrapper around reqwest Client for Ghost Admin API requests.
#[derive(Clone)]
pub struct GhostHttpClient {
    client: Client,
    site: ValidatedUrl,
    key: AdminApiKey,
    repo_root: PathBuf,
}

impl GhostHttpClient {
    /// Creates a client for `site`, reading images relative to `repo_root`.
    pub fn new(
        site: ValidatedUrl,
        key: &AdminApiKey,
        repo_root: impl Into<PathBuf>,
    ) -> Result<Self, AppError> {
        let client = Client::builder()
            .default_headers(Self::create_headers())
            .build()?;
        Ok(Self {
            client,
            site,
            key: key.clone(),
            repo_root: repo_root.into(),
        })
    }

    /// Creates the default headers for Admin API requests.
    fn create_headers() -> header::HeaderMap {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            "Accept-Version",
            header::HeaderValue::from_static(GHOST_API_VERSION),
        );
        headers
    }

    /// A freshly signed `Authorization` header.
    fn authorization(&self) -> Result<header::HeaderValue, AppError> {
        let token = admin_token_now(&self.key)?;
        header::HeaderValue::from_str(&format!("Ghost {}", token)).map_err(|e| {
            AppError::MissingConfiguration(format!("Invalid admin token header: {}", e))
        })
    }

    /// Uploads raw image bytes; returns the URL Ghost serves the image from.
    pub async fn upload_image_bytes(
        &self,
        file_name: &str,
        content_type: &str,
        bytes: Vec<u8>,
        reference: &str,
    ) -> Result<String, AppError> {
        let url = self.site.join_path(GHOST_IMAGES_ENDPOINT);
        log::debug!("POST {} ({} bytes, {})", url, bytes.len(), content_type);

        let part = Part::bytes(bytes)
            .file_name(file_name.to_string())
            .mime_str(content_type)?;
        let form = Form::new()
            .part("file", part)
            .text("ref", reference.to_string());

        let response = self
            .client
            .post(url)
            .header(header::AUTHORIZATION, self.authorization()?)
            .multipart(form)
            .send()
            .await?;
        let result = extract_response_text(response).await?;
        parse_uploaded_image_url(result)
    }

    /// Creates a post from `post`, with the body given as HTML.
    pub async fn submit_post(&self, post: &DraftPost) -> Result<PublishedPost, AppError> {
        let url = self.site.join_path(GHOST_POSTS_ENDPOINT);
        log::debug!("POST {}?source={}", url, POST_SOURCE_FORMAT);

        let body = serde_json::json!({ "posts": [post] });
        let response = self
            .client
            .post(url)
            .header(header::AUTHORIZATION, self.authorization()?)
            .query(&[("source", POST_SOURCE_FORMAT)])
            .json(&body)
            .send()
            .await?;
        let result = extract_response_text(response).await?;
        parse_created_post(result)
    }

    /// The file behind a repo-root-relative path; `None` if it would leave the checkout.
    fn local_file(&self, path: &str) -> Option<PathBuf> {
        let relative = Path::new(path);
        let inside = relative
            .components()
            .all(|c| matches!(c, Component::Normal(_) | Component::CurDir));
        inside.then(|| self.repo_root.join(relative))
    }
}

#[async_trait::async_trait]
impl ImageUploader for GhostHttpClient {
    async fn upload(&self, path: &str) -> Result<String, UploadError> {
        let file = self
            .local_file(path)
            .ok_or_else(|| UploadError::OutsideRepository {
                path: path.to_string(),
            })?;
        let bytes = tokio::fs::read(&file)
            .await
            .map_err(|e| read_failure(path, e))?;

        let file_name = file_name_of(&file, path);
        let content_type = image_type_for(&file);

        self.upload_image_bytes(&file_name, content_type, bytes, path)
            .await
            .map_err(UploadError::from)
    }
}

#[async_trait::async_trait]
impl PostPublisher for GhostHttpClient {
    async fn create_post(&self, post: &DraftPost) -> Result<PublishedPost, AppError> {
        self.submit_post(post).await
    }
}

fn read_failure(path: &str, err: std::io::Error) -> UploadError {
    if err.kind() == std::io::ErrorKind::NotFound {
        UploadError::FileNotFound {
            path: path.to_string(),
        }
    } else {
        UploadError::Unreadable {
            path: path.to_string(),
            reason: err.to_string(),
        }
    }
}

fn file_name_of(file: &Path, fallback: &str) -> String {
    file.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| fallback.to_string())
}

/// Result of an HTTP operation with response metadata.
#[derive(Debug)]
pub struct ApiResponse<T> {
    pub data: T,
    pub status: reqwest::StatusCode,
    pub url: String,
}

/// Extracts the response body as text with metadata.
pub async fn extract_response_text(response: Response) -> Result<ApiResponse<String>, AppError> {
    let status = response.status();
    let url = response.url().to_string();
    let text = response.text().await?;

    log::debug!("{} responded {}", url, status);

    Ok(ApiResponse {
        data: text,
        status,
        url,
    })
}
