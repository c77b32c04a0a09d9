// src/lib.rs
//! md2ghost library: publishes the Markdown article changed by the latest
//! commit to a Ghost site as a draft post.
//!
//! # Public API
//!
//! The library exposes types organized by concern:
//! - **Error handling**: `AppError`, `GhostErrorCode`, `UploadError`, `ValidationError`
//! - **Configuration**: `CommandLineInput`, `PipelineConfig`
//! - **Domain model**: `Article`, `PostMetadata`, `DraftPost`, `PublishedPost`
//! - **Domain types**: `AdminApiKey`, `ValidatedUrl`, `ArticlePath`, `ImageReference`, etc.
//! - **Image rewriting**: `extract_references`, `resolve`, `rewrite_images`, `rewrite_feature_image`
//! - **Remote side**: `GhostHttpClient`, `GitDiscovery`
//! - **Pipeline**: `PublishPipeline`, `PublishOutcome`

mod algebras;
mod api;
mod config;
pub mod constants;
mod discovery;
mod error;
mod images;
mod model;
mod pipeline;
mod render;
mod types;

// --- Error Handling ---
pub use crate::error::{error_chain, AppError, GhostErrorCode};
pub use crate::types::ValidationError;

// --- Configuration ---
pub use crate::config::{CommandLineInput, PipelineConfig};

// --- Domain Model ---
pub use crate::model::{Article, DraftPost, MetadataError, PostMetadata, PublishedPost};

// --- Domain Types ---
pub use crate::types::{
    AdminApiKey, ArticleContext, ArticlePath, ImageReference, ResolvedPath, ValidatedUrl,
};

// --- Image Rewriting ---
pub use crate::images::{
    extract_references, join_article_path, locate_references, resolve, rewrite_feature_image,
    rewrite_images, LocatedReference, Rewrite, UploadRecord,
};

// --- Rendering ---
pub use crate::render::{render_html, RenderOptions};

// --- Remote Side ---
pub use crate::api::{
    image_type_for, sign_admin_token, AdminClaims,
    parser::{parse_api_response, parse_created_post, parse_uploaded_image_url},
    ApiResponse, GhostHttpClient,
};
pub use crate::discovery::{select_changed_file, GitDiscovery};

// --- Pipeline ---
pub use crate::pipeline::{
    ArticleSource, PublishOutcome, PublishPipeline, PublishSettings, RewriteSummary,
};

// --- Algebras (Capability Traits) ---
pub use crate::algebras::{ArticleDiscovery, ImageUploader, PostPublisher, UploadError};
