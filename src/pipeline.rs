// src/pipeline.rs
//! The publishing run: locate → read → rewrite → render → submit.
//!
//! Every collaborator arrives through the constructor, so a run can be
//! driven end to end against in-memory discovery, uploader and publisher.

use crate::algebras::{ArticleDiscovery, ImageUploader, PostPublisher};
use crate::constants::MARKDOWN_EXTENSION;
use crate::error::AppError;
use crate::images::{rewrite_feature_image, rewrite_images};
use crate::model::{Article, DraftPost, PublishedPost};
use crate::render::{render_html, RenderOptions};
use crate::types::ArticlePath;
use std::path::PathBuf;
use std::sync::Arc;

/// Where the article to publish comes from.
pub enum ArticleSource {
    /// Ask discovery for the file the latest commit touched.
    Discover(Arc<dyn ArticleDiscovery>),
    /// Publish this article, skipping discovery.
    Explicit(ArticlePath),
}

/// How a run ended when it did not fail.
#[derive(Debug, Clone, PartialEq)]
pub enum PublishOutcome {
    /// No matching file in the latest commit; a valid terminal state.
    NothingToPublish,
    Published {
        article: ArticlePath,
        post: PublishedPost,
        summary: RewriteSummary,
    },
}

/// What the rewrite stage did to the article.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RewriteSummary {
    pub images_uploaded: usize,
    pub remote_images_skipped: usize,
    pub feature_image_uploaded: bool,
}

/// Settings of a single run.
#[derive(Debug, Clone)]
pub struct PublishSettings {
    pub repo_root: PathBuf,
    pub extension: String,
    pub render: RenderOptions,
}

impl Default for PublishSettings {
    fn default() -> Self {
        Self {
            repo_root: PathBuf::from("."),
            extension: MARKDOWN_EXTENSION.to_string(),
            render: RenderOptions::default(),
        }
    }
}

/// Drives one publishing run with injected collaborators.
pub struct PublishPipeline {
    source: ArticleSource,
    uploader: Arc<dyn ImageUploader>,
    publisher: Arc<dyn PostPublisher>,
    settings: PublishSettings,
}

impl PublishPipeline {
    pub fn new(
        source: ArticleSource,
        uploader: Arc<dyn ImageUploader>,
        publisher: Arc<dyn PostPublisher>,
        settings: PublishSettings,
    ) -> Self {
        Self {
            source,
            uploader,
            publisher,
            settings,
        }
    }

    /// Runs every stage; the first failure aborts the run.
    pub async fn run(&self) -> Result<PublishOutcome, AppError> {
        let Some(path) = self.locate()? else {
            log::info!("No {} file in HEAD commit", self.settings.extension);
            return Ok(PublishOutcome::NothingToPublish);
        };

        let article = Article::load(&self.settings.repo_root, path)?;
        log::info!("Publishing {}", article.path);

        let (draft, summary) = self.prepare(&article).await?;
        let post = self.publisher.create_post(&draft).await?;
        log::debug!("Ghost accepted post {}", post.id.as_deref().unwrap_or("<no id>"));

        Ok(PublishOutcome::Published {
            article: article.path,
            post,
            summary,
        })
    }

    /// Rewrites images in body and metadata, then renders the draft.
    pub async fn prepare(&self, article: &Article) -> Result<(DraftPost, RewriteSummary), AppError> {
        let context = article.context();

        let body = rewrite_images(&article.markdown, &context, self.uploader.as_ref()).await?;
        let metadata =
            rewrite_feature_image(&article.metadata, &context, self.uploader.as_ref()).await?;

        let summary = RewriteSummary {
            images_uploaded: body.uploads.len(),
            remote_images_skipped: body.skipped.len(),
            feature_image_uploaded: !metadata.uploads.is_empty(),
        };
        log::info!(
            "Uploaded {} image(s), kept {} remote image(s){}",
            summary.images_uploaded,
            summary.remote_images_skipped,
            if summary.feature_image_uploaded {
                ", uploaded feature image"
            } else {
                ""
            }
        );

        let html = render_html(&body.document, &self.settings.render)?;
        Ok((DraftPost::new(metadata.document, html), summary))
    }

    /// Discovery failures are logged and treated as nothing to publish.
    fn locate(&self) -> Result<Option<ArticlePath>, AppError> {
        match &self.source {
            ArticleSource::Explicit(path) => Ok(Some(path.clone())),
            ArticleSource::Discover(discovery) => {
                match discovery.find_latest_file(&self.settings.extension) {
                    Ok(found) => Ok(found),
                    Err(err) if err.is_no_op() => {
                        log::error!("Error finding the latest file: {}", err);
                        Ok(None)
                    }
                    Err(err) => Err(err),
                }
            }
        }
    }
}
