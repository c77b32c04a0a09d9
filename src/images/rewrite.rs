// src/images/rewrite.rs
//! Replaces local image references with uploaded URLs.
//!
//! Both rewriters fail fast: the first resolution or upload error aborts
//! and no partially rewritten document is ever returned.

use super::extract::locate_references;
use super::resolve::resolve;
use crate::algebras::ImageUploader;
use crate::error::AppError;
use crate::model::PostMetadata;
use crate::types::{ArticleContext, ImageReference, ResolvedPath};

/// One successful upload: where the reference pointed and where it lives now.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadRecord {
    pub reference: ImageReference,
    pub resolved: String,
    pub url: String,
}

/// A fully rewritten document plus what it took to get there.
#[derive(Debug, Clone, PartialEq)]
pub struct Rewrite<T> {
    pub document: T,
    pub uploads: Vec<UploadRecord>,
    /// References that were already remote and left untouched.
    pub skipped: Vec<ImageReference>,
}

impl<T> Rewrite<T> {
    fn unchanged(document: T) -> Self {
        Self {
            document,
            uploads: Vec::new(),
            skipped: Vec::new(),
        }
    }
}

/// Uploads every local image in `markdown` and substitutes the returned URLs.
///
/// References are handled in order of appearance, one upload per occurrence,
/// strictly one at a time. Each substitution replaces the occurrence the
/// extractor found, so an already substituted URL is never touched again.
/// All references are resolved before the first upload, so a bad path
/// aborts the run without leaving orphaned uploads behind.
pub async fn rewrite_images(
    markdown: &str,
    context: &ArticleContext,
    uploader: &dyn ImageUploader,
) -> Result<Rewrite<String>, AppError> {
    let located = locate_references(markdown);
    if located.is_empty() {
        log::debug!("No image references found");
        return Ok(Rewrite::unchanged(markdown.to_string()));
    }

    let plan = located
        .into_iter()
        .map(|loc| resolve(&loc.reference, context).map(|resolved| (loc, resolved)))
        .collect::<Result<Vec<_>, _>>()?;

    log::info!("Found {} image reference(s) in {}", plan.len(), context);

    let mut rewritten = String::with_capacity(markdown.len());
    let mut uploads = Vec::new();
    let mut skipped = Vec::new();
    let mut cursor = 0;

    for (loc, resolved) in plan {
        rewritten.push_str(&markdown[cursor..loc.span.start]);
        cursor = loc.span.end;

        match resolved {
            ResolvedPath::Remote(url) => {
                log::debug!("Skipping remote image {}", url);
                rewritten.push_str(&url);
                skipped.push(loc.reference);
            }
            ResolvedPath::Local(path) => {
                let url = upload_one(uploader, &loc.reference, &path).await?;
                rewritten.push_str(&url);
                uploads.push(UploadRecord {
                    reference: loc.reference,
                    resolved: path,
                    url,
                });
            }
        }
    }
    rewritten.push_str(&markdown[cursor..]);

    Ok(Rewrite {
        document: rewritten,
        uploads,
        skipped,
    })
}

/// Same resolve → skip-if-remote → upload → replace, for `feature_image`.
///
/// Metadata without a feature image comes back unchanged.
pub async fn rewrite_feature_image(
    metadata: &PostMetadata,
    context: &ArticleContext,
    uploader: &dyn ImageUploader,
) -> Result<Rewrite<PostMetadata>, AppError> {
    let Some(reference) = metadata.feature_image() else {
        return Ok(Rewrite::unchanged(metadata.clone()));
    };

    match resolve(&reference, context)? {
        ResolvedPath::Remote(url) => {
            log::debug!("Feature image already remote: {}", url);
            Ok(Rewrite {
                document: metadata.clone(),
                uploads: Vec::new(),
                skipped: vec![reference],
            })
        }
        ResolvedPath::Local(path) => {
            let url = upload_one(uploader, &reference, &path).await?;
            Ok(Rewrite {
                document: metadata.with_feature_image(url.as_str()),
                uploads: vec![UploadRecord {
                    reference,
                    resolved: path,
                    url,
                }],
                skipped: Vec::new(),
            })
        }
    }
}

async fn upload_one(
    uploader: &dyn ImageUploader,
    reference: &ImageReference,
    path: &str,
) -> Result<String, AppError> {
    log::info!("Uploading {} ({})", reference, path);
    match uploader.upload(path).await {
        Ok(url) => {
            log::info!("  -> {}", url);
            Ok(url)
        }
        Err(source) => {
            log::error!("Upload of {} failed: {}", path, source);
            Err(AppError::Upload {
                reference: reference.to_string(),
                resolved: path.to_string(),
                source,
            })
        }
    }
}
