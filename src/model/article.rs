// src/model/article.rs
use super::PostMetadata;
use crate::error::AppError;
use crate::types::{ArticleContext, ArticlePath};
use std::fs;
use std::path::Path;

/// A Markdown article and its sibling metadata, read from the checkout.
#[derive(Debug, Clone, PartialEq)]
pub struct Article {
    pub path: ArticlePath,
    pub markdown: String,
    pub metadata: PostMetadata,
}

impl Article {
    /// Reads the article and its `.json` metadata from `repo_root`.
    ///
    /// Both files must exist; nothing is uploaded before this succeeds.
    pub fn load(repo_root: &Path, path: ArticlePath) -> Result<Self, AppError> {
        let markdown_file = repo_root.join(path.as_str());
        log::debug!("Reading article {}", markdown_file.display());
        let markdown = fs::read_to_string(&markdown_file).map_err(|source| {
            AppError::MissingFile {
                path: markdown_file.clone(),
                source,
            }
        })?;

        let metadata_file = repo_root.join(path.metadata_path());
        log::debug!("Reading metadata {}", metadata_file.display());
        let raw = fs::read_to_string(&metadata_file).map_err(|source| AppError::MissingFile {
            path: metadata_file.clone(),
            source,
        })?;
        let metadata = PostMetadata::parse(&raw).map_err(|source| AppError::MalformedMetadata {
            path: metadata_file,
            source,
        })?;

        Ok(Self {
            path,
            markdown,
            metadata,
        })
    }

    /// The directory all relative image references are anchored to.
    pub fn context(&self) -> ArticleContext {
        self.path.context()
    }
}
