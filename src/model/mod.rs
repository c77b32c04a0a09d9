//! The article being published and the post it becomes.

mod article;
mod post;

pub use article::Article;
pub use post::{DraftPost, MetadataError, PostMetadata, PublishedPost};
