//! Local-image resolution and rewrite, the core of the publisher.
//!
//! Data flows leaf-first:
//!
//! ```text
//! markdown ──extract──▶ [ImageReference] ──resolve──▶ [ResolvedPath]
//!                                                        │ Local
//!                                                        ▼
//!                                   ImageUploader ──▶ remote URL ──rewrite──▶ markdown'
//! ```
//!
//! `extract` and `resolve` are pure; only `rewrite` talks to an uploader.

mod extract;
mod resolve;
mod rewrite;

pub use extract::{extract_references, locate_references, LocatedReference};
pub use resolve::{join_article_path, resolve};
pub use rewrite::{rewrite_feature_image, rewrite_images, Rewrite, UploadRecord};
