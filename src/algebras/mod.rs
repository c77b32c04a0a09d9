//! Capability algebras for md2ghost.
//!
//! This module defines traits that represent **capabilities** the
//! publishing pipeline consumes, not implementations. Each trait is:
//!
//! - **Object-safe**: can be used as `dyn Trait`
//! - **Documented with laws**: properties that all implementations must satisfy
//! - **Async via `async_trait`** where the capability crosses the network
//!
//! # Architecture
//!
//! ```text
//! Application Layer (main.rs)
//!         ↓
//! Pipeline (pipeline.rs, images/)
//!         ↓
//! Capabilities (algebras/)
//!         ↓
//! Interpreters (discovery/, api/)
//! ```
//!
//! # Capability Traits
//!
//! - [`ArticleDiscovery`]: find the article touched by the latest commit
//! - [`ImageUploader`]: turn a local image into a remote URL
//! - [`PostPublisher`]: create the draft post
//!
//! Tests substitute in-memory implementations; nothing in the core reaches
//! for a global client or a real repository.

pub mod discovery;
pub mod error;
pub mod publisher;
pub mod uploader;

// Re-exports for convenience
pub use discovery::ArticleDiscovery;
pub use error::UploadError;
pub use publisher::PostPublisher;
pub use uploader::ImageUploader;
