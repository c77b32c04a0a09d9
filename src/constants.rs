// src/constants.rs
//! Domain constants that define the operational boundaries of the system.
//!
//! Each constant is named for the domain concept it constrains, not its
//! technical role. Reading these constants should tell you the story
//! of how a commit becomes a draft post.

// ---------------------------------------------------------------------------
// Article discovery
// ---------------------------------------------------------------------------

/// Extension of the article files picked up from the latest commit.
pub const MARKDOWN_EXTENSION: &str = ".md";

/// Extension of the metadata file sitting next to each article.
pub const METADATA_EXTENSION: &str = ".json";

// ---------------------------------------------------------------------------
// Image references
// ---------------------------------------------------------------------------

/// Any reference starting with this marker is already remote (`http://`, `https://`).
pub const REMOTE_SCHEME_MARKER: &str = "http";

/// Prefix of a reference anchored at the repository root.
pub const ROOT_RELATIVE_PREFIX: &str = "/";

/// Path segment climbing one directory.
pub const PARENT_SEGMENT: &str = "..";

/// Path segment naming the current directory, dropped during resolution.
pub const CURRENT_SEGMENT: &str = ".";

/// Explicit current-directory prefix, dropped when joining onto the article directory.
pub const CURRENT_DIR_SEGMENT: &str = "./";

/// Metadata field holding the post's feature image.
pub const FEATURE_IMAGE_FIELD: &str = "feature_image";

// ---------------------------------------------------------------------------
// Ghost Admin API
// ---------------------------------------------------------------------------

/// Value of the `Accept-Version` header sent with every Admin API request.
pub const GHOST_API_VERSION: &str = "v5.0";

/// Audience every Admin API token is addressed to.
pub const ADMIN_TOKEN_AUDIENCE: &str = "/admin/";

/// Lifetime of a signed Admin API token, in seconds.
pub const ADMIN_TOKEN_LIFETIME_SECS: u64 = 300;

/// Admin API endpoint for image uploads, relative to the site URL.
pub const GHOST_IMAGES_ENDPOINT: &str = "ghost/api/admin/images/upload/";

/// Admin API endpoint for posts, relative to the site URL.
pub const GHOST_POSTS_ENDPOINT: &str = "ghost/api/admin/posts/";

/// Content format of the `html` field on post creation.
pub const POST_SOURCE_FORMAT: &str = "html";

/// Status every created post is left in, pending human review.
pub const DRAFT_STATUS: &str = "draft";

// ---------------------------------------------------------------------------
// Error display
// ---------------------------------------------------------------------------

/// Maximum characters shown when previewing error response bodies.
pub const ERROR_BODY_PREVIEW_LENGTH: usize = 200;
