// src/types/references.rs
//! Image references as written by authors, and what they resolve to.

use std::fmt;

/// An image target exactly as written in Markdown or metadata.
///
/// One of four shapes: remote URL (`http…`), repo-root-relative (`/…`),
/// parent-relative (`../…`), or implicit-relative (anything else).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImageReference(String);

impl ImageReference {
    pub fn new(reference: impl Into<String>) -> Self {
        Self(reference.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for ImageReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ImageReference {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for ImageReference {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// The directory containing the article, relative to the repository root.
///
/// Stored without leading or trailing separators; the empty string is the root.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ArticleContext(String);

impl ArticleContext {
    pub fn new(dir: impl Into<String>) -> Self {
        let dir = dir.into();
        Self(dir.trim_matches('/').to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Non-empty path segments, outermost first.
    pub fn segments(&self) -> Vec<&str> {
        self.0.split('/').filter(|s| !s.is_empty()).collect()
    }
}

impl fmt::Display for ArticleContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            write!(f, "<repository root>")
        } else {
            write!(f, "{}", self.0)
        }
    }
}

/// Result of resolving an [`ImageReference`] against an [`ArticleContext`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ResolvedPath {
    /// Already remote; passes through untouched and is never uploaded.
    Remote(String),
    /// A path relative to the repository root, expected to exist at upload time.
    Local(String),
}

impl ResolvedPath {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Remote(url) => url,
            Self::Local(path) => path,
        }
    }
}

impl fmt::Display for ResolvedPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
