// src/types/domain_types.rs
//! Domain-specific newtypes for type safety and validation.

use super::{ArticleContext, ValidationError};
use crate::constants::METADATA_EXTENSION;
use std::fmt;
use url::Url;

/// Ghost Admin API key in its `<id>:<hex secret>` form.
///
/// The key itself never goes over the wire; it signs a short-lived token
/// for every request.
#[derive(Clone, PartialEq, Eq)]
pub struct AdminApiKey {
    id: String,
    secret: Vec<u8>,
}

impl AdminApiKey {
    /// Parse and validate an `<id>:<secret>` key
    pub fn new(key: impl Into<String>) -> Result<Self, ValidationError> {
        let key = key.into();
        let key = key.trim();

        if key.is_empty() {
            return Err(ValidationError::InvalidAdminKey {
                reason: "admin API key cannot be empty".to_string(),
            });
        }

        let Some((id, secret)) = key.split_once(':') else {
            return Err(ValidationError::InvalidAdminKey {
                reason: "expected <id>:<secret>".to_string(),
            });
        };

        if id.is_empty() || secret.is_empty() {
            return Err(ValidationError::InvalidAdminKey {
                reason: "both the id and the secret must be present".to_string(),
            });
        }

        let secret = hex::decode(secret).map_err(|e| ValidationError::InvalidAdminKey {
            reason: format!("secret is not hex: {}", e),
        })?;

        Ok(Self {
            id: id.to_string(),
            secret,
        })
    }

    /// The key id, sent as the token's `kid` header
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The decoded signing secret
    pub fn secret(&self) -> &[u8] {
        &self.secret
    }
}

// Never print the secret, not even in debug output.
impl fmt::Debug for AdminApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AdminApiKey({})", self)
    }
}

impl fmt::Display for AdminApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:***", self.id)
    }
}

/// Validated URL type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedUrl(Url);

impl ValidatedUrl {
    /// Create a new validated URL
    pub fn parse(url: &str) -> Result<Self, ValidationError> {
        match Url::parse(url.trim()) {
            Ok(parsed_url) => {
                if parsed_url.scheme() != "http" && parsed_url.scheme() != "https" {
                    return Err(ValidationError::InvalidUrl {
                        url: url.to_string(),
                        reason: "Only HTTP and HTTPS URLs are supported".to_string(),
                    });
                }
                Ok(Self(parsed_url))
            }
            Err(e) => Err(ValidationError::InvalidUrl {
                url: url.to_string(),
                reason: e.to_string(),
            }),
        }
    }

    /// Get the URL as a string
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Appends `path` to the URL, keeping any sub-directory the site is mounted under.
    pub fn join_path(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.0.as_str().trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

impl fmt::Display for ValidatedUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Repository-relative path of the Markdown article being published.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ArticlePath(String);

impl ArticlePath {
    /// Create an article path, normalizing separators and a leading `./`.
    pub fn new(path: impl Into<String>) -> Result<Self, ValidationError> {
        let path = path.into();
        let normalized = path.trim().replace('\\', "/");
        let normalized = normalized.trim_start_matches("./").to_string();

        if normalized.is_empty() {
            return Err(ValidationError::EmptyField("article path"));
        }

        if normalized.starts_with('/') {
            return Err(ValidationError::InvalidArticlePath {
                path,
                reason: "article path must be relative to the repository root".to_string(),
            });
        }

        if normalized.ends_with('/') {
            return Err(ValidationError::InvalidArticlePath {
                path,
                reason: "article path must name a file".to_string(),
            });
        }

        Ok(Self(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The directory holding the article; empty when it sits at the repository root.
    pub fn context(&self) -> ArticleContext {
        match self.0.rfind('/') {
            Some(pos) => ArticleContext::new(&self.0[..pos]),
            None => ArticleContext::new(""),
        }
    }

    /// The sibling metadata file: same basename, `.json` extension.
    pub fn metadata_path(&self) -> String {
        let file_start = self.0.rfind('/').map(|pos| pos + 1).unwrap_or(0);
        match self.0[file_start..].rfind('.') {
            Some(dot) if dot > 0 => {
                format!("{}{}", &self.0[..file_start + dot], METADATA_EXTENSION)
            }
            _ => format!("{}{}", self.0, METADATA_EXTENSION),
        }
    }
}

impl fmt::Display for ArticlePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
