//! Article discovery algebra.

use crate::error::AppError;
use crate::types::ArticlePath;

/// The ability to name the file the latest commit added or modified.
///
/// # Laws
///
/// - **L1 (Filter)**: a returned path always ends with `extension`.
/// - **L2 (Nothing is not an error)**: a commit without a matching file
///   yields `Ok(None)`; `Err` is reserved for the query itself failing.
pub trait ArticleDiscovery: Send + Sync {
    fn find_latest_file(&self, extension: &str) -> Result<Option<ArticlePath>, AppError>;
}

#[cfg(test)]
pub(crate) mod mock {
    use super::*;

    /// Discovery that always answers with a fixed result.
    pub enum StaticDiscovery {
        Found(String),
        Nothing,
        Broken(String),
    }

    impl ArticleDiscovery for StaticDiscovery {
        fn find_latest_file(&self, extension: &str) -> Result<Option<ArticlePath>, AppError> {
            match self {
                Self::Found(path) if path.ends_with(extension) => {
                    Ok(Some(ArticlePath::new(path.as_str())?))
                }
                Self::Found(_) | Self::Nothing => Ok(None),
                Self::Broken(reason) => Err(AppError::Discovery(reason.clone())),
            }
        }
    }
}
