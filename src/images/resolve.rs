// src/images/resolve.rs
//! Maps an image reference onto a repository-root-relative path.
//!
//! Resolution is a pure function of the reference and the article
//! directory: no filesystem access happens here, existence is only
//! checked when the file is uploaded.

use crate::constants::{
    CURRENT_DIR_SEGMENT, CURRENT_SEGMENT, PARENT_SEGMENT, REMOTE_SCHEME_MARKER,
    ROOT_RELATIVE_PREFIX,
};
use crate::error::AppError;
use crate::types::{ArticleContext, ImageReference, ResolvedPath};

/// Resolves `reference` against the article directory.
///
/// In priority order:
/// 1. `http…` passes through as [`ResolvedPath::Remote`].
/// 2. `/…` is repo-root-relative: exactly one leading separator is dropped.
/// 3. Anything else, `../…` included, is joined onto `context`.
///
/// The local result is normalized segment by segment: `.` disappears and
/// every `..` climbs one directory, wherever it sits in the reference.
/// Climbing above the repository root is an [`AppError::PathResolution`];
/// a reference that still names an absolute path after the root prefix is
/// an [`AppError::AbsoluteReference`].
pub fn resolve(
    reference: &ImageReference,
    context: &ArticleContext,
) -> Result<ResolvedPath, AppError> {
    let raw = reference.as_str();

    if raw.starts_with(REMOTE_SCHEME_MARKER) {
        return Ok(ResolvedPath::Remote(raw.to_string()));
    }

    if let Some(rest) = raw.strip_prefix(ROOT_RELATIVE_PREFIX) {
        if rest.starts_with(ROOT_RELATIVE_PREFIX) {
            return Err(AppError::AbsoluteReference {
                reference: raw.to_string(),
            });
        }
        return normalize(raw, "", rest).map(ResolvedPath::Local);
    }

    let joined = join_article_path(context.as_str(), raw);
    normalize(raw, context.as_str(), &joined).map(ResolvedPath::Local)
}

/// Joins a directory and a relative reference, dropping leading `./` segments.
///
/// An empty directory is the repository root, so the reference comes back as-is.
pub fn join_article_path(dir: &str, reference: &str) -> String {
    let mut reference = reference;
    while let Some(stripped) = reference.strip_prefix(CURRENT_DIR_SEGMENT) {
        reference = stripped;
    }

    let dir = dir.trim_end_matches('/');
    if dir.is_empty() {
        reference.to_string()
    } else {
        format!("{}/{}", dir, reference)
    }
}

/// Collapses `.`, `..` and empty segments of a repo-root-relative path.
///
/// `anchor` is the directory the reference was written relative to; it only
/// feeds the error report.
fn normalize(reference: &str, anchor: &str, path: &str) -> Result<String, AppError> {
    let mut segments: Vec<&str> = Vec::new();

    for segment in path.split('/') {
        match segment {
            "" | CURRENT_SEGMENT => {}
            PARENT_SEGMENT => {
                if segments.pop().is_none() {
                    let depth = anchor.split('/').filter(|s| !s.is_empty()).count();
                    return Err(AppError::PathResolution {
                        reference: reference.to_string(),
                        article_dir: anchor.to_string(),
                        levels: depth + 1,
                        depth,
                    });
                }
            }
            name => segments.push(name),
        }
    }

    Ok(segments.join("/"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn local(reference: &str, dir: &str) -> String {
        match resolve(&ImageReference::from(reference), &ArticleContext::new(dir)).unwrap() {
            ResolvedPath::Local(path) => path,
            ResolvedPath::Remote(url) => panic!("expected a local path, got remote {url}"),
        }
    }

    #[test]
    fn remote_urls_pass_through() {
        for url in [
            "https://cdn.example.com/a.png",
            "http://example.com/b.jpg",
            "https://example.com/../odd/./path.png",
        ] {
            let resolved = resolve(&ImageReference::from(url), &ArticleContext::new("posts/x"))
                .unwrap();
            assert_eq!(resolved, ResolvedPath::Remote(url.to_string()));
        }
    }

    #[test]
    fn resolve_is_idempotent_on_remote_urls() {
        let context = ArticleContext::new("posts/my-post");
        let once = resolve(&ImageReference::from("https://cdn/a.png"), &context).unwrap();
        let twice = resolve(&ImageReference::from(once.as_str()), &context).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn root_relative_strips_exactly_one_separator() {
        for dir in ["", "posts", "posts/deep/nested"] {
            assert_eq!(local("/assets/hero.png", dir), "assets/hero.png");
        }
    }

    #[test]
    fn double_separator_is_not_an_absolute_path() {
        for reference in ["//x.png", "//etc/hostname"] {
            let err = resolve(&ImageReference::from(reference), &ArticleContext::new("posts"))
                .unwrap_err();
            assert!(matches!(err, AppError::AbsoluteReference { .. }), "{reference}");
        }
        assert_eq!(local("..//x.png", "posts/a"), "posts/x.png");
    }

    #[test]
    fn parent_segments_anywhere_are_counted() {
        assert_eq!(local("img/../shared/b.png", "posts/my-post"), "posts/my-post/shared/b.png");
        assert_eq!(local("./../b.png", "posts/my-post"), "posts/b.png");
        assert_eq!(local("/assets/../hero.png", "posts"), "hero.png");

        for (reference, dir) in [
            ("./../../x.png", "posts"),
            ("img/../../../x.png", "posts"),
            ("/../x.png", "posts/deep"),
        ] {
            let err = resolve(&ImageReference::from(reference), &ArticleContext::new(dir))
                .unwrap_err();
            assert!(matches!(err, AppError::PathResolution { .. }), "{reference}");
        }
    }

    #[test]
    fn resolved_paths_never_leave_the_checkout() {
        for reference in ["./../../etc/hostname", "a/./../../../../etc/hostname", "../..//etc"] {
            if let Ok(ResolvedPath::Local(path)) =
                resolve(&ImageReference::from(reference), &ArticleContext::new("posts/p"))
            {
                assert!(!path.starts_with('/'), "{reference} -> {path}");
                assert!(!path.split('/').any(|s| s == ".."), "{reference} -> {path}");
            }
        }
    }

    #[test]
    fn parent_relative_climbs_one_level_per_segment() {
        assert_eq!(local("../shared/b.png", "posts/my-post"), "posts/shared/b.png");
        assert_eq!(local("../../b.png", "a/b/c"), "a/b.png");
        assert_eq!(local("../../../b.png", "a/b/c"), "b.png");
    }

    #[test]
    fn parent_relative_to_exact_root() {
        assert_eq!(local("../img/x.png", "posts"), "img/x.png");
    }

    #[test]
    fn climbing_above_root_is_an_error() {
        let err = resolve(
            &ImageReference::from("../../../x.png"),
            &ArticleContext::new("posts/my-post"),
        )
        .unwrap_err();
        match err {
            AppError::PathResolution { levels, depth, .. } => {
                assert_eq!(levels, 3);
                assert_eq!(depth, 2);
            }
            other => panic!("unexpected error: {other}"),
        }

        assert!(resolve(&ImageReference::from("../x.png"), &ArticleContext::new("")).is_err());
    }

    #[test]
    fn implicit_relative_joins_article_dir() {
        for (reference, dir) in [
            ("img/a.png", "posts/my-post"),
            ("a.png", "posts"),
            ("sub/dir/a b.png", "x/y"),
        ] {
            assert_eq!(local(reference, dir), join_article_path(dir, reference));
        }
        assert_eq!(local("img/a.png", "posts/my-post"), "posts/my-post/img/a.png");
    }

    #[test]
    fn current_dir_prefix_is_dropped() {
        assert_eq!(local("./img/a.png", "posts/my-post"), "posts/my-post/img/a.png");
        assert_eq!(local("././a.png", "posts"), "posts/a.png");
        assert_eq!(local("img/./a.png", "posts"), "posts/img/a.png");
    }

    #[test]
    fn article_at_repository_root() {
        assert_eq!(local("img/a.png", ""), "img/a.png");
    }

    #[test]
    fn empty_reference_still_resolves() {
        assert_eq!(local("", "posts/my-post"), "posts/my-post");
    }
}
