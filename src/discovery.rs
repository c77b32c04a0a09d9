// src/discovery.rs
//! Finds the article touched by the latest commit by asking git.

use crate::algebras::ArticleDiscovery;
use crate::error::AppError;
use crate::types::ArticlePath;
use anyhow::{bail, Context};
use std::path::{Path, PathBuf};
use std::process::Command;

/// Arguments listing files added (`A`) or modified (`M`) by `HEAD`.
const DIFF_TREE_ARGS: &[&str] = &[
    "diff-tree",
    "--no-commit-id",
    "--name-only",
    "-r",
    "--diff-filter=AM",
    "HEAD",
];

/// [`ArticleDiscovery`] backed by the `git` binary in a checkout.
#[derive(Debug, Clone)]
pub struct GitDiscovery {
    repo_root: PathBuf,
}

impl GitDiscovery {
    pub fn new(repo_root: impl Into<PathBuf>) -> Self {
        Self {
            repo_root: repo_root.into(),
        }
    }

    fn changed_files(&self) -> anyhow::Result<String> {
        if log::log_enabled!(log::Level::Debug) {
            if let Ok(version) = run_git(&self.repo_root, &["--version"]) {
                log::debug!("{}", version.trim());
            }
        }
        log::debug!(
            "Executing: git {} (in {})",
            DIFF_TREE_ARGS.join(" "),
            self.repo_root.display()
        );
        run_git(&self.repo_root, DIFF_TREE_ARGS)
    }
}

impl ArticleDiscovery for GitDiscovery {
    fn find_latest_file(&self, extension: &str) -> Result<Option<ArticlePath>, AppError> {
        let listing = self.changed_files()?;
        let (selected, ignored) = select_changed_file(&listing, extension);

        for path in &ignored {
            log::warn!("Ignoring additional changed file {} (one article per run)", path);
        }

        match selected {
            Some(path) => {
                log::info!("Found file: {}", path);
                Ok(Some(ArticlePath::new(path)?))
            }
            None => Ok(None),
        }
    }
}

/// Picks the first listed path ending with `extension`; returns the rest as ignored.
pub fn select_changed_file(listing: &str, extension: &str) -> (Option<String>, Vec<String>) {
    let mut matches = listing
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && line.ends_with(extension))
        .map(str::to_string);

    let selected = matches.next();
    (selected, matches.collect())
}

fn run_git(repo_root: &Path, args: &[&str]) -> anyhow::Result<String> {
    let output = Command::new("git")
        .args(args)
        .current_dir(repo_root)
        .output()
        .with_context(|| format!("failed to run git in {}", repo_root.display()))?;

    if !output.status.success() {
        bail!(
            "git {} exited with {}: {}",
            args.join(" "),
            output.status,
            String::from_utf8_lossy(&output.stderr).trim()
        );
    }

    String::from_utf8(output.stdout).context("git output is not valid UTF-8")
}
