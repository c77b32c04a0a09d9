// src/config.rs
use crate::constants::MARKDOWN_EXTENSION;
use crate::error::AppError;
use crate::render::RenderOptions;
use crate::types::{AdminApiKey, ArticlePath, ValidatedUrl};
use clap::Parser;
use std::path::PathBuf;

/// Environment variables holding the Ghost site URL, in lookup order.
const API_URL_VARS: &[&str] = &["INPUT_GHOST_API_URL", "GHOST_API_URL"];

/// Environment variables holding the `<id>:<secret>` Admin API key, in lookup order.
const ADMIN_KEY_VARS: &[&str] = &["INPUT_GHOST_ADMIN_API_KEY", "GHOST_ADMIN_API_KEY"];

/// Parsed command-line input.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct CommandLineInput {
    /// Ghost site URL (e.g., "https://blog.example.com"); falls back to GHOST_API_URL
    #[arg(long)]
    pub api_url: Option<String>,

    /// Repository checkout to inspect and read images from
    #[arg(long, default_value = ".")]
    pub repo_root: PathBuf,

    /// Publish this article instead of the file changed by the latest commit
    #[arg(long)]
    pub article: Option<String>,

    /// Extension of article files looked for in the latest commit
    #[arg(long, default_value = MARKDOWN_EXTENSION)]
    pub extension: String,

    /// Enable verbose logging (debug level)
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

/// Resolved configuration, validated and ready to drive a publishing run.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub api_url: ValidatedUrl,
    pub admin_key: AdminApiKey,
    pub repo_root: PathBuf,
    pub article: Option<ArticlePath>,
    pub extension: String,
    pub render: RenderOptions,
    pub verbose: bool,
}

impl PipelineConfig {
    /// Resolves a complete configuration from CLI input and the process environment.
    pub fn resolve(cli: CommandLineInput) -> Result<Self, AppError> {
        Self::resolve_with(cli, |name| std::env::var(name).ok())
    }

    /// Resolves a configuration, reading variables through `env`.
    pub fn resolve_with(
        cli: CommandLineInput,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, AppError> {
        let api_url_str = cli
            .api_url
            .filter(|value| !value.trim().is_empty())
            .or_else(|| first_set(&env, API_URL_VARS))
            .ok_or_else(|| {
                AppError::MissingConfiguration(
                    "Ghost API URL not set (use --api-url or GHOST_API_URL)".to_string(),
                )
            })?;
        let api_url = ValidatedUrl::parse(api_url_str.trim())?;

        let key_str = first_set(&env, ADMIN_KEY_VARS).ok_or_else(|| {
            AppError::MissingConfiguration(
                "GHOST_ADMIN_API_KEY environment variable not set".to_string(),
            )
        })?;
        let admin_key = AdminApiKey::new(key_str)?;

        let article = cli.article.map(ArticlePath::new).transpose()?;

        if cli.extension.is_empty() {
            return Err(AppError::MissingConfiguration(
                "--extension must not be empty".to_string(),
            ));
        }

        Ok(PipelineConfig {
            api_url,
            admin_key,
            repo_root: cli.repo_root,
            article,
            extension: cli.extension,
            render: RenderOptions::default(),
            verbose: cli.verbose,
        })
    }
}

fn first_set(env: &impl Fn(&str) -> Option<String>, names: &[&str]) -> Option<String> {
    names
        .iter()
        .filter_map(|name| env(name))
        .find(|value| !value.trim().is_empty())
}
