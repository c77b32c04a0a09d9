// src/main.rs
use clap::Parser;
use log::LevelFilter;
use log4rs::{
    append::console::{ConsoleAppender, Target},
    append::file::FileAppender,
    config::{Appender, Root},
    encode::pattern::PatternEncoder,
    filter::threshold::ThresholdFilter,
    Config,
};
use md2ghost::{
    error_chain, AppError, ArticleSource, CommandLineInput, GhostHttpClient, GitDiscovery,
    PipelineConfig, PublishOutcome, PublishPipeline, PublishSettings,
};
use std::fs;
use std::sync::Arc;

/// Sets up logging configuration.
fn setup_logging(verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    let log_level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let log_file_path = std::env::temp_dir().join("md2ghost.log");
    if let Some(parent) = log_file_path.parent() {
        fs::create_dir_all(parent)?;
    }

    let pattern = if verbose {
        "{d(%Y-%m-%d %H:%M:%S)} [{l}] - {m}{n}"
    } else {
        "{m}{n}"
    };

    let console_appender = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(pattern)))
        .build();

    let file_appender = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(
            "{d(%Y-%m-%d %H:%M:%S)} [{l}] {t} - {m}{n}",
        )))
        .build(&log_file_path)?;

    let config = Config::builder()
        .appender(Appender::builder().build("console", Box::new(console_appender)))
        .appender(
            Appender::builder()
                .filter(Box::new(ThresholdFilter::new(LevelFilter::Debug)))
                .build("file", Box::new(file_appender)),
        )
        .build(
            Root::builder()
                .appender("console")
                .appender("file")
                .build(log_level),
        )?;

    log4rs::init_config(config)?;
    log::debug!("Logging initialized. Log file: {}", log_file_path.display());
    Ok(())
}

/// Wires the real collaborators around the configuration.
fn build_pipeline(config: &PipelineConfig) -> Result<PublishPipeline, AppError> {
    let client = Arc::new(GhostHttpClient::new(
        config.api_url.clone(),
        &config.admin_key,
        config.repo_root.clone(),
    )?);

    let source = match &config.article {
        Some(path) => {
            log::info!("Publishing {} (discovery skipped)", path);
            ArticleSource::Explicit(path.clone())
        }
        None => ArticleSource::Discover(Arc::new(GitDiscovery::new(config.repo_root.clone()))),
    };

    Ok(PublishPipeline::new(
        source,
        client.clone(),
        client,
        PublishSettings {
            repo_root: config.repo_root.clone(),
            extension: config.extension.clone(),
            render: config.render.clone(),
        },
    ))
}

/// Runs one publishing pass and reports the result on stdout.
async fn execute_pipeline(config: &PipelineConfig) -> Result<(), AppError> {
    log::info!("Ghost site: {}", config.api_url);
    let pipeline = build_pipeline(config)?;

    match pipeline.run().await? {
        PublishOutcome::NothingToPublish => {
            println!("No {} file in HEAD commit", config.extension);
        }
        PublishOutcome::Published { post, .. } => {
            println!("Post created: {}", post.url);
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() {
    let cli = CommandLineInput::parse();

    if let Err(e) = setup_logging(cli.verbose) {
        eprintln!("Failed to initialize logging: {}", e);
    }

    let result = match PipelineConfig::resolve(cli) {
        Ok(config) => execute_pipeline(&config).await,
        Err(e) => Err(e),
    };

    if let Err(e) = result {
        log::error!("{}", error_chain(&e));
        std::process::exit(1);
    }
}
