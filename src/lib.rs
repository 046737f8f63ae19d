pub mod cli;
pub mod core;
pub mod extract;
pub mod seed;
pub mod store;

use crate::cli::explore::Position;
use crate::core::config::AppConfig;
use crate::core::fund::FundType;
use crate::core::impact::ImpactMetrics;
use crate::seed::SeedKind;
use anyhow::Result;
use std::path::PathBuf;
use tracing::{debug, info};

#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    /// Run the given seed loaders in order.
    Seed(Vec<SeedKind>),
    /// List stored funds, optionally of one type.
    Discover(Option<FundType>),
    Categories,
    Explore {
        container_width: f64,
        position: Position,
    },
    Impact(ImpactMetrics),
    Extract {
        path: PathBuf,
        mime_type: Option<String>,
    },
}

fn load_config(config_path: Option<&str>) -> Result<AppConfig> {
    let config = match config_path {
        Some(path) => AppConfig::load_from_path(path)?,
        None => AppConfig::load()?,
    };
    debug!("Loaded config: {config:#?}");
    Ok(config)
}

pub async fn run_command(command: AppCommand, config_path: Option<&str>) -> Result<()> {
    info!("greenfolio starting...");
    let config = load_config(config_path)?;

    match command {
        AppCommand::Seed(kinds) => {
            let store = store::open_store(&config)?;
            cli::seed::run(&kinds, &store).await?;
        }
        AppCommand::Discover(fund_type) => {
            let store = store::open_store(&config)?;
            cli::discover::run(&store, fund_type).await?;
        }
        AppCommand::Categories => cli::categories::run(),
        AppCommand::Explore {
            container_width,
            position,
        } => cli::explore::run(container_width, position)?,
        AppCommand::Impact(metrics) => cli::impact::run(&metrics),
        AppCommand::Extract { path, mime_type } => {
            let file = extract::UploadedFile::from_path(&path, mime_type.as_deref()).await?;
            let extractor = extract::TextExtractor::from_config(&config.ocr).await;
            cli::extract::run(&extractor, &file).await;
        }
    }

    Ok(())
}
