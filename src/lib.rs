pub mod cli;
pub mod core;
pub mod providers;

use crate::cli::calc::CalcArgs;
use crate::core::RateProvider;
use crate::core::config::AppConfig;
use crate::providers::DolarApiProvider;
use anyhow::Result;
use std::sync::Arc;
use tracing::{debug, info};

/// Commands that need configuration and a rate provider.
#[derive(Debug, Clone)]
pub enum AppCommand {
    Rates,
    Calc(CalcArgs),
    Interactive,
}

pub async fn run_command(command: AppCommand, config_path: Option<&str>) -> Result<()> {
    info!("efund starting...");

    let config = match config_path {
        Some(path) => AppConfig::load_from_path(path)?,
        None => AppConfig::load()?,
    };
    debug!("Loaded config: {config:#?}");

    let source = DolarApiProvider::from_config(&config.providers.dolarapi)?;
    let rates = RateProvider::new(Arc::new(source));

    match command {
        AppCommand::Rates => cli::rates::run(&rates).await,
        AppCommand::Calc(args) => cli::calc::run(&rates, &args, config.default_quote).await,
        AppCommand::Interactive => cli::interactive::run(&rates, config.default_quote).await,
    }
}
