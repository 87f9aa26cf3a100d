//! rSolat library root.
//! Exposes the CLI parser, the high-level run() function, and the cache,
//! provider, resolution and rendering modules it wires together.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod logging;
pub mod models;
pub mod output;
pub mod provider;
pub mod store;
pub mod ui;
pub mod utils;

use chrono::NaiveDateTime;
use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use models::Zone;
use output::OutputFormat;
use provider::EsolatProvider;
use std::path::PathBuf;
use store::{DailyRecordStore, FsStorage};

/// Everything a command needs, resolved once per invocation.
pub struct Context {
    pub cfg: Config,
    pub config_path: PathBuf,
    pub zone: Zone,
    pub now: NaiveDateTime,
}

impl Context {
    pub fn from_cli(cli: &Cli) -> AppResult<Self> {
        let config_path = cli
            .config
            .as_deref()
            .map(utils::path::expand_tilde)
            .unwrap_or_else(Config::config_file);

        let mut cfg = Config::load_from(&config_path)?;
        if let Some(zone) = &cli.zone {
            cfg.zone = zone.clone();
        }
        if let Some(dir) = &cli.cache_dir {
            cfg.cache_dir = dir.clone();
        }
        if let Some(url) = &cli.provider_url {
            cfg.provider_url = url.clone();
        }

        let zone = cfg.zone()?;
        let now = match &cli.now {
            Some(s) => utils::date::parse_now(s)?,
            None => utils::date::now(),
        };

        Ok(Self {
            cfg,
            config_path,
            zone,
            now,
        })
    }

    pub fn storage(&self) -> FsStorage {
        FsStorage::new(self.cfg.cache_path())
    }

    pub fn store(&self) -> DailyRecordStore<FsStorage, EsolatProvider> {
        let provider = EsolatProvider::new(self.cfg.provider_url.clone());
        DailyRecordStore::new(self.storage(), provider)
    }
}

/// Central command dispatcher
pub fn dispatch(cli: &Cli, ctx: &Context) -> AppResult<()> {
    match &cli.command {
        None => cli::commands::show::handle(OutputFormat::default(), ctx),
        Some(Commands::Show { format }) => cli::commands::show::handle(*format, ctx),
        Some(cmd @ Commands::Fetch { .. }) => cli::commands::fetch::handle(cmd, ctx),
        Some(Commands::Cache { action }) => cli::commands::cache::handle(action, ctx),
        Some(cmd @ Commands::Init { .. }) => cli::commands::init::handle(cmd, ctx),
        Some(cmd @ Commands::Config { .. }) => cli::commands::config::handle(cmd, ctx),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let ctx = Context::from_cli(&cli)?;
    dispatch(&cli, &ctx)
}
