pub mod clean;
pub mod cli;
pub mod config;
pub mod dataset;
pub mod error;
pub mod impute;
pub mod io_utils;
pub mod normalize;
pub mod rank;
pub mod report;
pub mod score;
pub mod table;
pub mod weights;

use std::{env, sync::OnceLock};

use anyhow::Result;
use clap::Parser;
use log::{LevelFilter, debug};

use crate::cli::Cli;

pub use crate::error::RankError;

static LOGGER: OnceLock<()> = OnceLock::new();

fn init_logging() {
    LOGGER.get_or_init(|| {
        let mut builder = env_logger::Builder::from_env(env_logger::Env::default());
        if env::var("RUST_LOG").is_err() {
            builder.filter_module("rb_rank", LevelFilter::Info);
        }
        let _ = builder.format_timestamp_millis().try_init();
    });
}

pub fn run() -> Result<()> {
    init_logging();
    let cli = Cli::parse();
    debug!("Parsed arguments: {cli:?}");
    rank::execute(&cli)
}
