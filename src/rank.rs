//! The ranking pipeline: clean, impute, normalize, invert, score, rank.

use anyhow::{Context, Result};
use log::info;

use crate::{
    clean,
    cli::Cli,
    config::RankingConfig,
    dataset::RawTable,
    impute, io_utils, normalize, report,
    score::{self, Standing},
    weights::Weights,
};

pub fn rank(raw: &RawTable, config: &RankingConfig, weights: &Weights) -> Result<Vec<Standing>> {
    let cleaned = clean::clean(raw, config)?;
    let mut features = impute::impute(cleaned);
    normalize::normalize(&mut features);
    normalize::invert(&mut features, config.inverted_stats())?;
    let scores = score::aggregate(&features, weights)?;
    Ok(score::standings(&features.players, &scores))
}

pub fn execute(cli: &Cli) -> Result<()> {
    let mut config = match &cli.config {
        Some(path) => RankingConfig::load(path)?,
        None => RankingConfig::default(),
    };
    if let Some(token) = &cli.missing_token {
        config.missing_token = token.clone();
    }

    if let Some(path) = &cli.write_config {
        config
            .save(path)
            .with_context(|| format!("Writing configuration to {path:?}"))?;
        info!(
            "Configuration with {} stat(s) written to {:?}",
            config.stats.len(),
            path
        );
        return Ok(());
    }

    let weights = Weights::from_config(&config).context("Building stat weights")?;
    if cli.show_weights {
        report::print_weights(&weights);
        println!();
    }

    let delimiter = io_utils::resolve_input_delimiter(&cli.input, cli.delimiter);
    let encoding = io_utils::resolve_encoding(cli.input_encoding.as_deref())?;
    info!(
        "Ranking players from '{}' with delimiter '{}'",
        cli.input.display(),
        io_utils::printable_delimiter(delimiter)
    );
    let raw = RawTable::load(&cli.input, delimiter, encoding)?;
    info!(
        "Loaded {} row(s) across {} column(s)",
        raw.rows.len(),
        raw.headers.len()
    );

    let standings = rank(&raw, &config, &weights)
        .with_context(|| format!("Ranking players from {:?}", cli.input))?;
    report::print_standings(&standings);
    info!(
        "Ranked {} player(s) on {} weighted stat(s)",
        standings.len(),
        weights.iter().count()
    );
    Ok(())
}
