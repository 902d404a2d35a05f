//! Odds table generator.
//!
//! Exhausts every five-card hand of the standard deck, aggregates the
//! triple and pair odds maps, and persists the blob for engines and
//! bots to load at startup.

/// Build and persist the combination odds blob.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// where the blob lands
    #[arg(short, long, default_value = "combination_odds.bin")]
    output: PathBuf,
    /// rebuild even if the blob already exists
    #[arg(short, long)]
    force: bool,
}

fn main() -> Result<()> {
    log();
    let args = Args::parse();
    if args.output.exists() && !args.force {
        log::info!("{} already exists, use --force to rebuild", args.output.display());
        return Ok(());
    }
    log::info!("{:<32}{:<16}", "threads", num_cpus::get());
    let clock = Instant::now();
    let deck = Deck::standard();
    let table = OddsTable::build(deck.cards());
    log::info!("{:<32}{:<16?}", "build time", clock.elapsed());
    table
        .save(&args.output)
        .with_context(|| format!("saving odds to {}", args.output.display()))?;
    let reloaded = OddsTable::load(&args.output).context("verifying saved blob")?;
    match reloaded == table {
        true => log::info!("{:<32}{:<16}", "verified", args.output.display()),
        false => anyhow::bail!("blob does not round-trip"),
    }
    Ok(())
}

use anyhow::Context;
use anyhow::Result;
use clap::Parser;
use croupier::cards::deck::Deck;
use croupier::log;
use croupier::odds::table::OddsTable;
use std::path::PathBuf;
use std::time::Instant;
