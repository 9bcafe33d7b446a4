use std::env;
use std::error::Error;

use anyhow::bail;
use clap::Parser;
use stanza::renderer::console::Console;
use stanza::renderer::Renderer;
use tracing::{debug, info};

use dicepool::chance::chance_at_least;
use dicepool::factorial::Cache;
use dicepool::print::tabulate_chances;

const THRESHOLDS: [(u64, &str); 6] = [
    (5, "V. Easy"),
    (10, "Easy"),
    (15, "Moderate"),
    (20, "Difficult"),
    (25, "V. Difficult"),
    (30, "Heroic"),
];

#[derive(Debug, clap::Parser, Clone)]
struct Args {
    /// sides on each die
    #[clap(short = 's', long, default_value_t = 6)]
    sides: u64,

    /// smallest pool tabulated
    #[clap(long, default_value_t = 2)]
    min_dice: u64,

    /// largest pool tabulated
    #[clap(long, default_value_t = 8)]
    max_dice: u64,

    /// greatest fixed bonus added to a pool
    #[clap(short = 'p', long, default_value_t = 2)]
    pips: u64,
}
impl Args {
    fn validate(&self) -> anyhow::Result<()> {
        if self.sides < 2 {
            bail!("dice need at least two sides");
        }
        if self.min_dice < 1 {
            bail!("a pool needs at least one die");
        }
        if self.min_dice > self.max_dice {
            bail!(
                "smallest pool ({}) exceeds largest pool ({})",
                self.min_dice,
                self.max_dice
            );
        }
        Ok(())
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    if env::var("RUST_BACKTRACE").is_err() {
        env::set_var("RUST_BACKTRACE", "full")
    }
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info")
    }
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    args.validate()?;
    debug!("args: {args:?}");

    let factorial = Cache::default();
    let thresholds: Vec<_> = THRESHOLDS
        .iter()
        .map(|(target, label)| format!("{label} ({target})"))
        .collect();

    let mut pools = Vec::new();
    for dice in args.min_dice..=args.max_dice {
        for pips in 0..=args.pips {
            let pool = if pips > 0 {
                format!("{dice}D+{pips}")
            } else {
                format!("{dice}D")
            };
            let mut chances = Vec::with_capacity(THRESHOLDS.len());
            for (target, _) in THRESHOLDS {
                chances.push(chance_at_least(
                    dice,
                    args.sides,
                    target.saturating_sub(pips),
                    &factorial,
                )?);
            }
            pools.push((pool, chances));
        }
    }

    let table = tabulate_chances(&thresholds, &pools);
    info!("\n{}", Console::default().render(&table));
    Ok(())
}
