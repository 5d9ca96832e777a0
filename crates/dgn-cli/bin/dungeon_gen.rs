//! Room-chain dungeon generator
//!
//! Prints a generated layout to stdout. Logs go to stderr.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use dgn_cli::{Options, render};
use dgn_core::{DungeonRng, generate_dungeon_with};

fn main() -> Result<()> {
    let options = Options::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| options.log_filter().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = options.generation_config()?;
    let mut rng = options.seed.map_or_else(DungeonRng::from_entropy, DungeonRng::new);
    tracing::info!("Generating dungeon with seed {}", rng.seed());

    let dungeon = generate_dungeon_with(&config, &mut rng)?;
    if dungeon.len() < config.target_rooms {
        tracing::info!(
            "Placed {} of {} rooms before running out of retries",
            dungeon.len(),
            config.target_rooms
        );
    }

    print!("{}", render(&dungeon, options.format)?);
    Ok(())
}
