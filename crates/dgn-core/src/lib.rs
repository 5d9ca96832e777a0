//! dgn-core: Room-chain dungeon layout generation
//!
//! Builds a linear chain of walled rectangular rooms on an integer grid.
//! Each room opens onto the next through a single doorway; the first room
//! holds the ladder up and the last room the ladder down.
//!
//! The crate performs no I/O. Randomness is injected through [`RoomRng`],
//! so a fixed seed (or a scripted sequence) reproduces a layout exactly.

pub mod config;
pub mod dungeon;
pub mod error;

mod rng;

pub use config::{DimensionRange, GenerationConfig};
pub use dungeon::{
    ChainBuilder, Direction, Dungeon, GrowthSigns, Point, Room, RoomPlan, RoomRole, Tile,
    TileGrid, TileType,
};
pub use error::{ConfigError, DungeonError};
pub use rng::{DungeonRng, RoomRng, ScriptedRng};

/// Generate a dungeon with the default configuration and a fresh seed.
///
/// Starts at (0,0) and asks for 8 rooms with a retry budget of 25 per
/// anchor. The chain may come back shorter than 8.
pub fn generate_dungeon() -> Result<Dungeon, DungeonError> {
    let mut rng = DungeonRng::from_entropy();
    generate_dungeon_with(&GenerationConfig::default(), &mut rng)
}

/// Generate a dungeon with an explicit configuration and random source.
pub fn generate_dungeon_with<R: RoomRng>(
    config: &GenerationConfig,
    rng: &mut R,
) -> Result<Dungeon, DungeonError> {
    ChainBuilder::new(config.clone()).build(rng)
}
