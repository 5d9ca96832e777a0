//! Dungeon layout
//!
//! Contains grid geometry, tiles, rooms, the chain builder and the
//! finalizer that carves the ladders.

mod builder;
mod chain;
mod finalize;
mod geometry;
mod room;
mod tile;

pub use builder::ChainBuilder;
pub use chain::Dungeon;
pub use finalize::{finalize_chain, ladder_offset};
pub use geometry::{Direction, GrowthSigns, Point};
pub use room::{Room, RoomPlan, RoomRole};
pub use tile::{Tile, TileGrid, TileType};
