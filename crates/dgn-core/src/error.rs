//! Error types for dungeon generation
//!
//! Placement collisions are not errors: they are retried locally and, once
//! the retry budget runs out, the chain is finalized short. The variants
//! here cover bad input only.

use thiserror::Error;

/// Invalid generation parameters
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("target room count must be at least 1")]
    NoRooms,

    #[error("invalid {axis} range: min {min} is greater than max {max}")]
    EmptyRange {
        axis: &'static str,
        min: u32,
        max: u32,
    },

    #[error("{axis} minimum {min} is below the smallest supported size {floor}")]
    TooSmall {
        axis: &'static str,
        min: u32,
        floor: u32,
    },

    #[error("{axis} maximum {max} exceeds the largest supported size {ceiling}")]
    TooLarge {
        axis: &'static str,
        max: u32,
        ceiling: u32,
    },

    #[error("origin ({x}, {y}) leaves less than {reach} tiles before the coordinate limit")]
    OriginOutOfRange { x: i32, y: i32, reach: i64 },
}

/// Errors produced while building or decoding a dungeon
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DungeonError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("cannot finalize an empty room chain")]
    EmptyChain,

    #[error("room {index} has no cell at ladder offset ({row}, {column})")]
    MalformedRoom {
        index: usize,
        row: usize,
        column: usize,
    },

    #[error("tile grid row {row} has {found} columns, expected {expected}")]
    RaggedGrid {
        row: usize,
        found: usize,
        expected: usize,
    },
}
