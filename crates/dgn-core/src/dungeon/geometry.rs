//! Grid coordinates and directions
//!
//! `Up` points towards +y and `Right` towards +x.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// Integer grid coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Point shifted by (dx, dy)
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Cardinal direction, in sampling order
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
#[repr(u8)]
pub enum Direction {
    Up = 0,
    Right = 1,
    Down = 2,
    Left = 3,
}

impl Direction {
    /// Direction for a sampled index; wraps modulo 4.
    pub const fn from_index(index: i32) -> Self {
        match index.rem_euclid(4) {
            0 => Direction::Up,
            1 => Direction::Right,
            2 => Direction::Down,
            _ => Direction::Left,
        }
    }

    pub const fn index(self) -> u8 {
        self as u8
    }

    pub const fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Right => Direction::Left,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
        }
    }

    pub const fn clockwise(self) -> Self {
        Direction::from_index(self as i32 + 1)
    }

    /// Up or Down
    pub const fn is_vertical(self) -> bool {
        matches!(self, Direction::Up | Direction::Down)
    }

    /// Sign of the axis this direction moves along (+1 for Up and Right)
    pub const fn sign(self) -> i32 {
        match self {
            Direction::Up | Direction::Right => 1,
            Direction::Down | Direction::Left => -1,
        }
    }
}

/// Per-axis multipliers that make a room grow away from its incoming wall
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GrowthSigns {
    pub horizontal: i32,
    pub vertical: i32,
}

impl GrowthSigns {
    /// Signs for a room entered through `incoming`.
    ///
    /// Only an Up entry flips the vertical axis and only a Right entry
    /// flips the horizontal one.
    pub const fn for_incoming(incoming: Option<Direction>) -> Self {
        Self {
            horizontal: if matches!(incoming, Some(Direction::Right)) { -1 } else { 1 },
            vertical: if matches!(incoming, Some(Direction::Up)) { -1 } else { 1 },
        }
    }

    /// Growth sign on the axis `direction` moves along
    pub const fn along(self, direction: Direction) -> i32 {
        if direction.is_vertical() {
            self.vertical
        } else {
            self.horizontal
        }
    }
}
