//! Tiles and tile grids
//!
//! The string tags of [`TileType`] are shared with the rendering side and
//! must not change.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use super::geometry::Point;
use crate::error::DungeonError;

/// What occupies a grid cell
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
    EnumString,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum TileType {
    #[default]
    Wall,
    Floor,
    Door,
    LadderUp,
    LadderDown,
}

impl TileType {
    /// ASCII glyph for debug rendering
    pub const fn glyph(self) -> char {
        match self {
            TileType::Wall => '#',
            TileType::Floor => '.',
            TileType::Door => '+',
            TileType::LadderUp => '<',
            TileType::LadderDown => '>',
        }
    }

    /// Walkable tiles (everything but walls)
    pub const fn is_passable(self) -> bool {
        !matches!(self, TileType::Wall)
    }
}

/// A typed grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tile {
    pub point: Point,
    #[serde(rename = "type")]
    pub kind: TileType,
}

impl Tile {
    pub const fn new(point: Point, kind: TileType) -> Self {
        Self { point, kind }
    }

    /// Same point, different type
    pub const fn with_kind(self, kind: TileType) -> Self {
        Self {
            point: self.point,
            kind,
        }
    }
}

/// Fixed-size row-major grid of tiles, addressed by (row, column)
///
/// Serialized as rows of columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "Vec<Vec<Tile>>", try_from = "Vec<Vec<Tile>>")]
pub struct TileGrid {
    rows: usize,
    columns: usize,
    tiles: Vec<Tile>,
}

impl TileGrid {
    /// Build a grid by calling `f(row, column)` for every cell.
    pub fn from_fn(rows: usize, columns: usize, mut f: impl FnMut(usize, usize) -> Tile) -> Self {
        let mut tiles = Vec::with_capacity(rows * columns);
        for row in 0..rows {
            for column in 0..columns {
                tiles.push(f(row, column));
            }
        }
        Self {
            rows,
            columns,
            tiles,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn get(&self, row: usize, column: usize) -> Option<&Tile> {
        if row < self.rows && column < self.columns {
            self.tiles.get(row * self.columns + column)
        } else {
            None
        }
    }

    /// One row of tiles
    pub fn row(&self, row: usize) -> Option<&[Tile]> {
        if row < self.rows {
            let start = row * self.columns;
            Some(&self.tiles[start..start + self.columns])
        } else {
            None
        }
    }

    /// Rows in order, each a slice of columns
    pub fn iter_rows(&self) -> impl Iterator<Item = &[Tile]> {
        // `max(1)` keeps `chunks` happy for an empty grid.
        self.tiles.chunks(self.columns.max(1))
    }

    /// All tiles in row-major order
    pub fn iter(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter()
    }

    /// Number of tiles of the given type
    pub fn count(&self, kind: TileType) -> usize {
        self.tiles.iter().filter(|tile| tile.kind == kind).count()
    }

    /// Copy of the grid with each tile passed through `f(row, column, tile)`.
    pub fn map(&self, mut f: impl FnMut(usize, usize, Tile) -> Tile) -> Self {
        let columns = self.columns.max(1);
        let tiles = self
            .tiles
            .iter()
            .enumerate()
            .map(|(i, tile)| f(i / columns, i % columns, *tile))
            .collect();
        Self {
            rows: self.rows,
            columns: self.columns,
            tiles,
        }
    }
}

impl From<TileGrid> for Vec<Vec<Tile>> {
    fn from(grid: TileGrid) -> Self {
        grid.iter_rows().map(<[Tile]>::to_vec).collect()
    }
}

impl TryFrom<Vec<Vec<Tile>>> for TileGrid {
    type Error = DungeonError;

    fn try_from(rows: Vec<Vec<Tile>>) -> Result<Self, Self::Error> {
        let columns = rows.first().map_or(0, Vec::len);
        if let Some((row, found)) = rows
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|(_, len)| *len != columns)
        {
            return Err(DungeonError::RaggedGrid {
                row,
                found,
                expected: columns,
            });
        }
        Ok(Self {
            rows: rows.len(),
            columns,
            tiles: rows.into_iter().flatten().collect(),
        })
    }
}
