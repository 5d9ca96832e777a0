//! Rooms and room placement plans
//!
//! A room is an interior of Floor tiles wrapped in a one-tile border of
//! Wall tiles, one of which is a Door. The tile grid is
//! `(height + 2) x (width + 2)`; row 0 is the border row on the anchor
//! side and rows grow along the room's vertical growth sign.

use serde::{Deserialize, Serialize};

use super::geometry::{Direction, GrowthSigns, Point};
use super::tile::{Tile, TileGrid, TileType};
use crate::config::GenerationConfig;
use crate::rng::RoomRng;

/// Informational role of a room in the chain
///
/// The builder tags every room `Entrance`. Finalization retags the last
/// room of a chain longer than one as `Exit`; nothing else sets it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RoomRole {
    #[default]
    Entrance,
    Exit,
}

/// A placed room
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    /// Placement anchor: the first interior tile, not the doorway
    pub entrance: Point,
    /// Interior width, border excluded
    pub width: u32,
    /// Interior height, border excluded
    pub height: u32,
    pub tiles: TileGrid,
    /// `Entrance` for every placed room; the finalizer retags the last
    /// room of a multi-room chain as `Exit`
    pub role: RoomRole,
    /// Wall the room was entered through
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub incoming: Option<Direction>,
    /// Wall holding the door to the next room
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outgoing: Option<Direction>,
}

impl Room {
    /// Interior tiles (border excluded), row by row
    pub fn interior(&self) -> impl Iterator<Item = &Tile> {
        let (rows, columns) = (self.tiles.rows(), self.tiles.columns());
        self.tiles
            .iter_rows()
            .enumerate()
            .filter(move |(row, _)| *row > 0 && *row + 1 < rows)
            .flat_map(move |(_, tiles)| &tiles[1..columns.saturating_sub(1).max(1)])
    }

    /// Coordinates of every interior tile
    pub fn interior_points(&self) -> impl Iterator<Item = Point> + '_ {
        self.interior().map(|tile| tile.point)
    }

    /// Coordinates of every tile, border included
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        self.tiles.iter().map(|tile| tile.point)
    }

    pub fn door_count(&self) -> usize {
        self.tiles.count(TileType::Door)
    }

    /// First tile of the given type, row-major
    pub fn find(&self, kind: TileType) -> Option<&Tile> {
        self.tiles.iter().find(|tile| tile.kind == kind)
    }

    /// Tile at a world coordinate, if the room covers it
    pub fn tile_at(&self, point: Point) -> Option<&Tile> {
        self.tiles.iter().find(|tile| tile.point == point)
    }
}

/// A sampled room placement that has not been carved yet
///
/// The builder samples a plan, tests its interior for collisions and only
/// then carves it into a [`Room`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoomPlan {
    pub anchor: Point,
    pub width: u32,
    pub height: u32,
    pub incoming: Option<Direction>,
    pub outgoing: Direction,
    /// Door position along the outgoing wall. Counts border columns
    /// (corner = 0) on a horizontal wall and interior rows on a vertical one.
    pub door_offset: u32,
}

impl RoomPlan {
    /// Sample size, outgoing direction and door position, in that order.
    pub fn sample<R: RoomRng>(
        rng: &mut R,
        config: &GenerationConfig,
        anchor: Point,
        incoming: Option<Direction>,
    ) -> Self {
        let width = sample_dimension(rng, config.width.min, config.width.max);
        let height = sample_dimension(rng, config.height.min, config.height.max);
        let outgoing = rng.random_direction(incoming);
        let span = if outgoing.is_vertical() { width } else { height };
        let door_offset = sample_dimension(rng, 1, span.saturating_sub(2));

        Self {
            anchor,
            width,
            height,
            incoming,
            outgoing,
            door_offset,
        }
    }

    pub const fn signs(&self) -> GrowthSigns {
        GrowthSigns::for_incoming(self.incoming)
    }

    /// World coordinate of a cell in the bordered grid
    pub fn cell_point(&self, row: usize, column: usize) -> Point {
        let signs = self.signs();
        self.anchor.offset(
            (column as i32 - 1) * signs.horizontal,
            (row as i32 - 1) * signs.vertical,
        )
    }

    /// Coordinates the interior floor will cover
    pub fn interior_points(&self) -> impl Iterator<Item = Point> + '_ {
        let (rows, columns) = (self.height as usize, self.width as usize);
        (1..=rows).flat_map(move |row| (1..=columns).map(move |column| self.cell_point(row, column)))
    }

    /// (row, column) of the door in the bordered grid
    ///
    /// The door sits on the far wall when the growth sign on the outgoing
    /// axis agrees with the outgoing direction, on the anchor-side wall
    /// otherwise.
    pub fn door_cell(&self) -> (usize, usize) {
        let forward = self.signs().along(self.outgoing) == self.outgoing.sign();
        let offset = self.door_offset as usize;
        if self.outgoing.is_vertical() {
            let row = if forward { self.height as usize + 1 } else { 0 };
            (row, offset)
        } else {
            let column = if forward { self.width as usize + 1 } else { 0 };
            (offset + 1, column)
        }
    }

    /// Build the bordered tile grid for this plan
    pub fn carve(&self) -> Room {
        let rows = self.height as usize + 2;
        let columns = self.width as usize + 2;
        let door = self.door_cell();

        let tiles = TileGrid::from_fn(rows, columns, |row, column| {
            let border = row == 0 || column == 0 || row == rows - 1 || column == columns - 1;
            let kind = if (row, column) == door {
                TileType::Door
            } else if border {
                TileType::Wall
            } else {
                TileType::Floor
            };
            Tile::new(self.cell_point(row, column), kind)
        });

        Room {
            entrance: self.anchor,
            width: self.width,
            height: self.height,
            tiles,
            role: RoomRole::Entrance,
            incoming: self.incoming,
            outgoing: Some(self.outgoing),
        }
    }

    /// Anchor of the next room, one step past the door
    pub fn next_anchor(&self) -> Point {
        let signs = self.signs();
        let (s, door) = (self.anchor, self.door_offset as i32);
        let (width, height) = (self.width as i32, self.height as i32);
        match self.outgoing {
            Direction::Up => Point::new(
                s.x + door * signs.horizontal - signs.horizontal,
                s.y + height + 1,
            ),
            Direction::Right => Point::new(s.x + width + 1, s.y + signs.vertical * door),
            Direction::Down => Point::new(
                s.x + door * signs.horizontal - signs.horizontal,
                if signs.vertical == -1 { s.y - height - 1 } else { s.y - 2 },
            ),
            Direction::Left => Point::new(
                if signs.horizontal == -1 { s.x - width - 1 } else { s.x - 2 },
                s.y + signs.vertical * door,
            ),
        }
    }

    /// Incoming wall of the next room
    pub const fn next_incoming(&self) -> Direction {
        self.outgoing.opposite()
    }
}

fn sample_dimension<R: RoomRng>(rng: &mut R, min: u32, max: u32) -> u32 {
    let clamp = |v: u32| v.min(i32::MAX as u32) as i32;
    rng.uniform_int(clamp(min), clamp(max)).max(0) as u32
}
