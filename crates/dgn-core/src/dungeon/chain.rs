//! Finalized room chain

use core::ops::Deref;

use serde::{Deserialize, Serialize};

use super::geometry::Point;
use super::room::Room;

/// An ordered chain of rooms, entrance to exit
///
/// `entry` is the LadderUp tile in the first room and `exit` the
/// LadderDown tile in the last. In a single-room chain both name the same
/// point.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dungeon {
    rooms: Vec<Room>,
    entry: Point,
    exit: Point,
}

impl Dungeon {
    pub(crate) fn new(rooms: Vec<Room>, entry: Point, exit: Point) -> Self {
        Self { rooms, entry, exit }
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn into_rooms(self) -> Vec<Room> {
        self.rooms
    }

    /// Position of the ladder up
    pub fn entry(&self) -> Point {
        self.entry
    }

    /// Position of the ladder down
    pub fn exit(&self) -> Point {
        self.exit
    }

    /// Smallest and largest coordinates covered by any tile
    pub fn bounds(&self) -> Option<(Point, Point)> {
        self.rooms
            .iter()
            .flat_map(Room::points)
            .fold(None, |acc, p| match acc {
                None => Some((p, p)),
                Some((lo, hi)) => Some((
                    Point::new(lo.x.min(p.x), lo.y.min(p.y)),
                    Point::new(hi.x.max(p.x), hi.y.max(p.y)),
                )),
            })
    }
}

impl Deref for Dungeon {
    type Target = [Room];

    fn deref(&self) -> &Self::Target {
        &self.rooms
    }
}

impl<'a> IntoIterator for &'a Dungeon {
    type Item = &'a Room;
    type IntoIter = core::slice::Iter<'a, Room>;

    fn into_iter(self) -> Self::IntoIter {
        self.rooms.iter()
    }
}

impl From<Dungeon> for Vec<Room> {
    fn from(dungeon: Dungeon) -> Self {
        dungeon.rooms
    }
}
