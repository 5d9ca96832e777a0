//! Chain finalization
//!
//! Carves the ladder up into the first room, the ladder down into the last
//! room and walls up the last room's doorway. Replacement rooms are built
//! from the originals; the middle of the chain is left as is.

use super::chain::Dungeon;
use super::geometry::Point;
use super::room::{Room, RoomRole};
use super::tile::TileType;
use crate::error::DungeonError;

/// (row, column) of the ladder cell in a room's bordered grid
///
/// `(ceil(height / 2) + 1, ceil(width / 2) + 1)`.
pub fn ladder_offset(room: &Room) -> (usize, usize) {
    (
        room.height.div_ceil(2) as usize + 1,
        room.width.div_ceil(2) as usize + 1,
    )
}

/// Finalize a completed chain of one or more rooms.
pub fn finalize_chain(mut rooms: Vec<Room>) -> Result<Dungeon, DungeonError> {
    let last = rooms.len().checked_sub(1).ok_or(DungeonError::EmptyChain)?;

    let (first_room, entry) = with_ladder_up(&rooms[0], 0)?;
    rooms[0] = first_room;

    let (mut last_room, exit) = with_ladder_down(&rooms[last], last)?;
    if last > 0 {
        last_room.role = RoomRole::Exit;
    }
    rooms[last] = last_room;

    Ok(Dungeon::new(rooms, entry, exit))
}

fn ladder_point(room: &Room, index: usize) -> Result<Point, DungeonError> {
    let (row, column) = ladder_offset(room);
    room.tiles
        .get(row, column)
        .map(|tile| tile.point)
        .ok_or(DungeonError::MalformedRoom { index, row, column })
}

fn with_ladder_up(room: &Room, index: usize) -> Result<(Room, Point), DungeonError> {
    let point = ladder_point(room, index)?;
    let cell = ladder_offset(room);
    let tiles = room.tiles.map(|row, column, tile| {
        if (row, column) == cell {
            tile.with_kind(TileType::LadderUp)
        } else {
            tile
        }
    });
    Ok((Room { tiles, ..room.clone() }, point))
}

fn with_ladder_down(room: &Room, index: usize) -> Result<(Room, Point), DungeonError> {
    let point = ladder_point(room, index)?;
    let cell = ladder_offset(room);
    let tiles = room.tiles.map(|row, column, tile| {
        if (row, column) == cell {
            tile.with_kind(TileType::LadderDown)
        } else if tile.kind == TileType::Door {
            tile.with_kind(TileType::Wall)
        } else {
            tile
        }
    });
    Ok((Room { tiles, ..room.clone() }, point))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dungeon::{Direction, RoomPlan};

    fn room_at(anchor: Point, width: u32, height: u32, outgoing: Direction) -> Room {
        RoomPlan {
            anchor,
            width,
            height,
            incoming: None,
            outgoing,
            door_offset: 1,
        }
        .carve()
    }

    #[test]
    fn test_ladder_offset() {
        assert_eq!(ladder_offset(&room_at(Point::ORIGIN, 3, 2, Direction::Up)), (2, 3));
        assert_eq!(ladder_offset(&room_at(Point::ORIGIN, 6, 5, Direction::Up)), (4, 4));
        assert_eq!(ladder_offset(&room_at(Point::ORIGIN, 4, 3, Direction::Up)), (3, 3));
    }

    #[test]
    fn test_empty_chain_rejected() {
        assert_eq!(finalize_chain(Vec::new()), Err(DungeonError::EmptyChain));
    }

    #[test]
    fn test_two_room_chain() {
        let first = room_at(Point::ORIGIN, 3, 2, Direction::Up);
        let second = room_at(Point::new(0, 10), 4, 3, Direction::Right);
        let dungeon = finalize_chain(vec![first.clone(), second.clone()]).unwrap();

        let head = &dungeon[0];
        assert_eq!(head.tiles.count(TileType::LadderUp), 1);
        assert_eq!(head.tiles.count(TileType::LadderDown), 0);
        assert_eq!(head.door_count(), 1);
        assert_eq!(head.role, RoomRole::Entrance);
        assert_eq!(dungeon.entry(), Point::new(2, 1));

        let tail = &dungeon[1];
        assert_eq!(tail.tiles.count(TileType::LadderDown), 1);
        assert_eq!(tail.tiles.count(TileType::LadderUp), 0);
        assert_eq!(tail.door_count(), 0);
        assert_eq!(tail.role, RoomRole::Exit);
        assert_eq!(dungeon.exit(), Point::new(2, 12));

        // Only the ladder and door cells changed.
        let changed = |a: &Room, b: &Room| {
            a.tiles.iter().zip(b.tiles.iter()).filter(|(x, y)| x != y).count()
        };
        assert_eq!(changed(&first, head), 1);
        assert_eq!(changed(&second, tail), 2);
    }

    #[test]
    fn test_middle_rooms_untouched() {
        let rooms = vec![
            room_at(Point::ORIGIN, 3, 2, Direction::Up),
            room_at(Point::new(0, 10), 4, 3, Direction::Right),
            room_at(Point::new(10, 10), 5, 4, Direction::Down),
        ];
        let dungeon = finalize_chain(rooms.clone()).unwrap();
        assert_eq!(dungeon[1], rooms[1]);
        assert_eq!(dungeon[0].role, RoomRole::Entrance);
        assert_eq!(dungeon[1].role, RoomRole::Entrance);
        assert_eq!(dungeon[2].role, RoomRole::Exit);
        assert_eq!(dungeon.len(), 3);
    }

    #[test]
    fn test_single_room_gets_both_rules() {
        let room = room_at(Point::ORIGIN, 4, 3, Direction::Left);
        let dungeon = finalize_chain(vec![room]).unwrap();
        assert_eq!(dungeon.len(), 1);
        let only = &dungeon[0];
        assert_eq!(only.door_count(), 0);
        assert_eq!(only.role, RoomRole::Entrance);
        // Same offset: the ladder down is carved last and wins the cell.
        assert_eq!(dungeon.entry(), dungeon.exit());
        assert_eq!(only.tile_at(dungeon.exit()).map(|t| t.kind), Some(TileType::LadderDown));
    }
}
