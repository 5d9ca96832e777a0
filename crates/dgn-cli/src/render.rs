//! Text rendering of dungeons

use anyhow::Result;
use dgn_core::{Dungeon, TileType};

use crate::options::OutputFormat;

/// Render in the requested format.
pub fn render(dungeon: &Dungeon, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Ascii => Ok(render_ascii(dungeon)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(dungeon)?),
    }
}

/// Draw every room on one character map, +y at the top.
///
/// Rooms share border coordinates; anything passable wins over a wall.
pub fn render_ascii(dungeon: &Dungeon) -> String {
    let Some((lo, hi)) = dungeon.bounds() else {
        return String::new();
    };
    let width = (hi.x - lo.x + 1) as usize;
    let height = (hi.y - lo.y + 1) as usize;
    let mut cells: Vec<Option<TileType>> = vec![None; width * height];

    for tile in dungeon.iter().flat_map(|room| room.tiles.iter()) {
        let column = (tile.point.x - lo.x) as usize;
        let row = (hi.y - tile.point.y) as usize;
        let cell = &mut cells[row * width + column];
        match *cell {
            Some(existing) if existing.is_passable() && !tile.kind.is_passable() => {}
            _ => *cell = Some(tile.kind),
        }
    }

    let mut out = String::with_capacity((width + 1) * height);
    for row in cells.chunks(width) {
        let line: String = row
            .iter()
            .map(|cell| cell.map_or(' ', TileType::glyph))
            .collect();
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}
