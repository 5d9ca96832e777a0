//! ASCII and JSON rendering tests

use dgn_cli::{OutputFormat, render, render_ascii};
use dgn_core::{GenerationConfig, ScriptedRng, generate_dungeon_with};

fn two_room_dungeon() -> dgn_core::Dungeon {
    // Room 1: 3x2 at the origin, door up. Room 2: 4x3 above it, exit.
    let config = GenerationConfig {
        target_rooms: 2,
        ..GenerationConfig::default()
    };
    generate_dungeon_with(&config, &mut ScriptedRng::new([3, 2, 0, 1, 4, 3, 1, 1])).unwrap()
}

#[test]
fn test_ascii_two_rooms() {
    let map = render_ascii(&two_room_dungeon());
    let expected = "\
######
#..>.#
#....#
#....#
#+####
#..<#
#...#
#####
";
    assert_eq!(map, expected);
}

#[test]
fn test_ascii_glyph_counts() {
    let map = render_ascii(&two_room_dungeon());
    assert_eq!(map.matches('<').count(), 1);
    assert_eq!(map.matches('>').count(), 1);
    assert_eq!(map.matches('+').count(), 1);
}

#[test]
fn test_json_render_parses() {
    let dungeon = two_room_dungeon();
    let text = render(&dungeon, OutputFormat::Json).unwrap();
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(value["rooms"].as_array().map(Vec::len), Some(2));
    assert_eq!(value["exit"]["y"], 5);
}
