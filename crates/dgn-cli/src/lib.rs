//! dgn-cli: command-line front-end for the room-chain generator
//!
//! Renders a [`Dungeon`](dgn_core::Dungeon) as an ASCII map or JSON. Real
//! games draw the tiles themselves; this is for inspecting layouts.

pub mod options;
pub mod render;

pub use options::{Options, OutputFormat};
pub use render::{render, render_ascii};
