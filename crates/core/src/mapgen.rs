//! Procedural board generation split into coherent submodules.

pub mod model;

mod decorations;
mod generator;
mod specials;
mod walk;

pub use generator::BoardGenerator;
pub use model::{Board, BoardError, Decoration, Tile};

use crate::types::ThemeId;

pub fn generate_board(seed: u64, theme: ThemeId, tile_count: usize) -> Board {
    BoardGenerator::new(seed, theme).generate(tile_count)
}
