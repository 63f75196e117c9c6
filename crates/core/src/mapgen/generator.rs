//! High-level board generation that composes the walk, tile typing,
//! retrofit, and decoration passes.

use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::SeedableRng;

use crate::rng;
use crate::theme::{self, ThemeDefinition};
use crate::types::{GridPos, ThemeId};

use super::decorations::place_decorations;
use super::model::Board;
use super::specials::{assign_tiles, retrofit_plane, retrofit_shortcuts};
use super::walk::walk_path;

const MAX_GENERATION_ATTEMPTS: u64 = 16;

pub struct BoardGenerator {
    seed: u64,
    theme: ThemeId,
}

impl BoardGenerator {
    pub fn new(seed: u64, theme: ThemeId) -> Self {
        Self { seed, theme }
    }

    pub fn generate(&self, tile_count: usize) -> Board {
        let tile_count = tile_count.max(2);
        let definition = theme::theme_definition(self.theme);

        let mut overlapping_board = None;
        for attempt in 0..MAX_GENERATION_ATTEMPTS {
            let mut stream =
                ChaCha8Rng::seed_from_u64(rng::derive_attempt_seed(self.seed, attempt));
            let walk = walk_path(&mut stream, tile_count);
            let board = self.finish(&mut stream, walk.cells, definition);
            if walk.clean {
                return board;
            }
            overlapping_board = Some(board);
        }

        // Every attempt trapped itself and fell back onto an occupied cell.
        // Ship the overlap rather than fail a running game; the odds of
        // reaching this are negligible at the drift bound in use.
        overlapping_board.expect("attempt loop ran at least once")
    }

    fn finish(
        &self,
        stream: &mut ChaCha8Rng,
        cells: Vec<GridPos>,
        definition: &ThemeDefinition,
    ) -> Board {
        let mut tiles = assign_tiles(stream, &cells, definition);
        place_decorations(stream, &mut tiles, definition);
        retrofit_shortcuts(stream, &mut tiles);
        retrofit_plane(stream, &mut tiles);
        Board { theme: self.theme, tiles }
    }
}
