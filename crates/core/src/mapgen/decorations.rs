//! Cosmetic decoration placement on cells adjacent to the path.

use std::collections::BTreeSet;

use rand_chacha::ChaCha8Rng;

use crate::rng;
use crate::theme::ThemeDefinition;
use crate::types::GridPos;

use super::model::{Decoration, Tile};

const DECORATION_CHANCE: f64 = 0.45;
const NEIGHBOR_OFFSETS: [(i32, i32); 4] = [(0, -1), (0, 1), (-1, 0), (1, 0)];

pub(super) fn place_decorations(
    rng: &mut ChaCha8Rng,
    tiles: &mut [Tile],
    definition: &ThemeDefinition,
) {
    let path_cells: BTreeSet<GridPos> = tiles.iter().map(|tile| tile.grid).collect();
    let mut taken = BTreeSet::new();

    for tile in tiles.iter_mut() {
        if rng::unit(rng) >= DECORATION_CHANCE {
            continue;
        }

        let (dx, dy) = NEIGHBOR_OFFSETS[rng::range_usize(rng, 0, NEIGHBOR_OFFSETS.len() - 1)];
        let cell = GridPos { x: tile.grid.x + dx, y: tile.grid.y + dy };
        if path_cells.contains(&cell) || taken.contains(&cell) {
            continue;
        }

        let draw = rng::unit(rng);
        let Some(choice) = definition
            .decorations
            .iter()
            .find(|choice| draw < choice.band)
            .or_else(|| definition.decorations.last())
        else {
            continue;
        };

        let color = if choice.colors.is_empty() {
            None
        } else {
            Some(choice.colors[rng::range_usize(rng, 0, choice.colors.len() - 1)])
        };

        tile.decorations.push(Decoration {
            kind: choice.kind,
            grid: cell,
            scale: 1.0 + rng::unit(rng) as f32 * 0.4,
            color,
        });
        taken.insert(cell);
    }
}
