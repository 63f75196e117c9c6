//! Biased isometric random walk that lays out the tile path.

use std::collections::BTreeSet;

use rand_chacha::ChaCha8Rng;

use crate::rng;
use crate::types::GridPos;

/// Horizontal drift accumulator bound: `|x - y|` never exceeds this, which
/// keeps the snake shape near the main diagonal.
pub(super) const MAX_DRIFT: i32 = 12;

pub(super) struct PathWalk {
    pub(super) cells: Vec<GridPos>,
    /// False when the all-candidates-occupied fallback stepped onto an
    /// already used cell; the generator regenerates in that case.
    pub(super) clean: bool,
}

pub(super) fn walk_path(rng: &mut ChaCha8Rng, tile_count: usize) -> PathWalk {
    let mut cells = Vec::with_capacity(tile_count);
    let mut occupied = BTreeSet::new();
    let mut current = GridPos { x: 0, y: 0 };
    let mut previous_was_lateral = false;
    let mut clean = true;

    while cells.len() < tile_count {
        cells.push(current);
        occupied.insert(current);
        if cells.len() == tile_count {
            break;
        }

        let drift = current.x - current.y;
        let mut candidates: Vec<(GridPos, f64)> = Vec::with_capacity(4);

        // Forward diagonal moves.
        if drift < MAX_DRIFT {
            candidates.push((GridPos { x: current.x + 1, y: current.y }, 1.0));
        }
        if drift > -MAX_DRIFT {
            candidates.push((GridPos { x: current.x, y: current.y + 1 }, 1.0));
        }
        // Lateral drift-correcting moves, suppressed right after a lateral
        // move so the path cannot zig-zag.
        if !previous_was_lateral {
            if drift < MAX_DRIFT - 1 {
                candidates.push((GridPos { x: current.x + 1, y: current.y - 1 }, 2.0));
            }
            if drift > -MAX_DRIFT + 1 {
                candidates.push((GridPos { x: current.x - 1, y: current.y + 1 }, 2.0));
            }
        }

        candidates.retain(|(cell, _)| !occupied.contains(cell));

        if candidates.is_empty() {
            let fallback = GridPos { x: current.x + 1, y: current.y + 1 };
            if occupied.contains(&fallback) {
                clean = false;
            }
            previous_was_lateral = false;
            current = fallback;
            continue;
        }

        let total_weight: f64 = candidates.iter().map(|(_, weight)| weight).sum();
        let mut draw = rng::unit(rng) * total_weight;
        let mut selected = candidates[0].0;
        for &(cell, weight) in &candidates {
            draw -= weight;
            if draw <= 0.0 {
                selected = cell;
                break;
            }
        }

        previous_was_lateral =
            (selected.x - current.x) * (selected.y - current.y) == -1;
        current = selected;
    }

    PathWalk { cells, clean }
}
