//! Tile typing along the path plus the shortcut and plane retrofits.

use rand_chacha::ChaCha8Rng;

use crate::rng;
use crate::theme::ThemeDefinition;
use crate::types::{GridPos, TileKind};

use super::model::Tile;

// Single uniform draw partitioned into cumulative bands.
const BOOST_BAND: f64 = 0.08;
const PENALTY_BAND: f64 = 0.12;
const FREEZE_BAND: f64 = 0.15;

const SHORTCUT_COUNT: usize = 3;
const SHORTCUT_MIN_JUMP: usize = 5;
const SHORTCUT_MAX_JUMP: usize = 12;
const PLANE_JUMP: usize = 25;
const RETROFIT_ATTEMPTS: usize = 200;

pub(super) fn assign_tiles(
    rng: &mut ChaCha8Rng,
    cells: &[GridPos],
    definition: &ThemeDefinition,
) -> Vec<Tile> {
    let count = cells.len();
    let last = count - 1;
    let first_boundary = count / 3;
    let second_boundary = count * 2 / 3;

    let mut tiles: Vec<Tile> = Vec::with_capacity(count);
    for (id, &grid) in cells.iter().enumerate() {
        let kind = if id == 0 || id == last || id == first_boundary || id == second_boundary {
            TileKind::Story
        } else if tiles.last().is_some_and(|previous| previous.kind.is_special()) {
            // A tile after any effect tile is forced plain so effects
            // cannot chain.
            TileKind::Normal
        } else {
            let draw = rng::unit(rng);
            if draw < BOOST_BAND {
                TileKind::Boost
            } else if draw < PENALTY_BAND {
                TileKind::Penalty
            } else if draw < FREEZE_BAND {
                TileKind::Freeze
            } else {
                TileKind::Normal
            }
        };

        tiles.push(Tile {
            id,
            kind,
            grid,
            zone: definition.zone_name(id, count),
            shortcut_target: None,
            decorations: Vec::new(),
        });
    }
    tiles
}

/// A tile can be rewritten into a jump source only if it is plain and both
/// neighbors keep the no-chained-specials rule intact afterwards.
fn retrofit_site_is_clear(tiles: &[Tile], index: usize) -> bool {
    tiles[index].kind == TileKind::Normal
        && !tiles[index - 1].kind.is_special()
        && tiles[index + 1].kind == TileKind::Normal
}

pub(super) fn retrofit_shortcuts(rng: &mut ChaCha8Rng, tiles: &mut [Tile]) {
    let count = tiles.len();
    if count < 30 {
        return;
    }

    let mut added = 0;
    let mut attempts = 0;
    while added < SHORTCUT_COUNT && attempts < RETROFIT_ATTEMPTS {
        attempts += 1;
        let index = rng::range_usize(rng, 5, count - 16);
        if !retrofit_site_is_clear(tiles, index) {
            continue;
        }

        let jump = rng::range_usize(rng, SHORTCUT_MIN_JUMP, SHORTCUT_MAX_JUMP);
        let target = index + jump;
        if target <= count - 3 && tiles[target].kind == TileKind::Normal {
            tiles[index].kind = TileKind::Shortcut;
            tiles[index].shortcut_target = Some(target);
            added += 1;
        }
    }
}

pub(super) fn retrofit_plane(rng: &mut ChaCha8Rng, tiles: &mut [Tile]) {
    let count = tiles.len();
    let band_start = count * 3 / 10;
    let band_len = count * 2 / 5;
    // The board must be able to host the fixed jump from anywhere usable.
    if band_len == 0 || band_start + PLANE_JUMP > count.saturating_sub(3) {
        return;
    }

    let mut attempts = 0;
    while attempts < RETROFIT_ATTEMPTS {
        attempts += 1;
        let index = rng::range_usize(rng, band_start, band_start + band_len - 1);
        let target = index + PLANE_JUMP;
        if target > count - 3
            || !retrofit_site_is_clear(tiles, index)
            || tiles[target].kind != TileKind::Normal
        {
            continue;
        }
        tiles[index].kind = TileKind::Plane;
        tiles[index].shortcut_target = Some(target);
        return;
    }
}
