//! Shared fixtures for the turn-engine suites: hand-built boards and small
//! rosters, so scenarios do not depend on generator randomness.

use super::*;
use crate::mapgen::Tile;
use crate::state::COLOR_OPTIONS;
use crate::theme;
use crate::types::{AvatarKind, GridPos, TileKind};

pub(super) fn plain_board(tile_count: usize) -> Board {
    let definition = theme::theme_definition(ThemeId::Interstellar);
    let tiles = (0..tile_count)
        .map(|id| Tile {
            id,
            kind: if id == 0 || id == tile_count - 1 { TileKind::Story } else { TileKind::Normal },
            grid: GridPos { x: id as i32, y: 0 },
            zone: definition.zone_name(id, tile_count),
            shortcut_target: None,
            decorations: Vec::new(),
        })
        .collect();
    Board { theme: ThemeId::Interstellar, tiles }
}

/// A plain board with selected tiles rewritten to other kinds.
pub(super) fn board_with(
    tile_count: usize,
    overrides: &[(usize, TileKind, Option<usize>)],
) -> Board {
    let mut board = plain_board(tile_count);
    for &(id, kind, target) in overrides {
        board.tiles[id].kind = kind;
        board.tiles[id].shortcut_target = target;
    }
    board
}

pub(super) fn roster(names: &[&str]) -> Vec<PlayerSetup> {
    names
        .iter()
        .enumerate()
        .map(|(index, name)| PlayerSetup {
            name: (*name).to_string(),
            avatar: AvatarKind::ALL[index % AvatarKind::ALL.len()],
            color: COLOR_OPTIONS[index % COLOR_OPTIONS.len()].to_string(),
        })
        .collect()
}

pub(super) fn game_on(board: Board, names: &[&str]) -> Game {
    Game::with_board(7, board, &roster(names))
}

pub(super) fn force_rolls(game: &mut Game, rolls: &[u8]) {
    game.forced_rolls.extend(rolls.iter().copied());
}

/// Drive the clock in frame-sized slices long past any single turn's worst
/// case (six steps, a full flight, and the turn-advance delay).
pub(super) fn settle_turn(game: &mut Game) {
    for _ in 0..100 {
        game.tick(100);
    }
}
