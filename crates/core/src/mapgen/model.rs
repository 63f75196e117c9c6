//! Public data model for generated boards.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;
use xxhash_rust::xxh3::xxh3_64;

use crate::types::{DecorationKind, GridPos, ThemeId, TileKind};

/// Purely cosmetic object attached to a path tile, occupying its own grid
/// cell next to the path.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Decoration {
    pub kind: DecorationKind,
    pub grid: GridPos,
    pub scale: f32,
    pub color: Option<&'static str>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Tile {
    pub id: usize,
    pub kind: TileKind,
    pub grid: GridPos,
    pub zone: &'static str,
    /// Present only on `Shortcut`/`Plane` tiles; always points forward.
    pub shortcut_target: Option<usize>,
    pub decorations: Vec<Decoration>,
}

/// The immutable output of one generation run. Created atomically at game
/// start and shared read-only for the lifetime of one game.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Board {
    pub theme: ThemeId,
    pub tiles: Vec<Tile>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoardError {
    Empty,
    NonSequentialId { index: usize },
    DuplicateGridCell { first: usize, second: usize },
    MissingStoryEndpoint { tile: usize },
    BackwardOrOutOfRangeTarget { tile: usize },
    UnexpectedTarget { tile: usize },
    DecorationCollision { tile: usize },
}

impl Board {
    pub fn tile_count(&self) -> usize {
        self.tiles.len()
    }

    pub fn last_tile_id(&self) -> usize {
        self.tiles.len().saturating_sub(1)
    }

    pub fn tile(&self, id: usize) -> &Tile {
        &self.tiles[id]
    }

    /// Check every structural invariant the turn engine relies on. The
    /// generator regenerates on walk collisions, so in practice this only
    /// fails for hand-built boards or the rare accepted overlap.
    pub fn validate(&self) -> Result<(), BoardError> {
        if self.tiles.is_empty() {
            return Err(BoardError::Empty);
        }
        let last = self.last_tile_id();

        let mut grid_cells = BTreeMap::new();
        let mut decoration_cells = BTreeSet::new();

        for (index, tile) in self.tiles.iter().enumerate() {
            if tile.id != index {
                return Err(BoardError::NonSequentialId { index });
            }
            if let Some(first) = grid_cells.insert(tile.grid, index) {
                return Err(BoardError::DuplicateGridCell { first, second: index });
            }
            match tile.kind {
                TileKind::Shortcut | TileKind::Plane => {
                    // A missing target is tolerated (the resolver falls back
                    // to no movement); a present one must be sane.
                    if let Some(target) = tile.shortcut_target
                        && (target <= index || target > last.saturating_sub(2))
                    {
                        return Err(BoardError::BackwardOrOutOfRangeTarget { tile: index });
                    }
                }
                _ => {
                    if tile.shortcut_target.is_some() {
                        return Err(BoardError::UnexpectedTarget { tile: index });
                    }
                }
            }
        }

        for (index, tile) in self.tiles.iter().enumerate() {
            for decoration in &tile.decorations {
                if grid_cells.contains_key(&decoration.grid)
                    || !decoration_cells.insert(decoration.grid)
                {
                    return Err(BoardError::DecorationCollision { tile: index });
                }
            }
        }

        if self.tiles[0].kind != TileKind::Story {
            return Err(BoardError::MissingStoryEndpoint { tile: 0 });
        }
        if self.tiles[last].kind != TileKind::Story {
            return Err(BoardError::MissingStoryEndpoint { tile: last });
        }
        Ok(())
    }

    pub fn canonical_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::new();
        bytes.extend((self.tiles.len() as u32).to_le_bytes());
        for tile in &self.tiles {
            bytes.push(tile_kind_code(tile.kind));
            bytes.extend(tile.grid.x.to_le_bytes());
            bytes.extend(tile.grid.y.to_le_bytes());
            bytes.extend(
                (tile.shortcut_target.map_or(u32::MAX, |target| target as u32)).to_le_bytes(),
            );
            bytes.push(tile.decorations.len() as u8);
            for decoration in &tile.decorations {
                bytes.push(decoration.kind as u8);
                bytes.extend(decoration.grid.x.to_le_bytes());
                bytes.extend(decoration.grid.y.to_le_bytes());
                bytes.extend(decoration.scale.to_le_bytes());
            }
        }
        bytes
    }

    pub fn fingerprint(&self) -> u64 {
        xxh3_64(&self.canonical_bytes())
    }
}

fn tile_kind_code(kind: TileKind) -> u8 {
    match kind {
        TileKind::Normal => 0,
        TileKind::Boost => 1,
        TileKind::Penalty => 2,
        TileKind::Freeze => 3,
        TileKind::Story => 4,
        TileKind::Shortcut => 5,
        TileKind::Plane => 6,
    }
}
