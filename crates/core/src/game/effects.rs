//! Pure tile-effect resolution: one handler per tile kind, enforced
//! exhaustively by the match.

use crate::mapgen::Tile;
use crate::types::TileKind;

const BOOST_DISTANCE: usize = 3;
const PENALTY_DISTANCE: usize = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EffectOutcome {
    pub new_position: usize,
    pub freeze: bool,
    /// Which effect narrates, present only when one actually applied.
    pub narrative: Option<TileKind>,
    /// True when the position change lands only after the flight cutscene.
    pub deferred: bool,
}

impl EffectOutcome {
    fn stay(position: usize) -> Self {
        Self { new_position: position, freeze: false, narrative: None, deferred: false }
    }
}

pub fn resolve_effect(tile: &Tile, position: usize, last_tile: usize) -> EffectOutcome {
    match tile.kind {
        TileKind::Normal | TileKind::Story => EffectOutcome::stay(position),
        TileKind::Boost => EffectOutcome {
            new_position: (position + BOOST_DISTANCE).min(last_tile),
            freeze: false,
            narrative: Some(TileKind::Boost),
            deferred: false,
        },
        TileKind::Penalty => EffectOutcome {
            new_position: position.saturating_sub(PENALTY_DISTANCE),
            freeze: false,
            narrative: Some(TileKind::Penalty),
            deferred: false,
        },
        TileKind::Freeze => EffectOutcome {
            new_position: position,
            freeze: true,
            narrative: Some(TileKind::Freeze),
            deferred: false,
        },
        // The retrofit passes are probabilistic, so a typed tile without a
        // target degrades to no movement instead of crashing.
        TileKind::Shortcut => match tile.shortcut_target {
            Some(target) => EffectOutcome {
                new_position: target,
                freeze: false,
                narrative: Some(TileKind::Shortcut),
                deferred: false,
            },
            None => EffectOutcome::stay(position),
        },
        TileKind::Plane => match tile.shortcut_target {
            Some(target) => EffectOutcome {
                new_position: target,
                freeze: false,
                narrative: Some(TileKind::Plane),
                deferred: true,
            },
            None => EffectOutcome::stay(position),
        },
    }
}
