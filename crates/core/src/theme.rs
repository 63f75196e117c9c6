//! Static theme tables consumed by the generator, the flavor hooks, and the
//! shell. One record per theme replaces per-theme conditionals everywhere.

use crate::types::{DecorationKind, ThemeId, TileKind};

/// One entry of a theme's decoration palette. `band` is the cumulative upper
/// bound for a single uniform draw; entries are ordered and the last band is
/// always 1.0.
#[derive(Clone, Copy, Debug)]
pub struct DecorationChoice {
    pub kind: DecorationKind,
    pub band: f64,
    pub colors: &'static [&'static str],
}

#[derive(Clone, Copy, Debug)]
pub struct EffectIcons {
    pub boost: &'static str,
    pub penalty: &'static str,
    pub freeze: &'static str,
    pub shortcut: &'static str,
    pub story: &'static str,
    pub plane: &'static str,
}

impl EffectIcons {
    pub fn for_kind(&self, kind: TileKind) -> Option<&'static str> {
        match kind {
            TileKind::Boost => Some(self.boost),
            TileKind::Penalty => Some(self.penalty),
            TileKind::Freeze => Some(self.freeze),
            TileKind::Shortcut => Some(self.shortcut),
            TileKind::Story => Some(self.story),
            TileKind::Plane => Some(self.plane),
            TileKind::Normal => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Waveform {
    Sine,
    Triangle,
    Square,
}

/// Synth parameters for the theme's background tune. The synth itself lives
/// outside this crate; the shell hands these to whatever sink it has.
#[derive(Clone, Copy, Debug)]
pub struct VoiceParams {
    pub lead: Waveform,
    pub tempo_bpm: u16,
}

pub struct ThemeDefinition {
    pub id: ThemeId,
    pub display_name: &'static str,
    /// Zone display names in band order: start band, then the three
    /// main segments of the path.
    pub zone_names: [&'static str; 4],
    pub decorations: &'static [DecorationChoice],
    pub icons: EffectIcons,
    pub voice: VoiceParams,
}

/// Band index for a tile id: `[0]`, `(0, N/3]`, `(N/3, 2N/3]`, `(2N/3, N)`.
pub fn zone_index(tile_id: usize, tile_count: usize) -> usize {
    let first_boundary = tile_count / 3;
    let second_boundary = tile_count * 2 / 3;
    if tile_id == 0 {
        0
    } else if tile_id <= first_boundary {
        1
    } else if tile_id <= second_boundary {
        2
    } else {
        3
    }
}

impl ThemeDefinition {
    pub fn zone_name(&self, tile_id: usize, tile_count: usize) -> &'static str {
        self.zone_names[zone_index(tile_id, tile_count)]
    }
}

pub fn theme_definition(id: ThemeId) -> &'static ThemeDefinition {
    match id {
        ThemeId::Interstellar => &INTERSTELLAR,
        ThemeId::Cyberpunk => &CYBERPUNK,
        ThemeId::Candy => &CANDY,
        ThemeId::Ocean => &OCEAN,
    }
}

static INTERSTELLAR: ThemeDefinition = ThemeDefinition {
    id: ThemeId::Interstellar,
    display_name: "Interstellar",
    zone_names: ["Earth Station", "Asteroid Belt", "Black Hole", "Alien Bridge"],
    decorations: &[
        DecorationChoice { kind: DecorationKind::Rocket, band: 0.25, colors: &[] },
        DecorationChoice {
            kind: DecorationKind::Planet,
            band: 0.5,
            colors: &["#eab308", "#a855f7", "#ec4899", "#3b82f6"],
        },
        DecorationChoice { kind: DecorationKind::Ufo, band: 0.75, colors: &[] },
        DecorationChoice { kind: DecorationKind::Satellite, band: 0.9, colors: &[] },
        DecorationChoice { kind: DecorationKind::Star, band: 1.0, colors: &[] },
    ],
    icons: EffectIcons {
        boost: "🚀",
        penalty: "☄️",
        freeze: "🕳️",
        shortcut: "🛸",
        story: "✨",
        plane: "✈️",
    },
    voice: VoiceParams { lead: Waveform::Sine, tempo_bpm: 108 },
};

static CYBERPUNK: ThemeDefinition = ThemeDefinition {
    id: ThemeId::Cyberpunk,
    display_name: "Cyberpunk",
    zone_names: ["Undercity", "The Slums", "City Center", "Cloud Hwy"],
    decorations: &[
        DecorationChoice {
            kind: DecorationKind::NeonSign,
            band: 0.3,
            colors: &["#f0abfc", "#22d3ee", "#34d399"],
        },
        DecorationChoice { kind: DecorationKind::Skyscraper, band: 0.6, colors: &[] },
        DecorationChoice { kind: DecorationKind::Hologram, band: 0.8, colors: &[] },
        DecorationChoice { kind: DecorationKind::Blimp, band: 1.0, colors: &[] },
    ],
    icons: EffectIcons {
        boost: "⚡",
        penalty: "👾",
        freeze: "⛔",
        shortcut: "📡",
        story: "✨",
        plane: "✈️",
    },
    voice: VoiceParams { lead: Waveform::Square, tempo_bpm: 132 },
};

static CANDY: ThemeDefinition = ThemeDefinition {
    id: ThemeId::Candy,
    display_name: "Candy",
    zone_names: ["Gingerbread House", "Cookie Plains", "Choco Mtn", "Rainbow Road"],
    decorations: &[
        DecorationChoice {
            kind: DecorationKind::CandyCane,
            band: 0.3,
            colors: &["#ef4444", "#22c55e"],
        },
        DecorationChoice {
            kind: DecorationKind::Lollipop,
            band: 0.6,
            colors: &["#f472b6", "#facc15", "#60a5fa"],
        },
        DecorationChoice { kind: DecorationKind::Donut, band: 0.8, colors: &[] },
        DecorationChoice { kind: DecorationKind::IceCream, band: 1.0, colors: &[] },
    ],
    icons: EffectIcons {
        boost: "🍬",
        penalty: "🍫",
        freeze: "🍭",
        shortcut: "🌈",
        story: "✨",
        plane: "✈️",
    },
    voice: VoiceParams { lead: Waveform::Triangle, tempo_bpm: 120 },
};

static OCEAN: ThemeDefinition = ThemeDefinition {
    id: ThemeId::Ocean,
    display_name: "Ocean",
    zone_names: ["The Shallows", "Coral Reef", "Dark Trench", "Atlantis"],
    decorations: &[
        DecorationChoice {
            kind: DecorationKind::Coral,
            band: 0.3,
            colors: &["#f43f5e", "#a855f7", "#f97316"],
        },
        DecorationChoice { kind: DecorationKind::Bubble, band: 0.5, colors: &[] },
        DecorationChoice { kind: DecorationKind::Jellyfish, band: 0.8, colors: &[] },
        DecorationChoice { kind: DecorationKind::Submarine, band: 1.0, colors: &[] },
    ],
    icons: EffectIcons {
        boost: "🌊",
        penalty: "⚓",
        freeze: "🐙",
        shortcut: "🐢",
        story: "✨",
        plane: "✈️",
    },
    voice: VoiceParams { lead: Waveform::Sine, tempo_bpm: 96 },
};
