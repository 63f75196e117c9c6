use serde::{Deserialize, Serialize};

/// Number of tiles on the standard board.
pub const TOTAL_TILES: usize = 120;

/// A cell on the isometric grid. Tile identity for collision purposes is the
/// grid coordinate, not the projected screen position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct GridPos {
    pub x: i32,
    pub y: i32,
}

pub const ISO_TILE_WIDTH: f32 = 120.0;
pub const ISO_TILE_HEIGHT: f32 = 60.0;

impl GridPos {
    /// Fixed isometric projection to world coordinates.
    pub fn world(self) -> (f32, f32) {
        (
            (self.x - self.y) as f32 * ISO_TILE_WIDTH,
            (self.x + self.y) as f32 * ISO_TILE_HEIGHT,
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TileKind {
    Normal,
    Boost,
    Penalty,
    Freeze,
    Story,
    Shortcut,
    Plane,
}

impl TileKind {
    /// Special tiles are everything that carries an effect. Story tiles only
    /// narrate, so they count as non-special for chaining rules.
    pub fn is_special(self) -> bool {
        !matches!(self, Self::Normal | Self::Story)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    Playing,
    GameOver,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AvatarKind {
    Panda,
    Dolphin,
    Fox,
    Cat,
    Bear,
    Rabbit,
}

impl AvatarKind {
    pub const ALL: [Self; 6] =
        [Self::Panda, Self::Dolphin, Self::Fox, Self::Cat, Self::Bear, Self::Rabbit];

    pub fn display_name(self) -> &'static str {
        match self {
            Self::Panda => "Panda",
            Self::Dolphin => "Dolphin",
            Self::Fox => "Fox",
            Self::Cat => "Cat",
            Self::Bear => "Bear",
            Self::Rabbit => "Rabbit",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ThemeId {
    Interstellar,
    Cyberpunk,
    Candy,
    Ocean,
}

impl ThemeId {
    pub const ALL: [Self; 4] = [Self::Interstellar, Self::Cyberpunk, Self::Candy, Self::Ocean];

    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "interstellar" => Some(Self::Interstellar),
            "cyberpunk" => Some(Self::Cyberpunk),
            "candy" => Some(Self::Candy),
            "ocean" => Some(Self::Ocean),
            _ => None,
        }
    }
}

/// Cosmetic object subtype, drawn from the active theme's palette.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DecorationKind {
    // Interstellar
    Rocket,
    Planet,
    Ufo,
    Satellite,
    Star,
    // Cyberpunk
    NeonSign,
    Skyscraper,
    Hologram,
    Blimp,
    // Candy
    CandyCane,
    Lollipop,
    Donut,
    IceCream,
    // Ocean
    Coral,
    Bubble,
    Jellyfish,
    Submarine,
}

/// Fire-and-forget notifications for the sound sink. The engine never waits
/// on these; the shell drains them once per frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SoundEvent {
    Roll,
    Step,
    Boost,
    Penalty,
    Freeze,
    Plane,
    Win,
    BgmStart(ThemeId),
    BgmStop,
}
