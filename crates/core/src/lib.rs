pub mod flavor;
pub mod game;
pub mod mapgen;
pub mod state;
pub mod theme;
pub mod types;

mod rng;

pub use game::{EffectOutcome, Game, resolve_effect};
pub use mapgen::{Board, BoardError, BoardGenerator, Decoration, Tile, generate_board};
pub use state::{FlightAnimation, GameState, Player, PlayerSetup, default_roster};
pub use theme::{ThemeDefinition, theme_definition};
pub use types::*;
