use serde::Serialize;

use crate::types::AvatarKind;

/// Pre-game participant data collected by the setup screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayerSetup {
    pub name: String,
    pub avatar: AvatarKind,
    pub color: String,
}

pub const COLOR_OPTIONS: [&str; 6] =
    ["#f87171", "#38bdf8", "#fbbf24", "#a78bfa", "#4ade80", "#f472b6"];

/// The roster the setup screen starts from.
pub fn default_roster(player_count: usize) -> Vec<PlayerSetup> {
    (0..player_count)
        .map(|index| {
            let avatar = AvatarKind::ALL[index % AvatarKind::ALL.len()];
            PlayerSetup {
                name: avatar.display_name().to_string(),
                avatar,
                color: COLOR_OPTIONS[index % COLOR_OPTIONS.len()].to_string(),
            }
        })
        .collect()
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Player {
    pub id: u32,
    pub name: String,
    pub avatar: AvatarKind,
    pub color: String,
    pub position: usize,
    pub frozen: bool,
    pub finished: bool,
}

impl Player {
    pub fn from_setup(id: u32, setup: &PlayerSetup) -> Self {
        Self {
            id,
            name: setup.name.clone(),
            avatar: setup.avatar,
            color: setup.color.clone(),
            position: 0,
            frozen: false,
            finished: false,
        }
    }
}

/// Aggregate mutable game state. Only the turn engine writes to this;
/// collaborators read it between ticks.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GameState {
    pub players: Vec<Player>,
    pub active_player_index: usize,
    pub is_moving: bool,
    pub turn_count: u32,
    pub history: Vec<String>,
}

impl GameState {
    pub fn active_player(&self) -> &Player {
        &self.players[self.active_player_index]
    }
}

/// Transient teleport cutscene state. While present, the flying player's
/// board position stays at the departure tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct FlightAnimation {
    pub player_id: u32,
    pub start_tile: usize,
    pub end_tile: usize,
}
