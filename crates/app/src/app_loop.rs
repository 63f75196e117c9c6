//! Frame-level application state over the core turn engine.

use core::{Game, GamePhase};
use macroquad::prelude::KeyCode;

use crate::options::generate_runtime_seed;
use crate::ui_text::sound_caption;

const MAX_SOUND_CAPTIONS: usize = 6;

#[derive(Debug, PartialEq, Eq, Default)]
pub enum AppMode {
    #[default]
    Playing,
    GameOver,
}

#[derive(Default)]
pub struct AppState {
    pub mode: AppMode,
    pub muted: bool,
    /// Captions for recently drained sound events; this shell displays the
    /// notifications instead of synthesizing audio.
    pub sound_captions: Vec<String>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process input and advance the engine for one frame.
    pub fn tick(&mut self, game: &mut Game, keys_pressed: &[KeyCode], elapsed_ms: u64) {
        match self.mode {
            AppMode::Playing => {
                if keys_pressed.contains(&KeyCode::Space) {
                    game.request_roll();
                }
                if keys_pressed.contains(&KeyCode::M) {
                    self.muted = !self.muted;
                }
                if keys_pressed.contains(&KeyCode::N) {
                    self.restart(game);
                }
            }
            AppMode::GameOver => {
                if keys_pressed.contains(&KeyCode::Space) || keys_pressed.contains(&KeyCode::N) {
                    self.restart(game);
                }
            }
        }

        game.tick(elapsed_ms);

        for event in game.drain_sounds() {
            if !self.muted {
                self.push_caption(sound_caption(event));
            }
        }

        if game.phase() == GamePhase::GameOver {
            self.mode = AppMode::GameOver;
        }
    }

    fn restart(&mut self, game: &mut Game) {
        game.reset(generate_runtime_seed());
        self.mode = AppMode::Playing;
        self.sound_captions.clear();
    }

    fn push_caption(&mut self, caption: String) {
        self.sound_captions.push(caption);
        if self.sound_captions.len() > MAX_SOUND_CAPTIONS {
            self.sound_captions.remove(0);
        }
    }
}

#[cfg(test)]
mod tests {
    use core::{AvatarKind, Board, GridPos, PlayerSetup, ThemeId, Tile, TileKind};

    use super::*;

    /// Two tiles: any roll steps straight onto the finish.
    fn sprint_game() -> Game {
        let tiles = vec![
            Tile {
                id: 0,
                kind: TileKind::Story,
                grid: GridPos { x: 0, y: 0 },
                zone: "Earth Station",
                shortcut_target: None,
                decorations: Vec::new(),
            },
            Tile {
                id: 1,
                kind: TileKind::Story,
                grid: GridPos { x: 1, y: 0 },
                zone: "Earth Station",
                shortcut_target: None,
                decorations: Vec::new(),
            },
        ];
        let roster = vec![PlayerSetup {
            name: "Ada".to_string(),
            avatar: AvatarKind::Panda,
            color: "#f87171".to_string(),
        }];
        Game::with_board(3, Board { theme: ThemeId::Interstellar, tiles }, &roster)
    }

    #[test]
    fn space_requests_a_roll_and_a_win_enters_game_over() {
        let mut app = AppState::new();
        let mut game = sprint_game();

        app.tick(&mut game, &[KeyCode::Space], 0);
        assert!(game.state().is_moving, "the roll was accepted");

        for _ in 0..100 {
            app.tick(&mut game, &[], 100);
        }
        assert_eq!(app.mode, AppMode::GameOver);
        assert!(game.state().players[0].finished);
    }

    #[test]
    fn restart_from_game_over_returns_to_play() {
        let mut app = AppState::new();
        let mut game = sprint_game();
        app.tick(&mut game, &[KeyCode::Space], 0);
        for _ in 0..100 {
            app.tick(&mut game, &[], 100);
        }
        assert_eq!(app.mode, AppMode::GameOver);

        app.tick(&mut game, &[KeyCode::Space], 0);
        assert_eq!(app.mode, AppMode::Playing);
        assert_eq!(game.phase(), GamePhase::Playing);
        assert_eq!(game.state().players[0].position, 0);
        assert!(app.sound_captions.is_empty(), "captions reset with the game");
    }

    #[test]
    fn mute_suppresses_captions_without_touching_the_engine() {
        let mut app = AppState::new();
        let mut game = sprint_game();

        app.tick(&mut game, &[KeyCode::M], 0);
        assert!(app.muted);
        app.tick(&mut game, &[KeyCode::Space], 0);
        app.tick(&mut game, &[], 500);
        assert!(app.sound_captions.is_empty());
        assert!(game.state().players[0].position > 0, "movement is unaffected by mute");
    }
}
