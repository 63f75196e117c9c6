//! Integration check: the shell's mode machine follows the engine's phase.

use app::app_loop::{AppMode, AppState};
use core::{Game, ThemeId, default_roster};
use macroquad::input::KeyCode;

#[test]
fn full_standard_game_reaches_game_over_through_the_shell() {
    let mut app = AppState::new();
    let mut game = Game::new(77, ThemeId::Interstellar, &default_roster(2));

    // Hammer the roll key every frame; redundant presses while a turn is in
    // flight must stay harmless no-ops.
    let mut frames = 0_u32;
    while app.mode == AppMode::Playing && frames < 200_000 {
        app.tick(&mut game, &[KeyCode::Space], 100);
        frames += 1;
    }

    assert_eq!(app.mode, AppMode::GameOver);
    assert!(game.state().players.iter().any(|player| player.finished));
    assert!(
        game.state().history.last().expect("log ends with the win").contains("WINS"),
        "shell observed a finished game"
    );
}
