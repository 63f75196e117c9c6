//! Arrival resolution: effect application order, clamping, win detection,
//! and the adventure-log ordering guarantees.

use crate::game::test_support::*;
use crate::game::STEP_INTERVAL_MS;
use crate::types::{GamePhase, TileKind};

#[test]
fn normal_landing_moves_the_player_and_passes_the_turn() {
    let mut game = game_on(plain_board(10), &["Ada", "Ben"]);
    force_rolls(&mut game, &[3]);

    game.request_roll();
    settle_turn(&mut game);

    assert_eq!(game.state().players[0].position, 3);
    assert_eq!(game.state().active_player_index, 1);
    assert_eq!(game.state().turn_count, 1);
    // Welcome line plus one landing summary; a plain tile adds nothing else.
    assert_eq!(game.state().history.len(), 2);
    assert!(game.state().history[1].contains("rolled 3"));
}

#[test]
fn boost_applies_after_stepping_and_its_line_precedes_any_story() {
    let mut game = game_on(board_with(10, &[(5, TileKind::Boost, None)]), &["Ada", "Ben"]);
    force_rolls(&mut game, &[5]);

    game.request_roll();
    settle_turn(&mut game);

    assert_eq!(game.state().players[0].position, 8, "landed on 5, boosted to 8");
    let history = &game.state().history;
    assert_eq!(history.len(), 3);
    assert!(history[1].contains("rolled 5"), "summary first");
    assert!(history[2].contains("Ada"), "boost flavor second");
    assert!(!history[2].contains("rolled"));
}

#[test]
fn penalty_moves_back_only_after_forward_stepping_completes() {
    let mut game = game_on(board_with(20, &[(4, TileKind::Penalty, None)]), &["Ada"]);
    force_rolls(&mut game, &[4]);
    game.request_roll();

    let mut observed = Vec::new();
    for _ in 0..3 {
        game.tick(STEP_INTERVAL_MS);
        observed.push(game.state().players[0].position);
    }
    assert_eq!(observed, vec![1, 2, 3], "intermediate steps are strictly forward");

    // The fourth step lands on the penalty tile and the backward jump
    // resolves within the same tick.
    game.tick(STEP_INTERVAL_MS);
    assert_eq!(game.state().players[0].position, 1);
    assert!(game.state().history.iter().any(|line| line.contains("Ada")));
}

#[test]
fn shortcut_teleports_without_retriggering_the_target_tile() {
    let board = board_with(
        30,
        &[(4, TileKind::Shortcut, Some(9)), (9, TileKind::Boost, None)],
    );
    let mut game = game_on(board, &["Ada", "Ben"]);
    force_rolls(&mut game, &[4]);

    game.request_roll();
    settle_turn(&mut game);

    assert_eq!(
        game.state().players[0].position,
        9,
        "the landing tile's effect fires once; the destination's does not"
    );
    assert_eq!(game.state().history.len(), 3, "welcome, summary, shortcut flavor");
}

#[test]
fn shortcut_without_a_target_falls_back_to_no_movement() {
    let mut game = game_on(board_with(30, &[(4, TileKind::Shortcut, None)]), &["Ada", "Ben"]);
    force_rolls(&mut game, &[4]);

    game.request_roll();
    settle_turn(&mut game);

    assert_eq!(game.state().players[0].position, 4);
    assert_eq!(game.state().history.len(), 2, "no effect line for a degraded shortcut");
    assert_eq!(game.state().active_player_index, 1, "the turn still advances");
}

#[test]
fn exact_landing_on_the_final_tile_ends_the_game() {
    let mut game = game_on(plain_board(10), &["Ada", "Ben"]);
    game.state.players[0].position = 5;
    force_rolls(&mut game, &[6]);

    game.request_roll();
    settle_turn(&mut game);

    assert_eq!(game.phase(), GamePhase::GameOver);
    assert_eq!(game.state().players[0].position, 9, "stepping clamps at the final tile");
    assert!(game.state().players[0].finished);
    assert_eq!(game.state().active_player_index, 0, "no turn advance after a win");
    assert_eq!(game.state().turn_count, 1);

    let history = &game.state().history;
    assert!(history[history.len() - 2].contains("Finale"), "story line before the win line");
    assert!(history[history.len() - 1].contains("WINS"));

    // The game is over; further requests are silent no-ops.
    force_rolls(&mut game, &[3]);
    game.request_roll();
    settle_turn(&mut game);
    assert_eq!(game.state().players[1].position, 0);
}

#[test]
fn boost_clamped_onto_the_final_tile_also_wins() {
    let mut game = game_on(board_with(10, &[(8, TileKind::Boost, None)]), &["Ada", "Ben"]);
    game.state.players[0].position = 5;
    force_rolls(&mut game, &[3]);

    game.request_roll();
    settle_turn(&mut game);

    assert_eq!(game.phase(), GamePhase::GameOver);
    assert_eq!(game.state().players[0].position, 9);
    assert!(game.state().history.last().expect("win line").contains("WINS"));
}

#[test]
fn story_boundary_landing_narrates_the_zone() {
    let mut game = game_on(board_with(12, &[(4, TileKind::Story, None)]), &["Ada", "Ben"]);
    force_rolls(&mut game, &[4]);

    game.request_roll();
    settle_turn(&mut game);

    let history = &game.state().history;
    assert_eq!(history.len(), 3);
    assert!(
        history[2].contains("Asteroid Belt"),
        "mid-route story names the zone: {}",
        history[2]
    );
    assert_eq!(game.state().active_player_index, 1);
}
