//! Roll acceptance: the re-entrancy latch, freeze consumption, the
//! reserved-name cheat, and turn rotation.

use crate::game::test_support::*;
use crate::game::{FREEZE_SKIP_DELAY_MS, STEP_INTERVAL_MS};
use crate::types::SoundEvent;

#[test]
fn second_roll_request_before_any_timer_fires_is_ignored() {
    let mut game = game_on(plain_board(30), &["Ada", "Ben"]);
    force_rolls(&mut game, &[3, 6]);

    game.request_roll();
    game.request_roll();
    settle_turn(&mut game);

    assert_eq!(game.state().players[0].position, 3, "exactly one roll may be processed");
    assert_eq!(game.state().players[1].position, 0);
    let landings =
        game.state().history.iter().filter(|line| line.contains("rolled")).count();
    assert_eq!(landings, 1);

    // The latch released with the turn advance; the next player's roll (the
    // second forced value, still queued) goes through normally.
    assert_eq!(game.state().active_player_index, 1);
    game.request_roll();
    settle_turn(&mut game);
    assert_eq!(game.state().players[1].position, 6);
}

#[test]
fn frozen_player_skips_the_turn_without_moving() {
    let mut game = game_on(plain_board(30), &["Ada", "Ben"]);
    game.state.players[0].frozen = true;
    game.drain_sounds();

    game.request_roll();
    assert!(!game.state().players[0].frozen, "the freeze is consumed by the request");
    assert_eq!(game.state().players[0].position, 0);
    assert!(!game.state().is_moving);
    assert!(game.state().history.last().expect("skip line").contains("asleep"));
    assert!(game.drain_sounds().is_empty(), "no die is rolled on a skipped turn");

    game.tick(FREEZE_SKIP_DELAY_MS - 100);
    assert_eq!(game.state().active_player_index, 0, "skip delay has not elapsed yet");
    game.tick(200);
    assert_eq!(game.state().active_player_index, 1);
    assert_eq!(game.state().turn_count, 1);
}

#[test]
fn reserved_name_cheat_raises_the_average_roll() {
    // max(d6, d6) has mean ~4.47 against 3.5 for a single d6.
    let mut cheater = game_on(plain_board(10), &["yoyo"]);
    let mut honest = game_on(plain_board(10), &["Panda"]);

    let cheat_total: u32 = (0..1_000).map(|_| u32::from(cheater.draw_roll())).sum();
    let honest_total: u32 = (0..1_000).map(|_| u32::from(honest.draw_roll())).sum();
    let cheat_mean = cheat_total as f64 / 1_000.0;
    let honest_mean = honest_total as f64 / 1_000.0;

    assert!(cheat_mean > honest_mean);
    assert!(cheat_mean > 4.2, "got {cheat_mean}");
    assert!((3.2..3.8).contains(&honest_mean), "got {honest_mean}");
}

#[test]
fn cheat_trigger_is_case_insensitive_but_not_a_substring_match() {
    let mut mixed_case = game_on(plain_board(10), &["YoYo"]);
    let mixed_total: u32 = (0..1_000).map(|_| u32::from(mixed_case.draw_roll())).sum();
    assert!(mixed_total as f64 / 1_000.0 > 4.2);

    let mut near_miss = game_on(plain_board(10), &["yoyoyo"]);
    let near_total: u32 = (0..1_000).map(|_| u32::from(near_miss.draw_roll())).sum();
    assert!((near_total as f64 / 1_000.0) < 3.8);
}

#[test]
fn turn_count_increments_exactly_when_rotation_wraps() {
    let mut game = game_on(plain_board(30), &["Ada", "Ben"]);
    force_rolls(&mut game, &[1, 1]);

    game.request_roll();
    settle_turn(&mut game);
    assert_eq!(game.state().active_player_index, 1);
    assert_eq!(game.state().turn_count, 1, "mid-round advance must not count a round");

    game.request_roll();
    settle_turn(&mut game);
    assert_eq!(game.state().active_player_index, 0);
    assert_eq!(game.state().turn_count, 2);
}

#[test]
fn a_roll_emits_one_roll_sound_and_one_step_sound_per_tile() {
    let mut game = game_on(plain_board(30), &["Ada"]);
    force_rolls(&mut game, &[4]);
    game.drain_sounds();

    game.request_roll();
    assert_eq!(game.drain_sounds(), vec![SoundEvent::Roll]);

    for _ in 0..4 {
        game.tick(STEP_INTERVAL_MS);
    }
    let steps =
        game.drain_sounds().iter().filter(|event| **event == SoundEvent::Step).count();
    assert_eq!(steps, 4);
}
