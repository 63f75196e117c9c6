//! Pure text builders for the HUD panels.

use core::{Game, GamePhase, SoundEvent, theme_definition};

/// Header line: round number, active player, and the zone they stand in.
pub fn status_line(game: &Game) -> String {
    if game.phase() == GamePhase::GameOver {
        let winner = game
            .state()
            .players
            .iter()
            .find(|player| player.finished)
            .map_or("Somebody", |player| player.name.as_str());
        return format!("🏆 {winner} wins! Space starts a new trip.");
    }
    let active = game.state().active_player();
    let zone = game.board().tile(active.position).zone;
    format!("Turn {} • {} • {}", game.state().turn_count, active.name, zone)
}

pub fn dice_line(game: &Game) -> String {
    if game.flight().is_some() {
        return "✈️ In flight...".to_string();
    }
    if game.state().is_moving {
        return "...".to_string();
    }
    match game.last_roll() {
        Some(roll) => format!("Rolled {roll}. Space rolls again."),
        None => "Press Space to roll.".to_string(),
    }
}

/// Newest-first slice of the adventure log for the side panel.
pub fn log_lines(game: &Game, max_lines: usize) -> Vec<String> {
    game.state().history.iter().rev().take(max_lines).cloned().collect()
}

/// A sound event rendered as a caption; this shell shows the notification
/// instead of synthesizing it.
pub fn sound_caption(event: SoundEvent) -> String {
    match event {
        SoundEvent::Roll => "♪ dice rattle".to_string(),
        SoundEvent::Step => "♪ hop".to_string(),
        SoundEvent::Boost => "♪ zoom!".to_string(),
        SoundEvent::Penalty => "♪ womp".to_string(),
        SoundEvent::Freeze => "♪ lullaby".to_string(),
        SoundEvent::Plane => "♪ jet engines".to_string(),
        SoundEvent::Win => "♪ fanfare".to_string(),
        SoundEvent::BgmStart(theme) => {
            format!("♫ {} tune", theme_definition(theme).display_name)
        }
        SoundEvent::BgmStop => "♫ (quiet)".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use core::{Game, ThemeId, default_roster};

    use super::*;

    #[test]
    fn status_line_names_the_active_player_and_zone() {
        let game = Game::new(5, ThemeId::Candy, &default_roster(2));
        let line = status_line(&game);
        assert!(line.starts_with("Turn 1"));
        assert!(line.contains("Panda"), "first default player leads: {line}");
        assert!(line.contains("Gingerbread House"), "everyone starts in the start zone: {line}");
    }

    #[test]
    fn dice_line_prompts_before_any_roll() {
        let game = Game::new(5, ThemeId::Ocean, &default_roster(2));
        assert_eq!(dice_line(&game), "Press Space to roll.");
    }

    #[test]
    fn log_lines_are_newest_first() {
        let game = Game::new(5, ThemeId::Ocean, &default_roster(3));
        let lines = log_lines(&game, 10);
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("3-Player"));
    }

    #[test]
    fn bgm_caption_names_the_theme() {
        assert_eq!(sound_caption(SoundEvent::BgmStart(ThemeId::Cyberpunk)), "♫ Cyberpunk tune");
    }
}
