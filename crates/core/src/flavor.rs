//! Narrative lines for the adventure log. Pure lookups parameterized by
//! effect kind, avatar, and player name; the caller supplies the RNG so
//! line selection stays deterministic under a seed.

use rand_chacha::ChaCha8Rng;

use crate::rng;
use crate::types::{AvatarKind, TileKind};

pub fn welcome_line(player_count: usize) -> String {
    format!("Welcome to PolyTrip! {player_count}-Player Mode.")
}

/// Roll-and-landing summary. Tile ids are displayed 1-based.
pub fn landing_line(name: &str, roll: u8, landing_tile: usize) -> String {
    format!("{name} rolled {roll}. Landed on {}.", landing_tile + 1)
}

pub fn freeze_skip_line(name: &str) -> String {
    format!("❄️ {name} is asleep. Turn skipped.")
}

pub fn story_line(position: usize, last_tile: usize, zone_name: &str) -> String {
    let story = if position == 0 {
        "The adventure begins!".to_string()
    } else if position == last_tile {
        "The Grand Finale!".to_string()
    } else {
        format!("Entering the magical {zone_name}...")
    };
    format!("✨ {story}")
}

pub fn win_line(name: &str) -> String {
    format!("🏆 {name} WINS!")
}

/// One line for a resolved tile effect. `Normal` and `Story` arrivals have
/// no effect line; story narration goes through [`story_line`] instead.
pub fn effect_line(
    kind: TileKind,
    avatar: AvatarKind,
    name: &str,
    rng: &mut ChaCha8Rng,
) -> Option<String> {
    let a = avatar.display_name();
    let line = match kind {
        TileKind::Boost => match rng::range_usize(rng, 0, 4) {
            0 => format!("🚀 ZOOM! {name} found a rocket booster!"),
            1 => format!("💨 {name} the {a} caught a super tailwind!"),
            2 => format!("🏎️ {name} found a secret shortcut!"),
            3 => format!("✨ Sparkles make {name}'s car go fast!"),
            _ => format!("🛹 {name} did a cool trick and sped up!"),
        },
        TileKind::Penalty => match rng::range_usize(rng, 0, 4) {
            0 => format!("🍌 Oh no! {name} slipped on a banana peel!"),
            1 => format!("🛑 {name} got stuck at a red light!"),
            2 => format!("🐢 {name} stopped to watch a turtle cross!"),
            3 => format!("🗺️ {name} held the map upside down!"),
            _ => format!("🔧 {name}'s race car got a flat tire!"),
        },
        TileKind::Freeze => match rng::range_usize(rng, 0, 4) {
            0 => format!("💤 {name} decided to take a nap!"),
            1 => format!("❄️ Brrr! {name} is frozen solid!"),
            2 => format!("🍦 {name} stopped for ice cream!"),
            3 => format!("🧸 {name} is hugging a teddy bear. Skipped turn."),
            _ => format!("🦋 {name} got distracted by a butterfly!"),
        },
        TileKind::Shortcut => match rng::range_usize(rng, 0, 4) {
            0 => format!("🪜 {name} climbed a magic ladder!"),
            1 => format!("🌈 {name} rode a rainbow across the sky!"),
            2 => format!("🦅 A giant eagle carried {name} forward!"),
            3 => format!("🚇 {name} found a secret tunnel!"),
            _ => format!("🎈 {name} floated up in a hot air balloon!"),
        },
        TileKind::Plane => match rng::range_usize(rng, 0, 3) {
            0 => format!("✈️ FIRST CLASS! {name} is flying high!"),
            1 => format!("🛫 {name} boarded a jet! See ya later!"),
            2 => format!("☁️ Up in the clouds! {name} skips traffic!"),
            _ => format!("🕶️ {name} put on sunglasses and flew away!"),
        },
        TileKind::Normal | TileKind::Story => return None,
    };
    Some(line)
}
