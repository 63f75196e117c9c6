//! Command-line options and runtime seed generation for the desktop shell.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use core::ThemeId;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeedChoice {
    Cli(u64),
    Generated(u64),
}

impl SeedChoice {
    pub fn value(self) -> u64 {
        match self {
            Self::Cli(seed) | Self::Generated(seed) => seed,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AppOptions {
    pub seed: SeedChoice,
    pub theme: ThemeId,
    pub players: usize,
}

static GENERATED_SEED_COUNTER: AtomicU64 = AtomicU64::new(0);

pub fn generate_runtime_seed() -> u64 {
    let now_nanos =
        SystemTime::now().duration_since(UNIX_EPOCH).map_or(0_u128, |duration| duration.as_nanos());
    let pid = u64::from(std::process::id());
    let counter = GENERATED_SEED_COUNTER.fetch_add(1, Ordering::Relaxed);

    let entropy = (now_nanos as u64)
        ^ ((now_nanos >> 64) as u64)
        ^ pid.rotate_left(17)
        ^ counter.rotate_left(7);

    mix_seed(entropy)
}

pub fn resolve_options_from_args(
    args: &[String],
    generated_seed: u64,
) -> Result<AppOptions, String> {
    let mut selected_seed = None;
    let mut selected_theme = None;
    let mut selected_players = None;
    let mut index = 1usize;

    while index < args.len() {
        let argument = args[index].as_str();

        if let Some(value) = flag_value(args, &mut index, argument, "--seed")? {
            if selected_seed.is_some() {
                return Err("seed provided more than once".to_string());
            }
            selected_seed = Some(parse_seed_value(&value)?);
            continue;
        }
        if let Some(value) = flag_value(args, &mut index, argument, "--theme")? {
            if selected_theme.is_some() {
                return Err("theme provided more than once".to_string());
            }
            selected_theme = Some(parse_theme_value(&value)?);
            continue;
        }
        if let Some(value) = flag_value(args, &mut index, argument, "--players")? {
            if selected_players.is_some() {
                return Err("players provided more than once".to_string());
            }
            selected_players = Some(parse_players_value(&value)?);
            continue;
        }
        index += 1;
    }

    Ok(AppOptions {
        seed: match selected_seed {
            Some(seed) => SeedChoice::Cli(seed),
            None => SeedChoice::Generated(generated_seed),
        },
        theme: selected_theme.unwrap_or(ThemeId::Interstellar),
        players: selected_players.unwrap_or(2),
    })
}

/// Accepts both `--flag value` and `--flag=value` spellings, advancing the
/// caller's cursor past whatever it consumed.
fn flag_value(
    args: &[String],
    index: &mut usize,
    argument: &str,
    flag: &str,
) -> Result<Option<String>, String> {
    if argument == flag {
        let Some(value) = args.get(*index + 1) else {
            return Err(format!("missing value for {flag}"));
        };
        *index += 2;
        return Ok(Some(value.clone()));
    }
    if let Some(value) = argument.strip_prefix(flag)
        && let Some(value) = value.strip_prefix('=')
    {
        *index += 1;
        return Ok(Some(value.to_string()));
    }
    Ok(None)
}

fn parse_seed_value(raw_value: &str) -> Result<u64, String> {
    raw_value.parse::<u64>().map_err(|_| format!("seed value '{raw_value}' must be a number"))
}

fn parse_theme_value(raw_value: &str) -> Result<ThemeId, String> {
    ThemeId::from_name(raw_value)
        .ok_or_else(|| format!("unknown theme '{raw_value}' (interstellar, cyberpunk, candy, ocean)"))
}

fn parse_players_value(raw_value: &str) -> Result<usize, String> {
    let players = raw_value
        .parse::<usize>()
        .map_err(|_| format!("player count '{raw_value}' must be a number"))?;
    if !(1..=4).contains(&players) {
        return Err(format!("player count must be between 1 and 4, got {players}"));
    }
    Ok(players)
}

fn mix_seed(mut value: u64) -> u64 {
    value ^= value >> 30;
    value = value.wrapping_mul(0xBF58_476D_1CE4_E5B9);
    value ^= value >> 27;
    value = value.wrapping_mul(0x94D0_49BB_1331_11EB);
    value ^ (value >> 31)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn as_args(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|part| part.to_string()).collect()
    }

    #[test]
    fn defaults_apply_when_no_flags_are_given() {
        let options = resolve_options_from_args(&as_args(&["game"]), 9_876_543)
            .expect("bare invocation should resolve");
        assert_eq!(options.seed, SeedChoice::Generated(9_876_543));
        assert_eq!(options.theme, ThemeId::Interstellar);
        assert_eq!(options.players, 2);
    }

    #[test]
    fn parses_flags_with_separate_and_inline_values() {
        let options = resolve_options_from_args(
            &as_args(&["game", "--seed", "4242", "--theme=candy", "--players", "4"]),
            1,
        )
        .expect("valid flags should parse");
        assert_eq!(options.seed, SeedChoice::Cli(4_242));
        assert_eq!(options.theme, ThemeId::Candy);
        assert_eq!(options.players, 4);
    }

    #[test]
    fn theme_names_are_case_insensitive() {
        let options = resolve_options_from_args(&as_args(&["game", "--theme", "OCEAN"]), 1)
            .expect("uppercase theme should parse");
        assert_eq!(options.theme, ThemeId::Ocean);
    }

    #[test]
    fn errors_when_a_flag_has_no_value() {
        let err = resolve_options_from_args(&as_args(&["game", "--seed"]), 1)
            .expect_err("missing seed value should error");
        assert!(err.contains("missing"), "error should explain missing value: {err}");
    }

    #[test]
    fn errors_when_seed_value_is_not_a_number() {
        let err = resolve_options_from_args(&as_args(&["game", "--seed=abc"]), 1)
            .expect_err("non-numeric seed value should error");
        assert!(err.contains("number"), "error should explain numeric requirement: {err}");
    }

    #[test]
    fn errors_when_seed_is_provided_more_than_once() {
        let err = resolve_options_from_args(&as_args(&["game", "--seed=1", "--seed", "2"]), 1)
            .expect_err("duplicate seed flags should be rejected");
        assert!(err.contains("more than once"), "error should explain duplicate seed: {err}");
    }

    #[test]
    fn errors_on_unknown_theme_and_out_of_range_players() {
        let err = resolve_options_from_args(&as_args(&["game", "--theme", "volcano"]), 1)
            .expect_err("unknown theme should be rejected");
        assert!(err.contains("unknown theme"), "{err}");

        let err = resolve_options_from_args(&as_args(&["game", "--players=9"]), 1)
            .expect_err("player count outside 1-4 should be rejected");
        assert!(err.contains("between 1 and 4"), "{err}");
    }

    #[test]
    fn generated_seed_changes_between_calls() {
        let first = generate_runtime_seed();
        let second = generate_runtime_seed();
        assert_ne!(first, second, "runtime seed generation should vary per call");
    }
}
