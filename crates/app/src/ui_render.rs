//! Immediate-mode rendering of the board, players, and HUD panels.

use core::{Game, GridPos, ThemeId, TileKind, theme_definition};
use macroquad::prelude::*;

use crate::app_loop::AppState;
use crate::ui_text::{dice_line, log_lines, status_line};

const BOARD_SCALE: f32 = 0.35;
const TILE_RADIUS: f32 = 42.0;
const LOG_PANEL_WIDTH: f32 = 340.0;
const LOG_LINE_HEIGHT: f32 = 22.0;
const HUD_FONT_SIZE: f32 = 24.0;

pub fn draw_frame(game: &Game, app_state: &AppState) {
    clear_background(background_color(game.theme()));

    let camera = camera_target(game);
    draw_path(game, camera);
    draw_shortcut_arcs(game, camera);
    draw_decorations(game, camera);
    draw_tiles(game, camera);
    draw_players(game, camera);
    draw_flight_marker(game, camera);
    draw_hud(game, app_state);
}

/// Track the active player, or the midpoint of the flight while one runs.
fn camera_target(game: &Game) -> (f32, f32) {
    if let Some(flight) = game.flight() {
        let (sx, sy) = game.board().tile(flight.start_tile).grid.world();
        let (ex, ey) = game.board().tile(flight.end_tile).grid.world();
        return ((sx + ex) / 2.0, (sy + ey) / 2.0);
    }
    let active = game.state().active_player();
    game.board().tile(active.position).grid.world()
}

fn project(grid: GridPos, camera: (f32, f32)) -> (f32, f32) {
    let (wx, wy) = grid.world();
    (
        screen_width() / 2.0 + (wx - camera.0) * BOARD_SCALE,
        screen_height() / 2.0 + (wy - camera.1) * BOARD_SCALE,
    )
}

fn draw_path(game: &Game, camera: (f32, f32)) {
    let road = Color::new(1.0, 1.0, 1.0, 0.25);
    for pair in game.board().tiles.windows(2) {
        let (x1, y1) = project(pair[0].grid, camera);
        let (x2, y2) = project(pair[1].grid, camera);
        draw_line(x1, y1, x2, y2, TILE_RADIUS * BOARD_SCALE * 0.8, road);
    }
}

fn draw_shortcut_arcs(game: &Game, camera: (f32, f32)) {
    let arc = Color::new(0.9, 0.7, 1.0, 0.7);
    for tile in &game.board().tiles {
        let Some(target) = tile.shortcut_target else {
            continue;
        };
        let (x1, y1) = project(tile.grid, camera);
        let (x2, y2) = project(game.board().tile(target).grid, camera);
        draw_line(x1, y1, x2, y2, 3.0, arc);
    }
}

fn draw_decorations(game: &Game, camera: (f32, f32)) {
    for tile in &game.board().tiles {
        for decoration in &tile.decorations {
            let (x, y) = project(decoration.grid, camera);
            let color =
                decoration.color.map_or(Color::new(0.9, 0.9, 0.9, 0.8), parse_hex_color);
            draw_circle(x, y, 8.0 * decoration.scale, color);
        }
    }
}

fn draw_tiles(game: &Game, camera: (f32, f32)) {
    for tile in &game.board().tiles {
        let (x, y) = project(tile.grid, camera);
        let radius = TILE_RADIUS * BOARD_SCALE;
        draw_circle(x, y, radius, tile_color(game.theme(), tile.kind));
        draw_circle_lines(x, y, radius, 2.0, WHITE);
        if let Some(icon) = theme_definition(game.theme()).icons.for_kind(tile.kind) {
            draw_text(icon, x - radius / 2.0, y + radius / 3.0, radius * 1.4, WHITE);
        }
    }
}

fn draw_players(game: &Game, camera: (f32, f32)) {
    let flying_player = game.flight().map(|flight| flight.player_id);
    for player in &game.state().players {
        if flying_player == Some(player.id) {
            continue;
        }
        let tile = game.board().tile(player.position);
        let (x, y) = project(tile.grid, camera);
        let color = parse_hex_color(&player.color);
        draw_circle(x, y - 14.0, 10.0, color);
        draw_circle_lines(x, y - 14.0, 10.0, 2.0, WHITE);
        if player.id == game.state().active_player().id {
            draw_circle_lines(x, y, 16.0, 2.0, WHITE);
        }
        draw_text(&player.name, x - 16.0, y - 30.0, 16.0, WHITE);
    }
}

fn draw_flight_marker(game: &Game, camera: (f32, f32)) {
    let Some(flight) = game.flight() else {
        return;
    };
    let (sx, sy) = project(game.board().tile(flight.start_tile).grid, camera);
    let (ex, ey) = project(game.board().tile(flight.end_tile).grid, camera);
    draw_line(sx, sy, ex, ey, 2.0, YELLOW);
    draw_text("✈️", (sx + ex) / 2.0, (sy + ey) / 2.0 - 30.0, 32.0, WHITE);
}

fn draw_hud(game: &Game, app_state: &AppState) {
    draw_text(&status_line(game), 20.0, 32.0, HUD_FONT_SIZE, WHITE);
    draw_text(&dice_line(game), 20.0, 60.0, HUD_FONT_SIZE * 0.8, WHITE);

    let mute_label = if app_state.muted { "🔇 muted (M)" } else { "🔊 sound on (M)" };
    draw_text(mute_label, 20.0, screen_height() - 60.0, 16.0, WHITE);
    for (row, caption) in app_state.sound_captions.iter().rev().enumerate() {
        draw_text(caption, 20.0, screen_height() - 40.0 + row as f32 * -16.0, 14.0, GRAY);
    }

    let panel_x = screen_width() - LOG_PANEL_WIDTH;
    draw_rectangle(
        panel_x,
        0.0,
        LOG_PANEL_WIDTH,
        screen_height(),
        Color::new(0.0, 0.0, 0.0, 0.35),
    );
    draw_text("Adventure Log", panel_x + 16.0, 28.0, 18.0, WHITE);
    let max_lines = ((screen_height() - 60.0) / LOG_LINE_HEIGHT) as usize;
    for (row, line) in log_lines(game, max_lines).iter().enumerate() {
        draw_text(line, panel_x + 16.0, 56.0 + row as f32 * LOG_LINE_HEIGHT, 15.0, LIGHTGRAY);
    }
}

fn background_color(theme: ThemeId) -> Color {
    match theme {
        ThemeId::Interstellar => Color::new(0.04, 0.04, 0.16, 1.0),
        ThemeId::Cyberpunk => Color::new(0.12, 0.05, 0.25, 1.0),
        ThemeId::Candy => Color::new(0.99, 0.86, 0.93, 1.0),
        ThemeId::Ocean => Color::new(0.45, 0.75, 0.95, 1.0),
    }
}

fn tile_color(theme: ThemeId, kind: TileKind) -> Color {
    match kind {
        TileKind::Story => WHITE,
        TileKind::Shortcut => Color::new(0.85, 0.71, 1.0, 1.0),
        TileKind::Plane => Color::new(0.12, 0.16, 0.23, 1.0),
        TileKind::Boost => Color::new(0.5, 0.85, 0.5, 1.0),
        TileKind::Penalty => Color::new(0.95, 0.55, 0.45, 1.0),
        TileKind::Freeze => Color::new(0.65, 0.85, 1.0, 1.0),
        TileKind::Normal => match theme {
            ThemeId::Interstellar => Color::new(0.19, 0.18, 0.51, 1.0),
            ThemeId::Cyberpunk => Color::new(0.15, 0.15, 0.16, 1.0),
            ThemeId::Candy => Color::new(0.99, 0.83, 0.3, 1.0),
            ThemeId::Ocean => Color::new(0.4, 0.91, 0.98, 1.0),
        },
    }
}

/// Parse `#rrggbb` into a color; anything unparsable renders white.
fn parse_hex_color(value: &str) -> Color {
    let digits = value.strip_prefix('#').unwrap_or(value);
    if digits.len() != 6 {
        return WHITE;
    }
    let Ok(packed) = u32::from_str_radix(digits, 16) else {
        return WHITE;
    };
    Color::new(
        ((packed >> 16) & 0xFF) as f32 / 255.0,
        ((packed >> 8) & 0xFF) as f32 / 255.0,
        (packed & 0xFF) as f32 / 255.0,
        1.0,
    )
}
