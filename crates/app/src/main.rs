use app::app_loop::AppState;
use app::window_config::build_window_conf;
use app::{options, ui_render};
use core::{Game, default_roster};
use macroquad::prelude::*;

#[macroquad::main(build_window_conf)]
async fn main() {
    let args: Vec<String> = std::env::args().collect();
    let resolved = options::resolve_options_from_args(&args, options::generate_runtime_seed());
    let options = match resolved {
        Ok(options) => options,
        Err(message) => {
            eprintln!("{message}");
            std::process::exit(2);
        }
    };

    let mut game = Game::new(
        options.seed.value(),
        options.theme,
        &default_roster(options.players),
    );
    let mut app_state = AppState::new();

    loop {
        let keys = pressed_keys();
        let elapsed_ms = (get_frame_time() * 1000.0) as u64;
        app_state.tick(&mut game, &keys, elapsed_ms);
        ui_render::draw_frame(&game, &app_state);
        next_frame().await
    }
}

fn pressed_keys() -> Vec<KeyCode> {
    [KeyCode::Space, KeyCode::M, KeyCode::N]
        .into_iter()
        .filter(|key| is_key_pressed(*key))
        .collect()
}
