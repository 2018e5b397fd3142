use macroquad::prelude::*;
use macroquad::rand;

mod board;
mod config;
mod hud;
mod input;
mod render;
mod session;
mod ticker;

use board::RandomFood;
use config::Config;
use hud::Hud;
use input::KeyListener;
use render::Renderer;
use session::Session;

// sized for the default canvas; main resizes once the config is loaded
fn window_conf() -> Conf {
    let (w, h) = Hud::new(Config::default().canvas_size).window_size();
    Conf {
        window_title: "Snake Game".to_owned(),
        window_width: w as i32,
        window_height: h as i32,
        window_resizable: false,
        high_dpi: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("starting snake_canvas");

    let config = Config::load();
    let seed = config
        .seed
        .unwrap_or_else(|| (macroquad::miniquad::date::now() * 1_000_000.0) as u64);
    rand::srand(seed);
    log::info!(
        "{}x{} grid, {}px canvas, {}ms tick, seed {}",
        config.grid_size,
        config.grid_size,
        config.canvas_size,
        config.tick_ms,
        seed
    );

    let hud = Hud::new(config.canvas_size);
    let (w, h) = hud.window_size();
    request_new_screen_size(w, h);
    prevent_quit();

    let mut session = Session::new(&config);
    let mut food = RandomFood;

    let renderer = Renderer::new(config.cell_size());
    let mut surface = Renderer::blank_surface(config.canvas_size);
    renderer.draw(session.board(), Some(&mut surface));
    let canvas = Texture2D::from_image(&surface);
    canvas.set_filter(FilterMode::Nearest);
    let mut drawn = session.revision();

    let mut keys = KeyListener::mount();

    loop {
        if is_quit_requested() {
            break;
        }

        let now = get_time();
        for action in keys.poll() {
            session.dispatch(action, now, &mut food);
        }
        session.update(now, &mut food);

        if session.revision() != drawn {
            renderer.draw(session.board(), Some(&mut surface));
            canvas.update(&surface);
            drawn = session.revision();
        }

        if let Some(action) = hud.draw(&session, &canvas) {
            session.dispatch(action, get_time(), &mut food);
        }

        next_frame().await;
    }

    drop(keys);
    log::info!("exiting snake_canvas");
}
