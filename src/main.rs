// src/main.rs
use log::info;
use nannou::prelude::*;

use screensavers::{
    config::Config,
    render::{screen_to_world, NannouTarget},
    services::FrameTimer,
    views::SaverManager,
};

struct Model {
    // Core components:
    savers: SaverManager,

    // Timing
    frame_timer: FrameTimer,

    // Debug overlay
    show_fps: bool,
}

fn main() {
    env_logger::init();
    nannou::app(model).update(update).run();
}

fn model(app: &App) -> Model {
    // Load config
    let config = Config::load().expect("Failed to load config file");

    // Create window
    app.new_window()
        .title(config.window.title.clone())
        .size(config.window.width, config.window.height)
        .resizable(false)
        .msaa_samples(4)
        .view(view)
        .build()
        .expect("Failed to create window");

    let savers = SaverManager::from_config(&config);
    info!(
        "Running {} savers in a {}x{} window, capped at {} fps",
        savers.len(),
        config.window.width,
        config.window.height,
        config.timing.max_framerate
    );

    Model {
        savers,
        frame_timer: FrameTimer::new(config.timing.max_framerate),
        show_fps: config.debug.show_fps,
    }
}

fn update(_app: &App, model: &mut Model, update: Update) {
    let delta_ms = model.frame_timer.tick_from(update.since_last);

    /*********************  Main update method for savers **********************/
    model.savers.update(delta_ms);
    /***************************************************************************/

    model.frame_timer.limit(delta_ms);
}

// Draw the state of Model into the given Frame
fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();
    draw.background().color(BLACK);

    let (width, height) = model.savers.screen_size();
    let mut target = NannouTarget::new(&draw, width, height);
    model.savers.draw(&mut target);

    if model.show_fps {
        draw.text(&format!("FPS: {:.1}", model.frame_timer.fps()))
            .xy(screen_to_world(vec2(50.0, 15.0), width, height))
            .color(RED);
    }

    draw.to_frame(app, &frame).expect("Failed to draw frame");
}
