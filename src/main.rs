use std::process::ExitCode;
use std::time::Duration;

use macroquad::prelude::*;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use life_sim::{Session, SimulationConfig, input, rendering, ui::Layout};

fn window_conf(layout: &Layout) -> Conf {
    let (width, height) = layout.window_size();
    Conf {
        window_title: "Game of Life Simulation".to_owned(),
        window_width: width.ceil() as i32,
        window_height: height.ceil() as i32,
        window_resizable: false,
        ..Default::default()
    }
}

async fn run(mut session: Session, layout: Layout) {
    let buttons = layout.buttons();

    loop {
        let commands = input::collect_commands(&layout, &buttons, session.controller().phase());
        for command in commands {
            session.handle(command);
        }

        session.update(Duration::try_from_secs_f32(get_frame_time()).unwrap_or_default());

        clear_background(BLACK);
        rendering::draw_world(&session, &layout);
        rendering::draw_panel(&session, &layout, &buttons, mouse_position());

        next_frame().await;
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    let config = match SimulationConfig::load() {
        Ok(config) => config,
        Err(err) => {
            error!(error = %err, "could not load configuration");
            return ExitCode::FAILURE;
        }
    };
    info!(
        width = config.world.width,
        height = config.world.height,
        margin = config.world.margin,
        tick_interval_ms = config.timing.tick_interval_ms,
        "configuration loaded"
    );

    let session = Session::new(&config);
    let layout = Layout::from_config(&config, rendering::legend_lines(&session).len());
    macroquad::Window::from_config(window_conf(&layout), run(session, layout));
    ExitCode::SUCCESS
}
