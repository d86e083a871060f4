use anyhow::Result;
use log::{info, warn};
use std::path::PathBuf;
use std::time::Instant;
use winit::{
    event::{Event, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    window::WindowBuilder,
};

mod engine;
mod game;

use engine::game_loop::FrameLoop;
use engine::input::{EdgeTriggerMapper, GamepadReader, HostInput, MapperConfig, PluginParameters};
use game::CommonEventQueue;

/// Parameter file used when `SHOULDER_EVENTS_CONFIG` is not set
const DEFAULT_CONFIG_PATH: &str = "shoulder_events.toml";

/// Read plugin parameters, falling back to defaults on any problem
fn load_parameters() -> PluginParameters {
    let path = std::env::var_os("SHOULDER_EVENTS_CONFIG")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));

    if !path.exists() {
        info!("No parameter file at {}, using defaults", path.display());
        return PluginParameters::new();
    }

    match PluginParameters::load(&path) {
        Ok(params) => {
            info!("Loaded {} parameter(s) from {}", params.len(), path.display());
            params
        }
        Err(e) => {
            warn!("{} ({}), using defaults", e, path.display());
            PluginParameters::new()
        }
    }
}

fn main() -> Result<()> {
    // Initialize logger
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    info!("Starting Shoulder Events...");

    let config = MapperConfig::from_parameters(&load_parameters());
    let mut mapper =
        EdgeTriggerMapper::configure(&config, HostInput::new(), CommonEventQueue::new());
    let mut gamepad = GamepadReader::new();
    let mut frame_loop = FrameLoop::new();

    // Keyboard input needs a focused window
    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title("Shoulder Events")
        .with_inner_size(winit::dpi::LogicalSize::new(640, 360))
        .with_resizable(false)
        .build(&event_loop)?;

    info!("Window created, press A/W/S/D or the gamepad shoulder buttons");

    event_loop.run(move |event, elwt| {
        match event {
            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                ..
            } => {
                info!("Close requested, shutting down...");
                elwt.exit();
            }
            Event::WindowEvent {
                event: WindowEvent::Focused(focused),
                ..
            } => {
                if focused {
                    frame_loop.resume();
                } else {
                    mapper.input_mut().keyboard.reset();
                    frame_loop.pause();
                }
            }
            Event::WindowEvent {
                event: WindowEvent::KeyboardInput { event, .. },
                ..
            } => {
                mapper.input_mut().keyboard.process_keyboard_event(&event);
                if mapper.input().keyboard.is_triggered("escape") {
                    info!("Escape pressed, shutting down...");
                    elwt.exit();
                }
            }
            Event::AboutToWait => {
                for _ in 0..frame_loop.begin_frame() {
                    mapper.input_mut().refresh_gamepad(gamepad.poll());
                    mapper.sample();
                    mapper.input_mut().end_frame();

                    mapper.scheduler_mut().run_pending(|action| {
                        info!("Common event {} executed", action);
                    });
                }

                window.request_redraw();
                elwt.set_control_flow(ControlFlow::WaitUntil(
                    Instant::now() + frame_loop.until_next_step(),
                ));
            }
            _ => {}
        }
    }).map_err(|e| anyhow::anyhow!("Event loop error: {}", e))?;

    Ok(())
}
