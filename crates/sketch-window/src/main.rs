// File: crates/sketch-window/src/main.rs
// Summary: Windowed drawing pad + bar chart view; winit events drive sketch-core, frames blit via softbuffer.

mod app;

use anyhow::{Context as _, Result};
use app::{App, Command};
use sketch_core::{theme, BarChart};
use std::num::NonZeroU32;
use winit::event::{ElementState, Event, KeyboardInput, MouseButton, VirtualKeyCode, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Arg: theme name (light/dark)
    let theme = theme::find(&std::env::args().nth(1).unwrap_or_else(|| "light".to_string()));

    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title("Sketchpad")
        .with_inner_size(winit::dpi::LogicalSize::new(960.0, 600.0))
        .build(&event_loop)
        .context("build window")?;

    let context = unsafe { softbuffer::Context::new(&window) }
        .map_err(|e| anyhow::anyhow!("softbuffer context: {e:?}"))?;
    let mut surface = unsafe { softbuffer::Surface::new(&context, &window) }
        .map_err(|e| anyhow::anyhow!("softbuffer surface: {e:?}"))?;

    let size = window.inner_size();
    let mut app = App::new(theme, BarChart::monthly_sales(), (size.width, size.height), window.scale_factor())?;
    log::info!("C clear, S save drawing.png, 1-8 color, +/- width, Tab chart view");

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Wait;
        match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => {
                    *control_flow = ControlFlow::Exit;
                }
                WindowEvent::Resized(new_size) => {
                    app.set_viewport((new_size.width, new_size.height), window.scale_factor());
                    window.request_redraw();
                }
                WindowEvent::ScaleFactorChanged { scale_factor, new_inner_size } => {
                    app.set_viewport((new_inner_size.width, new_inner_size.height), scale_factor);
                    window.request_redraw();
                }
                WindowEvent::CursorMoved { position, .. } => {
                    app.cursor_moved(position.x, position.y);
                    window.request_redraw();
                }
                WindowEvent::CursorLeft { .. } => app.cursor_left(),
                WindowEvent::MouseInput { state, button: MouseButton::Left, .. } => {
                    match state {
                        ElementState::Pressed => app.pointer_pressed(),
                        ElementState::Released => app.pointer_released(),
                    }
                    window.request_redraw();
                }
                WindowEvent::Focused(false) => app.pointer_released(),
                WindowEvent::KeyboardInput {
                    input: KeyboardInput { state: ElementState::Pressed, virtual_keycode: Some(key), .. },
                    ..
                } => {
                    if let Some(cmd) = command_for(key) {
                        app.run(cmd);
                        window.request_redraw();
                    }
                }
                _ => {}
            },
            Event::RedrawRequested(_) => {
                let size = window.inner_size();
                let (Some(w), Some(h)) = (NonZeroU32::new(size.width), NonZeroU32::new(size.height)) else {
                    return;
                };
                if let Err(e) = surface.resize(w, h) {
                    log::error!("softbuffer resize: {e:?}");
                    return;
                }
                let mut frame = match surface.buffer_mut() {
                    Ok(f) => f,
                    Err(e) => {
                        log::error!("softbuffer frame: {e:?}");
                        return;
                    }
                };
                app.compose(&mut frame, size.width, size.height);
                if let Err(e) = frame.present() { log::error!("present error: {e:?}"); }
            }
            _ => {}
        }
    });
}

fn command_for(key: VirtualKeyCode) -> Option<Command> {
    use VirtualKeyCode::*;
    Some(match key {
        C => Command::Clear,
        S => Command::Save,
        Tab => Command::ToggleView,
        Key1 => Command::PickColor(0),
        Key2 => Command::PickColor(1),
        Key3 => Command::PickColor(2),
        Key4 => Command::PickColor(3),
        Key5 => Command::PickColor(4),
        Key6 => Command::PickColor(5),
        Key7 => Command::PickColor(6),
        Key8 => Command::PickColor(7),
        Plus | Equals | NumpadAdd => Command::Wider,
        Minus | NumpadSubtract => Command::Narrower,
        _ => return None,
    })
}
