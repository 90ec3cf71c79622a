//! Binary entry point: window bootstrap and event routing.
//!
//! The bootstrap builds a [`World`] against the window and renders once; the
//! UI overlay's rebuild button re-runs the same bootstrap against the same
//! window.

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use log::{error, info};
use winit::{
    application::ApplicationHandler,
    dpi::LogicalSize,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, EventLoop},
    window::{Window, WindowId},
};

use scene_viewer::cli::Cli;
use scene_viewer::world::World;

struct App {
    cli: Cli,
    window: Option<Arc<Window>>,
    world: Option<World>,
}

impl App {
    fn new(cli: Cli) -> Self {
        Self {
            cli,
            window: None,
            world: None,
        }
    }

    /// Build a fresh world against the current window and draw the first
    /// frame. Fails fast when there is no window to attach the scene to.
    fn bootstrap(&mut self) -> Result<()> {
        let window = self
            .window
            .as_ref()
            .context("no window to attach the scene to")?
            .clone();

        let mut world = World::new(window, !self.cli.no_ui)?;
        world.render()?;
        self.world = Some(world);
        Ok(())
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attrs = Window::default_attributes()
            .with_title("Scene Viewer")
            .with_inner_size(LogicalSize::new(self.cli.width, self.cli.height));

        match event_loop.create_window(attrs) {
            Ok(window) => self.window = Some(Arc::new(window)),
            Err(err) => {
                error!("failed to create window: {err}");
                event_loop.exit();
                return;
            }
        }

        if let Err(err) = self.bootstrap() {
            error!("failed to build world: {err:#}");
            event_loop.exit();
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        if let Some(world) = self.world.as_mut() {
            if world.handle_window_event(&event) {
                return;
            }
        }

        match event {
            WindowEvent::CloseRequested => {
                info!("close requested, shutting down");
                event_loop.exit();
            }
            WindowEvent::Resized(size) => {
                if let Some(world) = self.world.as_mut() {
                    world.handle_resize(size);
                }
            }
            WindowEvent::ScaleFactorChanged { .. } => {
                if let (Some(world), Some(window)) = (self.world.as_mut(), self.window.as_ref()) {
                    world.handle_resize(window.inner_size());
                }
            }
            WindowEvent::RedrawRequested => {
                let Some(world) = self.world.as_mut() else {
                    return;
                };
                if let Err(err) = world.render() {
                    error!("render error: {err:#}");
                }
                if world.rebuild_requested() {
                    info!("rebuild requested, bootstrapping a fresh world");
                    // drop the old world (and its surface) before binding a
                    // new one to the same window
                    self.world = None;
                    if let Err(err) = self.bootstrap() {
                        error!("failed to rebuild world: {err:#}");
                        event_loop.exit();
                    }
                }
            }
            _ => {}
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    info!("starting scene viewer at {}x{}", cli.width, cli.height);

    let event_loop = EventLoop::new()?;
    let mut app = App::new(cli);
    event_loop.run_app(&mut app)?;

    Ok(())
}
