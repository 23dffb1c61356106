//! Lane Hopper entry point
//!
//! Opens the window, loads sprites and drives the fixed-rate game loop.

use std::process;
use std::sync::Arc;
use std::time::Instant;

use winit::application::ApplicationHandler;
use winit::dpi::{LogicalPosition, LogicalSize};
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::PhysicalKey;
use winit::window::{Window, WindowId};

use lane_hopper::assets::AssetSet;
use lane_hopper::consts::*;
use lane_hopper::platform::{FrameClock, InputCollector, map_key};
use lane_hopper::renderer::{RenderState, SpriteBatch, SpriteTable, build_scene};
use lane_hopper::sim::{ControlEvent, GameEvent, GamePhase, GameState, handle_control, tick};
use lane_hopper::{Settings, StartupError};

/// Window and GPU resources, created once the event loop is running
struct Game {
    window: Arc<Window>,
    render_state: RenderState,
    sprites: SpriteTable,
    batch: SpriteBatch,
}

struct App {
    settings: Settings,
    assets: AssetSet,
    state: GameState,
    input: InputCollector,
    clock: FrameClock,
    game: Option<Game>,
    /// Startup failure raised inside the event loop
    error: Option<StartupError>,
}

impl App {
    fn new(settings: Settings, assets: AssetSet, state: GameState) -> Self {
        let clock = FrameClock::new(settings.target_fps, Instant::now());
        Self {
            settings,
            assets,
            state,
            input: InputCollector::new(),
            clock,
            game: None,
            error: None,
        }
    }

    fn create_game(&self, event_loop: &ActiveEventLoop) -> Result<Game, StartupError> {
        let (x, y) = self.settings.window_position;
        let attributes = Window::default_attributes()
            .with_title(WINDOW_TITLE)
            .with_inner_size(LogicalSize::new(SCREEN_WIDTH, SCREEN_HEIGHT))
            .with_position(LogicalPosition::new(x, y))
            .with_resizable(false);
        let window = Arc::new(event_loop.create_window(attributes)?);
        log::info!(
            "Window created: {}x{} at ({}, {}), scale factor {}",
            SCREEN_WIDTH,
            SCREEN_HEIGHT,
            x,
            y,
            window.scale_factor()
        );

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::PRIMARY,
            ..Default::default()
        });
        let surface = instance.create_surface(window.clone())?;

        let adapter = pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::HighPerformance,
            compatible_surface: Some(&surface),
            force_fallback_adapter: false,
        }))?;
        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let size = window.inner_size();
        let mut render_state = pollster::block_on(RenderState::new(
            surface,
            &adapter,
            size.width.max(1),
            size.height.max(1),
            lane_hopper::screen_size(),
        ))?;

        let mut sprites = SpriteTable::new(render_state.white_texture());
        for (key, bitmap) in self.assets.iter() {
            let texture = render_state.upload_texture(bitmap, key.file_name());
            sprites.insert(*key, texture);
        }
        log::debug!("Uploaded {} sprite textures", self.assets.len());

        Ok(Game {
            window,
            render_state,
            sprites,
            batch: SpriteBatch::new(),
        })
    }

    /// Handle a redraw: simulate if the clock armed a step, then draw
    fn frame(&mut self, event_loop: &ActiveEventLoop) {
        if self.clock.take_step() {
            self.step();
        }

        if self.state.is_terminated() {
            log::info!("Quit requested, final score {}", self.state.score);
            event_loop.exit();
            return;
        }

        self.draw(event_loop);
    }

    /// One gameplay step at the fixed rate, with its log lines
    fn step(&mut self) {
        let input = self.input.take_frame();
        let phase_before = self.state.phase;
        tick(&mut self.state, &input);

        for event in self.state.drain_events() {
            match event {
                GameEvent::Crossing { level, score } => {
                    log::info!("Crossing complete: level {}, score {}", level, score);
                }
                GameEvent::Collision { obstacle } => {
                    log::debug!("Hit by obstacle {} on frame {}", obstacle, self.state.frame);
                }
            }
        }

        match (phase_before, self.state.phase) {
            (GamePhase::Running, GamePhase::Paused) => log::info!("Paused"),
            (GamePhase::Paused, GamePhase::Running) => log::info!("Resumed"),
            _ => {}
        }
    }

    fn draw(&mut self, event_loop: &ActiveEventLoop) {
        let Some(game) = self.game.as_mut() else {
            return;
        };

        build_scene(&self.state, &game.sprites, &mut game.batch);
        match game.render_state.render(&game.batch) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                game.render_state.reconfigure();
            }
            Err(wgpu::SurfaceError::Timeout) => {
                log::warn!("Surface timeout, skipping frame");
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("Out of memory!");
                event_loop.exit();
            }
            Err(e) => log::warn!("Render error: {:?}", e),
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.game.is_some() {
            return;
        }
        match self.create_game(event_loop) {
            Ok(game) => {
                game.window.request_redraw();
                self.game = Some(game);
            }
            Err(e) => {
                self.error = Some(e);
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                handle_control(&mut self.state, ControlEvent::Close);
                log::info!("Window closed, final score {}", self.state.score);
                event_loop.exit();
            }

            WindowEvent::Focused(false) => self.input.release_all(),

            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(code) = event.physical_key {
                    if let Some(key) = map_key(code) {
                        let at = self.clock.seconds(Instant::now());
                        self.input.key(
                            key,
                            event.state == ElementState::Pressed,
                            event.repeat,
                            at,
                        );
                    }
                }
            }

            WindowEvent::Resized(size) => {
                if let Some(game) = self.game.as_mut() {
                    game.render_state.resize(size.width, size.height);
                }
            }

            WindowEvent::RedrawRequested => self.frame(event_loop),

            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        let now = Instant::now();
        if self.clock.poll(now) {
            if let Some(game) = &self.game {
                game.window.request_redraw();
            }
        }
        event_loop.set_control_flow(ControlFlow::WaitUntil(self.clock.next_deadline()));
    }
}

fn run() -> Result<(), StartupError> {
    let settings = Settings::from_env();
    match serde_json::to_string(&settings) {
        Ok(json) => log::info!("Settings: {}", json),
        Err(e) => log::warn!("Could not serialize settings: {}", e),
    }

    let state = GameState::new();
    let assets = AssetSet::load(&settings, &state)?;

    let event_loop = EventLoop::new()?;
    let mut app = App::new(settings, assets, state);
    event_loop.run_app(&mut app)?;

    match app.error.take() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Lane Hopper starting...");

    if let Err(e) = run() {
        log::error!("{}", e);
        process::exit(1);
    }
}
