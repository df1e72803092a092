//! Tapstick - unified game controller host
//!
//! Opens a window, feeds its keyboard and touch events into the controller,
//! and polls the controller once per frame.

use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::PhysicalKey,
    window::WindowId,
};

use tapstick::config::AppConfig;
use tapstick::input::{InputAction, InputMapper};
use tapstick::systems::WindowSystem;
use tapstick_input::{create_gamepad_backend, GamepadBackend, InputManager, NullGamepad};
use tapstick_math::Vec2;

/// Main application state
struct App {
    /// Application configuration
    config: AppConfig,
    window: Option<WindowSystem>,
    input: InputManager,
    /// Controller output from the previous frame
    last_output: Option<(Vec2, bool)>,
}

impl App {
    fn new(config: AppConfig) -> Self {
        let gamepad: Box<dyn GamepadBackend> = if config.input.gamepad_enabled {
            create_gamepad_backend()
        } else {
            log::info!("Gamepad input disabled by config");
            Box::new(NullGamepad)
        };

        let input = InputManager::new(gamepad)
            .with_joystick_radius(config.input.joystick_radius)
            .with_deadzone(config.input.gamepad_deadzone);

        Self {
            config,
            window: None,
            input,
            last_output: None,
        }
    }

    fn handle_action(&mut self, action: InputAction, event_loop: &ActiveEventLoop) {
        match action {
            InputAction::Exit => event_loop.exit(),
            InputAction::ToggleFullscreen => {
                if let Some(window) = &self.window {
                    window.toggle_fullscreen();
                }
            }
            InputAction::ResetInput => {
                self.input.reset();
                log::info!("Input state reset");
            }
        }
    }

    /// Poll the controller for this frame
    fn frame(&mut self) {
        self.input.pump_gamepads();
        let movement = self.input.move_vector();
        let trigger = self.input.trigger();

        if self.last_output != Some((movement, trigger)) {
            if self.config.debug.log_state_changes {
                log::info!("move ({:.2}, {:.2}) trigger {}", movement.x, movement.y, trigger);
            }
            if let Some(window) = &self.window {
                window.update_title(movement, trigger);
            }
            self.last_output = Some((movement, trigger));
        }

        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            match WindowSystem::create(event_loop, &self.config.window) {
                Ok(window) => {
                    window.request_redraw();
                    self.window = Some(window);
                }
                Err(e) => {
                    log::error!("{}", e);
                    event_loop.exit();
                }
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match &event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
                return;
            }
            WindowEvent::RedrawRequested => {
                self.frame();
                return;
            }
            WindowEvent::KeyboardInput { event: key_event, .. } if !key_event.repeat => {
                if let PhysicalKey::Code(key) = key_event.physical_key {
                    if let Some(action) = InputMapper::map_keyboard(key, key_event.state) {
                        self.handle_action(action, event_loop);
                    }
                }
            }
            _ => {}
        }

        if self.input.process_window_event(&event) {
            log::trace!("Controller consumed {:?}", event);
        }
    }
}

fn main() {
    let (config, config_error) = match AppConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    // Initialize logging; RUST_LOG overrides the configured level
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.debug.log_level.as_str()),
    )
    .init();
    log::info!("Starting Tapstick");

    if let Some(e) = config_error {
        log::warn!("Failed to load config: {}. Using defaults.", e);
    }

    let event_loop = match EventLoop::new() {
        Ok(event_loop) => event_loop,
        Err(e) => {
            log::error!("Failed to create event loop: {}", e);
            std::process::exit(1);
        }
    };
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(config);
    if let Err(e) = event_loop.run_app(&mut app) {
        log::error!("Event loop error: {}", e);
        std::process::exit(1);
    }
}
