//! Window management system
//!
//! Handles window creation, fullscreen toggle, and the live controller readout in the title.

use std::sync::Arc;
use tapstick_math::Vec2;
use winit::{
    event_loop::ActiveEventLoop,
    window::{Fullscreen, Window},
};
use crate::config::WindowConfig;

/// Manages the application window
pub struct WindowSystem {
    window: Arc<Window>,
    base_title: String,
}

impl WindowSystem {
    /// Create window from config
    pub fn create(
        event_loop: &ActiveEventLoop,
        config: &WindowConfig,
    ) -> Result<Self, WindowError> {
        let mut attrs = Window::default_attributes()
            .with_title(&config.title)
            .with_inner_size(winit::dpi::LogicalSize::new(
                config.width,
                config.height,
            ));

        if config.fullscreen {
            attrs = attrs.with_fullscreen(Some(Fullscreen::Borderless(None)));
        }

        let window = Arc::new(
            event_loop
                .create_window(attrs)
                .map_err(|e| WindowError::CreationFailed(e.to_string()))?,
        );

        Ok(Self {
            window,
            base_title: config.title.clone(),
        })
    }

    /// Toggle fullscreen mode
    pub fn toggle_fullscreen(&self) {
        let new_fullscreen = if self.window.fullscreen().is_some() {
            None
        } else {
            Some(Fullscreen::Borderless(None))
        };
        self.window.set_fullscreen(new_fullscreen);
    }

    /// Show the controller output in the title bar
    pub fn update_title(&self, movement: Vec2, trigger: bool) {
        self.window.set_title(&status_title(&self.base_title, movement, trigger));
    }

    /// Request a redraw
    pub fn request_redraw(&self) {
        self.window.request_redraw();
    }
}

/// Format the title readout for a controller state
pub fn status_title(base: &str, movement: Vec2, trigger: bool) -> String {
    if trigger {
        format!("{} - move ({:.2}, {:.2}) [FIRE]", base, movement.x, movement.y)
    } else {
        format!("{} - move ({:.2}, {:.2})", base, movement.x, movement.y)
    }
}

#[derive(Debug)]
pub enum WindowError {
    CreationFailed(String),
}

impl std::fmt::Display for WindowError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WindowError::CreationFailed(msg) => write!(f, "Window creation failed: {}", msg),
        }
    }
}

impl std::error::Error for WindowError {}
