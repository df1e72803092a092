//! Application systems
//!
//! Host-side systems kept out of main.rs for testability.

mod window;

pub use window::{WindowSystem, WindowError, status_title};
