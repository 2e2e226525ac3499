//! Theme palette, config paths and user settings.
//!
//! Public re-exports keep the `crate::theme::*` API stable.

/// Configuration parsing utilities.
mod parsing;
/// Path resolution for config directories.
mod paths;
/// Settings access.
mod settings;
/// Theme and settings type definitions.
mod types;

pub use paths::{config_dir, logs_dir};
pub use settings::{settings, settings_from_path};
pub use types::{Settings, Theme};

/// What: Palette used by the renderer.
#[must_use]
pub fn theme() -> Theme {
    Theme::default()
}
