//! # Admin Theme
//!
//! Colour modes, palette tokens, and derived theme settings for the admin
//! dashboard.
//!
//! This crate has no UI dependency. The dashboard wraps [`ModeState`] in its
//! own reactive state and feeds [`ThemeSettings`] to the render tree.
//!
//! ## Key Types
//!
//! - [`Mode`]: the light/dark selection, dark by default
//! - [`Palette`]: five nine-stop [`ColourRamp`]s, one table per mode
//! - [`ThemeSettings`]: palette roles and typography for a mode
//! - [`ModeState`]: the toggle state machine with its theme cache

pub mod error;
pub mod mode;
pub mod palette;
pub mod settings;
pub mod state;

// Re-export main types
pub use error::ThemeError;
pub use mode::*;
pub use palette::*;
pub use settings::*;
pub use state::*;
