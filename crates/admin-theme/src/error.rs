//! Error types for the theme core

use thiserror::Error;

/// Errors raised at the boundaries where untyped input enters the theme core
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ThemeError {
    #[error("Unknown colour mode: {0:?} (expected \"light\" or \"dark\")")]
    UnknownMode(String),

    #[error("Invalid shade stop: {0} (expected 100, 200, ..., 900)")]
    InvalidShadeStop(u16),

    #[error("Invalid hex colour: {0:?} (expected #rrggbb)")]
    InvalidHexColour(String),
}

pub type Result<T> = std::result::Result<T, ThemeError>;
