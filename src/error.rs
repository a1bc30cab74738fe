//! Error types for trueno-raster operations.
//!
//! Session errors are diagnostics: the call that produced one was ignored and
//! the canvas state is exactly what it was before the call.

use crate::session::{EntryPoint, PrimitiveKind};
use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in trueno-raster operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid dimensions for a framebuffer.
    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions {
        /// Width value.
        width: u32,
        /// Height value.
        height: u32,
    },

    /// `begin` was called while a session was already recording.
    #[error("Cannot begin a new primitive while a {active} session is open; call end() first")]
    SessionOpen {
        /// Kind of the session that is still open.
        active: PrimitiveKind,
    },

    /// A vertex or center was supplied with no session open.
    #[error("Cannot add vertices without an open session; call begin() first")]
    NoSession,

    /// The entry point does not match the category of the active primitive.
    #[error("{used} is not valid for {kind} primitives; use {}", .kind.entry_point())]
    WrongEntryPoint {
        /// Kind of the open session.
        kind: PrimitiveKind,
        /// Entry point the caller used.
        used: EntryPoint,
    },

    /// Stroke width must be strictly positive.
    #[error("Invalid line width {0}: width must be positive")]
    InvalidLineWidth(i32),

    /// Circle radius or curve amplitude must not be negative.
    #[error("Invalid radius {0}: radius must not be negative")]
    InvalidRadius(i32),

    /// Curve frequency denominator must be positive.
    #[error("Invalid curve frequency {n}/{d}: denominator must be positive")]
    InvalidFrequency {
        /// Numerator.
        n: i32,
        /// Denominator.
        d: i32,
    },

    /// I/O error while reading a configuration file.
    #[cfg(feature = "config")]
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file is not valid YAML for a canvas.
    #[cfg(feature = "config")]
    #[error("Config parse error at line {line}: {message}")]
    ConfigParse {
        /// Line of the offending entry (0 if unknown).
        line: usize,
        /// Parser message.
        message: String,
    },

    /// Configuration parsed but describes an unusable canvas.
    #[cfg(feature = "config")]
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
