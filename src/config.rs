//! YAML configuration for a canvas.
//!
//! Every field has a default, so an empty document is a valid configuration:
//!
//! ```yaml
//! width: 640
//! height: 640
//! background: [0, 0, 0]
//! color: [255, 255, 255]
//! line_width: 1
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::canvas::Canvas;
use crate::color::Rgb;
use crate::error::{Error, Result};
use crate::framebuffer::Framebuffer;

/// Canvas size and initial pen.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CanvasConfig {
    /// Width in pixels.
    #[serde(default = "default_size")]
    pub width: u32,

    /// Height in pixels.
    #[serde(default = "default_size")]
    pub height: u32,

    /// Color painted over the whole canvas on creation.
    #[serde(default = "default_background")]
    pub background: [u8; 3],

    /// Initial pen color.
    #[serde(default = "default_color")]
    pub color: [u8; 3],

    /// Initial stroke width in pixels.
    #[serde(default = "default_line_width")]
    pub line_width: i32,
}

fn default_size() -> u32 {
    640
}
fn default_background() -> [u8; 3] {
    Rgb::BLACK.to_array()
}
fn default_color() -> [u8; 3] {
    Rgb::WHITE.to_array()
}
fn default_line_width() -> i32 {
    1
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: default_size(),
            height: default_size(),
            background: default_background(),
            color: default_color(),
            line_width: default_line_width(),
        }
    }
}

impl CanvasConfig {
    /// Loads configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parses configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns an error with line number if parsing fails.
    pub fn parse(yaml: &str) -> Result<Self> {
        serde_yaml_ng::from_str(yaml).map_err(|e| {
            let line = e.location().map_or(0, |l| l.line());
            Error::ConfigParse {
                line,
                message: e.to_string(),
            }
        })
    }

    /// Checks that the configuration describes a drawable canvas.
    ///
    /// # Errors
    ///
    /// Returns an error for a zero dimension or a non-positive line width.
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(Error::InvalidConfig(format!(
                "canvas must not be empty, got {}x{}",
                self.width, self.height
            )));
        }
        if self.line_width <= 0 {
            return Err(Error::InvalidConfig(format!(
                "line_width must be positive, got {}",
                self.line_width
            )));
        }
        Ok(())
    }
}

impl Canvas<Framebuffer> {
    /// Create a canvas painted with the configured background and holding the
    /// configured pen.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration does not validate.
    pub fn from_config(config: &CanvasConfig) -> Result<Self> {
        config.validate()?;
        let mut canvas = Self::new(config.width, config.height)?;
        let [r, g, b] = config.background;
        canvas.background(r, g, b);
        let [r, g, b] = config.color;
        canvas.color(r, g, b);
        canvas.line_width(config.line_width)?;
        Ok(canvas)
    }
}
