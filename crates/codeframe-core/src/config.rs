use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::layout::estimate;
use crate::{
    Error, Result, DEFAULT_BACKGROUND, DEFAULT_CONTROL_BUTTON_RADIUS,
    DEFAULT_CONTROL_BUTTON_SPACING, DEFAULT_FONT_FAMILY, DEFAULT_FONT_SIZE, DEFAULT_LINE_HEIGHT,
    DEFAULT_OUTPUT_PATH, DEFAULT_PADDING, DEFAULT_PNG_OPT_LEVEL, DEFAULT_TERMINAL_RADIUS,
};

/// User-supplied overrides. Every field is optional; unset fields fall back
/// to the defaults table when resolved into a [`Config`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    pub background_color: Option<String>,
    pub output_path: Option<PathBuf>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub padding: Option<f32>,
    pub font_family: Option<String>,
    pub font_file: Option<String>,
    pub font_size: Option<f32>,
    pub line_height: Option<f32>,
    pub terminal_radius: Option<f32>,
    pub control_button_radius: Option<f32>,
    pub control_button_spacing: Option<f32>,
    pub png: PngOptions,
}

impl Options {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|err| Error::Config(err.to_string()))
    }
}

/// Fully-resolved render configuration. Every field is concrete by the time
/// rendering starts; one `Config` governs one surface and is never mutated.
#[derive(Debug, Clone)]
pub struct Config {
    pub background_color: String,
    pub output_path: PathBuf,
    pub width: u32,
    pub height: u32,
    pub padding: f32,
    pub font: Font,
    pub line_height: f32,
    pub terminal_radius: f32,
    pub control_button_radius: f32,
    pub control_button_spacing: f32,
    pub png: PngOptions,
}

#[derive(Debug, Clone)]
pub struct Font {
    pub family: String,
    pub file: Option<String>,
    pub size: f32,
}

impl Config {
    /// Merges `options` over the defaults table. Dimensions left unset are
    /// filled per axis from the content-adaptive estimate; explicit values
    /// are taken as-is.
    pub fn resolve(code: &str, options: &Options) -> Self {
        let font_size = options.font_size.unwrap_or(DEFAULT_FONT_SIZE);
        let line_height = options.line_height.unwrap_or(DEFAULT_LINE_HEIGHT);
        let (width, height) = match (options.width, options.height) {
            (Some(width), Some(height)) => (width, height),
            (width, height) => {
                let adaptive = estimate(code, font_size, line_height);
                (
                    width.unwrap_or(adaptive.width),
                    height.unwrap_or(adaptive.height),
                )
            }
        };
        Self {
            background_color: options
                .background_color
                .clone()
                .unwrap_or_else(|| DEFAULT_BACKGROUND.to_string()),
            output_path: options
                .output_path
                .clone()
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_PATH)),
            width,
            height,
            padding: options.padding.unwrap_or(DEFAULT_PADDING),
            font: Font {
                family: options
                    .font_family
                    .clone()
                    .unwrap_or_else(|| DEFAULT_FONT_FAMILY.to_string()),
                file: options.font_file.clone(),
                size: font_size,
            },
            line_height,
            terminal_radius: options.terminal_radius.unwrap_or(DEFAULT_TERMINAL_RADIUS),
            control_button_radius: options
                .control_button_radius
                .unwrap_or(DEFAULT_CONTROL_BUTTON_RADIUS),
            control_button_spacing: options
                .control_button_spacing
                .unwrap_or(DEFAULT_CONTROL_BUTTON_SPACING),
            png: options.png.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PngOptions {
    pub optimize: bool,
    pub level: u8,
    pub strip: PngStrip,
}

impl Default for PngOptions {
    fn default() -> Self {
        Self {
            optimize: false,
            level: DEFAULT_PNG_OPT_LEVEL,
            strip: PngStrip::Safe,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PngStrip {
    None,
    #[default]
    Safe,
    All,
}
