const FONT_HEIGHT_TO_WIDTH_RATIO: f32 = 1.68;
const DEFAULT_TAB_WIDTH: usize = 4;

const MIN_ADAPTIVE_WIDTH: f32 = 400.0;
const MAX_ADAPTIVE_WIDTH: f32 = 2000.0;
const MIN_ADAPTIVE_HEIGHT: f32 = 200.0;
const MAX_ADAPTIVE_HEIGHT: f32 = 1500.0;
const ADAPTIVE_WIDTH_PADDING: f32 = 150.0;
const ADAPTIVE_HEIGHT_PADDING: f32 = 150.0;
const ADAPTIVE_HEIGHT_EXTRA: f32 = 40.0;

const GRADIENT_DARKEN_PERCENT: f32 = 20.0;
const SHADOW_MAX_OFFSET: u32 = 12;
const SHADOW_STEP: u32 = 2;
const SHADOW_BASE_ALPHA: f32 = 0.1;
const SHADOW_ALPHA_FALLOFF: f32 = 0.008;
const CONTACT_SHADOW_OFFSET: f32 = 2.0;
const CONTACT_SHADOW_ALPHA: f32 = 0.18;
const TERMINAL_FILL: &str = "#0a192f";
const CONTROL_COLORS: [&str; 3] = ["#ff6057", "#ffbd2e", "#27c93f"];
const CONTROLS_INSET: f32 = 15.0;
const CONTROL_SPACING_EXTRA: f32 = 5.0;
const CODE_X_OFFSET: f32 = 30.0;
const CODE_Y_OFFSET: f32 = 35.0;

const DEFAULT_BACKGROUND: &str = "#ff3366";
const DEFAULT_OUTPUT_PATH: &str = "code-snippet.png";
const DEFAULT_PADDING: f32 = 50.0;
const DEFAULT_FONT_FAMILY: &str = "monospace";
const DEFAULT_FONT_SIZE: f32 = 24.0;
const DEFAULT_LINE_HEIGHT: f32 = 1.5;
const DEFAULT_TERMINAL_RADIUS: f32 = 15.0;
const DEFAULT_CONTROL_BUTTON_RADIUS: f32 = 12.0;
const DEFAULT_CONTROL_BUTTON_SPACING: f32 = 25.0;

const MAX_SURFACE_PIXELS: u64 = 16_000_000;
const DEFAULT_PNG_OPT_LEVEL: u8 = 2;
const MAX_PNG_OPT_LEVEL: u8 = 6;

mod color;
mod config;
mod fonts;
mod frame;
mod highlight;
mod layout;
mod png;
mod render;
mod surface;
mod text;
mod types;

pub use color::darken;
pub use config::{Config, Font, Options, PngOptions, PngStrip};
pub use highlight::TokenKind;
pub use layout::{estimate, Dimensions};
pub use render::{code_to_image, code_to_svg, generate_code_image, render, save_image};
pub use surface::Surface;
pub use types::{Error, OutputFormat, Result};

#[cfg(test)]
mod tests;
