use clap::{Parser, ValueEnum};
use codeframe_core::{OutputFormat, PngStrip};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "codeframe",
    about = "Generate terminal-styled images of code snippets.",
    version
)]
pub(crate) struct Args {
    /// Input file path. Use "-" to read from stdin.
    pub(crate) input: Option<String>,

    /// Output file path (.svg/.png). If omitted, writes to stdout
    /// (or code-snippet.png when stdout is a TTY).
    #[arg(short, long)]
    pub(crate) output: Option<PathBuf>,

    /// Output format (svg or png).
    #[arg(short, long, value_enum)]
    pub(crate) format: Option<FormatArg>,

    /// JSON options file.
    #[arg(short, long)]
    pub(crate) config: Option<PathBuf>,

    /// Background color (e.g. #ff3366).
    #[arg(short = 'b', long)]
    pub(crate) background: Option<String>,

    /// Width of the output image. Defaults to adaptive sizing.
    #[arg(short = 'W', long)]
    pub(crate) width: Option<u32>,

    /// Height of the output image. Defaults to adaptive sizing.
    #[arg(short = 'H', long)]
    pub(crate) height: Option<u32>,

    /// Padding around the terminal window.
    #[arg(short = 'p', long)]
    pub(crate) padding: Option<f32>,

    /// Font family.
    #[arg(long = "font.family")]
    pub(crate) font_family: Option<String>,

    /// Font file path.
    #[arg(long = "font.file")]
    pub(crate) font_file: Option<String>,

    /// Font size in pixels.
    #[arg(long = "font.size")]
    pub(crate) font_size: Option<f32>,

    /// Line height multiplier.
    #[arg(long)]
    pub(crate) line_height: Option<f32>,

    /// Corner radius of the terminal window.
    #[arg(long)]
    pub(crate) terminal_radius: Option<f32>,

    /// Radius of the window-control dots.
    #[arg(long)]
    pub(crate) control_radius: Option<f32>,

    /// Spacing between the window-control dots.
    #[arg(long)]
    pub(crate) control_spacing: Option<f32>,

    /// Recompress the PNG output.
    #[arg(
        long,
        num_args = 0..=1,
        default_missing_value = "true",
        value_parser = clap::builder::BoolishValueParser::new()
    )]
    pub(crate) optimize: Option<bool>,

    /// PNG optimization level (0-6).
    #[arg(long = "png.level")]
    pub(crate) png_level: Option<u8>,

    /// PNG chunk stripping (none, safe, all).
    #[arg(long = "png.strip", value_enum)]
    pub(crate) png_strip: Option<PngStripArg>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum FormatArg {
    Svg,
    Png,
}

impl From<FormatArg> for OutputFormat {
    fn from(value: FormatArg) -> Self {
        match value {
            FormatArg::Svg => OutputFormat::Svg,
            FormatArg::Png => OutputFormat::Png,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub(crate) enum PngStripArg {
    None,
    Safe,
    All,
}

impl From<PngStripArg> for PngStrip {
    fn from(value: PngStripArg) -> Self {
        match value {
            PngStripArg::None => PngStrip::None,
            PngStripArg::Safe => PngStrip::Safe,
            PngStripArg::All => PngStrip::All,
        }
    }
}
