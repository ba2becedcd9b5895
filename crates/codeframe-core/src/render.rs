use std::path::{Path, PathBuf};

use crate::fonts::{build_fontdb, font_face_css};
use crate::frame::{controls_y, paint_frame, terminal_rect};
use crate::highlight::paint_code;
use crate::png::optimize_png;
use crate::surface::Surface;
use crate::text::detab;
use crate::{
    Config, Options, OutputFormat, Result, CODE_X_OFFSET, CODE_Y_OFFSET, DEFAULT_TAB_WIDTH,
};

/// Builds the full scene for `code`: frame first, then the highlighted
/// text on top.
pub(crate) fn paint(code: &str, config: &Config) -> Result<Surface> {
    let mut surface = Surface::new(config.width, config.height)?;
    if let Some(css) = font_face_css(config)? {
        surface.push_style(&css);
    }
    paint_frame(&mut surface, config)?;
    let term = terminal_rect(config);
    let code_x = term.x + CODE_X_OFFSET;
    let code_y = controls_y(config) + CODE_Y_OFFSET;
    paint_code(&mut surface, code, code_x, code_y, config);
    Ok(surface)
}

fn render_png(code: &str, config: &Config) -> Result<Vec<u8>> {
    let surface = paint(code, config)?;
    let fontdb = build_fontdb(config)?;
    let png = surface.encode_png(fontdb)?;
    optimize_png(png, &config.png)
}

/// Renders `code` to a standalone SVG document.
pub fn code_to_svg(code: &str, options: &Options) -> Result<Vec<u8>> {
    let code = detab(code, DEFAULT_TAB_WIDTH);
    let config = Config::resolve(&code, options);
    let surface = paint(&code, &config)?;
    Ok(surface.to_svg().into_bytes())
}

/// Renders `code` to PNG bytes at the resolved dimensions.
pub fn code_to_image(code: &str, options: &Options) -> Result<Vec<u8>> {
    let code = detab(code, DEFAULT_TAB_WIDTH);
    let config = Config::resolve(&code, options);
    render_png(&code, &config)
}

pub fn render(code: &str, options: &Options, format: OutputFormat) -> Result<Vec<u8>> {
    match format {
        OutputFormat::Svg => code_to_svg(code, options),
        OutputFormat::Png => code_to_image(code, options),
    }
}

/// Writes encoded image bytes to `path`. The only suspending operation in
/// the pipeline; the buffer stays valid when the write fails.
pub async fn save_image(bytes: &[u8], path: &Path) -> Result<()> {
    tokio::fs::write(path, bytes).await?;
    Ok(())
}

/// Renders `code` and saves it to the configured output path.
pub async fn generate_code_image(code: &str, options: &Options) -> Result<PathBuf> {
    let code = detab(code, DEFAULT_TAB_WIDTH);
    let config = Config::resolve(&code, options);
    let bytes = render_png(&code, &config)?;
    save_image(&bytes, &config.output_path).await?;
    Ok(config.output_path)
}
