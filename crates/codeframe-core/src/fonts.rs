use base64::Engine;
use std::path::Path;

use crate::{Config, Result};

/// Font database for rasterization: the configured font file first, then
/// whatever the system provides.
pub(crate) fn build_fontdb(config: &Config) -> Result<usvg::fontdb::Database> {
    let mut fontdb = usvg::fontdb::Database::new();
    if let Some(file) = &config.font.file {
        let bytes = std::fs::read(file)?;
        fontdb.load_font_data(bytes);
    }
    fontdb.load_system_fonts();
    Ok(fontdb)
}

/// `@font-face` rule embedding the configured font file, so exported SVG
/// renders standalone.
pub(crate) fn font_face_css(config: &Config) -> Result<Option<String>> {
    let Some(file) = &config.font.file else {
        return Ok(None);
    };
    let bytes = std::fs::read(file)?;
    let ext = Path::new(file)
        .extension()
        .and_then(|v| v.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();
    let (format, mime) = match ext.as_str() {
        "woff2" => ("woff2", "font/woff2"),
        "woff" => ("woff", "font/woff"),
        _ => ("truetype", "font/ttf"),
    };
    let encoded = base64::engine::general_purpose::STANDARD.encode(bytes);
    Ok(Some(format!(
        "@font-face {{ font-family: '{}'; src: url(data:{mime};base64,{encoded}) format('{format}'); }}",
        config.font.family
    )))
}
