use crate::{Error, Result, MAX_SURFACE_PIXELS};

/// Corner construction for rounded rectangles. `Native` uses the rect
/// primitive's rx/ry; `Path` traces the same outline from four quarter
/// arcs for targets without a rounded-rect primitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CornerMode {
    Native,
    Path,
}

/// The raster target for one render call. Drawing operations append to a
/// vector scene; `encode_png` rasterizes the scene at the surface size.
pub struct Surface {
    width: u32,
    height: u32,
    corner_mode: CornerMode,
    defs: String,
    body: String,
    gradients: usize,
}

impl Surface {
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::Surface(format!(
                "invalid surface size {width}x{height}"
            )));
        }
        if u64::from(width) * u64::from(height) > MAX_SURFACE_PIXELS {
            return Err(Error::Surface(format!(
                "surface size {width}x{height} exceeds the pixel limit"
            )));
        }
        Ok(Self {
            width,
            height,
            corner_mode: CornerMode::Native,
            defs: String::new(),
            body: String::new(),
            gradients: 0,
        })
    }

    pub(crate) fn with_corner_mode(
        width: u32,
        height: u32,
        corner_mode: CornerMode,
    ) -> Result<Self> {
        let mut surface = Self::new(width, height)?;
        surface.corner_mode = corner_mode;
        Ok(surface)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub(crate) fn push_style(&mut self, css: &str) {
        self.defs.push_str(r#"<style type="text/css">"#);
        self.defs.push_str(css);
        self.defs.push_str("</style>");
    }

    /// Fills the whole surface with a top-to-bottom linear gradient.
    pub(crate) fn fill_vertical_gradient(&mut self, top: &str, bottom: &str) {
        let id = format!("bg{}", self.gradients);
        self.gradients += 1;
        self.defs.push_str(&format!(
            r#"<linearGradient id="{id}" x1="0" y1="0" x2="0" y2="1"><stop offset="0" stop-color="{}"/><stop offset="1" stop-color="{}"/></linearGradient>"#,
            escape_attr(top),
            escape_attr(bottom)
        ));
        self.body.push_str(&format!(
            r##"<rect x="0" y="0" width="{}" height="{}" fill="url(#{id})"/>"##,
            self.width, self.height
        ));
    }

    pub(crate) fn fill_rounded_rect(
        &mut self,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        radius: f32,
        fill: &str,
        opacity: f32,
    ) {
        let radius = radius.min(width / 2.0).min(height / 2.0).max(0.0);
        let opacity_attr = opacity_attr(opacity);
        match self.corner_mode {
            CornerMode::Native => self.body.push_str(&format!(
                r#"<rect x="{x:.2}" y="{y:.2}" width="{width:.2}" height="{height:.2}" rx="{radius:.2}" ry="{radius:.2}" fill="{}"{opacity_attr}/>"#,
                escape_attr(fill)
            )),
            CornerMode::Path => self.body.push_str(&format!(
                r#"<path d="{}" fill="{}"{opacity_attr}/>"#,
                rounded_rect_path(x, y, width, height, radius),
                escape_attr(fill)
            )),
        }
    }

    pub(crate) fn fill_circle(&mut self, cx: f32, cy: f32, radius: f32, fill: &str) {
        self.body.push_str(&format!(
            r#"<circle cx="{cx:.2}" cy="{cy:.2}" r="{radius:.2}" fill="{}"/>"#,
            escape_attr(fill)
        ));
    }

    /// Paints a text run with its top-left corner at `(x, y)`.
    pub(crate) fn fill_text(
        &mut self,
        text: &str,
        x: f32,
        y: f32,
        font_size: f32,
        font_family: &str,
        fill: &str,
    ) {
        let baseline = y + font_size;
        self.body.push_str(&format!(
            r#"<text x="{x:.2}" y="{baseline:.2}" font-family="{}" font-size="{font_size:.2}px" fill="{}" xml:space="preserve">{}</text>"#,
            escape_attr(font_family),
            escape_attr(fill),
            escape_text(text)
        ));
    }

    pub(crate) fn to_svg(&self) -> String {
        let mut svg = format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}">"#,
            self.width, self.height
        );
        if !self.defs.is_empty() {
            svg.push_str("<defs>");
            svg.push_str(&self.defs);
            svg.push_str("</defs>");
        }
        svg.push_str(&self.body);
        svg.push_str("</svg>");
        svg
    }

    pub(crate) fn rasterize(&self, fontdb: usvg::fontdb::Database) -> Result<tiny_skia::Pixmap> {
        let svg = self.to_svg();
        let mut opt = usvg::Options::default();
        *opt.fontdb_mut() = fontdb;
        let tree = usvg::Tree::from_data(svg.as_bytes(), &opt)
            .map_err(|err| Error::Encode(format!("usvg parse: {err}")))?;
        let mut pixmap = tiny_skia::Pixmap::new(self.width, self.height).ok_or_else(|| {
            Error::Surface(format!("invalid pixmap size {}x{}", self.width, self.height))
        })?;
        let mut pixmap_mut = pixmap.as_mut();
        resvg::render(&tree, tiny_skia::Transform::identity(), &mut pixmap_mut);
        Ok(pixmap)
    }

    /// Rasterizes the scene and encodes it as an RGBA PNG.
    pub(crate) fn encode_png(&self, fontdb: usvg::fontdb::Database) -> Result<Vec<u8>> {
        let pixmap = self.rasterize(fontdb)?;
        pixmap
            .encode_png()
            .map_err(|err| Error::Encode(format!("png encode: {err}")))
    }
}

/// Rounded-rectangle outline built from four quarter arcs, starting right
/// of the top-left corner and sweeping clockwise.
fn rounded_rect_path(x: f32, y: f32, width: f32, height: f32, radius: f32) -> String {
    let right = x + width;
    let bottom = y + height;
    let r = radius;
    format!(
        "M {:.2} {:.2} L {:.2} {:.2} A {r:.2} {r:.2} 0 0 1 {:.2} {:.2} \
         L {:.2} {:.2} A {r:.2} {r:.2} 0 0 1 {:.2} {:.2} \
         L {:.2} {:.2} A {r:.2} {r:.2} 0 0 1 {:.2} {:.2} \
         L {:.2} {:.2} A {r:.2} {r:.2} 0 0 1 {:.2} {:.2} Z",
        x + r,
        y,
        right - r,
        y,
        right,
        y + r,
        right,
        bottom - r,
        right - r,
        bottom,
        x + r,
        bottom,
        x,
        bottom - r,
        x,
        y + r,
        x + r,
        y,
    )
}

fn opacity_attr(opacity: f32) -> String {
    if opacity >= 1.0 {
        String::new()
    } else {
        format!(r#" fill-opacity="{:.3}""#, opacity.max(0.0))
    }
}

pub(crate) fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

pub(crate) fn escape_attr(text: &str) -> String {
    escape_text(text).replace('"', "&quot;")
}
