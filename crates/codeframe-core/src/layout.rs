use crate::{
    ADAPTIVE_HEIGHT_EXTRA, ADAPTIVE_HEIGHT_PADDING, ADAPTIVE_WIDTH_PADDING, DEFAULT_TAB_WIDTH,
    FONT_HEIGHT_TO_WIDTH_RATIO, MAX_ADAPTIVE_HEIGHT, MAX_ADAPTIVE_WIDTH, MIN_ADAPTIVE_HEIGHT,
    MIN_ADAPTIVE_WIDTH,
};

/// Output image size in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

pub(crate) fn char_width(font_size: f32) -> f32 {
    font_size / FONT_HEIGHT_TO_WIDTH_RATIO
}

pub(crate) fn text_width_cells(text: &str) -> usize {
    let mut width = 0usize;
    for ch in text.chars() {
        if ch == '\t' {
            width += DEFAULT_TAB_WIDTH;
        } else {
            width += unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
        }
    }
    width
}

pub(crate) fn text_width_px(text: &str, font_size: f32) -> f32 {
    text_width_cells(text) as f32 * char_width(font_size)
}

/// Infers an output size from the code content: the longest line plus side
/// padding for the width, line count times line advance plus headroom for
/// the height, each clamped to its bounds.
pub fn estimate(code: &str, font_size: f32, line_height: f32) -> Dimensions {
    let mut line_count = 0usize;
    let mut max_line_px = 0f32;
    for line in code.split('\n') {
        line_count += 1;
        max_line_px = max_line_px.max(text_width_px(line, font_size));
    }

    let width = (max_line_px + ADAPTIVE_WIDTH_PADDING)
        .max(MIN_ADAPTIVE_WIDTH)
        .min(MAX_ADAPTIVE_WIDTH);
    let height = (line_count as f32 * font_size * line_height
        + ADAPTIVE_HEIGHT_PADDING
        + ADAPTIVE_HEIGHT_EXTRA)
        .max(MIN_ADAPTIVE_HEIGHT)
        .min(MAX_ADAPTIVE_HEIGHT);

    Dimensions {
        width: width.ceil() as u32,
        height: height.ceil() as u32,
    }
}
