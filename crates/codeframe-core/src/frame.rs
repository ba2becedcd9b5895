use crate::color::darken;
use crate::surface::Surface;
use crate::{
    Config, Result, CONTACT_SHADOW_ALPHA, CONTACT_SHADOW_OFFSET, CONTROLS_INSET, CONTROL_COLORS,
    CONTROL_SPACING_EXTRA, GRADIENT_DARKEN_PERCENT, SHADOW_ALPHA_FALLOFF, SHADOW_BASE_ALPHA,
    SHADOW_MAX_OFFSET, SHADOW_STEP, TERMINAL_FILL,
};

pub(crate) struct TerminalRect {
    pub(crate) x: f32,
    pub(crate) y: f32,
    pub(crate) width: f32,
    pub(crate) height: f32,
}

pub(crate) fn terminal_rect(config: &Config) -> TerminalRect {
    TerminalRect {
        x: config.padding,
        y: config.padding,
        width: config.width as f32 - config.padding * 2.0,
        height: config.height as f32 - config.padding * 2.0,
    }
}

/// Vertical center of the window-control dots.
pub(crate) fn controls_y(config: &Config) -> f32 {
    config.padding + config.control_button_radius + CONTROLS_INSET
}

/// Paints the gradient backdrop, the shadowed terminal body and the three
/// window-control dots. Paint order matters: later fills occlude earlier
/// ones.
pub(crate) fn paint_frame(surface: &mut Surface, config: &Config) -> Result<()> {
    let bottom = darken(&config.background_color, GRADIENT_DARKEN_PERCENT)?;
    surface.fill_vertical_gradient(&config.background_color, &bottom);

    let term = terminal_rect(config);

    // Layered translucent passes stand in for a blurred drop shadow.
    for offset in (SHADOW_STEP..=SHADOW_MAX_OFFSET).step_by(SHADOW_STEP as usize) {
        let alpha = SHADOW_BASE_ALPHA - offset as f32 * SHADOW_ALPHA_FALLOFF;
        surface.fill_rounded_rect(
            term.x + offset as f32,
            term.y + offset as f32,
            term.width,
            term.height,
            config.terminal_radius,
            "#000000",
            alpha,
        );
    }
    surface.fill_rounded_rect(
        term.x + CONTACT_SHADOW_OFFSET,
        term.y + CONTACT_SHADOW_OFFSET,
        term.width,
        term.height,
        config.terminal_radius,
        "#000000",
        CONTACT_SHADOW_ALPHA,
    );
    surface.fill_rounded_rect(
        term.x,
        term.y,
        term.width,
        term.height,
        config.terminal_radius,
        TERMINAL_FILL,
        1.0,
    );

    let cy = controls_y(config);
    let spacing = config.control_button_spacing + CONTROL_SPACING_EXTRA;
    for (index, color) in CONTROL_COLORS.iter().enumerate() {
        let cx = term.x + config.control_button_radius + CONTROLS_INSET + index as f32 * spacing;
        surface.fill_circle(cx, cy, config.control_button_radius, color);
    }
    Ok(())
}
