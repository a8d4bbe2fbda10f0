//! Common UI utilities.

use egui::gui_zoom::kb_shortcuts;
use egui::{Context, KeyboardShortcut};

/// Whether `shortcut` was pressed this frame. The key press is consumed so
/// nothing else reacts to it.
pub fn shortcut_pressed(ctx: &Context, shortcut: &KeyboardShortcut) -> bool {
    ctx.input_mut(|i| i.consume_shortcut(shortcut))
}

/// How much each zoom shortcut press changes the zoom factor.
const ZOOM_STEP: f32 = 0.1;

/// Handles the zoom in/out shortcuts, keeping the zoom factor within
/// `min..=max`. Whether the zoom changed is returned.
///
/// Zoom shortcuts are handled by [egui] itself unless
/// `zoom_with_keyboard` is turned off, so call this after doing that. The new
/// zoom is applied on the next frame.
pub fn handle_zoom_shortcuts(ctx: &Context, min: f32, max: f32) -> bool {
    let (zoom_in, zoom_out) = ctx.input_mut(|i| {
        (
            i.consume_shortcut(&kb_shortcuts::ZOOM_IN)
                | i.consume_shortcut(&kb_shortcuts::ZOOM_IN_SECONDARY),
            i.consume_shortcut(&kb_shortcuts::ZOOM_OUT),
        )
    });

    let current = ctx.zoom_factor();
    let target = match (zoom_in, zoom_out) {
        (true, false) => current + ZOOM_STEP,
        (false, true) => current - ZOOM_STEP,
        _ => return false,
    }
    .clamp(min, max);

    if (target - current).abs() < f32::EPSILON {
        return false;
    }
    ctx.set_zoom_factor(target);
    true
}
