//! Scroll-Zoom auf Mausposition.

use super::{screen_pos_to_local, InputState, ViewportContext};
use crate::app::AppIntent;

impl InputState {
    /// Verarbeitet Scroll-Zoom auf die aktuelle Mausposition.
    pub(crate) fn handle_scroll_zoom(&self, ctx: &ViewportContext, events: &mut Vec<AppIntent>) {
        let scroll = ctx.ui.input(|i| i.smooth_scroll_delta.y);
        if scroll == 0.0 {
            return;
        }
        let Some(hover) = ctx.response.hover_pos() else {
            return;
        };

        events.push(AppIntent::CameraZoom {
            scroll_delta: scroll as f64,
            cursor: screen_pos_to_local(hover, ctx.response),
        });
    }
}
