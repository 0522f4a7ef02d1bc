//! Keeps a clicked tab bar at the same viewport position while sibling
//! groups above it re-render and change height.
//!
//! Two phases: [`ScrollAnchor::arm`] before the selection is written, then
//! [`ScrollAnchor::settle`] once layout has settled.

use leptos::html::Div;
use leptos::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum ScrollAnchor {
    #[default]
    Idle,
    /// Viewport offset of the tab bar captured before the change.
    Pending { offset: f64 },
}

impl ScrollAnchor {
    pub fn arm(&mut self, offset: f64) {
        *self = ScrollAnchor::Pending { offset };
    }

    /// Disarm and return how far the element moved, if armed.
    pub fn settle(&mut self, new_offset: f64) -> Option<f64> {
        match std::mem::take(self) {
            ScrollAnchor::Pending { offset } => Some(new_offset - offset),
            ScrollAnchor::Idle => None,
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, ScrollAnchor::Pending { .. })
    }
}

/// Vertical offset of the element relative to the viewport.
pub fn viewport_offset(node: NodeRef<Div>) -> Option<f64> {
    node.get_untracked()
        .map(|el| el.get_bounding_client_rect().y())
}

/// Scroll the window vertically by `delta` pixels.
pub fn scroll_window_by(delta: f64) {
    if delta == 0.0 {
        return;
    }
    if let Some(window) = web_sys::window() {
        let x = window.scroll_x().unwrap_or(0.0);
        let y = window.scroll_y().unwrap_or(0.0);
        window.scroll_to_with_x_and_y(x, y + delta);
    }
}

/// Arm `anchor` with the current position of `node`.
pub fn capture(anchor: StoredValue<ScrollAnchor>, node: NodeRef<Div>) {
    if let Some(offset) = viewport_offset(node) {
        anchor.update_value(|a| a.arm(offset));
    }
}

/// On the next animation frame, compensate for any movement of `node` and
/// disarm `anchor`.
pub fn restore_after_layout(anchor: StoredValue<ScrollAnchor>, node: NodeRef<Div>) {
    if !anchor.with_value(ScrollAnchor::is_pending) {
        return;
    }
    request_animation_frame(move || {
        let Some(new_offset) = viewport_offset(node) else {
            anchor.set_value(ScrollAnchor::Idle);
            return;
        };
        let delta = anchor.try_update_value(|a| a.settle(new_offset)).flatten();
        if let Some(delta) = delta {
            log::debug!("code tabs: compensating layout shift of {}px", delta);
            scroll_window_by(delta);
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_settle_is_noop() {
        let mut anchor = ScrollAnchor::default();
        assert_eq!(anchor.settle(120.0), None);
        assert_eq!(anchor, ScrollAnchor::Idle);
    }

    #[test]
    fn test_settle_returns_delta_and_disarms() {
        let mut anchor = ScrollAnchor::Idle;
        anchor.arm(300.0);
        assert!(anchor.is_pending());
        assert_eq!(anchor.settle(180.0), Some(-120.0));
        assert_eq!(anchor, ScrollAnchor::Idle);
        assert_eq!(anchor.settle(50.0), None);
    }

    #[test]
    fn test_rearm_replaces_offset() {
        let mut anchor = ScrollAnchor::Idle;
        anchor.arm(10.0);
        anchor.arm(40.0);
        assert_eq!(anchor.settle(100.0), Some(60.0));
    }
}
