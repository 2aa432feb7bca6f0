//! Transient UI state for the page.
//!
//! Both states are plain values so their rules can be checked without a
//! browser. Components own them inside signals and are their only writers.

/// Scroll offset (px) past which the navigation bar turns opaque.
pub const SCROLL_THRESHOLD: f64 = 50.0;

/// Viewport width (px) at which the layout switches from mobile to desktop.
pub const MOBILE_BREAKPOINT_PX: u32 = 768;

/// Media query matching the desktop layout, kept in step with tailwind's `md`.
pub const DESKTOP_QUERY: &str = "(min-width: 768px)";

pub fn is_past_threshold(offset: f64) -> bool {
    offset > SCROLL_THRESHOLD
}

/// Fraction of the scrollable distance already travelled, in `[0, 1]`.
///
/// A document that fits in the viewport has no scrollable distance and
/// reports `0`.
pub fn scroll_progress(offset: f64, scroll_height: f64, viewport_height: f64) -> f64 {
    let scrollable = scroll_height - viewport_height;
    if scrollable.is_nan() || scrollable <= 0.0 || !offset.is_finite() {
        return 0.0;
    }
    (offset / scrollable).clamp(0.0, 1.0)
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScrollState {
    offset: f64,
    progress: f64,
}

impl ScrollState {
    pub fn measure(offset: f64, scroll_height: f64, viewport_height: f64) -> Self {
        Self {
            offset,
            progress: scroll_progress(offset, scroll_height, viewport_height),
        }
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    pub fn progress(&self) -> f64 {
        self.progress
    }

    pub fn is_past_threshold(&self) -> bool {
        is_past_threshold(self.offset)
    }
}

/// Open/closed flag of the mobile overlay menu.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_is_strict() {
        assert!(!is_past_threshold(0.0));
        assert!(!is_past_threshold(50.0));
        assert!(is_past_threshold(50.5));
        assert!(is_past_threshold(120.0));
    }

    #[test]
    fn test_threshold_crossing_both_ways() {
        let below = ScrollState::measure(10.0, 3000.0, 800.0);
        let above = ScrollState::measure(120.0, 3000.0, 800.0);
        let back = ScrollState::measure(49.0, 3000.0, 800.0);
        assert!(!below.is_past_threshold());
        assert!(above.is_past_threshold());
        assert!(!back.is_past_threshold());
    }

    #[test]
    fn test_initial_state() {
        let scroll = ScrollState::default();
        let menu = MenuState::default();
        assert_eq!(scroll.offset(), 0.0);
        assert!(!scroll.is_past_threshold());
        assert!(!menu.is_open());
    }

    #[test]
    fn test_restored_offset_measures_past_threshold() {
        // a reload deep in the page, before any scroll event
        let restored = ScrollState::measure(900.0, 4000.0, 800.0);
        assert_ne!(restored, ScrollState::default());
        assert!(restored.is_past_threshold());
        assert_eq!(restored.offset(), 900.0);
        assert!((restored.progress() - 900.0 / 3200.0).abs() < 1e-9);
    }

    #[test]
    fn test_scroll_progress_clamped() {
        assert_eq!(scroll_progress(0.0, 2000.0, 1000.0), 0.0);
        assert_eq!(scroll_progress(500.0, 2000.0, 1000.0), 0.5);
        assert_eq!(scroll_progress(1000.0, 2000.0, 1000.0), 1.0);
        // overscroll on touch devices
        assert_eq!(scroll_progress(1200.0, 2000.0, 1000.0), 1.0);
        assert_eq!(scroll_progress(-40.0, 2000.0, 1000.0), 0.0);
    }

    #[test]
    fn test_scroll_progress_without_scrollable_distance() {
        assert_eq!(scroll_progress(0.0, 800.0, 800.0), 0.0);
        assert_eq!(scroll_progress(10.0, 600.0, 800.0), 0.0);
        assert_eq!(scroll_progress(f64::NAN, 2000.0, 800.0), 0.0);
    }

    #[test]
    fn test_menu_toggle_round_trip() {
        for start in [MenuState::default(), MenuState { open: true }] {
            let mut menu = start;
            menu.toggle();
            assert_ne!(menu, start);
            menu.toggle();
            assert_eq!(menu, start);
        }
    }

    #[test]
    fn test_desktop_query_matches_breakpoint() {
        assert_eq!(
            DESKTOP_QUERY,
            format!("(min-width: {}px)", MOBILE_BREAKPOINT_PX)
        );
    }

    #[test]
    fn test_menu_close() {
        let mut menu = MenuState::default();
        menu.toggle();
        assert!(menu.is_open());
        menu.close();
        assert!(!menu.is_open());
        // closing a closed menu leaves it closed
        menu.close();
        assert!(!menu.is_open());
    }
}
