use leptos::{ev, prelude::*};
use leptos_use::{use_event_listener, use_window};
use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollToOptions};

use crate::content::NavTarget;
use crate::state::ScrollState;

/// Window scroll position, measured on mount and refreshed on every `scroll`
/// event.
///
/// Call this once per page and hand the signal to every reader. The listener
/// is registered when the calling component mounts and removed when it is
/// cleaned up.
pub fn use_scroll_state() -> Signal<ScrollState> {
    let (state, set_state) = signal(ScrollState::default());
    let _ = use_event_listener(use_window(), ev::scroll, move |_| {
        if let Some(measured) = measure_window() {
            set_state.set(measured);
        }
    });
    // a reload or deep link can hydrate an already scrolled page
    Effect::new(move |_| {
        if let Some(target) = linked_section() {
            log::debug!("opened at section {}", target.label());
        }
        if let Some(measured) = measure_window() {
            set_state.set(measured);
        }
    });
    state.into()
}

/// Section named by the URL fragment, if any.
fn linked_section() -> Option<NavTarget> {
    let hash = window().location().hash().ok()?;
    if hash.is_empty() {
        return None;
    }
    match hash.parse::<NavTarget>() {
        Ok(target) => Some(target),
        Err(e) => {
            log::debug!("{e}");
            None
        }
    }
}

fn measure_window() -> Option<ScrollState> {
    let window = window();
    let offset = match window.scroll_y() {
        Ok(offset) => offset,
        Err(e) => {
            log::debug!("Couldn't read scroll offset: {e:?}");
            return None;
        }
    };
    let viewport_height = window.inner_height().ok()?.as_f64()?;
    let scroll_height = document().document_element()?.scroll_height() as f64;
    Some(ScrollState::measure(offset, scroll_height, viewport_height))
}

pub fn scroll_to_top() {
    let opts = ScrollToOptions::new();
    opts.set_top(0.0);
    opts.set_behavior(ScrollBehavior::Smooth);
    window().scroll_to_with_scroll_to_options(&opts);
}

pub fn scroll_to_section(target: NavTarget) {
    let el = if let Some(el) = document().get_element_by_id(target.id()) {
        el
    } else {
        log::warn!("No element with id {}, not scrolling", target.id());
        return;
    };
    let opts = ScrollIntoViewOptions::new();
    opts.set_behavior(ScrollBehavior::Smooth);
    el.scroll_into_view_with_scroll_into_view_options(&opts);
}
