use leptos::{html, prelude::*};
use leptos_use::{
    use_element_visibility, use_intersection_observer, UseIntersectionObserverReturn,
};

use crate::motion::{Motion, RevealLatch, Trigger};

/// Tracks whether a reveal bound to `target` has fired.
///
/// Observers come from `leptos-use` and are dropped with the owning
/// component. A one-shot reveal disconnects its observer as soon as it
/// fires. Nothing fires during server rendering, so the page ships in its
/// starting poses and animates after hydration.
pub fn use_reveal(target: NodeRef<html::Div>, trigger: Trigger) -> Signal<bool> {
    match trigger {
        Trigger::Mount => {
            let (fired, set_fired) = signal(false);
            Effect::new(move |_| set_fired.set(true));
            fired.into()
        }
        Trigger::ViewportOnce => {
            let latch = RwSignal::new(RevealLatch::default());
            let UseIntersectionObserverReturn { stop, .. } =
                use_intersection_observer(target, move |entries, _| {
                    let visible = entries.last().is_some_and(|e| e.is_intersecting());
                    if !visible || latch.get_untracked().is_fired() {
                        return;
                    }
                    latch.update(|l| {
                        if l.observe(visible) {
                            log::debug!("reveal latched");
                        }
                    });
                });
            // nothing left to observe once fired
            Effect::new(move |_| {
                if latch.get().is_fired() {
                    stop();
                }
            });
            Signal::derive(move || latch.get().is_fired())
        }
        Trigger::Viewport => use_element_visibility(target),
    }
}

/// Wraps `children` in a block that animates from `motion.from` to
/// `motion.to` when its trigger fires.
#[component]
pub fn Reveal(
    motion: Motion,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let el = NodeRef::<html::Div>::new();
    let fired = use_reveal(el, motion.trigger);
    view! {
        <div node_ref=el class=class style=move || motion.style(fired.get())>
            {children()}
        </div>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;

    #[test]
    fn test_viewport_once_reveal_ships_hidden() {
        let motion = Motion::slide_in(-50.0);
        let html = Owner::new().with(|| {
            view! {
                <Reveal motion>
                    <p>"content"</p>
                </Reveal>
            }
            .to_html()
        });
        assert!(html.contains(&motion.style(false)));
        assert!(!html.contains(&motion.style(true)));
        assert!(html.contains("content"));
    }
}
