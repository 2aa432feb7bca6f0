use leptos::prelude::*;
use leptos_use::use_media_query;

use crate::content::{NavTarget, PROFILE};
use crate::icons::Icon;
use crate::motion::Motion;
use crate::state::{MenuState, ScrollState, DESKTOP_QUERY, MOBILE_BREAKPOINT_PX};

use super::icon::IconView;
use super::reveal::Reveal;
use super::scroll::scroll_to_top;

const NAV_BASE: &str = "fixed w-full z-50 transition-all duration-300";
const NAV_SCROLLED: &str =
    "bg-slate-950/80 backdrop-blur-md py-4 border-b border-white/5 shadow-lg shadow-cyan-900/5";
const NAV_TOP: &str = "bg-transparent py-6";

fn nav_class(past_threshold: bool) -> String {
    let variant = if past_threshold {
        NAV_SCROLLED
    } else {
        NAV_TOP
    };
    format!("{NAV_BASE} {variant}")
}

#[component]
pub fn NavigationBar(scroll: Signal<ScrollState>) -> impl IntoView {
    let past_threshold = Memo::new(move |_| scroll.get().is_past_threshold());
    let menu = RwSignal::new(MenuState::default());
    let is_desktop = use_media_query(DESKTOP_QUERY);

    Effect::watch(
        move || past_threshold.get(),
        move |past, _, _| {
            let offset = scroll.with_untracked(|s| s.offset());
            log::debug!("navigation past scroll threshold: {past} at {offset}px");
        },
        false,
    );

    // the overlay only exists on mobile
    Effect::new(move |_| {
        if is_desktop.get() && menu.get_untracked().is_open() {
            log::debug!("viewport reached {MOBILE_BREAKPOINT_PX}px, closing menu");
            menu.update(MenuState::close);
        }
    });

    view! {
        <nav class=move || nav_class(past_threshold.get())>
            <div class="container mx-auto px-6 flex justify-between items-center">
                <Reveal motion=Motion::nav_slide(-20.0) class="z-50">
                    <button
                        class="text-2xl font-bold tracking-tighter cursor-pointer"
                        aria-label="Back to top"
                        on:click=move |_| scroll_to_top()
                    >
                        <span class="bg-gradient-to-r from-cyan-400 to-purple-400 bg-clip-text text-transparent">
                            {PROFILE.initials}
                        </span>
                    </button>
                </Reveal>

                <div class="hidden md:flex space-x-8 text-sm font-medium text-slate-300">
                    {NavTarget::ALL
                        .into_iter()
                        .map(|target| {
                            view! {
                                <a
                                    href=target.href()
                                    class="hover:text-cyan-400 transition-colors relative group"
                                >
                                    {target.label()}
                                    <span class="absolute -bottom-1 left-0 w-0 h-0.5 bg-cyan-400 transition-all duration-300 group-hover:w-full" />
                                </a>
                            }
                        })
                        .collect_view()}
                </div>

                <Reveal motion=Motion::nav_slide(20.0) class="hidden md:flex items-center gap-4">
                    <a
                        href=PROFILE.linkedin
                        target="_blank"
                        rel="noopener noreferrer"
                        class="px-5 py-2 rounded-full bg-white/5 hover:bg-white/10 border border-white/10 backdrop-blur-sm transition-all flex items-center gap-2 text-sm hover:border-cyan-500/30 group"
                    >
                        <IconView
                            icon=Icon::Linkedin
                            size=16
                            class="text-slate-400 group-hover:text-cyan-400 transition-colors"
                        />
                        <span>"Connect"</span>
                    </a>
                </Reveal>

                <button
                    class="md:hidden text-slate-300 hover:text-white z-50"
                    aria-label="Toggle menu"
                    aria-expanded=move || menu.get().is_open().to_string()
                    on:click=move |_| {
                        menu.update(MenuState::toggle);
                        log::debug!("mobile menu open: {}", menu.get_untracked().is_open());
                    }
                >
                    {move || {
                        let icon = if menu.get().is_open() { Icon::X } else { Icon::Menu };
                        view! { <IconView icon /> }
                    }}
                </button>
            </div>

            <MobileMenu menu />
        </nav>
    }
}

/// Activating an overlay link always leaves the menu closed.
fn follow_link(menu: RwSignal<MenuState>, target: NavTarget) {
    menu.update(MenuState::close);
    log::debug!("mobile menu closed via {}", target.label());
}

/// Full-width overlay listing every section, shown while `menu` is open.
#[component]
fn MobileMenu(menu: RwSignal<MenuState>) -> impl IntoView {
    view! {
        <Show when=move || menu.get().is_open()>
            <div
                id="mobile-menu"
                class="absolute top-0 left-0 w-full bg-slate-950 border-b border-white/5 overflow-hidden pt-24 pb-6 md:hidden shadow-2xl animate-menu-open"
            >
                <div class="flex flex-col px-6 space-y-4">
                    {NavTarget::ALL
                        .into_iter()
                        .map(|target| {
                            view! {
                                <a
                                    href=target.href()
                                    class="text-slate-300 hover:text-cyan-400 text-xl font-medium border-b border-white/5 pb-2"
                                    on:click=move |_| follow_link(menu, target)
                                >
                                    {target.label()}
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_variant_follows_threshold() {
        let top = nav_class(false);
        let scrolled = nav_class(true);
        assert!(top.contains("bg-transparent"));
        assert!(!top.contains("backdrop-blur-md"));
        assert!(scrolled.contains("backdrop-blur-md"));
        assert!(!scrolled.contains("bg-transparent"));
        assert!(top.starts_with(NAV_BASE) && scrolled.starts_with(NAV_BASE));
    }

    #[cfg(feature = "ssr")]
    #[test]
    fn test_initial_render_is_transparent_and_closed() {
        let html = Owner::new().with(|| {
            let scroll = Signal::stored(ScrollState::default());
            view! { <NavigationBar scroll /> }.to_html()
        });
        assert!(html.contains("bg-transparent"));
        assert!(!html.contains("mobile-menu"));
        for target in NavTarget::ALL {
            assert!(html.contains(target.href()));
            assert!(html.contains(target.label()));
        }
    }

    #[cfg(feature = "ssr")]
    #[test]
    fn test_render_at_restored_offset_is_opaque() {
        let html = Owner::new().with(|| {
            let scroll = Signal::stored(ScrollState::measure(900.0, 4000.0, 800.0));
            view! { <NavigationBar scroll /> }.to_html()
        });
        assert!(html.contains("backdrop-blur-md"));
        assert!(!html.contains("bg-transparent"));
    }

    #[cfg(feature = "ssr")]
    #[test]
    fn test_closed_menu_renders_nothing() {
        let html = Owner::new().with(|| {
            let menu = RwSignal::new(MenuState::default());
            view! { <MobileMenu menu /> }.to_html()
        });
        assert!(!html.contains("mobile-menu"));
        assert!(!html.contains("<a"));
    }

    #[cfg(feature = "ssr")]
    #[test]
    fn test_open_menu_lists_every_section() {
        let html = Owner::new().with(|| {
            let menu = RwSignal::new(MenuState::default());
            menu.update(MenuState::toggle);
            view! { <MobileMenu menu /> }.to_html()
        });
        assert!(html.contains("id=\"mobile-menu\""));
        assert_eq!(html.matches("<a ").count(), NavTarget::ALL.len());
        let mut last = 0;
        for target in NavTarget::ALL {
            let at = html
                .find(&format!("href=\"{}\"", target.href()))
                .expect("overlay should link every section");
            assert!(at > last);
            last = at;
            assert!(html.contains(target.label()));
        }
    }

    #[test]
    fn test_following_a_link_closes_the_menu() {
        Owner::new().with(|| {
            for target in NavTarget::ALL {
                let menu = RwSignal::new(MenuState::default());
                menu.update(MenuState::toggle);
                assert!(menu.get_untracked().is_open());
                follow_link(menu, target);
                assert!(!menu.get_untracked().is_open());

                // already closed stays closed
                follow_link(menu, target);
                assert!(!menu.get_untracked().is_open());
            }
        });
    }
}
