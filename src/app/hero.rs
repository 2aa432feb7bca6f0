use leptos::prelude::*;

use crate::content::{self, NavTarget, PROFILE, STAT_TILES};
use crate::icons::Icon;
use crate::motion::{stagger_delay, Motion, HERO_STAGGER_STEP};

use super::icon::IconView;
use super::reveal::Reveal;
use super::scroll::scroll_to_section;

/// Entrance of the `index`th line in the hero copy cascade.
fn cascade(index: usize) -> Motion {
    Motion::fade_in_up(stagger_delay(0.0, HERO_STAGGER_STEP, index))
}

#[component]
pub fn HeroSection() -> impl IntoView {
    view! {
        <section class="relative min-h-screen flex items-center justify-center pt-20">
            <div class="container mx-auto px-6 grid lg:grid-cols-2 gap-12 items-center">
                <div class="space-y-8 z-10">
                    <Reveal
                        motion=cascade(0)
                        class="inline-flex items-center gap-2 px-4 py-2 rounded-full bg-cyan-500/10 border border-cyan-500/20 text-cyan-400 text-sm font-medium hover:bg-cyan-500/20 transition-colors cursor-default backdrop-blur-sm"
                    >
                        <span class="relative flex h-2 w-2">
                            <span class="animate-ping absolute inline-flex h-full w-full rounded-full bg-cyan-400 opacity-75"></span>
                            <span class="relative inline-flex rounded-full h-2 w-2 bg-cyan-500"></span>
                        </span>
                        "MBA @ IIM Lucknow | B.Tech(CSE) @ NIT Andhra Pradesh"
                    </Reveal>

                    <Reveal motion=cascade(1)>
                        <h1 class="text-5xl lg:text-7xl font-bold leading-tight tracking-tight">
                            "Product Strategy " <br />
                            <span class="text-transparent bg-clip-text bg-gradient-to-r from-cyan-400 via-purple-400 to-pink-400 animate-gradient-x">
                                "Meets Innovation"
                            </span>
                        </h1>
                    </Reveal>

                    <Reveal motion=cascade(2) class="space-y-2">
                        <h2 class="text-xl md:text-2xl text-slate-300 font-light">
                            "Hello, I'm " <span class="font-semibold text-white">{PROFILE.name}</span>
                            "!"
                        </h2>
                    </Reveal>

                    <Reveal motion=cascade(3)>
                        <p class="text-xl text-slate-400 max-w-lg leading-relaxed border-l-2 border-slate-800 pl-6">
                            "Bridging the gap between " <b>"$1M engineering efficiencies"</b>
                            " and strategic business outcomes. Ex-Senior Engineer @ Carrier (ELP)."
                        </p>
                    </Reveal>

                    <Reveal motion=cascade(4) class="flex flex-wrap gap-4">
                        <a
                            href=NavTarget::Experience.href()
                            class="px-8 py-4 rounded-full bg-gradient-to-r from-cyan-600 to-blue-600 text-white font-semibold hover:shadow-lg hover:shadow-cyan-500/25 transition-all flex items-center gap-2 group transform hover:-translate-y-1"
                        >
                            "View My Work"
                            <IconView
                                icon=Icon::ArrowRight
                                class="group-hover:translate-x-1 transition-transform"
                            />
                        </a>
                        <a
                            href=PROFILE.mailto()
                            class="px-8 py-4 rounded-full bg-slate-800 text-slate-200 font-semibold hover:bg-slate-700 transition-all border border-slate-700 hover:border-slate-600 transform hover:-translate-y-1"
                        >
                            "Contact Me"
                        </a>
                    </Reveal>
                </div>

                <Reveal
                    motion=Motion::hero_visual()
                    class="relative hidden lg:flex justify-center items-center"
                >
                    <div class="relative w-full max-w-md aspect-square">
                        <div class="absolute inset-0 rounded-full border border-dashed border-slate-700 opacity-20 animate-spin-slow" />
                        <div class="absolute inset-0 bg-gradient-to-tr from-cyan-500/10 to-purple-500/10 rounded-full blur-3xl" />
                        <div class="relative z-10 grid grid-cols-2 gap-4">
                            {STAT_TILES.iter().map(|tile| view! { <StatTile tile /> }).collect_view()}
                        </div>
                    </div>
                </Reveal>
            </div>

            <button
                class="absolute bottom-10 text-slate-500 flex flex-col items-center gap-2 cursor-pointer hover:text-cyan-400 transition-colors animate-bob"
                on:click=move |_| scroll_to_section(NavTarget::About)
            >
                <span class="text-xs uppercase tracking-widest opacity-50">"Scroll"</span>
                <IconView icon=Icon::ChevronDown />
            </button>
        </section>
    }
}

#[component]
fn StatTile(tile: &'static content::StatTile) -> impl IntoView {
    view! {
        <Reveal motion=Motion::stat_tile(tile.delay)>
            <div class="bg-slate-900/80 backdrop-blur-xl p-6 rounded-2xl border border-white/5 shadow-xl hover:shadow-cyan-500/10 transition-all border-l-2 border-l-cyan-500 hover:-translate-y-1 hover:scale-105">
                <div class="mb-3 p-2 bg-white/5 rounded-lg inline-block">
                    <IconView icon=tile.icon class=tile.icon_class />
                </div>
                <div class="text-3xl font-bold text-white tracking-tight">{tile.value}</div>
                <div class="text-xs text-slate-400 uppercase tracking-wider font-semibold mt-1">
                    {tile.label}
                </div>
                <div class="text-xs text-slate-500 mt-2 border-t border-white/5 pt-2">
                    {tile.subtext}
                </div>
            </div>
        </Reveal>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cascade_steps() {
        let delays = (0..5)
            .map(|i| cascade(i).transition.delay)
            .collect::<Vec<_>>();
        assert_eq!(delays[0], 0.0);
        assert!((delays[4] - 4.0 * HERO_STAGGER_STEP).abs() < 1e-9);
        assert!(delays.windows(2).all(|w| w[0] < w[1]));
    }

    #[cfg(feature = "ssr")]
    #[test]
    fn test_hero_renders_in_starting_pose() {
        let html = Owner::new().with(|| view! { <HeroSection /> }.to_html());
        assert!(html.contains("opacity: 0;"));
        assert!(!html.contains("opacity: 1;"));
        for tile in STAT_TILES {
            assert!(html.contains(tile.label));
        }
        assert!(html.contains("mailto:hrishikeshkumar16@gmail.com"));
    }
}
