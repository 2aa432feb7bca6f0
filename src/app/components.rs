use leptos::prelude::*;

use crate::motion::Motion;

use super::reveal::Reveal;

#[component]
pub fn SectionHeader(title: &'static str, subtitle: &'static str) -> impl IntoView {
    view! {
        <div class="text-center space-y-3">
            <Reveal motion=Motion::header_line(0.0)>
                <h2 class="text-cyan-400 font-bold tracking-widest uppercase text-xs">
                    {subtitle}
                </h2>
            </Reveal>
            <Reveal motion=Motion::header_line(0.1)>
                <h3 class="text-3xl md:text-5xl font-bold text-white tracking-tight">{title}</h3>
            </Reveal>
            <Reveal
                motion=Motion::underline()
                class="w-24 h-1 bg-gradient-to-r from-cyan-500 to-purple-500 mx-auto rounded-full mt-4"
            >
                ""
            </Reveal>
        </div>
    }
}
