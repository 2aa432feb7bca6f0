use leptos::{html, prelude::*};

use crate::content::{self, NavTarget, Percent, SKILLS};
use crate::icons::Icon;
use crate::motion::{Motion, Trigger, SKILL_FILL};

use super::components::SectionHeader;
use super::icon::IconView;
use super::reveal::{use_reveal, Reveal};

#[component]
pub fn AboutSection() -> impl IntoView {
    view! {
        <section id=NavTarget::About.id() class="py-24 relative overflow-hidden bg-slate-950">
            <div class="container mx-auto px-6">
                <SectionHeader title="The Narrative" subtitle="From Code to Strategy" />

                <div class="grid md:grid-cols-2 gap-16 items-center mt-16">
                    <Reveal
                        motion=Motion::slide_in(-50.0)
                        class="space-y-6 text-lg text-slate-400 leading-relaxed"
                    >
                        <p>
                            "My journey began in the trenches of "
                            <span class="text-white font-semibold">"Carrier R&D"</span>
                            ", where I was selected for the highly competitive Engineering Leadership Program (ELP)."
                        </p>
                        <p>
                            "I discovered that my superpower wasn't just writing code, it was understanding the "
                            <span class="text-cyan-400 font-semibold italic">"\"Why\""</span>
                            " behind it. I have a track record of transforming complex technical requirements into high-value outcomes, from scaling AI tools to "
                            <span class="text-white font-semibold">"550+ developers"</span>
                            " to leading high-stakes migrations for "
                            <span class="text-purple-400 font-semibold">"$3T clients"</span> "."
                        </p>
                        <p>
                            "Now at IIM Lucknow, I am fusing this technical rigor with business strategy to build products that don't just work, but "
                            <span class="text-white font-semibold">"win"</span> "."
                        </p>
                    </Reveal>

                    <Reveal
                        motion=Motion::slide_in(50.0)
                        class="bg-slate-900/50 p-8 rounded-3xl border border-white/5 backdrop-blur-sm shadow-xl"
                    >
                        <h4 class="text-white font-bold mb-6 flex items-center gap-2">
                            <IconView icon=Icon::Cpu size=20 class="text-cyan-400" />
                            "Core Competencies"
                        </h4>
                        <div class="space-y-6">
                            {SKILLS.iter().map(|skill| view! { <SkillBar skill /> }).collect_view()}
                        </div>
                    </Reveal>
                </div>
            </div>
        </section>
    }
}

/// Inline style of a skill bar, empty until its track has been seen.
fn skill_bar_style(percent: Percent, filled: bool) -> String {
    let width = if filled {
        percent.width_style()
    } else {
        "0%".to_string()
    };
    format!("width: {width}; transition: {};", SKILL_FILL.css(&["width"]))
}

#[component]
fn SkillBar(skill: &'static content::SkillLevel) -> impl IntoView {
    let track = NodeRef::<html::Div>::new();
    let filled = use_reveal(track, Trigger::ViewportOnce);

    view! {
        <div class="space-y-2">
            <div class="flex justify-between text-sm">
                <span class="text-slate-300 font-medium">{skill.label}</span>
                <span class="text-slate-500 font-mono">{skill.percent.width_style()}</span>
            </div>
            <div
                node_ref=track
                role="progressbar"
                aria-label=skill.label
                aria-valuemin="0"
                aria-valuemax="100"
                aria-valuenow=skill.percent.get().to_string()
                class="h-2 bg-slate-800 rounded-full overflow-hidden"
            >
                <div
                    class=format!(
                        "h-full {} rounded-full shadow-[0_0_10px_rgba(0,0,0,0.5)]",
                        skill.color,
                    )
                    style=move || skill_bar_style(skill.percent, filled.get())
                />
            </div>
        </div>
    }
}
