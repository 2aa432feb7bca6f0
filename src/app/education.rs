use leptos::prelude::*;

use crate::content::{EducationEntry, NavTarget, EDUCATION};
use crate::icons::Icon;

use super::components::SectionHeader;
use super::icon::IconView;

#[component]
pub fn EducationSection() -> impl IntoView {
    view! {
        <section
            id=NavTarget::Education.id()
            class="py-24 bg-gradient-to-b from-slate-900 to-slate-950"
        >
            <div class="container mx-auto px-6">
                <SectionHeader title="Education" subtitle="Academic Foundation" />

                <div class="mt-12 flex flex-col lg:flex-row gap-8 justify-center items-stretch">
                    {EDUCATION.iter().map(|entry| view! { <EducationCard entry /> }).collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn EducationCard(entry: &'static EducationEntry) -> impl IntoView {
    view! {
        <div class=format!(
            "bg-slate-900 p-8 rounded-2xl w-full max-w-lg border-l-4 {} shadow-lg relative overflow-hidden transition-transform hover:scale-[1.02]",
            entry.accent,
        )>
            <div class="absolute right-0 top-0 p-32 bg-white/5 rounded-full blur-3xl -translate-y-1/2 translate-x-1/2" />

            <div class="flex items-start gap-5 relative z-10">
                <div class="p-3 bg-white/5 rounded-xl text-white">
                    <IconView icon=Icon::GraduationCap size=28 />
                </div>
                <div>
                    <h3 class="text-2xl font-bold text-white">{entry.institution}</h3>
                    <p class="text-cyan-400 font-medium text-sm mt-1">{entry.degree}</p>
                    <div class="flex items-center gap-2 mt-2 mb-4">
                        <span class="text-slate-500 text-xs px-2 py-1 bg-white/5 rounded">
                            {entry.year_range}
                        </span>
                    </div>
                    <p class="text-slate-400 text-sm leading-relaxed">{entry.details}</p>
                </div>
            </div>
        </div>
    }
}
