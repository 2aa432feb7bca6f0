use leptos::prelude::*;

use crate::content::{Alignment, NavTarget, TimelineEntry, TIMELINE};
use crate::motion::Motion;

use super::components::SectionHeader;
use super::icon::IconView;
use super::reveal::Reveal;

/// Desktop classes placing an entry on its side of the spine.
///
/// Mobile stacks every entry to the right of a left-hand rail, so only the
/// `md:` classes differ between sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct SideLayout {
    row: &'static str,
    content: &'static str,
    tags: &'static str,
    list: &'static str,
}

fn side_layout(alignment: Alignment) -> SideLayout {
    match alignment {
        Alignment::Left => SideLayout {
            row: "md:flex-row-reverse",
            content: "md:pr-16 md:text-right",
            tags: "md:justify-end",
            list: "md:items-end",
        },
        Alignment::Right => SideLayout {
            row: "md:flex-row",
            content: "md:pl-16 text-left",
            tags: "",
            list: "items-start",
        },
    }
}

#[component]
pub fn ExperienceSection() -> impl IntoView {
    view! {
        <section id=NavTarget::Experience.id() class="py-24 bg-slate-900/30 relative">
            <div class="container mx-auto px-6">
                <SectionHeader title="Career Trajectory" subtitle="Engineering Impact & Leadership" />
                <ExperienceTimeline entries=TIMELINE />
            </div>
        </section>
    }
}

/// Entries along a vertical spine, in the order given.
#[component]
pub fn ExperienceTimeline(entries: &'static [TimelineEntry]) -> impl IntoView {
    view! {
        <div class="mt-20 space-y-12 relative">
            <div class="hidden md:block absolute left-1/2 top-0 bottom-0 w-px bg-gradient-to-b from-transparent via-cyan-900/50 to-transparent -translate-x-1/2" />
            {entries.iter().map(|entry| view! { <TimelineItem entry /> }).collect_view()}
        </div>
    }
}

#[component]
fn TimelineItem(entry: &'static TimelineEntry) -> impl IntoView {
    let side = side_layout(entry.alignment);
    view! {
        <Reveal
            motion=Motion::timeline_entry(entry.delay)
            class=format!(
                "relative flex flex-col {} items-center justify-between mb-8 md:mb-0 group w-full",
                side.row,
            )
        >
            // pushes the content to its side on desktop
            <div class="hidden md:block w-5/12" />

            <div class="absolute left-4 md:left-1/2 w-12 h-12 md:-ml-6 rounded-full border-4 border-slate-950 bg-slate-800 flex items-center justify-center text-cyan-400 z-10 group-hover:bg-cyan-500 group-hover:text-white transition-all shadow-lg shadow-black/50">
                <IconView icon=entry.icon size=20 />
            </div>

            <div class=format!("w-full pl-20 md:pl-0 md:w-5/12 {}", side.content)>
                <div class="bg-slate-900 border border-white/5 p-8 rounded-2xl hover:border-cyan-500/30 transition-colors relative overflow-hidden group/card">
                    <div class="absolute inset-0 bg-gradient-to-br from-cyan-500/5 to-purple-500/5 opacity-0 group-hover/card:opacity-100 transition-opacity" />

                    <span class="text-cyan-400 text-xs font-bold tracking-widest uppercase mb-2 block">
                        {entry.date_range}
                    </span>
                    <h4 class="text-2xl font-bold text-white mb-1">{entry.role}</h4>
                    <h5 class="text-slate-400 text-sm font-medium mb-4">{entry.company}</h5>

                    <div class=format!("flex flex-wrap gap-2 mb-4 {}", side.tags)>
                        {entry
                            .tags
                            .iter()
                            .map(|tag| {
                                view! {
                                    <span class="text-xs px-2 py-1 rounded bg-white/5 text-slate-300 border border-white/5">
                                        {*tag}
                                    </span>
                                }
                            })
                            .collect_view()}
                    </div>

                    <p class="text-slate-400 text-sm mb-4 italic border-l-2 border-slate-700 pl-4 bg-white/5 py-2 rounded-r-md">
                        {entry.summary}
                    </p>
                    <ul class=format!("space-y-3 text-sm text-slate-300 {} flex flex-col", side.list)>
                        {entry
                            .achievements
                            .iter()
                            .map(|achievement| {
                                view! {
                                    <li class="flex gap-3">
                                        <span class="text-cyan-500 mt-1 min-w-[6px]">"•"</span>
                                        <span class="leading-relaxed">{*achievement}</span>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </div>
            </div>
        </Reveal>
    }
}
