use leptos::{either::Either, prelude::*};

use crate::content::{self, NavTarget, PROJECTS};
use crate::icons::Icon;

use super::components::SectionHeader;
use super::icon::IconView;

const CARD_CLASS: &str = "bg-slate-900 border border-white/5 rounded-2xl p-8 hover:border-cyan-500/50 transition-all group relative overflow-hidden flex flex-col h-full hover:-translate-y-2.5";

#[component]
pub fn ImpactSection() -> impl IntoView {
    view! {
        <section id=NavTarget::Impact.id() class="py-24 relative overflow-hidden">
            <div class="absolute top-1/4 left-0 w-96 h-96 bg-purple-900/10 rounded-full blur-3xl -z-10" />
            <div class="absolute bottom-1/4 right-0 w-96 h-96 bg-cyan-900/10 rounded-full blur-3xl -z-10" />

            <div class="container mx-auto px-6">
                <SectionHeader title="Research & Innovation" subtitle="Beyond Corporate Work" />

                <div class="mt-16 grid md:grid-cols-2 lg:grid-cols-3 gap-8">
                    {PROJECTS.iter().map(|card| view! { <ProjectCard card /> }).collect_view()}
                </div>
            </div>
        </section>
    }
}

/// A project card; an outbound anchor when the project has a link, a plain
/// block otherwise.
#[component]
fn ProjectCard(card: &'static content::ProjectCard) -> impl IntoView {
    let body = view! {
        <div class="absolute -right-10 -top-10 w-32 h-32 bg-cyan-500/10 rounded-full blur-3xl group-hover:bg-cyan-500/20 transition-all" />

        <div class="mb-6 flex justify-between items-start">
            <div class="p-3 bg-white/5 rounded-xl text-cyan-400 group-hover:bg-cyan-500 group-hover:text-white transition-colors">
                <IconView icon=card.icon size=20 />
            </div>
        </div>

        <div class="text-xs font-bold text-cyan-400 uppercase tracking-widest mb-2">
            {card.category}
        </div>
        <h3 class="text-2xl font-bold text-white mb-4 group-hover:text-cyan-400 transition-colors">
            {card.title}
        </h3>
        <p class="text-slate-400 mb-8 leading-relaxed text-sm flex-grow">{card.description}</p>

        <div class="flex flex-wrap gap-2 mt-auto">
            {card
                .stats
                .iter()
                .map(|stat| {
                    view! {
                        <span class="px-3 py-1 bg-slate-800 rounded-md text-xs text-slate-300 border border-white/5 font-medium">
                            {*stat}
                        </span>
                    }
                })
                .collect_view()}
        </div>
    };

    match card.link {
        Some(href) => Either::Left(view! {
            <a href=href target="_blank" rel="noopener noreferrer" class=format!("{CARD_CLASS} cursor-pointer")>
                <IconView
                    icon=Icon::ExternalLink
                    size=18
                    class="absolute top-8 right-8 text-slate-600 group-hover:text-white transition-colors opacity-0 group-hover:opacity-100"
                />
                {body}
            </a>
        }),
        None => Either::Right(view! { <div class=CARD_CLASS>{body}</div> }),
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;

    fn render(title: &str) -> String {
        let card = PROJECTS
            .iter()
            .find(|p| p.title == title)
            .expect("card should exist");
        Owner::new().with(|| view! { <ProjectCard card /> }.to_html())
    }

    #[test]
    fn test_card_without_link_is_not_an_anchor() {
        let html = render("GoI ULIP Dashboard");
        assert!(html.contains("GoI ULIP Dashboard"));
        assert!(!html.contains("<a"));
        assert!(!html.contains("href"));
        assert!(!html.contains("target=\"_blank\""));
    }

    #[test]
    fn test_card_with_link_opens_new_context() {
        let html = render("Cassava Leaf Disease Detection");
        assert!(html.contains("<a "));
        assert!(html.contains(
            "href=\"https://link.springer.com/chapter/10.1007/978-981-19-8742-7_15\""
        ));
        assert!(html.contains("target=\"_blank\""));
        assert!(html.contains("rel=\"noopener noreferrer\""));
    }
}
