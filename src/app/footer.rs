use leptos::prelude::*;

use crate::content::{self, PROFILE, SOCIAL_LINKS};
use crate::motion::Motion;

use super::icon::IconView;
use super::reveal::Reveal;

/// Year the site was built, stamped by `build.rs`.
const BUILD_YEAR: &str = env!("BUILD_YEAR");

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="py-12 border-t border-white/5 bg-slate-950 relative overflow-hidden">
            <div class="container mx-auto px-6 flex flex-col items-center text-center relative z-10">
                <Reveal motion=Motion::footer_callout() class="mb-8">
                    <h2 class="text-3xl font-bold bg-gradient-to-r from-cyan-400 to-purple-400 bg-clip-text text-transparent mb-4">
                        "Let's Build Something Extraordinary."
                    </h2>
                    <p class="text-slate-400 max-w-md mx-auto">
                        "Open to Product Management and Strategy opportunities."
                    </p>
                </Reveal>

                <div class="flex gap-6 mb-12">
                    {SOCIAL_LINKS.iter().map(|link| view! { <SocialLink link /> }).collect_view()}
                </div>

                <p class="text-slate-600 text-sm">
                    {format!("© {BUILD_YEAR} {}.", PROFILE.name)}
                </p>
            </div>
        </footer>
    }
}

#[component]
fn SocialLink(link: &'static content::SocialLink) -> impl IntoView {
    view! {
        <a
            href=link.href
            target="_blank"
            rel="noopener noreferrer"
            title=link.label
            aria-label=link.label
            class="w-12 h-12 rounded-full bg-slate-900 border border-white/10 flex items-center justify-center text-slate-400 hover:bg-cyan-500 hover:text-white hover:border-cyan-400 hover:scale-110 hover:rotate-6 transition-all shadow-lg"
        >
            <IconView icon=link.icon size=20 />
        </a>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;

    #[test]
    fn test_footer_links_and_year() {
        let html = Owner::new().with(|| view! { <Footer /> }.to_html());
        for link in SOCIAL_LINKS {
            assert!(html.contains(link.href));
        }
        assert_eq!(html.matches("target=\"_blank\"").count(), SOCIAL_LINKS.len());
        assert!(html.contains(BUILD_YEAR));
        assert!(BUILD_YEAR.parse::<u32>().is_ok());
    }
}
