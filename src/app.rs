mod about;
mod background;
mod components;
mod education;
mod footer;
mod hero;
mod icon;
mod impact;
mod nav;
mod reveal;
mod scroll;
mod timeline;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::content::PROFILE;
use crate::seo::person_json_ld;

use about::AboutSection;
use background::BackgroundMesh;
use education::EducationSection;
use footer::Footer;
use hero::HeroSection;
use impact::ImpactSection;
use nav::NavigationBar;
use scroll::use_scroll_state;
use timeline::ExperienceSection;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    let json_ld = match person_json_ld(&PROFILE) {
        Ok(json) => json,
        Err(e) => {
            log::error!("Couldn't serialize profile schema: {e}");
            String::new()
        }
    };
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <script type="application/ld+json" inner_html=json_ld></script>
                <MetaTags />
            </head>
            <body class="font-sans">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        <Title formatter=|title| format!("{} - {title}", PROFILE.name) />
        <Meta
            name="description"
            content="Product strategy meets engineering: career timeline, research and impact of Hrishikesh Kumar."
        />

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=Page />
            </Routes>
        </Router>
    }
}

/// The whole site: every section in scroll order.
///
/// Owns the single scroll listener; the navigation bar and background only
/// read it.
#[component]
pub fn Page() -> impl IntoView {
    let scroll = use_scroll_state();
    view! {
        <Title text="Portfolio" />
        <div class="min-h-screen bg-slate-950 text-slate-100 font-sans overflow-x-hidden relative selection:bg-cyan-500 selection:text-white">
            <BackgroundMesh scroll />
            <NavigationBar scroll />
            <HeroSection />
            <AboutSection />
            <ExperienceSection />
            <ImpactSection />
            <EducationSection />
            <Footer />
        </div>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::content::NavTarget;

    #[test]
    fn test_page_sections_in_scroll_order() {
        let html = Owner::new().with(|| {
            provide_meta_context();
            view! { <Page /> }.to_html()
        });
        let mut markers = vec![
            "fixed inset-0 z-0".to_string(),
            "<nav".to_string(),
            "Meets Innovation".to_string(),
        ];
        markers.extend(NavTarget::ALL.map(|t| format!("id=\"{}\"", t.id())));
        markers.push("<footer".to_string());

        let mut last = 0;
        for marker in &markers {
            let at = html
                .find(marker.as_str())
                .unwrap_or_else(|| panic!("{marker} missing from page"));
            assert!(at >= last, "{marker} rendered out of order");
            last = at;
        }
    }
}
