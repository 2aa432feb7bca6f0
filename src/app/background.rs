use leptos::prelude::*;

use crate::motion::parallax_offset;
use crate::state::ScrollState;

/// Two blurred blobs that pulse forever and drift with the page scroll.
#[component]
pub fn BackgroundMesh(scroll: Signal<ScrollState>) -> impl IntoView {
    let drift = move || {
        format!(
            "transform: translateY({}%);",
            parallax_offset(scroll.get().progress())
        )
    };

    view! {
        <div class="fixed inset-0 z-0 pointer-events-none overflow-hidden">
            <div class="absolute top-[-20%] left-[-10%] w-[50%] h-[50%]" style=drift>
                <div class="w-full h-full bg-purple-900/20 rounded-full blur-[120px] animate-blob-pulse" />
            </div>
            <div class="absolute bottom-[-20%] right-[-10%] w-[50%] h-[50%]" style=drift>
                <div class="w-full h-full bg-cyan-900/20 rounded-full blur-[120px] animate-blob-pulse-slow" />
            </div>
        </div>
    }
}
