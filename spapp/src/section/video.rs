use leptos::prelude::*;
use spcore::{
    asset::AssetPrefix,
    content::{DEMO_VIDEO, SCROLL_PROMPT, VIDEO_FALLBACK},
    page::PageState,
};

use crate::{
    client::watch_reveal,
    component::{Glyph, Icon},
};

#[component]
pub fn VideoShowcase(state: RwSignal<PageState>) -> impl IntoView {
    let prefix = use_context::<AssetPrefix>().unwrap_or_default();
    let section = NodeRef::<leptos::html::Section>::new();
    let revealed = move || state.with(PageState::is_revealed);

    watch_reveal(section, state);

    view! {
        <section id="video" class="video-showcase" class:revealed=revealed node_ref=section>
            <div class="video-frame">
                <div class="video-aspect">
                    <video class="video" controls=true>
                        <source src=prefix.asset(DEMO_VIDEO.path) type=DEMO_VIDEO.mime/>
                        {VIDEO_FALLBACK}
                    </video>
                    // stops intercepting clicks once revealed so the controls work
                    <div
                        class="video-overlay"
                        style:pointer-events=move || if revealed() { "none" } else { "auto" }
                    >
                        <div class="scroll-prompt">
                            <Icon glyph=Glyph::ChevronDown class="icon-prompt"/>
                            <p>{SCROLL_PROMPT}</p>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
