use leptos::prelude::*;
use spcore::{
    content::{Citation, CITATIONS, CITATION_HEADING},
    page::PageState,
};

use crate::{
    client::on_copy,
    component::{Glyph, Icon},
    state::SignalSlot,
};

#[component]
pub fn Citations(state: RwSignal<PageState>) -> impl IntoView {
    view! {
        <section class="citations fade-in-up">
            <h2>{CITATION_HEADING}</h2>
            <div class="citation-list">
                {CITATIONS.iter()
                    .enumerate()
                    .map(|(index, citation)| view! {
                        <CitationCard citation=*citation cell=SignalSlot::new(state, index)/>
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
pub fn CitationCard(citation: Citation, cell: SignalSlot) -> impl IntoView {
    view! {
        <div class="citation-card" id=citation.key>
            <h3>{citation.heading}</h3>
            <pre class="bibtex">{citation.bibtex}</pre>
            <CopyButton text=citation.bibtex cell/>
        </div>
    }
}

#[component]
pub fn CopyButton(text: &'static str, cell: SignalSlot) -> impl IntoView {
    view! {
        <button
            type="button"
            class="copy-button"
            class:copied=move || cell.is_copied()
            on:click=on_copy(cell, text)
        >
            <Icon glyph=Glyph::Copy class="icon icon-inline"/>
            <span class="copy-label">{move || cell.label()}</span>
        </button>
    }
}
