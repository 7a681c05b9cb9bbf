use leptos::prelude::*;
use spcore::content::FOOTER;

#[component]
pub fn Footer() -> impl IntoView {
    let [rights, purpose] = FOOTER;
    view! {
        <footer class="site-footer">
            <p>{rights}</p>
            <p class="footer-note">{purpose}</p>
        </footer>
    }
}
