use leptos::prelude::*;
use spcore::{
    asset::AssetPrefix,
    content::{LOGO, LOGO_ALT, TITLE},
};

#[component]
pub fn Header() -> impl IntoView {
    let prefix = use_context::<AssetPrefix>().unwrap_or_default();
    view! {
        <header class="site-header">
            <div class="site-header-inner">
                <div class="logo">
                    <img src=prefix.asset(LOGO.path) alt=LOGO_ALT width="160" height="50"/>
                </div>
                // balances the logo so the bar stays centred
                <div class="logo-balance"></div>
            </div>
        </header>
    }
}

#[component]
pub fn PageTitle() -> impl IntoView {
    view! {
        <h1 class="page-title">{TITLE}</h1>
    }
}
