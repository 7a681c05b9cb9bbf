use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{
    components::{Route, Router, Routes},
    StaticSegment,
};
use spcore::{
    content::{SITE_NAME, TITLE},
    page::PageState,
};

use crate::{
    conf::{asset_prefix, router_base},
    error::AppError,
    error_template::ErrorTemplate,
    section::{
        Citations,
        Footer,
        Header,
        PageTitle,
        Resources,
        VideoShowcase,
    },
};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    let root = asset_prefix().base().to_string();
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options root/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    let prefix = asset_prefix();
    provide_context(prefix.clone());

    view! {
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href=prefix.asset("pkg/spapp.css")/>
        <Title text=SITE_NAME/>
        <Meta name="description" content=TITLE/>
        <Router base=router_base()>
            <Routes fallback=|| {
                let mut errors = Errors::default();
                errors.insert_with_default_key(AppError::NotFound);
                view! { <ErrorTemplate errors/> }
            }>
                <Route path=StaticSegment("") view=HomePage/>
            </Routes>
        </Router>
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    let state = RwSignal::new(PageState::default());
    view! {
        <div class="page">
            <Header/>
            <main class="container">
                <PageTitle/>
                <Resources/>
                <VideoShowcase state/>
                <Citations state/>
            </main>
            <Footer/>
        </div>
    }
}
