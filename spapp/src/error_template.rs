use crate::error::AppError;
use http::status::StatusCode;
use leptos::{logging::log, prelude::*};
#[cfg(feature = "ssr")]
use leptos_axum::ResponseOptions;

/// Displays errors caught by the router fallback or an error boundary.
#[component]
pub fn ErrorTemplate(
    #[prop(into)] errors: Signal<Errors>,
) -> impl IntoView {
    // only errors that are an AppError are shown
    let errors = Memo::new(move |_| {
        errors
            .get_untracked()
            .into_iter()
            .filter_map(|(_, v)| v.downcast_ref::<AppError>().cloned())
            .collect::<Vec<_>>()
    });
    log!("Errors: {:#?}", &*errors.read_untracked());

    // Only the response code for the first error is sent from the server
    #[cfg(feature = "ssr")]
    {
        let status = errors.read_untracked()
            .first()
            .map(AppError::status_code);
        if let (Some(response), Some(status)) = (use_context::<ResponseOptions>(), status) {
            response.set_status(status);
        }
    }

    view! {
        <section class="error-page">
            {move || {
                errors.get()
                    .into_iter()
                    .map(|error| {
                        let error_code = error.status_code();
                        let error_string = (error_code == StatusCode::INTERNAL_SERVER_ERROR)
                            .then(|| format!("Error: {error}"));
                        view! {
                            <h1>{error_code.to_string()}</h1>
                            <p>{error_string}</p>
                        }
                    })
                    .collect_view()
            }}
            <a href="./">"Back to SmartPath"</a>
        </section>
    }
}
