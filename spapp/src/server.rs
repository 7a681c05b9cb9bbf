use axum::{
    body::Body,
    Router,
};
use http::{
    status::StatusCode,
    Request,
};
use leptos::prelude::*;
use leptos_axum::{generate_route_list, LeptosRoutes};
use std::{
    fs,
    io,
    path::{Path, PathBuf},
};
use tower::ServiceExt;

use crate::{
    app::{shell, App},
    conf::asset_prefix,
    error::ExportError,
};

pub fn router(leptos_options: LeptosOptions) -> Router {
    let routes = generate_route_list(App);
    log::trace!("{routes:?}");
    Router::new()
        .leptos_routes(
            &leptos_options,
            routes,
            {
                let leptos_options = leptos_options.clone();
                move || shell(leptos_options.clone())
            },
        )
        .fallback(leptos_axum::file_and_error_handler(shell))
        .with_state(leptos_options)
}

/// Renders `path` through the router without a network listener.
pub async fn render(app: Router, path: &str) -> Result<(StatusCode, String), ExportError> {
    let request = Request::builder()
        .uri(path)
        .body(Body::empty())?;
    let response = app.oneshot(request)
        .await
        .unwrap_or_else(|e| match e {});
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
    Ok((status, String::from_utf8(body.to_vec())?))
}

pub async fn serve(leptos_options: LeptosOptions) -> io::Result<()> {
    let addr = leptos_options.site_addr;
    let base = asset_prefix();
    let app = match base.base() {
        "" => router(leptos_options),
        path => Router::new().nest(path, router(leptos_options)),
    };

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    log::info!("listening on http://{}{}/", &addr, base);
    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                log::error!("failed to install Ctrl+C handler: {e}");
            }
        })
        .await
}

/// Writes the rendered page as `index.html` together with everything under
/// the site root into `out_dir`, ready for static hosting.
pub async fn export(
    leptos_options: LeptosOptions,
    out_dir: &Path,
) -> Result<PathBuf, ExportError> {
    let site_root = PathBuf::from(&*leptos_options.site_root);
    let (status, html) = render(router(leptos_options), "/").await?;
    if status != StatusCode::OK {
        return Err(ExportError::Status {
            path: "/".to_string(),
            status,
        });
    }

    fs::create_dir_all(out_dir)?;
    if site_root.is_dir() {
        copy_tree(&site_root, out_dir)?;
    } else {
        log::warn!("site root {} missing; exporting page only", site_root.display());
    }
    let index = out_dir.join("index.html");
    fs::write(&index, html)?;
    log::info!("exported {} for {} deployment", index.display(), crate::conf::deployment());
    Ok(index)
}

fn copy_tree(from: &Path, to: &Path) -> io::Result<()> {
    for entry in fs::read_dir(from)? {
        let entry = entry?;
        let target = to.join(entry.file_name());
        if entry.file_type()?.is_dir() {
            fs::create_dir_all(&target)?;
            copy_tree(&entry.path(), &target)?;
        } else {
            log::debug!("copying {}", entry.path().display());
            fs::copy(entry.path(), &target)?;
        }
    }
    Ok(())
}
