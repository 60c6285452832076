/// Summarizer Web Interface Server
///
/// Axum-based server that renders the Leptos application with SSR support.

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() -> Result<(), summarizer_web::error::WebError> {
    use axum::Router;
    use leptos::*;
    use leptos_axum::{generate_route_list, LeptosRoutes};
    use summarizer_web::app::*;
    use summarizer_web::error::WebError;
    use tower_http::services::ServeDir;
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // `None` reads the cargo-leptos env values; a deployed binary can point
    // at a Cargo.toml shipped next to it instead.
    let conf = get_configuration(None)
        .await
        .map_err(|e| WebError::config(e.to_string()))?;
    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;
    let routes = generate_route_list(App);

    let app = Router::new()
        .leptos_routes(&leptos_options, routes, App)
        .fallback_service(ServeDir::new(&leptos_options.site_root))
        .with_state(leptos_options);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Summarizer web interface listening on http://{}", addr);
    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}

#[cfg(not(feature = "ssr"))]
pub fn main() {
    // no client-side main function; see lib.rs for hydration instead
}
