#![recursion_limit = "256"]
#[cfg(feature = "ssr")]
#[derive(thiserror::Error, Debug)]
enum ServeError {
    #[error("invalid leptos configuration: {0}")]
    Config(String),
    #[error("couldn't bind listener: {0}")]
    Bind(std::io::Error),
    #[error("server stopped: {0}")]
    Serve(std::io::Error),
}

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() -> Result<(), ServeError> {
    use axum::Router;
    use cyberdev_portfolio::app::*;
    use leptos::prelude::*;
    use leptos_axum::{generate_route_list, LeptosRoutes};
    use tower::ServiceBuilder;
    use tower_http::trace::TraceLayer;
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new("info,cyberdev_portfolio=debug,tower_http=debug")
        }))
        .with(tracing_subscriber::fmt::layer().compact())
        .init();

    let conf = get_configuration(None).map_err(|e| ServeError::Config(e.to_string()))?;
    let addr = conf.leptos_options.site_addr;
    let leptos_options = conf.leptos_options;
    // Generate the list of routes in your Leptos App
    let routes = generate_route_list(App);

    let app = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let leptos_options = leptos_options.clone();
            move || shell(leptos_options.clone())
        })
        .fallback(leptos_axum::file_and_error_handler(shell))
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(leptos_options);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(ServeError::Bind)?;
    tracing::info!(built = env!("BUILD_TIME"), "listening on http://{addr}");
    axum::serve(listener, app.into_make_service())
        .await
        .map_err(ServeError::Serve)
}

#[cfg(not(feature = "ssr"))]
pub fn main() {
    // no client-side main function
    // see lib.rs for hydration function instead
}
