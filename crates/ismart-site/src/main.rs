//! ISmart storefront server
//!
//! A Leptos SSR site served by axum.

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() {
    use axum::{handler::HandlerWithoutStateExt, routing::post, Router};
    use ismart_site::{app::App, config::SiteConfig};
    use leptos::*;
    use leptos_axum::{generate_route_list, LeptosRoutes};
    use tower_http::services::ServeDir;
    use tower_http::trace::TraceLayer;
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let config = SiteConfig::from_env().expect("Invalid ISMART_* configuration");

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.log_filter))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        autoplay_ms = config.widgets.autoplay_interval_ms,
        submit_delay_ms = config.widgets.submit_delay_ms,
        "Starting ISmart storefront"
    );

    let assets_dir = config.assets_dir.clone();
    config.install();

    let conf = get_configuration(None)
        .await
        .expect("Failed to read Leptos configuration");
    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;
    let routes = generate_route_list(App);

    let app = Router::new()
        .route("/api/*fn_name", post(leptos_axum::handle_server_fns))
        .leptos_routes(&leptos_options, routes, App)
        .nest_service("/assets", ServeDir::new(assets_dir))
        // leptos_axum 0.6 has no `file_and_error_handler`; this is its equivalent:
        // serve files from the site root, otherwise render the app (404 page).
        .fallback_service(
            ServeDir::new(&leptos_options.site_root).not_found_service(
                leptos_axum::render_app_to_stream(leptos_options.clone(), App).into_service(),
            ),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(leptos_options);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind listener");
    tracing::info!("Storefront listening on http://{}", addr);
    axum::serve(listener, app.into_make_service())
        .await
        .expect("Server error");
}

#[cfg(not(feature = "ssr"))]
pub fn main() {
    // The browser entry point is `ismart_site::hydrate`.
}
