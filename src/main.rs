#![recursion_limit = "256"]

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() {
    use axum::routing::post;
    use axum::{Extension, Router};
    use leptos::prelude::*;
    use leptos_axum::{generate_route_list, LeptosRoutes};
    use room_availability::app::*;
    use room_availability::server::{install_settings, search_availability_json, AvailabilityProxy};
    use room_availability::settings::Settings;
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("room_availability=info,info")),
        )
        .with_target(false)
        .compact()
        .init();

    let settings = install_settings(match Settings::from_yaml("settings.yaml") {
        Ok(settings) => settings,
        Err(e) => {
            log::warn!("Could not load settings.yaml ({}), using defaults", e);
            Settings::default()
        }
    });
    log::info!(
        "Forwarding availability checks to {}{}",
        settings.upstream_url,
        settings.availability_path
    );

    let conf = get_configuration(None).unwrap();
    let addr = conf.leptos_options.site_addr;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(App);

    let app = Router::new()
        .route(&settings.availability_path, post(search_availability_json))
        .leptos_routes(&leptos_options, routes, {
            let leptos_options = leptos_options.clone();
            move || shell(leptos_options.clone())
        })
        .fallback(leptos_axum::file_and_error_handler(shell))
        .layer(Extension(AvailabilityProxy::from_settings(settings)))
        .with_state(leptos_options);

    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    log::info!("listening on http://{}", &addr);
    axum::serve(listener, app.into_make_service())
        .await
        .unwrap();
}

#[cfg(not(feature = "ssr"))]
pub fn main() {}
