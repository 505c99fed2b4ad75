#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() {
    use axum::Router;
    use leptos::prelude::*;
    use leptos_axum::{generate_route_list, LeptosRoutes};
    use puddle_farm_web_leptos_ssr::app::{shell, App};
    use puddle_farm_web_leptos_ssr::fallback::file_and_error_handler;

    simple_logger::init_with_level(log::Level::Info).expect("couldn't initialize logging");

    // get_configuration(None) picks up cargo-leptos env values.
    let conf = get_configuration(None).unwrap();
    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;
    let routes = generate_route_list(App);

    let app = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let leptos_options = leptos_options.clone();
            move || shell(leptos_options.clone())
        })
        .fallback(file_and_error_handler)
        .with_state(leptos_options);

    let terminate = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
        log::info!("stopping...");
    };

    log::info!("listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(terminate)
        .await
        .unwrap();
}

#[cfg(not(feature = "ssr"))]
fn main() {
    // The client bundle is built from the library's hydrate entry point.
}
