use astra::Server;
use property_dashboard::api::HttpPropertyApi;
use property_dashboard::config::Configuration;
use property_dashboard::logging;
use property_dashboard::responses::error_to_response;
use property_dashboard::router::handle;
use property_dashboard::state::AppState;
use tracing::{error, info, warn};

fn main() {
    logging::init();

    let config = Configuration::new().from_environment();

    let api = match HttpPropertyApi::new(config.api_base_url(), config.request_timeout()) {
        Ok(api) => api,
        Err(e) => {
            error!(error = %e, "failed to build HTTP client");
            std::process::exit(1);
        }
    };

    let addr = match config.bind_addr() {
        Ok(addr) => addr,
        Err(e) => {
            error!(error = %e, host = config.http_host(), port = config.http_port(), "invalid bind address");
            std::process::exit(1);
        }
    };

    let app = AppState::new(Box::new(api));

    // Warm the store so the first page view does not wait on the API.
    match app.reload() {
        Ok(Ok(count)) => info!(count, api = config.api_base_url(), "initial load complete"),
        Ok(Err(_)) => warn!(api = config.api_base_url(), "initial load failed; dashboard will offer a retry"),
        Err(e) => error!(error = %e, "initial load aborted"),
    }

    info!("Starting server at http://{addr}");

    let server = Server::bind(&addr).max_workers(config.max_workers());

    let result = server.serve(move |req, _info| match handle(req, &app) {
        Ok(resp) => resp,
        Err(err) => error_to_response(err),
    });

    if let Err(e) = result {
        error!(error = %e, "server ended with error");
    }

    info!("Server shut down cleanly.");
}
