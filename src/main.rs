use crate::config::AppConfig;
use crate::loader::load_hotels_file;
use crate::router::{handle, is_htmx};
use crate::state::App;
use astra::Server;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

mod config;
mod demo;
mod domain;
mod errors;
mod loader;
mod panels;
mod responses;
mod router;
mod state;
mod templates;


fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("hotel_cards=info")),
        )
        .init();

    // 1️⃣ Configuration
    let cfg = match AppConfig::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("{e}");
            std::process::exit(1);
        }
    };

    // 2️⃣ App state, with the startup batch if one is configured
    let app = App::from_config(&cfg);
    if let Some(path) = &cfg.csv_path {
        match load_hotels_file(path) {
            Ok(hotels) => {
                info!(count = hotels.len(), source = %path.display(), "hotels loaded");
                match app.lock() {
                    Ok(mut state) => state.replace_batch(hotels),
                    Err(e) => error!("{e}"),
                }
            }
            Err(e) => warn!(error = %e, "startup CSV not loaded, waiting for upload"),
        }
    } else {
        info!("no startup CSV configured, waiting for upload");
    }

    // 3️⃣ Serve
    info!("Starting server at http://{}", cfg.addr);
    let server = Server::bind(&cfg.addr).max_workers(cfg.max_workers);

    let result = server.serve(move |req, _info| {
        let fragment = is_htmx(&req);
        match handle(req, &app) {
            Ok(resp) => resp,
            Err(err) => templates::html_error_response(err, fragment),
        }
    });

    if let Err(e) = result {
        error!("Server ended with error: {e}");
    }

    info!("Server shut down cleanly.");
}
