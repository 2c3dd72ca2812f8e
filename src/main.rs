use crate::app::{App, Clock};
use crate::config::AppConfig;
use crate::db::init_db;
use crate::responses::html_error_response;
use crate::router::handle;
use astra::Server;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod app;
mod config;
mod db;
mod domain;
mod errors;
mod forms;
mod handlers;
mod responses;
mod router;
mod spreadsheets;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    // .env is optional; real environment variables win.
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("frontdesk=info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            std::process::exit(1);
        }
    };

    let addr = config.bind_addr();
    let workers = config.max_workers;
    let app = App::new(config, Clock::System);

    if let Err(e) = init_db(&app.db) {
        tracing::error!(error = %e, "database initialization failed");
        std::process::exit(1);
    }

    tracing::info!(%addr, rooms = app.config.roster.len(), hotel = app.hotel_id(), "front desk listening");

    let server = Server::bind(&addr).max_workers(workers);

    let result = server.serve(move |req, _info| match handle(req, &app) {
        Ok(resp) => resp,
        Err(err) => html_error_response(err),
    });

    if let Err(e) = result {
        tracing::error!(error = %e, "server ended with error");
    }

    tracing::info!("server shut down");
}
