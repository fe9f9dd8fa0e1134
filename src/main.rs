use dotenvy::dotenv;
use tracing::{error, info};

use unilink::logging::init_tracing;
use unilink::router::init_router;
use unilink::state::init_app_state;

#[tokio::main]
async fn main() {
    dotenv().ok();

    if let Err(e) = init_tracing() {
        eprintln!("Failed to initialize logging: {e}");
        std::process::exit(1);
    }

    let state = match init_app_state().await {
        Ok(state) => state,
        Err(e) => {
            error!("Failed to start: {e:#}");
            std::process::exit(1);
        }
    };
    let app = init_router(state);

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
    let listener = match tokio::net::TcpListener::bind(&bind_addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!(%bind_addr, "Failed to bind: {e}");
            std::process::exit(1);
        }
    };

    info!("Server running on http://{bind_addr}");
    info!("Scalar UI available at http://{bind_addr}/scalar");

    if let Err(e) = axum::serve(listener, app).await {
        error!("Server error: {e}");
        std::process::exit(1);
    }
}
