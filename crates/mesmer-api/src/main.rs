use std::env;

use tracing_subscriber::EnvFilter;

use mesmer_api::state::AppState;
use mesmer_storage::store::Store;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let data_dir = env::var("MESMER_DATA_DIR").unwrap_or_else(|_| "data".to_string());
    let addr = env::var("MESMER_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());

    let state = AppState {
        store: Store::new(data_dir),
    };
    let app = mesmer_api::app(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "mesmer api listening");
    axum::serve(listener, app).await?;
    Ok(())
}
