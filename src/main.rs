//! Storefront API server binary.

use storefront_api::{router, AppConfig, AppState, Store};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("storefront_api=info".parse()?)
                .add_directive("tower_http=info".parse()?),
        )
        .init();

    let config = AppConfig::from_env()?;
    tokio::fs::create_dir_all(&config.upload_dir).await?;
    let store = Store::open(config.data_file());
    let state = AppState {
        store,
        upload_dir: config.upload_dir.clone(),
    };
    let app = router(state, &config);

    let listener = TcpListener::bind(("0.0.0.0", config.port)).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
