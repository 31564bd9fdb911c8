use dotenvy::dotenv;
use std::{env, net::SocketAddr};
use tracing_subscriber;
use anyhow::Result;

use healthtracker_backend::app;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt::init();

    let port = env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(3050);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("🧠 Server running at {}", addr);

    axum::serve(
        tokio::net::TcpListener::bind(addr).await?,
        app().into_make_service(),
    )
    .await?;

    Ok(())
}
