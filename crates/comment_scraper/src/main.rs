use comment_scraper::settings;
use dotenv::dotenv;
use tokio::net::TcpListener;
use tracing::{debug, error, info, warn};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    let settings = settings::load_settings()?;
    comment_scraper::init_tracing(&settings);

    if !settings.is_production() {
        debug!("Running in DEV environment");
    }
    if settings.youtube_api_key().is_none() {
        warn!("YOUTUBE_API_KEY is not set; URL endpoints will require api_key in the request body");
    }

    let app = comment_scraper::setup_router(&settings);
    let listener = TcpListener::bind(format!("0.0.0.0:{}", settings.port())).await?;
    info!("Server running on http://{}", listener.local_addr()?);

    if let Err(e) = axum::serve(listener, app).await {
        error!("Server error: {}", e);
    }

    Ok(())
}
