use std::sync::Arc;

use feedback_board::{http, Config, FeedbackService, InMemoryFeedbackStore};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("feedback_board=info,tower_http=info"));
    fmt().with_env_filter(filter).init();

    let config = Config::load()?;

    let store = if config.seed {
        info!("Seeding store with sample feedback");
        InMemoryFeedbackStore::seeded()
    } else {
        InMemoryFeedbackStore::new()
    };
    let service = Arc::new(FeedbackService::new(store));

    info!("Binding to {} (routes under '{}')", config.address(), config.api_prefix);
    http::serve(service, &config.address(), &config.api_prefix).await?;

    Ok(())
}
