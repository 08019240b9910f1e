//! Churn prediction service entry point

use churn_predict::server::{run_server, ServerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "churn_predict=info".into()),
        )
        .init();

    run_server(ServerConfig::default()).await
}
