use anyhow::Result;
use tracing_subscriber::EnvFilter;

use shortlink::config::{self, AppEnv};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let config = config::load_from_env()?;

    init_tracing(config.env);
    config.print_summary();

    shortlink::server::run(config).await
}

/// Logger setup per environment: local is human-readable at debug, dev is
/// json at debug, prod is json at info. `RUST_LOG` overrides the level.
fn init_tracing(env: AppEnv) {
    let default_level = match env {
        AppEnv::Local | AppEnv::Dev => "debug",
        AppEnv::Prod => "info",
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    match env {
        AppEnv::Local => tracing_subscriber::fmt().with_env_filter(filter).init(),
        AppEnv::Dev | AppEnv::Prod => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init(),
    }
}
