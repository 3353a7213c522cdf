use anyhow::Result;
use clap::Parser;

use stringsmith::cli::Arguments;
use stringsmith::config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (useful for OPENAI_API_KEY in development)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("stringsmith=info".parse()?),
        )
        .init();

    let args = Arguments::parse();
    let config = Config::from_args(args)?;

    stringsmith::run(&config).await
}
