use addressbook_core::config::{lookup_delay_from_env_value, lookup_url_from_env_value};
use addressbook_core::CoreConfig;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Main entry point for the address book lookup API
///
/// Serves `GET /lookup`, `GET /health` and the Swagger UI.
///
/// # Environment Variables
/// - `ADDRESSBOOK_REST_ADDR`: REST server address (default: "0.0.0.0:3000")
/// - `ADDRESSBOOK_LOOKUP_DELAY_MS`: artificial lookup delay in milliseconds (default: 500)
/// - `ADDRESSBOOK_LOOKUP_URL`: public base URL of this API (default: "http://127.0.0.1:3000")
///
/// # Errors
/// Returns an error if:
/// - the logging/tracing configuration cannot be initialised,
/// - configuration values are malformed,
/// - the server address cannot be bound, or
/// - the HTTP server fails while running.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("addressbook_run=info".parse()?)
                .add_directive("api_rest=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let rest_addr =
        std::env::var("ADDRESSBOOK_REST_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".into());
    let lookup_delay =
        lookup_delay_from_env_value(std::env::var("ADDRESSBOOK_LOOKUP_DELAY_MS").ok())?;
    let lookup_url = lookup_url_from_env_value(std::env::var("ADDRESSBOOK_LOOKUP_URL").ok())?;

    let cfg = Arc::new(CoreConfig::new(lookup_url, lookup_delay)?);

    tracing::info!(
        "++ Starting address book REST on {} (lookup delay {:?})",
        rest_addr,
        cfg.lookup_delay()
    );

    let app = api_rest::router(cfg);
    let listener = tokio::net::TcpListener::bind(&rest_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
