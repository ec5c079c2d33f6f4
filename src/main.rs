use time::UtcOffset;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use pet_activity_log::{
    app::App, config::ServerConfig, layers::activity_log::ActivityLogRepoLayer,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Local development keeps SUPABASE_URL / SUPABASE_KEY in .env
    dotenvy::dotenv().ok();

    // Use UTC timestamps
    let offset = UtcOffset::UTC;

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .json()
                .flatten_event(true)
                .with_timer(fmt::time::OffsetTime::new(
                    offset,
                    time::format_description::well_known::Rfc3339,
                ))
                .with_level(true)
                .with_target(false)
                .with_thread_ids(false)
                .with_thread_names(false),
        )
        .with(EnvFilter::from_default_env())
        .try_init()?;

    // Load configuration
    let settings = ServerConfig::load()?;
    info!(
        msg = "Loaded configuration",
        server_addr = %settings.server.addr,
        supabase_url = %settings.supabase.url
    );

    // One client for the lifetime of the process
    let activity_log_repo = ActivityLogRepoLayer::supabase(&settings.supabase);

    let app = App::new().with_layers(activity_log_repo);

    let listener = tokio::net::TcpListener::bind(settings.server.addr.as_str()).await?;

    info!(msg = "Starting server", addr = %settings.server.addr);

    axum::serve(listener, app).await?;

    Ok(())
}
