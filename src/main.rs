mod model;
mod server;

use chrono::Utc;
use dioxus_logger::tracing::{self, Level};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

use crate::server::{
    bot,
    config::Config,
    error::AppError,
    pnw::PnwClient,
    router,
    scheduler::war_check::{self, WarCheckJob},
    service::war_notification::DiscordNotificationSink,
    startup,
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    if let Err(e) = dioxus_logger::init(Level::INFO) {
        eprintln!("Failed to initialize logger: {}", e);
    }

    let started_at = Utc::now();
    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let http_client = startup::setup_reqwest_client(config.upstream_timeout)?;
    let pnw = PnwClient::new(http_client, config.pnw_api_url.clone());

    tracing::info!("Starting server");

    // Initialize Discord bot and extract HTTP client
    let (bot_client, discord_http) = bot::start::init_bot(&config, db.clone(), pnw.clone()).await?;

    // Start Discord bot in a separate task
    tokio::spawn(async move {
        if let Err(e) = bot::start::start_bot(bot_client).await {
            tracing::error!("Discord bot error: {}", e);
        }
    });

    // Start war check and retention scheduler
    let war_check = WarCheckJob::new(
        db.clone(),
        Arc::new(pnw),
        Arc::new(DiscordNotificationSink::new(discord_http.clone())),
        config.upstream_timeout,
    );
    let _scheduler = war_check::start_scheduler(db.clone(), war_check, &config.war_check_cron).await?;

    let state = AppState::new(db, discord_http, started_at, config.war_check_cron.clone());
    let router = router::routes()
        .with_state(state)
        .layer(CorsLayer::permissive());

    let listener = tokio::net::TcpListener::bind(config.api_bind_addr).await?;
    tracing::info!("API server listening on {}", config.api_bind_addr);

    axum::serve(listener, router).await?;

    Ok(())
}
