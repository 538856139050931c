mod app;
mod auth;
mod config;
mod error;
mod milestones;
mod paths;
mod profile;
mod progress;
mod resources;
mod state;
mod types;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "learntrack=debug,axum=info,tower_http=info".to_string());
    let json_logs = std::env::var("LOG_FORMAT")
        .map(|v| v == "json")
        .unwrap_or(false);

    if json_logs {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(false)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    }

    let app_state = state::AppState::init().await?;

    sqlx::migrate!("./migrations").run(&app_state.db).await?;

    // `learntrack seed` loads the sample resource catalog and exits.
    if std::env::args().nth(1).as_deref() == Some("seed") {
        resources::seed::seed_resources(&app_state.db).await?;
        return Ok(());
    }

    let app = app::build_app(app_state);
    app::serve(app).await
}
