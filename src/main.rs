//! # Dental Clinic API
//!
//! Process entry point: tracing, settings, database pool (plus migrations
//! when enabled) and the HTTP server.

use anyhow::Result;
use tracing::info;

use dental_clinic::config::Settings;
use dental_clinic::startup::Application;
use dental_clinic::telemetry;

#[tokio::main]
async fn main() -> Result<()> {
    telemetry::init_tracing();

    let settings = Settings::load()?;
    info!(
        environment = %settings.environment,
        run_migrations = settings.database.run_migrations,
        "Starting dental clinic API"
    );

    let application = Application::build(settings).await?;
    if let Ok(addr) = application.local_addr() {
        info!(%addr, "Accepting requests under /api");
    }

    application.run_until_stopped().await?;
    info!("Server stopped");
    Ok(())
}
