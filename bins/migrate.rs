use dotenvy::dotenv;
use std::process::ExitCode;
use tracing::{error, info};

fn main() -> ExitCode {
    dotenv().ok();

    let cfg = match configs::AppConfig::load_and_validate() {
        Ok(cfg) => cfg,
        Err(e) => {
            common::utils::logging::init_logging_default();
            error!(service = "migrate", event = "config_invalid", error = %e, "failed to load configuration");
            return ExitCode::FAILURE;
        }
    };
    common::utils::logging::init_logging(cfg.logging.json);

    let rt = match tokio::runtime::Builder::new_multi_thread().enable_all().build() {
        Ok(rt) => rt,
        Err(e) => {
            error!(service = "migrate", event = "runtime_build_failed", error = %e, "failed to build tokio runtime");
            return ExitCode::FAILURE;
        }
    };

    info!(service = "migrate", event = "start", version = env!("CARGO_PKG_VERSION"), "applying migrations");
    match rt.block_on(run(&cfg)) {
        Ok(()) => {
            info!(service = "migrate", event = "done", "database schema is up to date");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(service = "migrate", event = "failed", error = %e, "migration run failed");
            ExitCode::FAILURE
        }
    }
}

async fn run(cfg: &configs::AppConfig) -> anyhow::Result<()> {
    let db = models::db::connect_with_config(&cfg.database).await?;
    models::db::migrate(&db).await?;
    Ok(())
}
