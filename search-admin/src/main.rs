//! Search admin service entry point.

use std::process::ExitCode;

use tracing::{error, info};

use search_admin::{config::AppConfig, server, telemetry, AppError, Dependencies};

#[tokio::main]
async fn main() -> ExitCode {
    dotenv::dotenv().ok();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            // Logging isn't configured yet; the format itself may be what failed.
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };
    telemetry::init(config.log_format);

    match run(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "Search admin service failed");
            ExitCode::FAILURE
        }
    }
}

async fn run(config: AppConfig) -> Result<(), AppError> {
    info!("Starting search admin service");

    let dependencies = Dependencies::new(&config).await?;
    let app = search_admin_api::app(dependencies.state);

    server::serve(config.listen_addr(), app, server::shutdown_signal()).await
}
