//! Server startup utilities.

use tracing::info;
use userdir_config::AppConfig;

/// Prints the startup banner.
pub fn print_banner() {
    info!(r"
                      _ _
  _   _ ___  ___ _ __| (_)_ __
 | | | / __|/ _ \ '__| | | '__|
 | |_| \__ \  __/ |  | | | |
  \__,_|___/\___|_|  |_|_|_|

         GraphQL user directory
    ");
}

/// Prints server startup information.
pub fn print_startup_info(config: &AppConfig) {
    let separator = "=".repeat(60);
    info!("{}", separator);
    info!("Environment: {}", config.app.environment);
    info!("Database:    {} ({})", config.database.effective_dialect(), config.database.redacted_url());
    info!("GraphQL:     {}", config.server.public_url());
    info!("Health:      http://localhost:{}/health", config.server.port);
    info!("{}", separator);
}
