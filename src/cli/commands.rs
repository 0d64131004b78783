//! CLI command implementations
//!
//! Boot order: flags → config → logging → roster database → HTTP server.
//! A database that cannot be opened stops the process before the listener
//! is bound.

use std::sync::Arc;

use tracing::{error, info};

use crate::config::RollcallConfig;
use crate::http_server::HttpServer;
use crate::observability::init_logging;
use crate::store::{Datastore, RosterStore};

use super::args::Cli;
use super::errors::{CliError, CliResult};

/// Entry point used by `main`
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    let config = resolve_config(&cli)?;

    init_logging(&config.logging)?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(|e| CliError::boot_failed(format!("failed to start runtime: {}", e)))?;

    runtime.block_on(serve(config))
}

/// Merge the config file (if any) with flag overrides and validate the result
pub fn resolve_config(cli: &Cli) -> CliResult<RollcallConfig> {
    let mut config = match &cli.config {
        Some(path) => RollcallConfig::load(path)?,
        None => RollcallConfig::default(),
    };

    cli.apply(&mut config);
    config.validate()?;

    Ok(config)
}

/// Open the roster database and serve until shutdown
pub async fn serve(config: RollcallConfig) -> CliResult<()> {
    let store = match Datastore::open(&config.database) {
        Ok(store) => store,
        Err(e) => {
            error!(
                path = %config.database.path.display(),
                error = %e,
                "cannot open roster database"
            );
            return Err(e.into());
        }
    };
    let store: Arc<dyn RosterStore> = Arc::new(store);

    let server = HttpServer::new(config.http, store);
    info!(addr = %server.socket_addr(), "starting rollcall");

    server.start().await?;
    Ok(())
}
