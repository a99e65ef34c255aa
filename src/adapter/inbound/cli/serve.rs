//! Handler for `dealfeed serve`.

use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::info;

use crate::adapter::inbound::cli::command::ServeArgs;
use crate::adapter::inbound::cli::{feed, output};
use crate::adapter::inbound::web::server::{self, AppState};
use crate::error::Result;
use crate::infrastructure::bootstrap;

/// Execute `serve` until Ctrl-C.
pub async fn execute(args: &ServeArgs) -> Result<()> {
    let mut config = feed::resolve_config(&args.feed)?;
    if let Some(bind) = &args.bind {
        config.server.bind = bind.clone();
        config.validate()?;
    }

    let listener = TcpListener::bind(config.server.bind.as_str()).await?;
    let addr = listener.local_addr()?;

    output::header(env!("CARGO_PKG_VERSION"));
    output::field("Listening", output::highlight(format!("http://{addr}")));
    output::field("Deals API", config.api.deals_url());
    if config.api.trimmed_base().is_empty() {
        output::warning("No API base URL configured; every page load will fail");
        output::hint("set DEALFEED_API_URL or pass --api-url");
    }

    let state = Arc::new(AppState {
        viewer: bootstrap::build_viewer(&config),
    });

    server::serve(listener, state, shutdown_signal()).await?;

    info!("Viewer stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        // no signal handler: run until killed
        Err(_) => std::future::pending::<()>().await,
    }
}
