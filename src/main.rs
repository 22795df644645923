//! Spork
//!
//! An MCP server for meal nutrition validation and reconciliation.

use std::sync::Arc;

use rmcp::ServiceExt;
use tokio::io::{stdin, stdout};
use tracing_subscriber::EnvFilter;

use spork::build_info;
use spork::mcp::SporkService;
use spork::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Arc::new(Config::from_env()?);

    // Logs go to stderr; stdout carries MCP frames
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_directive))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    build_info::print_startup_banner(&config);
    tracing::info!(
        weight_parsing = config.weight_parsing.as_str(),
        "Starting MCP server on stdio"
    );

    let service = SporkService::new(config);

    let transport = (stdin(), stdout());

    let server = service.serve(transport).await?;

    server.waiting().await?;

    tracing::info!("MCP server stopped");
    Ok(())
}
