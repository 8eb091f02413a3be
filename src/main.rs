//! Macro Log
//!
//! An MCP server for logging daily macros.

use std::sync::Arc;

use rmcp::ServiceExt;
use tokio::io::{stdin, stdout};
use tracing_subscriber::filter::Directive;
use tracing_subscriber::EnvFilter;

use macrolog::app::App;
use macrolog::db::{self, SqliteStore};
use macrolog::mcp::MacroLogService;
use macrolog::{build_info, config};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr so they don't interfere with MCP stdio
    let directive: Directive = config::DEFAULT_LOG_DIRECTIVE.parse()?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(directive))
        .with_writer(std::io::stderr)
        .init();

    build_info::print_startup_banner();

    let db_path = config::database_path();
    tracing::info!(path = %db_path.display(), "using database");

    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let database = db::Database::new(&db_path)?;

    database.with_conn(|conn| {
        db::migrations::run_migrations(conn)?;
        let version = db::migrations::get_schema_version(conn)?;
        tracing::info!(version, "database schema ready");
        Ok(())
    })?;

    let app = App::new(Arc::new(SqliteStore::new(database)));
    let service = MacroLogService::new(db_path, app);

    tracing::info!("starting MCP server on stdio");
    let server = service.serve((stdin(), stdout())).await?;
    server.waiting().await?;

    Ok(())
}
