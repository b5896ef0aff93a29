use std::net::SocketAddr;

use axum::Router;
use configs::AppConfig;
use migration::{Migrator, MigratorTrait};
use sea_orm::DatabaseConnection;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::errors::StartupError;
use crate::routes::{self, ServerState};

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// `config.toml` (or `CONFIG_PATH`) when present, otherwise environment variables only.
pub fn load_config() -> Result<AppConfig, StartupError> {
    match AppConfig::load_and_validate() {
        Ok(cfg) => Ok(cfg),
        Err(e) => {
            warn!(error = %e, "config file unusable, falling back to environment");
            let mut cfg = AppConfig::from_env();
            cfg.normalize_and_validate().map_err(|e| StartupError::InvalidConfig(e.to_string()))?;
            Ok(cfg)
        }
    }
}

/// Connect and, when enabled, bring the schema up to date.
pub async fn prepare_database(cfg: &AppConfig) -> Result<DatabaseConnection, StartupError> {
    let db = models::db::connect_with_config(&cfg.database)
        .await
        .map_err(|e| StartupError::Database(e.to_string()))?;
    if cfg.database.auto_migrate {
        Migrator::up(&db, None).await.map_err(|e| StartupError::Database(e.to_string()))?;
        info!("migrations applied");
    }
    Ok(db)
}

/// Router over an already prepared connection. Tests build the app through here.
pub fn app(db: DatabaseConnection) -> Router {
    routes::build_router(ServerState { db }, build_cors())
}

/// Serve the API with an already loaded configuration. Logging is the caller's job.
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    let addr: SocketAddr = format!("{}:{}", cfg.server.host, cfg.server.port)
        .parse()
        .map_err(|e: std::net::AddrParseError| StartupError::InvalidConfig(e.to_string()))?;
    let db = prepare_database(&cfg).await?;
    let router = app(db);

    info!(%addr, "starting wardrobe server");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use configs::{DatabaseConfig, ServerConfig};

    fn memory_config(auto_migrate: bool) -> AppConfig {
        AppConfig {
            server: ServerConfig::default(),
            database: DatabaseConfig { url: "sqlite::memory:".into(), auto_migrate, ..Default::default() },
        }
    }

    #[tokio::test]
    async fn prepare_database_migrates_when_enabled() -> anyhow::Result<()> {
        let db = prepare_database(&memory_config(true)).await?;
        assert!(service::user_service::list_users(&db, None).await?.is_empty());

        let bare = prepare_database(&memory_config(false)).await?;
        assert!(service::user_service::list_users(&bare, None).await.is_err());
        Ok(())
    }

    #[tokio::test]
    async fn run_rejects_bad_address_before_touching_the_database() {
        let mut cfg = memory_config(true);
        cfg.server.host = "not a host".into();
        cfg.database.url = "postgres://nowhere.invalid/none".into();
        let err = run(cfg).await.err().map(|e| e.to_string()).unwrap_or_default();
        assert!(err.contains("invalid configuration"), "{err}");
    }
}
