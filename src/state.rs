use std::env;
use std::sync::Arc;

use anyhow::Context;
use tracing::{info, warn};

use unilink_config::{CorsConfig, JwtConfig};
use unilink_db::{AccountStore, InMemoryAccountStore, MIGRATOR, PgAccountStore, init_db_pool};

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn AccountStore>,
    pub jwt_config: JwtConfig,
    pub cors_config: CorsConfig,
}

impl AppState {
    pub fn new(store: Arc<dyn AccountStore>, jwt_config: JwtConfig, cors_config: CorsConfig) -> Self {
        Self {
            store,
            jwt_config,
            cors_config,
        }
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("jwt_config", &self.jwt_config)
            .field("cors_config", &self.cors_config)
            .finish_non_exhaustive()
    }
}

/// Builds the application state from the environment.
///
/// `ACCOUNT_STORE=memory` swaps PostgreSQL for the in-memory store. With
/// PostgreSQL, migrations run at startup unless `RUN_MIGRATIONS=false`.
pub async fn init_app_state() -> anyhow::Result<AppState> {
    let jwt_config = JwtConfig::from_env()?;
    let cors_config = CorsConfig::from_env();

    let store: Arc<dyn AccountStore> = match env::var("ACCOUNT_STORE").as_deref() {
        Ok("memory") => {
            warn!("Using the in-memory account store; data is lost on restart");
            Arc::new(InMemoryAccountStore::new())
        }
        _ => {
            let database_url = env::var("DATABASE_URL")
                .context("DATABASE_URL must be set unless ACCOUNT_STORE=memory")?;
            let pool = init_db_pool(&database_url).await?;
            let run_migrations = env::var("RUN_MIGRATIONS")
                .map(|v| v != "false" && v != "0")
                .unwrap_or(true);
            if run_migrations {
                MIGRATOR.run(&pool).await?;
                info!("Database migrations applied");
            }
            Arc::new(PgAccountStore::new(pool))
        }
    };

    Ok(AppState::new(store, jwt_config, cors_config))
}
