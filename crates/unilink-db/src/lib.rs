//! # Unilink DB
//!
//! The account store behind the Unilink flows, plus PostgreSQL pool setup.
//!
//! - [`store`]: The [`AccountStore`] trait and its error type
//! - [`postgres`]: [`PgAccountStore`], backed by SQLx and PostgreSQL
//! - [`memory`]: [`InMemoryAccountStore`], for tests and local development
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use unilink_db::{AccountStore, PgAccountStore, init_db_pool};
//!
//! let pool = init_db_pool(&std::env::var("DATABASE_URL")?).await?;
//! unilink_db::MIGRATOR.run(&pool).await?;
//! let store: Arc<dyn AccountStore> = Arc::new(PgAccountStore::new(pool));
//! ```

pub mod memory;
pub mod postgres;
pub mod store;

pub use memory::InMemoryAccountStore;
pub use postgres::PgAccountStore;
pub use store::{AccountStore, StoreError};

// Re-export PgPool for convenience
pub use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

/// Schema migrations for the users and role profile tables.
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");

/// Connects a PostgreSQL pool to `database_url`.
pub async fn init_db_pool(database_url: &str) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .connect(database_url)
        .await
}
