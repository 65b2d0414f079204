//! Database connection pool management.
//!
//! Connection pooling uses SQLx with MySQL. Each HTTP request borrows a
//! pooled connection for its queries; the pool is the only shared mutable
//! state in the process besides configuration.

use sqlx::mysql::{MySqlPool, MySqlPoolOptions};
use std::time::Duration;

use ps_core::errors::DomainError;
use ps_shared::config::DatabaseConfig;

/// MySQL connection pool wrapper
#[derive(Clone)]
pub struct DatabasePool {
    pool: MySqlPool,
}

impl DatabasePool {
    /// Create a new connection pool from configuration
    pub async fn new(config: &DatabaseConfig) -> Result<Self, DomainError> {
        tracing::info!(
            max_connections = config.max_connections,
            "creating database connection pool"
        );

        let pool = MySqlPoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(1)
            .acquire_timeout(Duration::from_secs(config.connect_timeout))
            .idle_timeout(Duration::from_secs(config.idle_timeout))
            .max_lifetime(Duration::from_secs(config.max_lifetime))
            .test_before_acquire(true)
            .connect(&config.url)
            .await
            .map_err(|e| {
                tracing::error!("failed to create database pool: {}", e);
                DomainError::Database {
                    message: format!("pool creation failed: {}", e),
                }
            })?;

        Ok(Self { pool })
    }

    /// Reference to the underlying SQLx pool
    pub fn get_pool(&self) -> &MySqlPool {
        &self.pool
    }

    /// Verify connectivity with a trivial query
    pub async fn health_check(&self) -> Result<bool, DomainError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map(|_| true)
            .map_err(|e| DomainError::Database {
                message: format!("health check failed: {}", e),
            })
    }

    /// Close all connections in the pool
    pub async fn close(&self) {
        self.pool.close().await;
    }
}
