//! MySQL implementation of the SubscriberRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::{MySqlPool, Row};

use ps_core::domain::entities::Subscriber;
use ps_core::errors::DomainError;
use ps_core::repositories::SubscriberRepository;

use super::map_sqlx_error;

/// MySQL-backed subscriber repository
pub struct MySqlSubscriberRepository {
    pool: MySqlPool,
}

impl MySqlSubscriberRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_subscriber(row: &sqlx::mysql::MySqlRow) -> Result<Subscriber, DomainError> {
        let get = |e: sqlx::Error| DomainError::Database {
            message: format!("failed to read subscriber row: {}", e),
        };
        Ok(Subscriber {
            id: row.try_get("id").map_err(get)?,
            name: row.try_get("name").map_err(get)?,
            birth: row.try_get::<NaiveDate, _>("birth").map_err(get)?,
            email: row.try_get("email").map_err(get)?,
            selective_process_id: row.try_get("selective_process_id").map_err(get)?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(get)?,
        })
    }
}

#[async_trait]
impl SubscriberRepository for MySqlSubscriberRepository {
    async fn create(&self, mut subscriber: Subscriber) -> Result<Subscriber, DomainError> {
        let query = r#"
            INSERT INTO subscribers (
                name, birth, email, selective_process_id, created_at
            ) VALUES (?, ?, ?, ?, ?)
        "#;

        let result = sqlx::query(query)
            .bind(&subscriber.name)
            .bind(subscriber.birth)
            .bind(&subscriber.email)
            .bind(subscriber.selective_process_id)
            .bind(subscriber.created_at)
            .execute(&self.pool)
            .await
            .map_err(|e| map_sqlx_error(e, "failed to create subscriber"))?;

        subscriber.id = result.last_insert_id() as i64;
        Ok(subscriber)
    }

    async fn find_by_process(&self, process_id: i64) -> Result<Vec<Subscriber>, DomainError> {
        let query = r#"
            SELECT id, name, birth, email, selective_process_id, created_at
            FROM subscribers
            WHERE selective_process_id = ?
            ORDER BY id
        "#;

        let rows = sqlx::query(query)
            .bind(process_id)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| map_sqlx_error(e, "failed to list subscribers"))?;

        rows.iter().map(Self::row_to_subscriber).collect()
    }
}
