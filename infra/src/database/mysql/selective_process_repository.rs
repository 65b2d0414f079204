//! MySQL implementation of the SelectiveProcessRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::{MySqlPool, Row};

use ps_core::domain::entities::SelectiveProcess;
use ps_core::errors::DomainError;
use ps_core::repositories::SelectiveProcessRepository;

use super::map_sqlx_error;

/// MySQL-backed selective process repository
pub struct MySqlSelectiveProcessRepository {
    pool: MySqlPool,
}

impl MySqlSelectiveProcessRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_process(row: &sqlx::mysql::MySqlRow) -> Result<SelectiveProcess, DomainError> {
        let get = |e: sqlx::Error| DomainError::Database {
            message: format!("failed to read process row: {}", e),
        };
        Ok(SelectiveProcess {
            id: row.try_get("id").map_err(get)?,
            title: row.try_get("title").map_err(get)?,
            description: row.try_get("description").map_err(get)?,
            deadline: row.try_get::<NaiveDate, _>("deadline").map_err(get)?,
            method_of_contact: row.try_get("method_of_contact").map_err(get)?,
            contractor_id: row.try_get("contractor_id").map_err(get)?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(get)?,
        })
    }
}

const SELECT_COLUMNS: &str = r#"
    SELECT id, title, description, deadline, method_of_contact,
           contractor_id, created_at
    FROM selective_processes
"#;

#[async_trait]
impl SelectiveProcessRepository for MySqlSelectiveProcessRepository {
    async fn create(&self, mut process: SelectiveProcess) -> Result<SelectiveProcess, DomainError> {
        let query = r#"
            INSERT INTO selective_processes (
                title, description, deadline, method_of_contact,
                contractor_id, created_at
            ) VALUES (?, ?, ?, ?, ?, ?)
        "#;

        let result = sqlx::query(query)
            .bind(&process.title)
            .bind(&process.description)
            .bind(process.deadline)
            .bind(&process.method_of_contact)
            .bind(process.contractor_id)
            .bind(process.created_at)
            .execute(&self.pool)
            .await
            .map_err(|e| map_sqlx_error(e, "failed to create process"))?;

        process.id = result.last_insert_id() as i64;
        Ok(process)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<SelectiveProcess>, DomainError> {
        let result = sqlx::query(&format!("{} WHERE id = ? LIMIT 1", SELECT_COLUMNS))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_sqlx_error(e, "failed to find process"))?;

        result.as_ref().map(Self::row_to_process).transpose()
    }

    async fn find_by_title(&self, title: &str) -> Result<Option<SelectiveProcess>, DomainError> {
        let result = sqlx::query(&format!(
            "{} WHERE title = ? ORDER BY id LIMIT 1",
            SELECT_COLUMNS
        ))
        .bind(title)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_sqlx_error(e, "failed to find process by title"))?;

        result.as_ref().map(Self::row_to_process).transpose()
    }

    async fn find_by_contractor(
        &self,
        contractor_id: i64,
    ) -> Result<Vec<SelectiveProcess>, DomainError> {
        let rows = sqlx::query(&format!(
            "{} WHERE contractor_id = ? ORDER BY id",
            SELECT_COLUMNS
        ))
        .bind(contractor_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| map_sqlx_error(e, "failed to list contractor processes"))?;

        rows.iter().map(Self::row_to_process).collect()
    }

    async fn find_all(&self) -> Result<Vec<SelectiveProcess>, DomainError> {
        let rows = sqlx::query(&format!("{} ORDER BY id", SELECT_COLUMNS))
            .fetch_all(&self.pool)
            .await
            .map_err(|e| map_sqlx_error(e, "failed to list processes"))?;

        rows.iter().map(Self::row_to_process).collect()
    }

    async fn delete(&self, id: i64) -> Result<Option<SelectiveProcess>, DomainError> {
        let existing = match self.find_by_id(id).await? {
            Some(process) => process,
            None => return Ok(None),
        };

        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| map_sqlx_error(e, "failed to begin transaction"))?;

        sqlx::query("DELETE FROM subscribers WHERE selective_process_id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(|e| map_sqlx_error(e, "failed to delete subscribers"))?;

        sqlx::query("DELETE FROM selective_processes WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(|e| map_sqlx_error(e, "failed to delete process"))?;

        tx.commit()
            .await
            .map_err(|e| map_sqlx_error(e, "failed to commit cascade delete"))?;

        tracing::info!(process_id = id, "selective process deleted with cascade");
        Ok(Some(existing))
    }
}
