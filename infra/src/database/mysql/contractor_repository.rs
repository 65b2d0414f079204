//! MySQL implementation of the ContractorRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};

use ps_core::domain::entities::Contractor;
use ps_core::errors::DomainError;
use ps_core::repositories::ContractorRepository;

use super::map_sqlx_error;

/// MySQL-backed contractor repository
pub struct MySqlContractorRepository {
    pool: MySqlPool,
}

impl MySqlContractorRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_contractor(row: &sqlx::mysql::MySqlRow) -> Result<Contractor, DomainError> {
        let get = |e: sqlx::Error| DomainError::Database {
            message: format!("failed to read contractor row: {}", e),
        };
        Ok(Contractor {
            id: row.try_get("id").map_err(get)?,
            email: row.try_get("email").map_err(get)?,
            password_hash: row.try_get("password_hash").map_err(get)?,
            cnpj: row.try_get("cnpj").map_err(get)?,
            company_name: row.try_get("company_name").map_err(get)?,
            trade_name: row.try_get("trade_name").map_err(get)?,
            two_step_enabled: row.try_get("two_step_enabled").map_err(get)?,
            two_step_code: row.try_get("two_step_code").map_err(get)?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(get)?,
            updated_at: row
                .try_get::<DateTime<Utc>, _>("updated_at")
                .map_err(get)?,
        })
    }
}

const SELECT_COLUMNS: &str = r#"
    SELECT id, email, password_hash, cnpj, company_name, trade_name,
           two_step_enabled, two_step_code, created_at, updated_at
    FROM contractors
"#;

#[async_trait]
impl ContractorRepository for MySqlContractorRepository {
    async fn create(&self, mut contractor: Contractor) -> Result<Contractor, DomainError> {
        let query = r#"
            INSERT INTO contractors (
                email, password_hash, cnpj, company_name, trade_name,
                two_step_enabled, two_step_code, created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#;

        let result = sqlx::query(query)
            .bind(&contractor.email)
            .bind(&contractor.password_hash)
            .bind(&contractor.cnpj)
            .bind(&contractor.company_name)
            .bind(&contractor.trade_name)
            .bind(contractor.two_step_enabled)
            .bind(&contractor.two_step_code)
            .bind(contractor.created_at)
            .bind(contractor.updated_at)
            .execute(&self.pool)
            .await
            .map_err(|e| map_sqlx_error(e, "failed to create contractor"))?;

        contractor.id = result.last_insert_id() as i64;
        Ok(contractor)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Contractor>, DomainError> {
        let result = sqlx::query(&format!("{} WHERE id = ? LIMIT 1", SELECT_COLUMNS))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_sqlx_error(e, "failed to find contractor"))?;

        result.as_ref().map(Self::row_to_contractor).transpose()
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Contractor>, DomainError> {
        let result = sqlx::query(&format!("{} WHERE email = ? LIMIT 1", SELECT_COLUMNS))
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_sqlx_error(e, "failed to find contractor by email"))?;

        result.as_ref().map(Self::row_to_contractor).transpose()
    }

    async fn find_all(&self) -> Result<Vec<Contractor>, DomainError> {
        let rows = sqlx::query(&format!("{} ORDER BY id", SELECT_COLUMNS))
            .fetch_all(&self.pool)
            .await
            .map_err(|e| map_sqlx_error(e, "failed to list contractors"))?;

        rows.iter().map(Self::row_to_contractor).collect()
    }

    async fn update(&self, contractor: Contractor) -> Result<Contractor, DomainError> {
        let query = r#"
            UPDATE contractors SET
                email = ?,
                password_hash = ?,
                cnpj = ?,
                company_name = ?,
                trade_name = ?,
                updated_at = ?
            WHERE id = ?
        "#;

        let result = sqlx::query(query)
            .bind(&contractor.email)
            .bind(&contractor.password_hash)
            .bind(&contractor.cnpj)
            .bind(&contractor.company_name)
            .bind(&contractor.trade_name)
            .bind(Utc::now())
            .bind(contractor.id)
            .execute(&self.pool)
            .await
            .map_err(|e| map_sqlx_error(e, "failed to update contractor"))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found("Contractor"));
        }

        let mut updated = contractor;
        updated.updated_at = Utc::now();
        Ok(updated)
    }

    async fn set_two_step(
        &self,
        id: i64,
        enabled: bool,
        code: Option<String>,
    ) -> Result<(), DomainError> {
        let result = sqlx::query(
            "UPDATE contractors SET two_step_enabled = ?, two_step_code = ?, updated_at = ? WHERE id = ?",
        )
        .bind(enabled)
        .bind(&code)
        .bind(Utc::now())
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|e| map_sqlx_error(e, "failed to set two-step state"))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found("Contractor"));
        }
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<Option<Contractor>, DomainError> {
        let existing = match self.find_by_id(id).await? {
            Some(contractor) => contractor,
            None => return Ok(None),
        };

        // Cascade inside one transaction so a partial delete is never visible
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| map_sqlx_error(e, "failed to begin transaction"))?;

        sqlx::query(
            r#"
            DELETE s FROM subscribers s
            INNER JOIN selective_processes p ON s.selective_process_id = p.id
            WHERE p.contractor_id = ?
            "#,
        )
        .bind(id)
        .execute(&mut *tx)
        .await
        .map_err(|e| map_sqlx_error(e, "failed to delete subscribers"))?;

        sqlx::query("DELETE FROM selective_processes WHERE contractor_id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(|e| map_sqlx_error(e, "failed to delete processes"))?;

        sqlx::query("DELETE FROM contractors WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(|e| map_sqlx_error(e, "failed to delete contractor"))?;

        tx.commit()
            .await
            .map_err(|e| map_sqlx_error(e, "failed to commit cascade delete"))?;

        tracing::info!(contractor_id = id, "contractor deleted with cascade");
        Ok(Some(existing))
    }
}
