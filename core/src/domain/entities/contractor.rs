//! Contractor entity: an organization account that publishes selective
//! processes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Contractor entity representing a registered contracting organization
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contractor {
    /// Unique identifier, assigned by the store on creation
    pub id: i64,

    /// Login email, unique across contractors
    pub email: String,

    /// Bcrypt hash of the password. The plaintext is never stored.
    pub password_hash: String,

    /// Brazilian company tax id, exactly 14 digits
    pub cnpj: String,

    /// Registered company name
    pub company_name: String,

    /// Commercial (trade) name
    pub trade_name: String,

    /// Whether two-step verification is required after password login
    pub two_step_enabled: bool,

    /// The stored two-step code, present once two-step has been activated
    pub two_step_code: Option<String>,

    /// Timestamp when the contractor was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the contractor was last updated
    pub updated_at: DateTime<Utc>,
}

impl Contractor {
    /// Creates a new contractor. The id is zero until the store assigns one.
    pub fn new(
        email: String,
        password_hash: String,
        cnpj: String,
        company_name: String,
        trade_name: String,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: 0,
            email,
            password_hash,
            cnpj,
            company_name,
            trade_name,
            two_step_enabled: false,
            two_step_code: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Overwrites the profile fields, as the update operation does
    pub fn apply_update(
        &mut self,
        email: String,
        password_hash: String,
        cnpj: String,
        company_name: String,
        trade_name: String,
    ) {
        self.email = email;
        self.password_hash = password_hash;
        self.cnpj = cnpj;
        self.company_name = company_name;
        self.trade_name = trade_name;
        self.updated_at = Utc::now();
    }

    /// Enables two-step verification with a freshly generated code
    pub fn enable_two_step(&mut self, code: String) {
        self.two_step_enabled = true;
        self.two_step_code = Some(code);
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Contractor {
        Contractor::new(
            "a@b.com".to_string(),
            "$2b$12$hash".to_string(),
            "12345678901234".to_string(),
            "X".to_string(),
            "Y".to_string(),
        )
    }

    #[test]
    fn test_new_contractor_defaults() {
        let contractor = sample();
        assert_eq!(contractor.id, 0);
        assert_eq!(contractor.email, "a@b.com");
        assert!(!contractor.two_step_enabled);
        assert!(contractor.two_step_code.is_none());
    }

    #[test]
    fn test_enable_two_step_stores_code() {
        let mut contractor = sample();
        contractor.enable_two_step("123456".to_string());
        assert!(contractor.two_step_enabled);
        assert_eq!(contractor.two_step_code.as_deref(), Some("123456"));
    }

    #[test]
    fn test_apply_update_overwrites_fields() {
        let mut contractor = sample();
        contractor.apply_update(
            "new@b.com".to_string(),
            "$2b$12$other".to_string(),
            "43210987654321".to_string(),
            "NewCo".to_string(),
            "New".to_string(),
        );
        assert_eq!(contractor.email, "new@b.com");
        assert_eq!(contractor.cnpj, "43210987654321");
        assert_eq!(contractor.company_name, "NewCo");
    }
}
