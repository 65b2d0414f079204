//! Selective process entity: a job/application posting owned by a
//! contractor.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A selective process (job posting) with a deadline and contact method
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectiveProcess {
    /// Unique identifier, assigned by the store on creation
    pub id: i64,

    /// Posting title, at most 128 characters
    pub title: String,

    /// Posting description, at most 128 characters
    pub description: String,

    /// Application deadline
    pub deadline: NaiveDate,

    /// How candidates are contacted, at most 64 characters
    pub method_of_contact: String,

    /// Owning contractor. Every process belongs to exactly one contractor.
    pub contractor_id: i64,

    /// Timestamp when the process was created
    pub created_at: DateTime<Utc>,
}

impl SelectiveProcess {
    /// Creates a new process owned by the given contractor
    pub fn new(
        title: String,
        description: String,
        deadline: NaiveDate,
        method_of_contact: String,
        contractor_id: i64,
    ) -> Self {
        Self {
            id: 0,
            title,
            description,
            deadline,
            method_of_contact,
            contractor_id,
            created_at: Utc::now(),
        }
    }

    /// Whether the given contractor owns this process
    pub fn is_owned_by(&self, contractor_id: i64) -> bool {
        self.contractor_id == contractor_id
    }
}
