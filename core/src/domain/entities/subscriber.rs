//! Subscriber entity: a candidate enrolled in a selective process.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A candidate enrollment in a selective process
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subscriber {
    /// Unique identifier, assigned by the store on creation
    pub id: i64,

    /// Candidate name
    pub name: String,

    /// Candidate birth date
    pub birth: NaiveDate,

    /// Candidate email, at most 64 characters
    pub email: String,

    /// The process this candidate enrolled in
    pub selective_process_id: i64,

    /// Timestamp when the enrollment was created
    pub created_at: DateTime<Utc>,
}

impl Subscriber {
    /// Creates a new subscriber for the given process
    pub fn new(name: String, birth: NaiveDate, email: String, selective_process_id: i64) -> Self {
        Self {
            id: 0,
            name,
            birth,
            email,
            selective_process_id,
            created_at: Utc::now(),
        }
    }
}
