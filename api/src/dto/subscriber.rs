use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use ps_core::domain::entities::Subscriber;

/// Body of POST /subscriber
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SubscribeRequest {
    #[validate(email, length(max = 64))]
    pub email: String,

    #[validate(length(min = 1, max = 128))]
    pub name: String,

    /// ISO date, e.g. "1999-04-02"
    pub birth: NaiveDate,

    pub selective_process_id: i64,
}

/// Query string of GET /subscriber
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListSubscribersQuery {
    pub selective_process_id: i64,
}

/// Response to a successful enrollment
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriberCreatedResponse {
    pub message: String,
    pub id: i64,
    pub email: String,
    pub name: String,
    pub birth: NaiveDate,
    pub selective_process_id: i64,
}

/// List entry for GET /subscriber
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriberSummary {
    pub id: i64,
    pub name: String,
    pub birth: NaiveDate,
    pub email: String,
    pub selective_process_id: i64,
}

impl From<&Subscriber> for SubscriberSummary {
    fn from(subscriber: &Subscriber) -> Self {
        Self {
            id: subscriber.id,
            name: subscriber.name.clone(),
            birth: subscriber.birth,
            email: subscriber.email.clone(),
            selective_process_id: subscriber.selective_process_id,
        }
    }
}
