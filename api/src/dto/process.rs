use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use ps_core::domain::entities::SelectiveProcess;

/// Body of POST /processo-seletivo
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateProcessRequest {
    #[validate(length(min = 1, max = 128))]
    pub title: String,

    #[validate(length(min = 1, max = 128))]
    pub description: String,

    /// ISO date, e.g. "2026-12-31"
    pub deadline: NaiveDate,

    #[validate(length(min = 1, max = 64))]
    pub method_of_contact: String,
}

/// Query string of GET /processo-seletivo
#[derive(Debug, Clone, Deserialize)]
pub struct FindProcessQuery {
    pub id: i64,
}

/// Query string of GET /findProcessByTitle
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct FindByTitleQuery {
    #[validate(length(min = 1, max = 128))]
    pub title: String,
}

/// Full process view, owner included
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessView {
    pub message: String,
    pub id: i64,
    pub title: String,
    pub description: String,
    pub method_of_contact: String,
    pub deadline: NaiveDate,
    pub id_contractor: i64,
}

impl ProcessView {
    pub fn new(message: &str, process: &SelectiveProcess) -> Self {
        Self {
            message: message.to_string(),
            id: process.id,
            title: process.title.clone(),
            description: process.description.clone(),
            method_of_contact: process.method_of_contact.clone(),
            deadline: process.deadline,
            id_contractor: process.contractor_id,
        }
    }
}

/// Process list entry with the owner included, for the global listing
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessRecord {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub method_of_contact: String,
    pub deadline: NaiveDate,
    pub id_contractor: i64,
}

impl From<&SelectiveProcess> for ProcessRecord {
    fn from(process: &SelectiveProcess) -> Self {
        Self {
            id: process.id,
            title: process.title.clone(),
            description: process.description.clone(),
            method_of_contact: process.method_of_contact.clone(),
            deadline: process.deadline,
            id_contractor: process.contractor_id,
        }
    }
}

/// Process list entry with the owner relation cleared
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessSummary {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub method_of_contact: String,
    pub deadline: NaiveDate,
}

impl From<&SelectiveProcess> for ProcessSummary {
    fn from(process: &SelectiveProcess) -> Self {
        Self {
            id: process.id,
            title: process.title.clone(),
            description: process.description.clone(),
            method_of_contact: process.method_of_contact.clone(),
            deadline: process.deadline,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_length_limits() {
        let valid = CreateProcessRequest {
            title: "Backend engineer".to_string(),
            description: "Junior opening".to_string(),
            deadline: NaiveDate::from_ymd_opt(2026, 12, 31).unwrap(),
            method_of_contact: "email".to_string(),
        };
        assert!(valid.validate().is_ok());

        let too_long = CreateProcessRequest {
            title: "x".repeat(129),
            ..valid
        };
        assert!(too_long.validate().is_err());
    }

    #[test]
    fn test_deadline_parses_iso_date() {
        let request: CreateProcessRequest = serde_json::from_value(serde_json::json!({
            "title": "Dev",
            "description": "desc",
            "deadline": "2026-12-31",
            "methodOfContact": "email"
        }))
        .unwrap();
        assert_eq!(
            request.deadline,
            NaiveDate::from_ymd_opt(2026, 12, 31).unwrap()
        );
    }

    #[test]
    fn test_summary_has_no_owner_field() {
        let process = SelectiveProcess::new(
            "Dev".to_string(),
            "desc".to_string(),
            NaiveDate::from_ymd_opt(2026, 12, 31).unwrap(),
            "email".to_string(),
            5,
        );
        let json = serde_json::to_value(ProcessSummary::from(&process)).unwrap();
        assert!(json.get("idContractor").is_none());
        assert!(json.get("contractorId").is_none());
    }
}
