use serde::{Deserialize, Serialize};
use validator::Validate;

use ps_core::domain::entities::Contractor;
use ps_shared::utils::validation::{CNPJ_RE, PASSWORD_RE};

/// Body of contractor create and update requests
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ContractorPayload {
    #[validate(email)]
    pub email: String,

    /// Exactly 14 digits
    #[validate(regex(path = *CNPJ_RE))]
    pub cnpj: String,

    #[validate(length(min = 1, max = 128))]
    pub company_name: String,

    #[validate(length(min = 1, max = 128))]
    pub trade_name: String,

    /// 8-16 characters, alphanumerics plus `!@#$%&*`
    #[validate(regex(path = *PASSWORD_RE))]
    pub password: String,
}

/// Query string of GET /contratante
#[derive(Debug, Clone, Deserialize)]
pub struct FindContractorQuery {
    pub id: i64,
}

/// Response to a successful contractor creation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractorCreatedResponse {
    pub message: String,
    pub id: i64,
    pub email: String,
    pub cnpj: String,
    pub company_name: String,
    pub trade_name: String,
    /// Session token for the freshly created account
    pub authorization: String,
}

/// Single-contractor view returned by lookups, updates and deletes.
/// The password hash is never part of any response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractorView {
    pub message: String,
    pub email: String,
    pub cnpj: String,
    pub company_name: String,
    pub trade_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub two_step_validation: Option<bool>,
}

impl ContractorView {
    pub fn new(message: &str, contractor: &Contractor) -> Self {
        Self {
            message: message.to_string(),
            email: contractor.email.clone(),
            cnpj: contractor.cnpj.clone(),
            company_name: contractor.company_name.clone(),
            trade_name: contractor.trade_name.clone(),
            two_step_validation: None,
        }
    }

    pub fn with_two_step_flag(mut self, enabled: bool) -> Self {
        self.two_step_validation = Some(enabled);
        self
    }
}

/// List entry for GET /contratante/todos
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractorSummary {
    pub id: i64,
    pub email: String,
    pub cnpj: String,
    pub company_name: String,
    pub trade_name: String,
    pub two_step_enabled: bool,
}

impl From<&Contractor> for ContractorSummary {
    fn from(contractor: &Contractor) -> Self {
        Self {
            id: contractor.id,
            email: contractor.email.clone(),
            cnpj: contractor.cnpj.clone(),
            company_name: contractor.company_name.clone(),
            trade_name: contractor.trade_name.clone(),
            two_step_enabled: contractor.two_step_enabled,
        }
    }
}

/// Body of GET /contratante/validartoken/{id}
#[derive(Debug, Clone, Deserialize)]
pub struct ValidateCodeRequest {
    /// Submitted two-step code, numeric on the wire
    pub token: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload() -> ContractorPayload {
        ContractorPayload {
            email: "a@b.com".to_string(),
            cnpj: "12345678901234".to_string(),
            company_name: "X".to_string(),
            trade_name: "Y".to_string(),
            password: "Abc12345".to_string(),
        }
    }

    #[test]
    fn test_valid_payload_passes() {
        assert!(payload().validate().is_ok());
    }

    #[test]
    fn test_bad_cnpj_rejected() {
        let mut request = payload();
        request.cnpj = "123".to_string();
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_bad_password_rejected() {
        let mut request = payload();
        request.password = "short".to_string();
        assert!(request.validate().is_err());

        request.password = "has spaces not ok".to_string();
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_bad_email_rejected() {
        let mut request = payload();
        request.email = "not-an-email".to_string();
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_camel_case_wire_names() {
        let json = serde_json::to_value(payload()).unwrap();
        assert!(json.get("companyName").is_some());
        assert!(json.get("tradeName").is_some());
        assert!(json.get("company_name").is_none());
    }
}
