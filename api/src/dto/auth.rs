use serde::{Deserialize, Serialize};
use validator::Validate;

use ps_shared::utils::validation::PASSWORD_RE;

/// Body of POST /login
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email)]
    pub email: String,

    #[validate(regex(path = *PASSWORD_RE))]
    pub password: String,
}

/// Login response when two-step verification is enabled: no token yet,
/// only the id the caller must echo back with the code
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TwoStepPendingResponse {
    pub two_step_enabled: bool,
    pub usuario_id: i64,
}

/// Login response when no second factor is required
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthenticatedResponse {
    pub two_step_enabled: bool,
    pub authorization: String,
}

/// Body of GET /login/validartoken
#[derive(Debug, Clone, Deserialize)]
pub struct ValidateLoginTokenRequest {
    pub id: i64,
    /// Submitted two-step code, numeric on the wire
    pub token: u32,
}

/// Session token response after a completed two-step validation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthorizationResponse {
    pub authorization: String,
}

/// Formats a numeric wire code back into the stored zero-padded form
pub fn format_code(token: u32) -> String {
    format!("{:06}", token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_request_validation() {
        let valid = LoginRequest {
            email: "a@b.com".to_string(),
            password: "Abc12345".to_string(),
        };
        assert!(valid.validate().is_ok());

        let bad_email = LoginRequest {
            email: "nope".to_string(),
            password: "Abc12345".to_string(),
        };
        assert!(bad_email.validate().is_err());
    }

    #[test]
    fn test_format_code_pads_leading_zeros() {
        assert_eq!(format_code(12345), "012345");
        assert_eq!(format_code(0), "000000");
        assert_eq!(format_code(987654), "987654");
    }

    #[test]
    fn test_pending_response_wire_shape() {
        let response = TwoStepPendingResponse {
            two_step_enabled: true,
            usuario_id: 7,
        };
        let json = serde_json::to_value(response).unwrap();
        assert_eq!(json["twoStepEnabled"], true);
        assert_eq!(json["usuarioId"], 7);
    }
}
