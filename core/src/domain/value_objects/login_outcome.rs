//! Outcome of a successful password verification.

use serde::{Deserialize, Serialize};

/// What the login flow produced after the password checked out.
///
/// Contractors without two-step verification go straight to a session token.
/// Contractors with two-step enabled receive only their id and must complete
/// the code check before a token is issued.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoginOutcome {
    /// Password verified and no second factor required
    Authenticated { token: String },

    /// Password verified but the two-step code must still be validated
    SecondFactorRequired { contractor_id: i64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_variants() {
        let authenticated = LoginOutcome::Authenticated {
            token: "jwt".to_string(),
        };
        let pending = LoginOutcome::SecondFactorRequired { contractor_id: 9 };
        assert_ne!(authenticated, pending);
    }
}
