//! Token claim models

use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Claim name ASP.NET Identity uses for roles.
pub const MS_ROLE_CLAIM: &str = "http://schemas.microsoft.com/ws/2008/06/identity/claims/role";

/// A role claim is either a single string or an array when the user holds
/// several roles.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum RoleClaim {
    One(String),
    Many(Vec<String>),
}

impl RoleClaim {
    /// First role, which the UI treats as the user's role.
    pub fn primary(&self) -> Option<&str> {
        match self {
            RoleClaim::One(role) => Some(role.as_str()),
            RoleClaim::Many(roles) => roles.first().map(String::as_str),
        }
    }
}

/// JWT claims structure
#[derive(Serialize, Deserialize, Debug, Default)]
pub struct Claims {
    #[serde(default)]
    pub sub: Option<String>,
    #[serde(default)]
    pub exp: Option<usize>,
    #[serde(default, alias = "http://schemas.microsoft.com/ws/2008/06/identity/claims/role")]
    pub role: Option<RoleClaim>,
}

/// Reads the role claim from a bearer token without verifying it.
///
/// The signature is the server's concern; the client only needs the claim
/// to decide which management affordances to show.
pub fn role_from_token(token: &str) -> Option<String> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.insecure_disable_signature_validation();
    validation.validate_exp = false;
    validation.required_spec_claims.clear();

    match decode::<Claims>(token, &DecodingKey::from_secret(&[]), &validation) {
        Ok(data) => data
            .claims
            .role
            .as_ref()
            .and_then(RoleClaim::primary)
            .map(str::to_string),
        Err(e) => {
            debug!(error = %e, "Bearer token carries no readable role claim");
            None
        }
    }
}
