//! Bearer-token handling for the browser session.
//!
//! The backend issues JWTs. The client never verifies them; it only reads the
//! role claim to decide which guard applies. Authorization is enforced by the
//! backend on every request.

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

use crate::AppError;

/// Name of the `localStorage` slot holding the bearer credential.
pub const SESSION_STORAGE_KEY: &str = "token";

/// Long-form role claim emitted by ASP.NET identity.
const DOTNET_ROLE_CLAIM: &str = "http://schemas.microsoft.com/ws/2008/06/identity/claims/role";

/// Opaque bearer credential. Never empty.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionToken(String);

impl SessionToken {
    /// Wrap a raw credential, rejecting blank strings.
    pub fn new(raw: impl Into<String>) -> Option<Self> {
        let raw = raw.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Decode the role claim embedded in this token.
    pub fn role(&self) -> Result<Role, AppError> {
        decode_role(&self.0)
    }
}

impl fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SessionToken(***)")
    }
}

/// Account role carried in the token.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Employer,
    Candidate,
    Admin,
    /// Any claim value outside the known set, including an absent claim (`""`).
    Other(String),
}

impl Role {
    /// Parse a role claim. Matching is exact, as issued by the backend.
    pub fn from_claim(s: &str) -> Self {
        match s {
            "Employer" => Role::Employer,
            "Candidate" => Role::Candidate,
            "Admin" => Role::Admin,
            other => Role::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Role::Employer => "Employer",
            Role::Candidate => "Candidate",
            Role::Admin => "Admin",
            Role::Other(s) => s,
        }
    }

    pub fn is_employer(&self) -> bool {
        matches!(self, Role::Employer)
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, Role::Admin)
    }
}

/// Credentials posted to the login endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Login response; older backend builds name the field `accessToken`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoginResponse {
    #[serde(alias = "accessToken")]
    pub token: String,
}

/// Read the role claim out of a JWT without verifying its signature.
pub fn decode_role(token: &str) -> Result<Role, AppError> {
    let claims = decode_claims(token)?;
    let role = claims
        .get("role")
        .or_else(|| claims.get(DOTNET_ROLE_CLAIM));

    let role = match role {
        Some(Value::String(s)) => Role::from_claim(s),
        Some(Value::Array(values)) => values
            .iter()
            .find_map(Value::as_str)
            .map(Role::from_claim)
            .unwrap_or_else(|| Role::Other(String::new())),
        _ => Role::Other(String::new()),
    };
    Ok(role)
}

/// Decode the payload segment of a JWT into a JSON object.
pub fn decode_claims(token: &str) -> Result<serde_json::Map<String, Value>, AppError> {
    let mut segments = token.trim().split('.');
    let payload = match (segments.next(), segments.next(), segments.next(), segments.next()) {
        (Some(_header), Some(payload), Some(_signature), None) if !payload.is_empty() => payload,
        _ => {
            return Err(AppError::invalid_token(
                "expected three dot-separated segments",
            ))
        }
    };

    let bytes = URL_SAFE_NO_PAD
        .decode(payload.trim_end_matches('='))
        .map_err(|e| AppError::invalid_token(format!("payload is not base64url: {e}")))?;

    match serde_json::from_slice::<Value>(&bytes) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(_) => Err(AppError::invalid_token("payload is not a JSON object")),
        Err(e) => Err(AppError::invalid_token(format!("payload is not JSON: {e}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AppErrorKind;
    use serde_json::json;

    fn token_with(claims: Value) -> String {
        let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
        let payload = URL_SAFE_NO_PAD.encode(claims.to_string());
        format!("{header}.{payload}.c2lnbmF0dXJl")
    }

    #[test]
    fn decodes_short_role_claim() {
        let token = token_with(json!({"sub": "42", "role": "Employer"}));
        assert_eq!(decode_role(&token).unwrap(), Role::Employer);
    }

    #[test]
    fn decodes_dotnet_role_claim() {
        let token = token_with(json!({
            "http://schemas.microsoft.com/ws/2008/06/identity/claims/role": "Admin"
        }));
        assert_eq!(decode_role(&token).unwrap(), Role::Admin);
    }

    #[test]
    fn role_array_uses_first_string() {
        let token = token_with(json!({"role": [7, "Candidate", "Admin"]}));
        assert_eq!(decode_role(&token).unwrap(), Role::Candidate);
    }

    #[test]
    fn missing_role_claim_is_other_empty() {
        let token = token_with(json!({"sub": "1"}));
        assert_eq!(decode_role(&token).unwrap(), Role::Other(String::new()));
    }

    #[test]
    fn role_matching_is_case_sensitive() {
        let token = token_with(json!({"role": "employer"}));
        let role = decode_role(&token).unwrap();
        assert_eq!(role, Role::Other("employer".to_string()));
        assert!(!role.is_employer());
    }

    #[test]
    fn padded_payload_is_accepted() {
        let header = URL_SAFE_NO_PAD.encode(b"{}");
        let payload = URL_SAFE_NO_PAD.encode(br#"{"role":"Employer"}"#);
        let token = format!("{header}.{payload}==.sig");
        assert_eq!(decode_role(&token).unwrap(), Role::Employer);
    }

    #[test]
    fn rejects_wrong_segment_count() {
        for bad in ["", "abc", "a.b", "a.b.c.d", "a..c"] {
            let err = decode_role(bad).unwrap_err();
            assert_eq!(err.kind, AppErrorKind::InvalidToken, "input {bad:?}");
        }
    }

    #[test]
    fn rejects_non_object_payload() {
        let payload = URL_SAFE_NO_PAD.encode(b"[1,2,3]");
        let err = decode_role(&format!("h.{payload}.s")).unwrap_err();
        assert_eq!(err.kind, AppErrorKind::InvalidToken);
    }

    #[test]
    fn rejects_garbage_payload() {
        let err = decode_role("h.!!!not-base64!!!.s").unwrap_err();
        assert_eq!(err.kind, AppErrorKind::InvalidToken);
    }

    #[test]
    fn session_token_rejects_blank() {
        assert!(SessionToken::new("").is_none());
        assert!(SessionToken::new("   ").is_none());
        assert_eq!(SessionToken::new(" abc ").unwrap().as_str(), "abc");
    }

    #[test]
    fn session_token_debug_is_redacted() {
        let token = SessionToken::new("secret-value").unwrap();
        assert_eq!(format!("{token:?}"), "SessionToken(***)");
    }

    #[test]
    fn login_response_accepts_either_field_name() {
        let a: LoginResponse = serde_json::from_str(r#"{"token":"t1"}"#).unwrap();
        let b: LoginResponse =
            serde_json::from_str(r#"{"accessToken":"t2","expiresIn":3600}"#).unwrap();
        assert_eq!(a.token, "t1");
        assert_eq!(b.token, "t2");
    }
}
