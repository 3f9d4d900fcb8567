//! Session token codec.
//!
//! Session tokens are HS256-signed JWTs carrying a [`SessionClaims`]
//! payload (user id, studio id, role, phone). They are integrity
//! protected but not encrypted: the claims are readable if decoded,
//! just not forgeable. There is no refresh or rotation mechanism; an
//! expired token requires a fresh login.

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use vowdesk_core::roles::Role;
use vowdesk_core::types::DbId;

/// Claims embedded in every session token.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SessionClaims {
    /// Subject -- the user's internal database id.
    pub sub: DbId,
    /// The studio (tenant) the user belongs to.
    #[serde(rename = "studioId")]
    pub studio_id: DbId,
    /// The user's access tier.
    pub role: Role,
    /// The user's phone number (login identifier).
    pub phone: String,
    /// Expiration time (UTC Unix timestamp).
    pub exp: i64,
    /// Issued-at time (UTC Unix timestamp).
    pub iat: i64,
}

/// Failure modes of [`verify_session_token`]. Both collapse to the same
/// uniform 401 at the HTTP layer; the split exists for logging and tests.
#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    /// Bad signature, truncation, garbage input, or expiry.
    #[error("invalid or expired session token")]
    Invalid,
    /// Structurally valid JWT whose payload is missing required claims.
    #[error("session token claims are incomplete")]
    MalformedClaims,
}

/// Configuration for session token issuance and verification.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// HMAC-SHA256 secret used to sign and verify tokens. Injected at
    /// construction so tests can use a fixed secret.
    pub secret: String,
    /// Session lifetime in seconds (default: 7 days).
    pub session_ttl_secs: i64,
}

/// Default session lifetime in seconds (7 days).
const DEFAULT_SESSION_TTL_SECS: i64 = 60 * 60 * 24 * 7;

impl JwtConfig {
    /// Load JWT configuration from environment variables.
    ///
    /// | Env Var            | Required | Default  |
    /// |--------------------|----------|----------|
    /// | `JWT_SECRET`       | **yes**  | --       |
    /// | `SESSION_TTL_SECS` | no       | `604800` |
    ///
    /// # Panics
    ///
    /// Panics if `JWT_SECRET` is not set or is empty. An unset signing
    /// secret is a fatal configuration error, not a recoverable one.
    pub fn from_env() -> Self {
        let secret =
            std::env::var("JWT_SECRET").expect("JWT_SECRET must be set in the environment");
        assert!(!secret.is_empty(), "JWT_SECRET must not be empty");

        let session_ttl_secs: i64 = std::env::var("SESSION_TTL_SECS")
            .unwrap_or_else(|_| DEFAULT_SESSION_TTL_SECS.to_string())
            .parse()
            .expect("SESSION_TTL_SECS must be a valid i64");

        Self {
            secret,
            session_ttl_secs,
        }
    }
}

/// Issue an HS256 session token for the given user.
pub fn issue_session_token(
    user_id: DbId,
    studio_id: DbId,
    role: Role,
    phone: &str,
    config: &JwtConfig,
) -> Result<String, jsonwebtoken::errors::Error> {
    let now = chrono::Utc::now().timestamp();
    let exp = now + config.session_ttl_secs;

    let claims = SessionClaims {
        sub: user_id,
        studio_id,
        role,
        phone: phone.to_string(),
        exp,
        iat: now,
    };

    encode(
        &Header::default(), // HS256
        &claims,
        &EncodingKey::from_secret(config.secret.as_bytes()),
    )
}

/// Verify and decode a session token, returning the embedded [`SessionClaims`].
///
/// Validates the signature and expiration with zero leeway: a token is
/// rejected the second after `exp`.
pub fn verify_session_token(token: &str, config: &JwtConfig) -> Result<SessionClaims, TokenError> {
    let mut validation = Validation::default(); // HS256, requires exp
    validation.leeway = 0;

    let token_data = decode::<SessionClaims>(
        token,
        &DecodingKey::from_secret(config.secret.as_bytes()),
        &validation,
    )
    .map_err(|e| match e.kind() {
        // Deserialization failure means the payload is missing required
        // claims (sub/studioId/role/phone).
        jsonwebtoken::errors::ErrorKind::Json(_) => TokenError::MalformedClaims,
        _ => TokenError::Invalid,
    })?;
    Ok(token_data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use uuid::Uuid;

    /// Helper to build a test config with a known secret.
    fn test_config() -> JwtConfig {
        JwtConfig {
            secret: "test-secret-that-is-long-enough-for-hmac".to_string(),
            session_ttl_secs: 3600,
        }
    }

    #[test]
    fn test_issue_and_verify_round_trip() {
        let config = test_config();
        let user_id = Uuid::new_v4();
        let studio_id = Uuid::new_v4();

        let token = issue_session_token(user_id, studio_id, Role::Admin, "+15550000", &config)
            .expect("token issuance should succeed");

        let claims = verify_session_token(&token, &config).expect("verification should succeed");
        assert_eq!(claims.sub, user_id);
        assert_eq!(claims.studio_id, studio_id);
        assert_eq!(claims.role, Role::Admin);
        assert_eq!(claims.phone, "+15550000");
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_expired_token_fails() {
        let config = test_config();

        // Manually create an already-expired token. Validation uses zero
        // leeway, so one second past exp is enough.
        let now = chrono::Utc::now().timestamp();
        let claims = SessionClaims {
            sub: Uuid::new_v4(),
            studio_id: Uuid::new_v4(),
            role: Role::Staff,
            phone: "+15550001".into(),
            exp: now - 1,
            iat: now - 3600,
        };

        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(config.secret.as_bytes()),
        )
        .expect("encoding should succeed");

        let result = verify_session_token(&token, &config);
        assert_matches!(result, Err(TokenError::Invalid));
    }

    #[test]
    fn test_tampered_signature_fails() {
        let config = test_config();
        let token = issue_session_token(
            Uuid::new_v4(),
            Uuid::new_v4(),
            Role::Staff,
            "+15550002",
            &config,
        )
        .expect("token issuance should succeed");

        // Flip one character in the signature segment. Must fail cleanly,
        // never panic, never verify.
        let sig_start = token.rfind('.').unwrap() + 1;
        let mut bytes = token.into_bytes();
        bytes[sig_start] = if bytes[sig_start] == b'A' { b'B' } else { b'A' };
        let tampered = String::from_utf8(bytes).unwrap();

        let result = verify_session_token(&tampered, &config);
        assert_matches!(result, Err(TokenError::Invalid));
    }

    #[test]
    fn test_different_secrets_fail() {
        let config_a = JwtConfig {
            secret: "secret-alpha".to_string(),
            session_ttl_secs: 3600,
        };
        let config_b = JwtConfig {
            secret: "secret-bravo".to_string(),
            session_ttl_secs: 3600,
        };

        let token = issue_session_token(
            Uuid::new_v4(),
            Uuid::new_v4(),
            Role::Staff,
            "+15550003",
            &config_a,
        )
        .expect("token issuance should succeed");

        let result = verify_session_token(&token, &config_b);
        assert_matches!(result, Err(TokenError::Invalid));
    }

    #[test]
    fn test_missing_claims_fail() {
        let config = test_config();

        // A structurally valid JWT whose payload lacks studioId/role.
        #[derive(serde::Serialize)]
        struct PartialClaims {
            sub: Uuid,
            exp: i64,
            iat: i64,
        }
        let now = chrono::Utc::now().timestamp();
        let token = encode(
            &Header::default(),
            &PartialClaims {
                sub: Uuid::new_v4(),
                exp: now + 3600,
                iat: now,
            },
            &EncodingKey::from_secret(config.secret.as_bytes()),
        )
        .expect("encoding should succeed");

        let result = verify_session_token(&token, &config);
        assert_matches!(result, Err(TokenError::MalformedClaims));
    }

    #[test]
    fn test_garbage_input_fails() {
        let config = test_config();
        assert_matches!(
            verify_session_token("not-a-jwt", &config),
            Err(TokenError::Invalid)
        );
        assert_matches!(verify_session_token("", &config), Err(TokenError::Invalid));
    }
}
