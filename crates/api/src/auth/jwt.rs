//! Token issue and verification.
//!
//! Register and login both answer with one HS256-signed JWT; there is no
//! refresh flow, clients simply log in again when the token lapses.

use agrisense_core::types::DbId;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Days a token stays valid when `JWT_EXPIRY_DAYS` is unset.
const DEFAULT_EXPIRY_DAYS: i64 = 7;

/// Payload carried by every token.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// The user's internal database id.
    pub sub: DbId,
    pub email: String,
    /// Role name, e.g. `"farmer"`.
    pub role: String,
    /// Expiry as a Unix timestamp; checked by [`validate_token`].
    pub exp: i64,
    /// Issue time as a Unix timestamp.
    pub iat: i64,
    /// Random per-token id, so individual tokens can be named in audit logs.
    pub jti: String,
}

/// Signing parameters, one instance shared through [`crate::state::AppState`].
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// HMAC secret for signing and verification.
    pub secret: String,
    pub token_expiry_days: i64,
}

impl JwtConfig {
    /// Read `JWT_SECRET` (required) and `JWT_EXPIRY_DAYS` (default 7).
    ///
    /// # Panics
    ///
    /// Panics when `JWT_SECRET` is missing or blank. Tokens signed with a
    /// guessable default secret would be forgeable, so there is none.
    pub fn from_env() -> Self {
        let secret = std::env::var("JWT_SECRET")
            .ok()
            .filter(|s| !s.is_empty())
            .expect("JWT_SECRET must be set to a non-empty value");

        let token_expiry_days = std::env::var("JWT_EXPIRY_DAYS")
            .map(|days| days.parse().expect("JWT_EXPIRY_DAYS must be an integer"))
            .unwrap_or(DEFAULT_EXPIRY_DAYS);

        Self {
            secret,
            token_expiry_days,
        }
    }
}

/// Sign a token for `user_id` with a fresh `jti`.
pub fn generate_token(
    user_id: DbId,
    email: &str,
    role: &str,
    config: &JwtConfig,
) -> Result<String, jsonwebtoken::errors::Error> {
    let issued = Utc::now();
    let expires = issued + Duration::days(config.token_expiry_days);

    let claims = Claims {
        sub: user_id,
        email: email.to_string(),
        role: role.to_string(),
        exp: expires.timestamp(),
        iat: issued.timestamp(),
        jti: Uuid::new_v4().to_string(),
    };

    // Header::default() is HS256.
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(config.secret.as_bytes()),
    )
}

/// Verify a token's signature and expiry and return its claims.
pub fn validate_token(
    token: &str,
    config: &JwtConfig,
) -> Result<Claims, jsonwebtoken::errors::Error> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with(secret: &str) -> JwtConfig {
        JwtConfig {
            secret: secret.to_string(),
            token_expiry_days: 7,
        }
    }

    #[test]
    fn round_trip_preserves_claims() {
        let config = config_with("unit-test-signing-secret");
        let token = generate_token(42, "maria@farm.test", "farmer", &config).unwrap();

        let claims = validate_token(&token, &config).unwrap();
        assert_eq!(claims.sub, 42);
        assert_eq!(claims.email, "maria@farm.test");
        assert_eq!(claims.role, "farmer");
        assert!(!claims.jti.is_empty());
    }

    #[test]
    fn expiry_spans_the_configured_days() {
        let config = JwtConfig {
            secret: "unit-test-signing-secret".to_string(),
            token_expiry_days: 2,
        };
        let token = generate_token(1, "a@farm.test", "farmer", &config).unwrap();
        let claims = validate_token(&token, &config).unwrap();
        assert_eq!(claims.exp - claims.iat, 2 * 24 * 60 * 60);
    }

    #[test]
    fn expired_token_is_rejected() {
        let config = config_with("unit-test-signing-secret");

        // Hand-build a token whose expiry is past the validator's default
        // 60-second leeway.
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: 1,
            email: "late@farm.test".to_string(),
            role: "farmer".to_string(),
            exp: now - 600,
            iat: now - 1200,
            jti: Uuid::new_v4().to_string(),
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(config.secret.as_bytes()),
        )
        .unwrap();

        assert!(validate_token(&token, &config).is_err());
    }

    #[test]
    fn tokens_do_not_verify_across_secrets() {
        let token =
            generate_token(1, "a@farm.test", "farmer", &config_with("first-secret")).unwrap();
        assert!(validate_token(&token, &config_with("second-secret")).is_err());
    }

    #[test]
    fn each_token_gets_its_own_jti() {
        let config = config_with("unit-test-signing-secret");
        let a = generate_token(1, "a@farm.test", "farmer", &config).unwrap();
        let b = generate_token(1, "a@farm.test", "farmer", &config).unwrap();
        let jti_a = validate_token(&a, &config).unwrap().jti;
        let jti_b = validate_token(&b, &config).unwrap().jti;
        assert_ne!(jti_a, jti_b);
    }
}
