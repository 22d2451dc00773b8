//! User model and token claims

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// Full user record from database
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: i64,
    pub username: String,
    /// Argon2 PHC string
    pub password_hash: String,
}

/// Public view of a user
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserInfo {
    pub id: i64,
    pub username: String,
}

impl From<User> for UserInfo {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
        }
    }
}

/// Registration request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateUser {
    #[validate(length(min = 1, message = "Username must not be empty"))]
    pub username: String,
    #[validate(length(min = 1, message = "Password must not be empty"))]
    pub password: String,
}

/// JWT claims for bearer tokens
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Username of the token holder
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub: Option<String>,
    pub iat: i64,
    pub exp: i64,
}

impl TokenClaims {
    /// Claims for `subject`, issued at `issued_at` (unix seconds) and valid for `lifetime`.
    ///
    /// `exp` saturates at `i64::MAX` instead of overflowing.
    pub fn new(subject: &str, issued_at: i64, lifetime: Duration) -> Self {
        Self {
            sub: Some(subject.to_string()),
            iat: issued_at,
            exp: issued_at.saturating_add(lifetime.num_seconds()),
        }
    }

    /// Claims issued now
    pub fn issued_now(subject: &str, lifetime: Duration) -> Self {
        Self::new(subject, Utc::now().timestamp(), lifetime)
    }

    /// Create a signed JWT
    pub fn create_token(
        &self,
        secret: &str,
        algorithm: Algorithm,
    ) -> Result<String, jsonwebtoken::errors::Error> {
        encode(
            &Header::new(algorithm),
            self,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
    }

    /// Verify signature and expiry, then return the claims
    pub fn from_token(
        token: &str,
        secret: &str,
        algorithm: Algorithm,
    ) -> Result<Self, jsonwebtoken::errors::Error> {
        let mut validation = Validation::new(algorithm);
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp"]);

        let token_data = decode::<Self>(
            token,
            &DecodingKey::from_secret(secret.as_bytes()),
            &validation,
        )?;
        Ok(token_data.claims)
    }
}

/// Token endpoint response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AccessToken {
    pub access_token: String,
    pub token_type: String,
}

impl AccessToken {
    pub fn bearer(access_token: String) -> Self {
        Self {
            access_token,
            token_type: "bearer".to_string(),
        }
    }
}
