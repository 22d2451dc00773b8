//! Authentication service: credential checks and bearer tokens

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use chrono::Duration;

use crate::{
    config::AuthConfig,
    error::{AppError, AppResult},
    models::user::{AccessToken, TokenClaims, User},
    repository::Repository,
};

pub(crate) const INVALID_CREDENTIALS: &str = "Could not validate credentials";

#[derive(Clone)]
pub struct AuthService {
    repository: Repository,
    config: AuthConfig,
}

impl AuthService {
    pub fn new(repository: Repository, config: AuthConfig) -> Self {
        Self { repository, config }
    }

    /// Check a username/password pair.
    ///
    /// Returns `None` both for an unknown username and for a wrong password.
    pub async fn authenticate(&self, username: &str, password: &str) -> AppResult<Option<User>> {
        let Some(user) = self.repository.users_get_by_username(username).await? else {
            return Ok(None);
        };

        if !verify_password(&user.password_hash, password)? {
            return Ok(None);
        }

        Ok(Some(user))
    }

    /// Authenticate and issue a bearer token
    pub async fn login(&self, username: &str, password: &str) -> AppResult<AccessToken> {
        let user = self
            .authenticate(username, password)
            .await?
            .ok_or_else(|| AppError::Authentication("Incorrect username or password".to_string()))?;

        let token = self.issue_token(&user.username)?;
        tracing::info!("Issued access token for user {}", user.id);
        Ok(AccessToken::bearer(token))
    }

    /// Sign a token for `subject` valid for the configured lifetime
    pub fn issue_token(&self, subject: &str) -> AppResult<String> {
        let lifetime = Duration::try_minutes(self.config.token_expiration_minutes).ok_or_else(|| {
            AppError::Internal(format!(
                "Token lifetime of {} minutes is out of range",
                self.config.token_expiration_minutes
            ))
        })?;
        TokenClaims::issued_now(subject, lifetime)
            .create_token(&self.config.jwt_secret, self.config.jwt_algorithm)
            .map_err(|e| AppError::Internal(format!("Failed to create token: {}", e)))
    }

    /// Resolve a bearer token to its user.
    ///
    /// Every failure yields the same error; the cause is only logged.
    pub async fn resolve_token(&self, token: &str) -> AppResult<User> {
        let claims =
            TokenClaims::from_token(token, &self.config.jwt_secret, self.config.jwt_algorithm)
                .map_err(|e| {
                    tracing::debug!("Rejected bearer token: {}", e);
                    AppError::Authentication(INVALID_CREDENTIALS.to_string())
                })?;

        let username = claims.sub.ok_or_else(|| {
            tracing::debug!("Rejected bearer token: no subject claim");
            AppError::Authentication(INVALID_CREDENTIALS.to_string())
        })?;

        self.repository
            .users_get_by_username(&username)
            .await?
            .ok_or_else(|| {
                tracing::debug!("Rejected bearer token: user {} no longer exists", username);
                AppError::Authentication(INVALID_CREDENTIALS.to_string())
            })
    }
}

/// Hash a password using Argon2 with a random salt
pub fn hash_password(password: &str) -> AppResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AppError::Internal(format!("Failed to hash password: {}", e)))?;
    Ok(hash.to_string())
}

/// Verify a password against a stored PHC hash
pub fn verify_password(hash: &str, password: &str) -> AppResult<bool> {
    let parsed_hash =
        PasswordHash::new(hash).map_err(|_| AppError::Internal("Invalid password hash".to_string()))?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}
