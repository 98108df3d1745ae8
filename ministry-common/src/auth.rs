//! Password hashing, session tokens and account roles
//!
//! Passwords are stored as argon2 PHC strings. Session cookies carry a
//! random token; only its SHA-256 digest is written to the database, so a
//! leaked `sessions` table cannot be replayed as cookies.

use argon2::password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use uuid::Uuid;

use crate::{Error, Result};

/// Minimum accepted password length
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Account role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Pastor,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Pastor => "pastor",
            Role::Admin => "admin",
        }
    }

    /// Parse a stored role; unknown values degrade to `User`
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "admin" => Role::Admin,
            "pastor" => Role::Pastor,
            _ => Role::User,
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Hash a password into an argon2 PHC string
///
/// # Examples
///
/// ```
/// use ministry_common::auth::{hash_password, verify_password};
///
/// let hash = hash_password("correct horse").unwrap();
/// assert!(hash.starts_with("$argon2"));
/// assert!(verify_password("correct horse", &hash));
/// assert!(!verify_password("wrong horse", &hash));
/// ```
pub fn hash_password(password: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| Error::Internal(format!("Password hashing failed: {}", e)))
}

/// Check a password against a stored PHC string. Malformed hashes never verify.
pub fn verify_password(password: &str, stored_hash: &str) -> bool {
    match PasswordHash::new(stored_hash) {
        Ok(parsed) => Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok(),
        Err(_) => false,
    }
}

/// [`hash_password`] on the blocking thread pool
pub async fn hash_password_blocking(password: String) -> Result<String> {
    tokio::task::spawn_blocking(move || hash_password(&password))
        .await
        .map_err(|e| Error::Internal(format!("Password hashing task failed: {}", e)))?
}

/// [`verify_password`] on the blocking thread pool
pub async fn verify_password_blocking(password: String, stored_hash: String) -> Result<bool> {
    tokio::task::spawn_blocking(move || verify_password(&password, &stored_hash))
        .await
        .map_err(|e| Error::Internal(format!("Password check task failed: {}", e)))
}

/// Fresh session token for a cookie
pub fn generate_session_token() -> String {
    // Two v4 UUIDs give 244 random bits
    format!("{}{}", Uuid::new_v4().simple(), Uuid::new_v4().simple())
}

/// Digest stored in `sessions.token_hash`
///
/// # Examples
///
/// ```
/// use ministry_common::auth::hash_session_token;
///
/// let digest = hash_session_token("abc");
/// assert_eq!(digest.len(), 64);
/// assert_eq!(digest, hash_session_token("abc"));
/// ```
pub fn hash_session_token(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Validate a new password; returns a user-facing message on failure
pub fn check_password_strength(password: &str) -> std::result::Result<(), String> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(format!(
            "Password must be at least {} characters long",
            MIN_PASSWORD_LENGTH
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_blocking_wrappers_match_sync_versions() {
        let hash = hash_password_blocking("pool password".to_string()).await.unwrap();
        assert!(verify_password("pool password", &hash));
        assert!(verify_password_blocking("pool password".to_string(), hash.clone())
            .await
            .unwrap());
        assert!(!verify_password_blocking("other".to_string(), hash).await.unwrap());
    }

    #[test]
    fn test_password_hash_is_salted() {
        let a = hash_password("same password").unwrap();
        let b = hash_password("same password").unwrap();
        assert_ne!(a, b);
        assert!(verify_password("same password", &a));
        assert!(verify_password("same password", &b));
    }

    #[test]
    fn test_malformed_hash_does_not_verify() {
        assert!(!verify_password("anything", ""));
        assert!(!verify_password("anything", "not-a-phc-string"));
    }

    #[test]
    fn test_session_tokens_are_unique_hex() {
        let a = generate_session_token();
        let b = generate_session_token();
        assert_ne!(a, b);
        assert_eq!(a.len(), 64);
        assert!(a.chars().all(|c| c.is_ascii_hexdigit()));
        assert_ne!(hash_session_token(&a), hash_session_token(&b));
    }

    #[test]
    fn test_role_parse() {
        assert_eq!(Role::parse("admin"), Role::Admin);
        assert_eq!(Role::parse(" Pastor "), Role::Pastor);
        assert_eq!(Role::parse("superuser"), Role::User);
        assert_eq!(Role::Admin.to_string(), "admin");
    }

    #[test]
    fn test_password_strength() {
        assert!(check_password_strength("short").is_err());
        assert!(check_password_strength("long enough").is_ok());
    }
}
