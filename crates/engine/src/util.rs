//! Internal helpers for credential handling and input normalization.
//!
//! These utilities are **not** part of the public API. They centralize
//! validation so the engine enforces consistent invariants.

use sha2::{Digest, Sha256};
use uuid::Uuid;

use crate::{EngineError, ResultEngine, commands::MIN_PASSWORD_LEN};

/// Fresh random salt for a password hash.
pub(crate) fn new_salt() -> String {
    Uuid::new_v4().simple().to_string()
}

/// Hex SHA-256 of `salt || password`.
pub(crate) fn hash_password(salt: &str, password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt.as_bytes());
    hasher.update(password.as_bytes());
    hex::encode(hasher.finalize())
}

pub(crate) fn verify_password(salt: &str, password: &str, expected_hash: &str) -> bool {
    hash_password(salt, password) == expected_hash
}

/// Lowercased, trimmed email; rejects values without a local part and domain.
pub(crate) fn normalize_email(value: &str) -> ResultEngine<String> {
    let email = value.trim().to_lowercase();
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(email),
        _ => Err(EngineError::InvalidInput("invalid email".to_string())),
    }
}

pub(crate) fn normalize_required_name(value: &str) -> ResultEngine<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(EngineError::InvalidInput("name is required".to_string()));
    }
    Ok(trimmed.to_string())
}

pub(crate) fn validate_password(password: &str) -> ResultEngine<()> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(EngineError::InvalidInput(format!(
            "password must be at least {MIN_PASSWORD_LEN} characters"
        )));
    }
    Ok(())
}

/// Parse a stored id; a malformed one reads as a missing `label`.
pub(crate) fn parse_uuid(value: &str, label: &str) -> ResultEngine<Uuid> {
    Uuid::parse_str(value).map_err(|_| EngineError::KeyNotFound(format!("{label} not exists")))
}
