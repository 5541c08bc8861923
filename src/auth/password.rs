//! bcrypt hashing for the `users.password` column.

use bcrypt::{hash, verify, BcryptError, DEFAULT_COST};

use crate::error::AppError;
use crate::models::MAX_PASSWORD_BYTES;

/// Hashes a plain-text password for storage.
///
/// Input past bcrypt's 72-byte limit is refused instead of being truncated.
pub fn hash_password(password: &str) -> Result<String, AppError> {
    if password.len() > MAX_PASSWORD_BYTES {
        return Err(AppError::ValidationError(format!(
            "password: must be at most {} bytes",
            MAX_PASSWORD_BYTES
        )));
    }

    hash(password, DEFAULT_COST).map_err(|e| bcrypt_failure("hash", e))
}

/// Checks `password` against a stored hash. Anything longer than the hashing
/// limit never matches.
pub fn verify_password(password: &str, password_hash: &str) -> Result<bool, AppError> {
    if password.len() > MAX_PASSWORD_BYTES {
        return Ok(false);
    }

    verify(password, password_hash).map_err(|e| bcrypt_failure("verify", e))
}

fn bcrypt_failure(action: &str, error: BcryptError) -> AppError {
    AppError::InternalServerError(format!("Failed to {} password: {}", action, error))
}
