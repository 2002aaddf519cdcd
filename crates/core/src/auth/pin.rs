//! Deletion-PIN hashing with Argon2id.
//!
//! The PIN gates permanent deletion and database reset. It is a setting the
//! data-access collaborator hands back to whichever client asks: a weak,
//! client-local boundary kept as the surrounding application defines it.
//! Only the at-rest representation is hardened: settings hold an Argon2id
//! PHC string, never the PIN itself.

use argon2::{
    Argon2, PasswordHash,
    password_hash::{PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use thiserror::Error;

/// Errors that can occur during PIN operations.
#[derive(Debug, Error)]
pub enum PinError {
    /// Failed to hash the PIN.
    #[error("failed to hash PIN: {0}")]
    HashError(String),

    /// Failed to verify the PIN.
    #[error("failed to verify PIN: {0}")]
    VerifyError(String),

    /// The stored hash is not a valid PHC string.
    #[error("invalid PIN hash format")]
    InvalidHash,
}

/// Hashes a PIN using Argon2id.
///
/// # Errors
///
/// Returns `PinError::HashError` if hashing fails.
///
/// # Example
///
/// ```
/// use sanad_core::auth::hash_pin;
///
/// let hash = hash_pin("4217").unwrap();
/// assert!(hash.starts_with("$argon2id$"));
/// ```
pub fn hash_pin(pin: &str) -> Result<String, PinError> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    argon2
        .hash_password(pin.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| PinError::HashError(e.to_string()))
}

/// Verifies a PIN against a stored hash.
///
/// Returns `true` if the PIN matches, `false` otherwise.
///
/// # Errors
///
/// Returns `PinError::InvalidHash` if the stored hash is malformed,
/// `PinError::VerifyError` if verification fails unexpectedly.
///
/// # Example
///
/// ```
/// use sanad_core::auth::{hash_pin, verify_pin};
///
/// let hash = hash_pin("4217").unwrap();
/// assert!(verify_pin("4217", &hash).unwrap());
/// assert!(!verify_pin("0000", &hash).unwrap());
/// ```
pub fn verify_pin(pin: &str, hash: &str) -> Result<bool, PinError> {
    let parsed_hash = PasswordHash::new(hash).map_err(|_| PinError::InvalidHash)?;

    let argon2 = Argon2::default();

    match argon2.verify_password(pin.as_bytes(), &parsed_hash) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(PinError::VerifyError(e.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_pin() {
        let hash = hash_pin("4217").unwrap();
        assert!(hash.starts_with("$argon2id$"));
        assert_ne!(hash, "4217");
    }

    #[test]
    fn test_verify_correct_pin() {
        let hash = hash_pin("4217").unwrap();
        assert!(verify_pin("4217", &hash).unwrap());
    }

    #[test]
    fn test_verify_wrong_pin() {
        let hash = hash_pin("4217").unwrap();
        assert!(!verify_pin("9999", &hash).unwrap());
    }

    #[test]
    fn test_same_pin_different_hashes() {
        let hash1 = hash_pin("4217").unwrap();
        let hash2 = hash_pin("4217").unwrap();
        assert_ne!(hash1, hash2);
    }

    #[test]
    fn test_invalid_hash_format() {
        let result = verify_pin("4217", "not_a_phc_string");
        assert!(matches!(result, Err(PinError::InvalidHash)));
    }
}
