//! scrypt password hashing and verification.
//!
//! Each user gets a random 16-byte salt; the derived key and the salt are
//! stored in separate columns, both hex-encoded. Plaintext passwords are
//! never stored.

use std::fmt::Write;

use rand::Rng;
use scrypt::Params;

use ghiaccio_core::config::auth::AuthConfig;
use ghiaccio_core::error::AppError;

/// Size of the per-user random salt in bytes.
const SALT_BYTES: usize = 16;

/// Handles password hashing and verification using scrypt.
#[derive(Debug, Clone)]
pub struct PasswordHasher {
    params: Params,
    key_length: usize,
}

impl PasswordHasher {
    /// Creates a new password hasher from configuration.
    pub fn new(config: &AuthConfig) -> Result<Self, AppError> {
        let params = Params::new(
            config.scrypt_log_n,
            config.scrypt_r,
            config.scrypt_p,
            config.key_length,
        )
        .map_err(|e| AppError::configuration(format!("Invalid scrypt parameters: {e}")))?;

        Ok(Self {
            params,
            key_length: config.key_length,
        })
    }

    /// Hashes a plaintext password with a fresh random salt.
    ///
    /// Returns `(derived_key_hex, salt_hex)`.
    pub fn hash_password(&self, password: &str) -> Result<(String, String), AppError> {
        let mut salt = [0u8; SALT_BYTES];
        rand::rng().fill_bytes(&mut salt);
        let salt_hex = hex_encode(&salt);

        let key = self.derive_key(password, &salt_hex)?;
        Ok((key, salt_hex))
    }

    /// Verifies a plaintext password against a stored salt and derived key.
    ///
    /// Returns `Ok(true)` if the password matches, `Ok(false)` if not.
    pub fn verify_password(
        &self,
        password: &str,
        salt_hex: &str,
        stored_key_hex: &str,
    ) -> Result<bool, AppError> {
        let derived = self.derive_key(password, salt_hex)?;
        Ok(eq_constant_time(derived.as_bytes(), stored_key_hex.as_bytes()))
    }

    /// Derives the scrypt key for a password and hex-encoded salt.
    fn derive_key(&self, password: &str, salt_hex: &str) -> Result<String, AppError> {
        let mut output = vec![0u8; self.key_length];
        scrypt::scrypt(
            password.as_bytes(),
            salt_hex.as_bytes(),
            &self.params,
            &mut output,
        )
        .map_err(|e| AppError::internal(format!("Password hashing failed: {e}")))?;

        Ok(hex_encode(&output))
    }
}

/// Hex-encode a byte slice.
fn hex_encode(bytes: &[u8]) -> String {
    bytes.iter().fold(String::with_capacity(bytes.len() * 2), |mut out, b| {
        let _ = write!(out, "{b:02x}");
        out
    })
}

/// Byte comparison that does not short-circuit on the first mismatch.
fn eq_constant_time(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}
