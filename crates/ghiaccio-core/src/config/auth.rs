//! Password hashing configuration.

use serde::{Deserialize, Serialize};

/// Parameters for the scrypt key-derivation function.
///
/// Defaults match the scrypt recommended parameters (N = 2^15, r = 8,
/// p = 1) with a 64-byte derived key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// log2 of the scrypt CPU/memory cost parameter N.
    #[serde(default = "default_log_n")]
    pub scrypt_log_n: u8,
    /// scrypt block size parameter r.
    #[serde(default = "default_r")]
    pub scrypt_r: u32,
    /// scrypt parallelization parameter p.
    #[serde(default = "default_p")]
    pub scrypt_p: u32,
    /// Derived key length in bytes.
    #[serde(default = "default_key_len")]
    pub key_length: usize,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            scrypt_log_n: default_log_n(),
            scrypt_r: default_r(),
            scrypt_p: default_p(),
            key_length: default_key_len(),
        }
    }
}

fn default_log_n() -> u8 {
    15
}

fn default_r() -> u32 {
    8
}

fn default_p() -> u32 {
    1
}

fn default_key_len() -> usize {
    64
}
