//! Encryption and decryption pipelines.
//!
//! ```text
//! encrypt: validate size → normalize → transform(key)
//! decrypt: validate size → invert key → normalize → transform(inverse)
//! ```
//!
//! Both are single-pass and stateless. The inverse key is derived on every
//! decryption call and never cached. Nothing here logs; callers in `cli`
//! and the binary report progress.

use crate::block::transform;
use crate::error::{HillError, Result};
use crate::key::KeyMatrix;
use crate::text::normalize;

/// Reject block sizes other than 2 or 3
pub fn validate_size(size: usize) -> Result<()> {
    match size {
        2 | 3 => Ok(()),
        other => Err(HillError::InvalidConfiguration(other)),
    }
}

fn check_key(key: &KeyMatrix, size: usize) -> Result<()> {
    validate_size(size)?;
    if key.size() != size {
        return Err(HillError::InvalidKey(format!(
            "key is {0}x{0} but block size is {1}",
            key.size(),
            size
        )));
    }
    Ok(())
}

/// Encrypt `plaintext` with `key`.
///
/// The plaintext is normalized first, so the ciphertext covers the
/// uppercased letters padded with 'X' to a multiple of `size`.
pub fn encrypt(key: &KeyMatrix, plaintext: &str, size: usize) -> Result<String> {
    check_key(key, size)?;
    let normalized = normalize(plaintext, size);
    transform(key.rows(), &normalized, size)
}

/// Decrypt `ciphertext` with the modular inverse of `key`.
///
/// Fails with [`HillError::ModularInverse`] when the key's determinant is
/// not coprime with 26. The result is the normalized plaintext, including
/// any padding added during encryption.
pub fn decrypt(key: &KeyMatrix, ciphertext: &str, size: usize) -> Result<String> {
    check_key(key, size)?;
    let inverse = key.inverse()?;
    let normalized = normalize(ciphertext, size);
    transform(inverse.rows(), &normalized, size)
}

/// A key bound to its own block size
#[derive(Debug, Clone)]
pub struct HillCipher {
    key: KeyMatrix,
}

impl HillCipher {
    pub fn new(key: KeyMatrix) -> Self {
        Self { key }
    }

    pub fn key(&self) -> &KeyMatrix {
        &self.key
    }

    pub fn block_size(&self) -> usize {
        self.key.size()
    }

    pub fn encrypt(&self, plaintext: &str) -> Result<String> {
        encrypt(&self.key, plaintext, self.block_size())
    }

    pub fn decrypt(&self, ciphertext: &str) -> Result<String> {
        decrypt(&self.key, ciphertext, self.block_size())
    }
}
