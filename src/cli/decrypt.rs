use crate::engine::decrypt;
use crate::error::Result;
use crate::key::KeyMatrix;
use std::path::Path;
use tracing::info;

/// Options for the decrypt command
#[derive(Debug, Clone)]
pub struct DecryptOptions {
    pub key: KeyMatrix,
}

/// Decrypt a ciphertext file into another file
/// Returns the number of plaintext letters written (padding included)
pub fn decrypt_file(
    input_path: &Path,
    output_path: &Path,
    options: &DecryptOptions,
) -> Result<usize> {
    let ciphertext = std::fs::read_to_string(input_path)?;
    let plaintext = decrypt(&options.key, &ciphertext, options.key.size())?;

    std::fs::write(output_path, &plaintext)?;
    info!(
        "Decrypted {} -> {} ({} letters)",
        input_path.display(),
        output_path.display(),
        plaintext.len()
    );
    Ok(plaintext.len())
}
