use crate::engine::encrypt;
use crate::error::Result;
use crate::key::KeyMatrix;
use std::path::Path;
use tracing::info;

/// Options for the encrypt command
#[derive(Debug, Clone)]
pub struct EncryptOptions {
    pub key: KeyMatrix,
}

/// Encrypt a text file into another file
/// Returns the number of ciphertext letters written
pub fn encrypt_file(
    input_path: &Path,
    output_path: &Path,
    options: &EncryptOptions,
) -> Result<usize> {
    let plaintext = std::fs::read_to_string(input_path)?;
    let ciphertext = encrypt(&options.key, &plaintext, options.key.size())?;

    std::fs::write(output_path, &ciphertext)?;
    info!(
        "Encrypted {} -> {} ({} letters)",
        input_path.display(),
        output_path.display(),
        ciphertext.len()
    );
    Ok(ciphertext.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_encrypt_file_writes_ciphertext() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("plain.txt");
        let output = dir.path().join("cipher.txt");
        std::fs::write(&input, "H,i!\n").unwrap();

        let options = EncryptOptions {
            key: "1 2; 3 5".parse().unwrap(),
        };
        let written = encrypt_file(&input, &output, &options).unwrap();

        assert_eq!(written, 2);
        assert_eq!(std::fs::read_to_string(&output).unwrap(), "XJ");
    }

    #[test]
    fn test_encrypt_file_missing_input() {
        let dir = tempdir().unwrap();
        let options = EncryptOptions {
            key: "1 2; 3 5".parse().unwrap(),
        };
        let result = encrypt_file(
            &dir.path().join("missing.txt"),
            &dir.path().join("out.txt"),
            &options,
        );
        assert!(matches!(result, Err(crate::HillError::Io(_))));
    }
}
