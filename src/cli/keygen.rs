use crate::error::Result;
use crate::key::{write_key_file, KeyMatrix};
use rand::rngs::OsRng;
use std::path::Path;
use tracing::info;

/// Options for the keygen command
#[derive(Debug, Clone)]
pub struct KeygenOptions {
    /// Block size (2 or 3)
    pub size: usize,
}

impl Default for KeygenOptions {
    fn default() -> Self {
        Self { size: 2 }
    }
}

/// Generate a random invertible key from the OS CSPRNG
pub fn generate_key(options: &KeygenOptions) -> Result<KeyMatrix> {
    let mut rng = OsRng;
    KeyMatrix::generate(options.size, &mut rng)
}

/// Generate a key and save it as a JSON key file
pub fn generate_key_file(path: &Path, options: &KeygenOptions) -> Result<KeyMatrix> {
    let key = generate_key(options)?;
    write_key_file(path, &key)?;
    info!("Wrote {0}x{0} key to {1}", key.size(), path.display());
    Ok(key)
}

/// Pick the key from an inline matrix string or a key file
pub fn resolve_key(inline: Option<&str>, key_file: Option<&Path>) -> Result<KeyMatrix> {
    match (inline, key_file) {
        (Some(text), None) => text.parse(),
        (None, Some(path)) => crate::key::read_key_file(path),
        (Some(_), Some(_)) => Err(crate::HillError::InvalidKey(
            "use either --key or --key-file, not both".into(),
        )),
        (None, None) => Err(crate::HillError::InvalidKey(
            "no key supplied: use --key or --key-file".into(),
        )),
    }
}
