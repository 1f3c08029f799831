use thiserror::Error;

#[derive(Error, Debug)]
pub enum HillError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid matrix size: {0}. Only 2x2 or 3x3 matrices are supported")]
    InvalidConfiguration(usize),

    #[error("No modular inverse: {value} is not coprime with {modulus}, key matrix is not invertible")]
    ModularInverse { value: i64, modulus: i64 },

    #[error("Unsupported modulus: {0}")]
    UnsupportedModulus(i64),

    #[error("Invalid key: {0}")]
    InvalidKey(String),

    #[error("Text length {length} is not a multiple of block size {block_size}")]
    MisalignedText { length: usize, block_size: usize },

    #[error("Invalid character {0:?}: expected an uppercase letter A-Z")]
    InvalidCharacter(char),
}

pub type Result<T> = std::result::Result<T, HillError>;
