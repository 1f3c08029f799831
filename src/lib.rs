//! Hillcrypt - Hill Cipher over Residues Modulo 26
//!
//! A polygraphic substitution cipher: letters are grouped into blocks of
//! two or three, each block is read as a vector of offsets from 'A', and
//! the vector is multiplied by a square key matrix modulo 26.
//!
//! ## Pipeline
//!
//! ```text
//! Input → Normalize → Split into blocks → Multiply (mod 26) → Letters → Output
//! ```
//!
//! - **Normalize**: uppercase, keep `A..Z` only, pad with 'X' to a whole block
//! - **Multiply**: key matrix for encryption, its modular inverse for decryption
//!
//! The cipher is a teaching artifact. It is linear and falls to a
//! known-plaintext attack (see the `codebreaker` tool).
//!
//! ## Example
//!
//! ```
//! use hillcrypt::{decrypt, encrypt, KeyMatrix};
//!
//! let key = KeyMatrix::new(vec![vec![1, 2], vec![3, 5]]).unwrap();
//!
//! let ciphertext = encrypt(&key, "H,i!", 2).unwrap();
//! assert_eq!(ciphertext, "XJ");
//!
//! let plaintext = decrypt(&key, &ciphertext, 2).unwrap();
//! assert_eq!(plaintext, "HI");
//! ```

pub mod block;
pub mod cli;
pub mod engine;
pub mod error;
pub mod key;
pub mod matrix;
pub mod text;

pub use engine::{decrypt, encrypt, HillCipher};
pub use error::{HillError, Result};
pub use key::{read_key_file, write_key_file, KeyMatrix};
