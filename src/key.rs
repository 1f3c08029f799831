use crate::error::{HillError, Result};
use crate::matrix::{self, MODULUS};
use rand::Rng;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;
use std::path::Path;

/// Square key matrix (2x2 or 3x3) of arbitrary integers.
///
/// Entries are kept exactly as supplied and reduced modulo 26 only when the
/// matrix is used. Invertibility is not checked on construction: a key with
/// a determinant sharing a factor with 26 still encrypts, but [`KeyMatrix::inverse`]
/// fails for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "KeyFile", into = "KeyFile")]
pub struct KeyMatrix {
    rows: Vec<Vec<i64>>,
}

/// On-disk JSON layout: `{"size": 2, "rows": [[1, 2], [3, 5]]}`
#[derive(Serialize, Deserialize)]
struct KeyFile {
    size: usize,
    rows: Vec<Vec<i64>>,
}

impl TryFrom<KeyFile> for KeyMatrix {
    type Error = HillError;

    fn try_from(file: KeyFile) -> Result<Self> {
        if file.size != file.rows.len() {
            return Err(HillError::InvalidKey(format!(
                "declared size {} but found {} rows",
                file.size,
                file.rows.len()
            )));
        }
        Self::new(file.rows)
    }
}

impl From<KeyMatrix> for KeyFile {
    fn from(key: KeyMatrix) -> Self {
        Self {
            size: key.size(),
            rows: key.rows,
        }
    }
}

impl KeyMatrix {
    pub fn new(rows: Vec<Vec<i64>>) -> Result<Self> {
        matrix::check_square(&rows)?;
        Ok(Self { rows })
    }

    /// Random key with entries in `0..26` and an invertible determinant
    pub fn generate<R: Rng + ?Sized>(size: usize, rng: &mut R) -> Result<Self> {
        if size != 2 && size != 3 {
            return Err(HillError::InvalidConfiguration(size));
        }
        loop {
            let rows: Vec<Vec<i64>> = (0..size)
                .map(|_| (0..size).map(|_| rng.gen_range(0..MODULUS)).collect())
                .collect();
            let key = Self { rows };
            if key.is_invertible() {
                return Ok(key);
            }
        }
    }

    pub fn size(&self) -> usize {
        self.rows.len()
    }

    pub fn rows(&self) -> &[Vec<i64>] {
        &self.rows
    }

    /// Entries reduced into `[0, 26)`
    pub fn reduced(&self) -> Vec<Vec<i64>> {
        self.rows
            .iter()
            .map(|row| row.iter().map(|&v| matrix::modulo(v)).collect())
            .collect()
    }

    pub fn determinant(&self) -> Result<i64> {
        matrix::determinant(&self.rows)
    }

    pub fn is_invertible(&self) -> bool {
        self.determinant()
            .map(|det| matrix::gcd(det, MODULUS) == 1)
            .unwrap_or(false)
    }

    /// Modular inverse key, derived fresh on every call
    pub fn inverse(&self) -> Result<Self> {
        Ok(Self {
            rows: matrix::invert_matrix(&self.rows)?,
        })
    }

    /// Hex SHA-256 of the reduced entries; keys with equal residues match
    pub fn fingerprint(&self) -> String {
        let mut hasher = Sha256::new();
        hasher.update(b"hillcrypt_key_v1");
        hasher.update([self.size() as u8]);
        for value in self.reduced().into_iter().flatten() {
            hasher.update([value as u8]);
        }
        hex::encode(hasher.finalize())
    }
}

impl std::str::FromStr for KeyMatrix {
    type Err = HillError;

    /// Accepts rows separated by `;` (`"1 2; 3 5"`) or a flat list of 4 or 9
    /// entries (`"1,2,3,5"`).
    fn from_str(s: &str) -> Result<Self> {
        let rows: Vec<Vec<i64>> = if s.contains(';') {
            s.split(';')
                .filter(|row| !row.trim().is_empty())
                .map(parse_entries)
                .collect::<Result<_>>()?
        } else {
            let values = parse_entries(s)?;
            let size = match values.len() {
                4 => 2,
                9 => 3,
                n => {
                    return Err(HillError::InvalidKey(format!(
                        "expected 4 or 9 entries, found {n}"
                    )))
                }
            };
            values.chunks(size).map(<[i64]>::to_vec).collect()
        };
        Self::new(rows)
    }
}

fn parse_entries(row: &str) -> Result<Vec<i64>> {
    row.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(|token| {
            token
                .parse::<i64>()
                .map_err(|_| HillError::InvalidKey(format!("not an integer: {token:?}")))
        })
        .collect()
}

impl fmt::Display for KeyMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows: Vec<String> = self
            .rows
            .iter()
            .map(|row| {
                row.iter()
                    .map(i64::to_string)
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect();
        write!(f, "{}", rows.join("; "))
    }
}

/// Load a key matrix from a JSON key file
pub fn read_key_file(path: &Path) -> Result<KeyMatrix> {
    let data = std::fs::read(path)?;
    Ok(serde_json::from_slice(&data)?)
}

/// Write a key matrix as pretty-printed JSON
pub fn write_key_file(path: &Path, key: &KeyMatrix) -> Result<()> {
    let data = serde_json::to_vec_pretty(key)?;
    std::fs::write(path, data)?;
    Ok(())
}
