use anyhow::{bail, Result};
use hillcrypt::block::to_vector;
use hillcrypt::engine::{encrypt, validate_size};
use hillcrypt::matrix::{invert_matrix, multiply_matrices};
use hillcrypt::text::normalize;
use hillcrypt::KeyMatrix;

/// Only the leading blocks are searched for an invertible combination
const MAX_SEARCH_BLOCKS: usize = 48;

/// Known-plaintext attack.
///
/// With `n` plaintext blocks stacked as the columns of `P` and the matching
/// ciphertext blocks as the columns of `C`, the key satisfies `K·P = C`, so
/// `K = C·P⁻¹ (mod 26)` for any choice of blocks whose `P` is invertible.
/// The candidate is accepted only if it reproduces the whole ciphertext.
pub fn recover_key(plaintext: &str, ciphertext: &str, size: usize) -> Result<KeyMatrix> {
    validate_size(size)?;
    let plain = normalize(plaintext, size);
    let cipher = normalize(ciphertext, size);
    if plain.len() != cipher.len() {
        bail!(
            "Plaintext has {} letters but ciphertext has {} after normalization",
            plain.len(),
            cipher.len()
        );
    }

    let plain_blocks = blocks(&plain, size)?;
    let cipher_blocks = blocks(&cipher, size)?;
    if plain_blocks.len() < size {
        bail!("Need at least {} blocks of known plaintext", size);
    }

    let searched = plain_blocks.len().min(MAX_SEARCH_BLOCKS);
    for indices in combinations(searched, size) {
        let p = columns(&plain_blocks, &indices);
        let Ok(p_inverse) = invert_matrix(&p) else {
            continue;
        };
        let c = columns(&cipher_blocks, &indices);
        let candidate = KeyMatrix::new(multiply_matrices(&c, &p_inverse)?)?;
        if encrypt(&candidate, &plain, size)? == cipher {
            return Ok(candidate);
        }
    }

    bail!(
        "No invertible combination of {} plaintext blocks found; supply more known plaintext",
        size
    )
}

fn blocks(text: &str, size: usize) -> Result<Vec<Vec<i64>>> {
    let letters: Vec<char> = text.chars().collect();
    letters
        .chunks_exact(size)
        .map(|block| to_vector(block).map_err(anyhow::Error::from))
        .collect()
}

/// Matrix whose column `k` is block `indices[k]`
fn columns(blocks: &[Vec<i64>], indices: &[usize]) -> Vec<Vec<i64>> {
    let size = indices.len();
    (0..size)
        .map(|row| indices.iter().map(|&i| blocks[i][row]).collect())
        .collect()
}

/// All increasing `k`-element index sets from `0..n`
fn combinations(n: usize, k: usize) -> Vec<Vec<usize>> {
    let mut result = Vec::new();
    if k == 0 || k > n {
        return result;
    }
    let mut current: Vec<usize> = (0..k).collect();
    loop {
        result.push(current.clone());
        let Some(pos) = (0..k).rev().find(|&i| current[i] < n - k + i) else {
            return result;
        };
        current[pos] += 1;
        for i in pos + 1..k {
            current[i] = current[i - 1] + 1;
        }
    }
}
