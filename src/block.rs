use crate::error::{HillError, Result};
use crate::matrix;
use crate::text::{letter_to_offset, offset_to_letter};

/// Map a block of letters to their 0..26 offsets
pub fn to_vector(block: &[char]) -> Result<Vec<i64>> {
    block
        .iter()
        .map(|&c| letter_to_offset(c).ok_or(HillError::InvalidCharacter(c)))
        .collect()
}

/// Map reduced offsets back to letters
pub fn from_vector(vector: &[i64]) -> String {
    vector.iter().map(|&v| offset_to_letter(matrix::modulo(v))).collect()
}

/// Apply `matrix` to every `block_size`-letter block of normalized text.
///
/// Blocks are independent and keep their order. The matrix must be
/// `block_size` x `block_size`, the text must consist of `A..Z` only and its
/// length must be a multiple of `block_size`.
pub fn transform(matrix: &[Vec<i64>], text: &str, block_size: usize) -> Result<String> {
    if block_size != 2 && block_size != 3 {
        return Err(HillError::InvalidConfiguration(block_size));
    }
    let size = matrix::check_square(matrix)?;
    if size != block_size {
        return Err(HillError::InvalidKey(format!(
            "{0}x{0} matrix cannot transform blocks of {1} letters",
            size, block_size
        )));
    }

    let letters: Vec<char> = text.chars().collect();
    if letters.len() % block_size != 0 {
        return Err(HillError::MisalignedText {
            length: letters.len(),
            block_size,
        });
    }

    let mut output = String::with_capacity(letters.len());
    for block in letters.chunks_exact(block_size) {
        let vector = to_vector(block)?;
        output.push_str(&from_vector(&matrix::multiply(matrix, &vector)));
    }

    Ok(output)
}
