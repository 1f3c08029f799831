/// Letter appended until the text fills a whole number of blocks
pub const FILLER: char = 'X';

/// Uppercase the text, drop everything outside `A..=Z`, then pad with
/// [`FILLER`] to a multiple of `block_size`.
///
/// Text with no letters normalizes to the empty string and is not padded.
pub fn normalize(text: &str, block_size: usize) -> String {
    let mut normalized: String = text
        .chars()
        .flat_map(char::to_uppercase)
        .filter(|c| c.is_ascii_uppercase())
        .collect();

    if block_size > 0 {
        while normalized.len() % block_size != 0 {
            normalized.push(FILLER);
        }
    }

    normalized
}

/// Offset of an uppercase letter from 'A' (0..26)
pub fn letter_to_offset(letter: char) -> Option<i64> {
    if letter.is_ascii_uppercase() {
        Some(letter as i64 - 'A' as i64)
    } else {
        None
    }
}

/// Letter for an offset, which must already be reduced into 0..26
pub fn offset_to_letter(offset: i64) -> char {
    debug_assert!((0..26).contains(&offset));
    (b'A' + offset as u8) as char
}
