use anyhow::{bail, Result};
use hillcrypt::text::normalize;
use std::collections::HashMap;
use std::path::Path;

/// English index of coincidence, for comparison in the report
const ENGLISH_IC: f64 = 0.0667;
/// Index of coincidence of uniformly random letters (1/26)
const RANDOM_IC: f64 = 0.0385;

/// Letter statistics of a text file
pub fn analyze_file(path: &Path) -> Result<String> {
    let text = std::fs::read_to_string(path)?;
    build_report(&format!("File: {}", path.display()), &text)
}

/// Letter statistics of the normalized letters of `text`
pub fn analyze_text(text: &str) -> Result<String> {
    build_report("Source: inline text", text)
}

fn build_report(source: &str, text: &str) -> Result<String> {
    let letters: Vec<u8> = normalize(text, 1).into_bytes();
    if letters.is_empty() {
        bail!("No letters to analyze");
    }

    let counts = letter_counts(&letters);
    let ic = index_of_coincidence(&letters);

    let mut output = String::new();
    output.push_str("Hill Ciphertext Analysis\n");
    output.push_str("========================\n\n");
    output.push_str(&format!("{}\n", source));
    output.push_str(&format!("Letters analyzed: {}\n\n", letters.len()));

    output.push_str(&format!("Index of Coincidence: {:.4}\n", ic));
    output.push_str(&format!(
        "  English ≈ {:.4}, random ≈ {:.4} ({})\n",
        ENGLISH_IC,
        RANDOM_IC,
        interpret_ic(ic)
    ));
    output.push_str(&format!(
        "Distinct letters: {}/26\n\n",
        counts.iter().filter(|&&c| c > 0).count()
    ));

    output.push_str("Top Letters:\n");
    let mut ranked: Vec<(char, usize)> = counts
        .iter()
        .enumerate()
        .filter(|(_, &count)| count > 0)
        .map(|(i, &count)| ((b'A' + i as u8) as char, count))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
    for (letter, count) in ranked.iter().take(6) {
        output.push_str(&format!(
            "  {} {:>5} ({:.1}%)\n",
            letter,
            count,
            *count as f64 * 100.0 / letters.len() as f64
        ));
    }
    output.push('\n');

    output.push_str("Top Bigrams:\n");
    let bigrams = top_ngrams(&letters, 2, 5);
    if bigrams.is_empty() {
        output.push_str("  (text too short)\n");
    }
    for (gram, count) in bigrams {
        output.push_str(&format!("  {} {:>5}\n", String::from_utf8_lossy(&gram), count));
    }

    Ok(output)
}

fn letter_counts(letters: &[u8]) -> [usize; 26] {
    let mut counts = [0usize; 26];
    for &letter in letters {
        counts[(letter - b'A') as usize] += 1;
    }
    counts
}

fn index_of_coincidence(letters: &[u8]) -> f64 {
    if letters.len() < 2 {
        return 0.0;
    }
    let numerator: usize = letter_counts(letters)
        .iter()
        .map(|&c| if c > 1 { c * (c - 1) } else { 0 })
        .sum();
    numerator as f64 / (letters.len() * (letters.len() - 1)) as f64
}

fn interpret_ic(ic: f64) -> &'static str {
    if ic >= (ENGLISH_IC + RANDOM_IC) / 2.0 {
        "language-like"
    } else {
        "flattened, consistent with a polygraphic cipher"
    }
}

fn top_ngrams(data: &[u8], n: usize, limit: usize) -> Vec<(Vec<u8>, usize)> {
    if data.len() < n {
        return Vec::new();
    }
    let mut map: HashMap<Vec<u8>, usize> = HashMap::new();
    for window in data.windows(n) {
        *map.entry(window.to_vec()).or_insert(0) += 1;
    }
    let mut ranked: Vec<(Vec<u8>, usize)> = map.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    ranked.truncate(limit);
    ranked
}
