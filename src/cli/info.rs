use crate::error::Result;
use crate::key::KeyMatrix;
use crate::matrix::{gcd, mod_inverse, MODULUS};

/// Describe a key: geometry, determinant, invertibility and inverse
pub fn show_key_info(key: &KeyMatrix) -> Result<String> {
    let determinant = key.determinant()?;
    let mut output = String::new();

    output.push_str("Hill Cipher Key Information\n");
    output.push_str("===========================\n\n");

    output.push_str(&format!("Size: {0}x{0}\n", key.size()));
    output.push_str(&format!("Key: {}\n", key));
    output.push_str("Reduced (mod 26):\n");
    push_matrix(&mut output, &key.reduced());
    output.push('\n');

    output.push_str(&format!("Determinant (mod 26): {}\n", determinant));
    match mod_inverse(determinant, MODULUS) {
        Ok(inverse_det) => {
            output.push_str(&format!(
                "Invertible: yes (determinant inverse {})\n",
                inverse_det
            ));
            output.push_str("Inverse:\n");
            push_matrix(&mut output, key.inverse()?.rows());
        }
        Err(_) => {
            output.push_str(&format!(
                "Invertible: no (gcd({}, 26) = {})\n",
                determinant,
                gcd(determinant, MODULUS)
            ));
            output.push_str("Inverse: none, this key cannot decrypt\n");
        }
    }
    output.push('\n');

    output.push_str(&format!("Fingerprint: {}\n", key.fingerprint()));
    Ok(output)
}

fn push_matrix(output: &mut String, rows: &[Vec<i64>]) {
    for row in rows {
        let cells: Vec<String> = row.iter().map(|v| format!("{:>2}", v)).collect();
        output.push_str(&format!("  [{}]\n", cells.join(" ")));
    }
}
