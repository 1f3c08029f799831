use hillcrypt::text::normalize;
use hillcrypt::{decrypt, encrypt, HillCipher, HillError, KeyMatrix};
use std::error::Error;

fn demo_key() -> KeyMatrix {
    KeyMatrix::new(vec![vec![1, 2], vec![3, 5]]).expect("valid 2x2 key")
}

#[test]
fn two_letter_block_encrypts_and_decrypts() -> Result<(), Box<dyn Error>> {
    let key = demo_key();

    let ciphertext = encrypt(&key, "HI", 2)?;
    assert_eq!(ciphertext, "XJ");
    assert_eq!(decrypt(&key, &ciphertext, 2)?, "HI");

    Ok(())
}

#[test]
fn odd_length_plaintext_is_padded_and_padding_is_kept() -> Result<(), Box<dyn Error>> {
    let key = demo_key();
    assert_eq!(normalize("CAT", 2), "CATX");

    let ciphertext = encrypt(&key, "CAT", 2)?;
    assert_eq!(ciphertext.len(), 4);
    assert_eq!(decrypt(&key, &ciphertext, 2)?, "CATX");

    Ok(())
}

#[test]
fn punctuation_and_case_are_normalized_away() -> Result<(), Box<dyn Error>> {
    let key = demo_key();
    assert_eq!(normalize("H,i!", 2), "HI");
    assert_eq!(encrypt(&key, "H,i!", 2)?, encrypt(&key, "HI", 2)?);
    assert_eq!(encrypt(&key, "H,i!", 2)?, "XJ");

    Ok(())
}

#[test]
fn letterless_input_produces_empty_output() -> Result<(), Box<dyn Error>> {
    let key = demo_key();
    assert_eq!(encrypt(&key, "42 -- ?!", 2)?, "");
    assert_eq!(decrypt(&key, "", 2)?, "");

    Ok(())
}

#[test]
fn non_invertible_key_fails_loudly_on_decrypt() {
    // determinant 13 shares a factor with 26
    let key = KeyMatrix::new(vec![vec![1, 0], vec![0, 13]]).expect("valid shape");
    let ciphertext = encrypt(&key, "HELLO", 2).expect("encryption does not need the inverse");

    match decrypt(&key, &ciphertext, 2) {
        Err(HillError::ModularInverse { value, modulus }) => {
            assert_eq!(value, 13);
            assert_eq!(modulus, 26);
        }
        other => panic!("expected ModularInverse, got {other:?}"),
    }
}

#[test]
fn unsupported_block_sizes_are_rejected() {
    let key = demo_key();
    for size in [0, 1, 4, 26] {
        assert!(matches!(
            encrypt(&key, "HI", size),
            Err(HillError::InvalidConfiguration(s)) if s == size
        ));
        assert!(matches!(
            decrypt(&key, "HI", size),
            Err(HillError::InvalidConfiguration(s)) if s == size
        ));
    }
}

#[test]
fn three_by_three_key_roundtrips_long_text() -> Result<(), Box<dyn Error>> {
    let cipher = HillCipher::new("6 24 1; 13 16 10; 20 17 15".parse()?);
    let plaintext = "Cryptography is the practice of secure communication.";

    let ciphertext = cipher.encrypt(plaintext)?;
    assert_ne!(ciphertext, normalize(plaintext, 3));
    assert_eq!(cipher.decrypt(&ciphertext)?, normalize(plaintext, 3));

    Ok(())
}

#[test]
fn keys_with_equal_residues_are_interchangeable() -> Result<(), Box<dyn Error>> {
    let small = demo_key();
    let large = KeyMatrix::new(vec![vec![1 + 26 * 40, 2 - 26], vec![-23, 5 + 26 * 7]])?;

    let ciphertext = encrypt(&small, "interchangeable", 2)?;
    assert_eq!(encrypt(&large, "interchangeable", 2)?, ciphertext);
    assert_eq!(decrypt(&large, &ciphertext, 2)?, "INTERCHANGEABLE".to_string() + "X");

    Ok(())
}
