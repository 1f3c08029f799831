mod analyze;
mod recover;

use analyze::{analyze_file, analyze_text};
use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use recover::recover_key;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "codebreaker")]
#[command(about = "Cryptanalysis toolkit for Hill ciphertexts")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Letter frequency and index of coincidence of a ciphertext
    Analyze {
        /// File to analyze
        file: Option<PathBuf>,

        /// Analyze this text instead of a file
        #[arg(long, conflicts_with = "file")]
        text: Option<String>,
    },

    /// Recover the key matrix from matching plaintext and ciphertext
    Recover {
        /// Known plaintext
        #[arg(long)]
        plaintext: String,

        /// Ciphertext produced from the plaintext
        #[arg(long)]
        ciphertext: String,

        /// Block size (2 or 3)
        #[arg(long, default_value_t = 2)]
        size: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Analyze { file, text } => {
            let report = match (file, text) {
                (Some(file), _) => analyze_file(&file)?,
                (None, Some(text)) => analyze_text(&text)?,
                (None, None) => bail!("Pass a file or --text to analyze"),
            };
            print!("{}", report);
        }
        Commands::Recover {
            plaintext,
            ciphertext,
            size,
        } => {
            let key = recover_key(&plaintext, &ciphertext, size)?;
            println!("Recovered key: {}", key);
            println!("Fingerprint: {}", key.fingerprint());
        }
    }

    Ok(())
}
