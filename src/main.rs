use clap::{Args, Parser, Subcommand};
use hillcrypt::cli::{
    decrypt_file, encrypt_file, generate_key, generate_key_file, resolve_key, show_key_info,
    DecryptOptions, EncryptOptions, KeygenOptions,
};
use hillcrypt::{HillCipher, Result};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Version info from build.rs
const VERSION: &str = env!("HILLCRYPT_VERSION");
const PROFILE: &str = env!("HILLCRYPT_PROFILE");
const GIT_HASH: &str = env!("HILLCRYPT_GIT_HASH");

fn get_version() -> &'static str {
    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();
    VERSION_STRING.get_or_init(|| {
        format!("{} {} build {}", PROFILE, VERSION, GIT_HASH)
    })
}

#[derive(Parser)]
#[command(name = "hillcrypt")]
#[command(author, about = "Hill cipher over residues modulo 26", long_about = None)]
struct Cli {
    /// Print version
    #[arg(short = 'V', long)]
    version: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Args)]
#[group(required = true, multiple = false)]
struct KeyArgs {
    /// Key matrix, rows separated by ';' (e.g. "1 2; 3 5")
    #[arg(long, allow_hyphen_values = true)]
    key: Option<String>,

    /// JSON key file written by `keygen`
    #[arg(long)]
    key_file: Option<PathBuf>,
}

#[derive(Args)]
struct TextArgs {
    /// Text to process (letters only are kept)
    #[arg(required_unless_present = "input", conflicts_with = "input")]
    text: Option<String>,

    /// Read the text from a file instead
    #[arg(long)]
    input: Option<PathBuf>,

    /// Write the result to a file instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt text with a key matrix
    #[command(alias = "e")]
    Encrypt {
        #[command(flatten)]
        key: KeyArgs,

        #[command(flatten)]
        text: TextArgs,
    },

    /// Decrypt text with the inverse of a key matrix
    #[command(alias = "d")]
    Decrypt {
        #[command(flatten)]
        key: KeyArgs,

        #[command(flatten)]
        text: TextArgs,
    },

    /// Generate a random invertible key matrix
    #[command(alias = "k")]
    Keygen {
        /// Block size (2 or 3)
        #[arg(long, default_value = "2")]
        size: usize,

        /// Save the key as a JSON key file
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Show determinant, inverse and fingerprint of a key
    #[command(alias = "i")]
    Inspect {
        #[command(flatten)]
        key: KeyArgs,
    },
}

#[derive(Clone, Copy)]
enum Direction {
    Encrypt,
    Decrypt,
}

fn run_cipher(direction: Direction, key: &KeyArgs, text: TextArgs) -> Result<()> {
    let key = resolve_key(key.key.as_deref(), key.key_file.as_deref())?;

    if let (Some(input), Some(output)) = (&text.input, &text.output) {
        let letters = match direction {
            Direction::Encrypt => encrypt_file(input, output, &EncryptOptions { key })?,
            Direction::Decrypt => decrypt_file(input, output, &DecryptOptions { key })?,
        };
        println!("Wrote {} letters to {}", letters, output.display());
        return Ok(());
    }

    let source = match &text.input {
        Some(path) => std::fs::read_to_string(path)?,
        None => text.text.unwrap_or_default(),
    };
    let cipher = HillCipher::new(key);
    debug!(
        size = cipher.block_size(),
        chars = source.chars().count(),
        "processing inline text"
    );
    let result = match direction {
        Direction::Encrypt => cipher.encrypt(&source)?,
        Direction::Decrypt => cipher.decrypt(&source)?,
    };

    match &text.output {
        Some(path) => {
            std::fs::write(path, &result)?;
            println!("Wrote {} letters to {}", result.len(), path.display());
        }
        None => println!("{}", result),
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .init();

    if cli.version {
        println!("hillcrypt {}", get_version());
        return ExitCode::SUCCESS;
    }

    let command = match cli.command {
        Some(cmd) => cmd,
        None => {
            use clap::CommandFactory;
            if let Err(e) = Cli::command().print_help() {
                eprintln!("Error: {}", e);
                return ExitCode::FAILURE;
            }
            println!();
            return ExitCode::SUCCESS;
        }
    };

    let result = match command {
        Commands::Encrypt { key, text } => run_cipher(Direction::Encrypt, &key, text),

        Commands::Decrypt { key, text } => run_cipher(Direction::Decrypt, &key, text),

        Commands::Keygen { size, output } => {
            let options = KeygenOptions { size };
            let generated = match &output {
                Some(path) => generate_key_file(path, &options),
                None => generate_key(&options),
            };
            generated.map(|key| {
                println!("{}", key);
                println!("Fingerprint: {}", key.fingerprint());
                if let Some(path) = output {
                    println!("Saved to {}", path.display());
                }
            })
        }

        Commands::Inspect { key } => resolve_key(key.key.as_deref(), key.key_file.as_deref())
            .and_then(|key| show_key_info(&key))
            .map(|info| print!("{}", info)),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
