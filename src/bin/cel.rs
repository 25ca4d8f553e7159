// src/bin/cel.rs
//! Command-line front end: encrypt, decrypt, list, remove, demo

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use cloud_encryption_layer::config::{self, Config};
use cloud_encryption_layer::Vault;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "cel")]
#[command(about = "Client-side file encryption before local cloud storage")]
#[command(version)]
struct Cli {
    /// Config file (overrides CEL_CONFIG lookup)
    #[arg(long, global = true, env = "CEL_CONFIG")]
    config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt a file and store it
    Encrypt {
        /// File to encrypt
        file: PathBuf,
    },
    /// Fetch a stored file and decrypt it
    Decrypt {
        /// File ID printed by `encrypt`
        file_id: String,
        /// Where to write the plaintext
        #[arg(short, long)]
        output: PathBuf,
    },
    /// List stored files
    List,
    /// Delete a stored file and its key
    Remove {
        file_id: String,
    },
    /// Encrypt, decrypt and list a generated sample file
    Demo {
        /// Directory for the sample and decrypted files
        #[arg(long, default_value = "demo_files")]
        dir: PathBuf,
    },
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let conf = match &cli.config {
        Some(path) => {
            let mut conf = Config::from_file(path)
                .with_context(|| format!("failed to read config {}", path.display()))?;
            conf.apply_env_overrides(|name| std::env::var(name).ok())?;
            conf
        }
        None => config::load()?.clone(),
    };

    init_tracing(&conf, cli.verbose);

    let vault = Vault::open(&conf).context("failed to open key and blob stores")?;
    info!(
        storage = %conf.paths.storage_dir.display(),
        keys = %conf.paths.key_dir.display(),
        cipher = %vault.engine().key_size(),
        "cloud data encryption layer initialized"
    );

    match cli.command {
        Commands::Encrypt { file } => {
            encrypt(&vault, &file)?;
        }
        Commands::Decrypt { file_id, output } => {
            if !decrypt(&vault, &file_id, &output)? {
                return Ok(ExitCode::from(2));
            }
        }
        Commands::List => list(&vault)?,
        Commands::Remove { file_id } => {
            if vault.remove_file(&file_id)? {
                println!("Removed {file_id}");
            } else {
                println!("Nothing stored under {file_id}");
            }
        }
        Commands::Demo { dir } => {
            if !demo(&vault, &dir)? {
                return Ok(ExitCode::from(2));
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn init_tracing(conf: &Config, verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&conf.logging.filter))
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn encrypt(vault: &Vault, file: &Path) -> Result<String> {
    let receipt = vault
        .add_file(file)
        .with_context(|| format!("failed to encrypt {}", file.display()))?;

    println!("Upload successful!");
    println!("File ID: {}", receipt.file_id);
    println!("Location: {}", receipt.location.display());
    let short_hash = receipt.original_hash.get(..16).unwrap_or(&receipt.original_hash);
    println!("Original hash: {short_hash}...");
    println!("Original size: {} bytes", receipt.original_size);
    Ok(receipt.file_id)
}

fn decrypt(vault: &Vault, file_id: &str, output: &Path) -> Result<bool> {
    let outcome = vault
        .retrieve_file(file_id, output)
        .with_context(|| format!("failed to decrypt {file_id}"))?;

    if outcome.integrity_verified {
        println!("Decryption successful! Integrity verified.");
        println!("Saved to: {} ({} bytes)", output.display(), outcome.bytes_written);
    } else {
        println!("Decryption completed but integrity check FAILED!");
        println!("File may be corrupted or tampered with: {}", output.display());
    }
    Ok(outcome.integrity_verified)
}

fn list(vault: &Vault) -> Result<()> {
    let files = vault.list_files()?;
    if files.is_empty() {
        println!("No files uploaded yet.");
        return Ok(());
    }
    println!("Uploaded files:");
    for (file_id, meta) in files {
        println!("File ID: {file_id}");
        println!("  Original name: {}", meta.original_filename);
        println!("  Upload time: {}", meta.upload_timestamp.to_rfc3339());
        println!("  Size: {} bytes", meta.original_size);
    }
    Ok(())
}

fn demo(vault: &Vault, dir: &Path) -> Result<bool> {
    std::fs::create_dir_all(dir).with_context(|| format!("failed to create {}", dir.display()))?;

    let sample = dir.join("sensitive_data.txt");
    std::fs::write(
        &sample,
        "This is sensitive data that needs to be encrypted!\n\
         Account Number: 1234-5678-9012-3456\n\
         Password: SuperSecret123\n",
    )?;
    println!("Created demo file: {}\n", sample.display());

    let file_id = encrypt(vault, &sample)?;

    let output = dir.join("decrypted_data.txt");
    let verified = decrypt(vault, &file_id, &output)?;

    list(vault)?;

    println!("\nDecrypted content:");
    println!("{}", std::fs::read_to_string(&output)?);
    Ok(verified)
}
