//! Known-answer verification harness for AES-128.
//!
//! Runs a fixed vector set through the software cipher core and reports
//! per-vector pass/fail, so an independent implementation (e.g. a hardware
//! design under simulation) can be checked against the same expected values.

#![forbid(unsafe_code)]

use std::fs;
use std::path::PathBuf;

use aes128::{decrypt_block, encrypt_block, expand_key};
use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

mod vectors;

use vectors::TestVector;

/// AES-128 known-answer verification CLI.
#[derive(Parser)]
#[command(
    name = "aes128-verify",
    version,
    about = "Verify AES-128 ciphertext/plaintext pairs against known-answer vectors"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the known-answer vector set in both directions.
    Verify {
        /// File of `key plaintext ciphertext` hex triples instead of the
        /// built-in set.
        #[arg(long, value_name = "FILE")]
        vectors: Option<PathBuf>,
    },
    /// Encrypt a single block and print the ciphertext as hex.
    Encrypt {
        /// AES-128 key as 32 hex characters.
        #[arg(long, value_name = "HEX")]
        key_hex: String,
        /// Plaintext block as 32 hex characters.
        #[arg(long, value_name = "HEX")]
        block_hex: String,
    },
    /// Decrypt a single block and print the plaintext as hex.
    Decrypt {
        /// AES-128 key as 32 hex characters.
        #[arg(long, value_name = "HEX")]
        key_hex: String,
        /// Ciphertext block as 32 hex characters.
        #[arg(long, value_name = "HEX")]
        block_hex: String,
    },
    /// Check encrypt/decrypt round-trips over random (key, block) pairs.
    Selftest {
        /// Number of random pairs to test.
        #[arg(long, default_value_t = 1000)]
        samples: usize,
        /// RNG seed, fixed by default for reproducible runs.
        #[arg(long, default_value_t = 0)]
        seed: u64,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Verify { vectors } => cmd_verify(vectors.as_deref()),
        Commands::Encrypt { key_hex, block_hex } => cmd_transform(&key_hex, &block_hex, true),
        Commands::Decrypt { key_hex, block_hex } => cmd_transform(&key_hex, &block_hex, false),
        Commands::Selftest { samples, seed } => cmd_selftest(samples, seed),
    }
}

fn cmd_verify(vector_file: Option<&std::path::Path>) -> Result<()> {
    let set = match vector_file {
        Some(path) => {
            let contents =
                fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
            vectors::parse_file(&contents)
                .with_context(|| format!("parse {}", path.display()))?
        }
        None => vectors::builtin(),
    };

    let mut passed = 0usize;
    let mut failed = 0usize;
    for (i, vector) in set.iter().enumerate() {
        if verify_vector(i, vector)? {
            passed += 1;
        } else {
            failed += 1;
        }
    }

    println!();
    println!("{}", "=".repeat(60));
    println!("total: {}  passed: {}  failed: {}", set.len(), passed, failed);
    if failed > 0 {
        bail!("{failed} test vector(s) failed");
    }
    println!("all vectors passed");
    Ok(())
}

/// Checks one vector in both directions, printing the comparison as it goes.
fn verify_vector(index: usize, vector: &TestVector) -> Result<bool> {
    println!();
    println!("{}", "=".repeat(60));
    println!("vector {index}: {}", vector.name);
    println!("key:        {}", hex::encode(vector.key));
    println!("plaintext:  {}", hex::encode(vector.plaintext));
    println!("expected:   {}", hex::encode(vector.ciphertext));

    let schedule = expand_key(&vector.key)?;

    let actual_ct = encrypt_block(&schedule, &vector.plaintext)?;
    println!("actual:     {}", hex::encode(actual_ct));
    let enc_ok = actual_ct == vector.ciphertext;
    println!("encrypt:    {}", if enc_ok { "PASS" } else { "FAIL" });

    let actual_pt = decrypt_block(&schedule, &vector.ciphertext)?;
    println!("decrypted:  {}", hex::encode(actual_pt));
    let dec_ok = actual_pt == vector.plaintext;
    println!("decrypt:    {}", if dec_ok { "PASS" } else { "FAIL" });

    Ok(enc_ok && dec_ok)
}

fn cmd_transform(key_hex: &str, block_hex: &str, encrypt: bool) -> Result<()> {
    let key = vectors::parse_hex16(key_hex).context("parse key")?;
    let block = vectors::parse_hex16(block_hex).context("parse block")?;
    let schedule = expand_key(&key)?;
    let out = if encrypt {
        encrypt_block(&schedule, &block)?
    } else {
        decrypt_block(&schedule, &block)?
    };
    println!("{}", hex::encode(out));
    Ok(())
}

fn cmd_selftest(samples: usize, seed: u64) -> Result<()> {
    let mut seed_bytes = [0u8; 32];
    seed_bytes[..8].copy_from_slice(&seed.to_le_bytes());
    let mut rng = ChaCha20Rng::from_seed(seed_bytes);

    for i in 0..samples {
        let mut key = [0u8; 16];
        let mut block = [0u8; 16];
        rng.fill_bytes(&mut key);
        rng.fill_bytes(&mut block);

        let schedule = expand_key(&key)?;
        let ct = encrypt_block(&schedule, &block)?;
        let pt = decrypt_block(&schedule, &ct)?;
        if pt != block {
            bail!(
                "round-trip mismatch at sample {i}: key {} block {}",
                hex::encode(key),
                hex::encode(block)
            );
        }
    }
    println!("selftest passed: {samples} random round-trips");
    Ok(())
}
