//! argon-phc CLI — `phc` command.
//!
//! Hash passwords into Argon2id PHC records, verify passwords against
//! stored records, and inspect or audit the parameters a record carries.
//! Passwords are always read from stdin, never from arguments.

use std::io::{BufRead, IsTerminal};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{anyhow, Context, Result};
use clap::{Args, Parser, Subcommand};
use zeroize::Zeroize;

use argon_phc::{
    check_password, decode_record, hash_password, needs_rehash, verify_password, HashParameters,
    Password,
};

// ── Password helper ───────────────────────────────────────────────────────────

/// Read one line from stdin as the password.
///
/// Only the line terminator is stripped; surrounding spaces are part of the
/// password. The prompt goes to stderr and only when stdin is a terminal.
fn read_password(prompt: &str) -> Result<Password> {
    let stdin = std::io::stdin();
    if stdin.is_terminal() {
        eprint!("{prompt}");
    }

    let mut line = String::new();
    stdin
        .lock()
        .read_line(&mut line)
        .context("failed to read password from stdin")?;

    let password = Password::from(line.trim_end_matches(['\r', '\n']));
    line.zeroize();

    if password.is_blank() {
        return Err(anyhow!("password cannot be empty"));
    }
    Ok(password)
}

// ── CLI structure ─────────────────────────────────────────────────────────────

/// argon-phc CLI — Argon2id password hashing with PHC records.
#[derive(Parser, Debug)]
#[command(
    name = "phc",
    about = "argon-phc CLI",
    version,
    long_about = "phc — argon-phc CLI\n\nHash passwords into Argon2id PHC records, verify passwords against\nstored records, and inspect the parameters a record carries."
)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Hash a password read from stdin and print the record
    Hash {
        #[command(flatten)]
        params: ParamArgs,
    },

    /// Verify a password read from stdin against a record
    Verify {
        /// Stored PHC record
        record: String,
    },

    /// Show the parameters embedded in a record
    Inspect {
        /// PHC record to decode
        record: String,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the effective hash parameters as JSON
    Params {
        #[command(flatten)]
        params: ParamArgs,
    },

    /// Report whether a record should be regenerated with the given parameters
    NeedsRehash {
        /// Stored PHC record
        record: String,

        #[command(flatten)]
        params: ParamArgs,
    },
}

/// Hash parameter sources: defaults, then `--config`, then individual flags.
#[derive(Args, Debug, Default)]
struct ParamArgs {
    /// JSON parameter file; fields not present keep their default
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of iterations
    #[arg(long)]
    time_cost: Option<u32>,

    /// Memory size in KiB
    #[arg(long)]
    memory_cost: Option<u32>,

    /// Number of lanes
    #[arg(long)]
    parallelism: Option<u32>,

    /// Salt length in bytes
    #[arg(long)]
    salt_length: Option<usize>,

    /// Derived key length in bytes
    #[arg(long)]
    output_length: Option<usize>,
}

impl ParamArgs {
    fn resolve(&self) -> Result<HashParameters> {
        let mut params = match &self.config {
            Some(path) => HashParameters::from_json_file(path)
                .with_context(|| format!("failed to load config {}", path.display()))?,
            None => HashParameters::default(),
        };

        if let Some(v) = self.time_cost {
            params.time_cost = v;
        }
        if let Some(v) = self.memory_cost {
            params.memory_cost_kib = v;
        }
        if let Some(v) = self.parallelism {
            params.parallelism = v;
        }
        if let Some(v) = self.salt_length {
            params.salt_length = v;
        }
        if let Some(v) = self.output_length {
            params.output_length = v;
        }

        Ok(params)
    }
}

// ── Main entry point ──────────────────────────────────────────────────────────

fn main() -> ExitCode {
    let cli = Cli::parse();
    let verbose = cli.verbose;

    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let result = match cli.command {
        Commands::Hash { params } => cmd_hash(&params, verbose),
        Commands::Verify { record } => cmd_verify(&record, verbose),
        Commands::Inspect { record, json } => cmd_inspect(&record, json),
        Commands::Params { params } => cmd_params(&params),
        Commands::NeedsRehash { record, params } => cmd_needs_rehash(&record, &params),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

// ── Command implementations ───────────────────────────────────────────────────

/// `phc hash [--config FILE] [--time-cost N] ...`
fn cmd_hash(args: &ParamArgs, verbose: bool) -> Result<ExitCode> {
    let params = args.resolve()?;
    let password = read_password("Password: ")?;

    let record = hash_password(password, &params).context("failed to hash password")?;
    println!("{record}");

    if verbose {
        eprintln!(
            "  m={} KiB, t={}, p={}, salt={} bytes, key={} bytes",
            params.memory_cost_kib,
            params.time_cost,
            params.parallelism,
            params.salt_length,
            params.output_length
        );
    }

    Ok(ExitCode::SUCCESS)
}

/// `phc verify RECORD`
///
/// Exits 0 on match and 1 otherwise. With `--verbose`, explains why a
/// record could not be checked.
fn cmd_verify(record: &str, verbose: bool) -> Result<ExitCode> {
    let password = read_password("Password: ")?;

    let matched = if verbose {
        match check_password(password, record) {
            Ok(matched) => matched,
            Err(e) => {
                eprintln!("  reason: {e}");
                false
            }
        }
    } else {
        verify_password(password, record)
    };

    if matched {
        println!("match");
        Ok(ExitCode::SUCCESS)
    } else {
        println!("no match");
        Ok(ExitCode::FAILURE)
    }
}

/// `phc inspect RECORD [--json]`
fn cmd_inspect(record: &str, json: bool) -> Result<ExitCode> {
    let decoded = decode_record(record).context("failed to decode record")?;
    let p = &decoded.params;

    if json {
        let doc = serde_json::json!({
            "algorithm": argon_phc::record::ALGORITHM_TAG,
            "version": argon_phc::crypto::derivation::ARGON2_VERSION,
            "memory_cost_kib": p.memory_cost_kib,
            "time_cost": p.time_cost,
            "parallelism": p.parallelism,
            "salt_length": p.salt_length,
            "output_length": p.output_length,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&doc).context("failed to serialize record summary")?
        );
    } else {
        println!("Record:");
        println!("  Algorithm:   {}", argon_phc::record::ALGORITHM_TAG);
        println!("  Version:     {}", argon_phc::crypto::derivation::ARGON2_VERSION);
        println!("  Memory:      {} KiB", p.memory_cost_kib);
        println!("  Iterations:  {}", p.time_cost);
        println!("  Parallelism: {}", p.parallelism);
        println!("  Salt:        {} bytes", p.salt_length);
        println!("  Key:         {} bytes", p.output_length);
    }

    Ok(ExitCode::SUCCESS)
}

/// `phc params [--config FILE] [--time-cost N] ...`
fn cmd_params(args: &ParamArgs) -> Result<ExitCode> {
    let params = args.resolve()?;
    params
        .validate()
        .context("parameters are not usable for hashing")?;
    println!("{}", params.to_json_pretty()?);
    Ok(ExitCode::SUCCESS)
}

/// `phc needs-rehash RECORD [--config FILE] [--time-cost N] ...`
fn cmd_needs_rehash(record: &str, args: &ParamArgs) -> Result<ExitCode> {
    let params = args.resolve()?;
    if needs_rehash(record, &params) {
        println!("yes");
    } else {
        println!("no");
    }
    Ok(ExitCode::SUCCESS)
}
