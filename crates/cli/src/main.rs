//! xverify command-line tool

use std::io;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use xverify_cli::{
    run_sign, run_verify, SignArgs, VerifyArgs, EXIT_ERROR, EXIT_FAILED, EXIT_PASSED,
};

/// ML-DSA-87 cross-implementation verification
#[derive(Parser)]
#[command(name = "xverify")]
#[command(version)]
#[command(about = "Produce and check ML-DSA-87 cross-verification artifacts", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Derive keys from the seed, sign the message and write the artifact
    Sign(SignArgs),
    /// Read an artifact and verify its signature
    Verify(VerifyArgs),
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing();

    let mut stdout = io::stdout().lock();
    let code = match cli.command {
        Commands::Sign(args) => match run_sign(&args, &mut stdout) {
            Ok(_) => EXIT_PASSED,
            Err(e) => {
                eprintln!("Error: {:#}", e);
                EXIT_FAILED
            }
        },
        Commands::Verify(args) => match run_verify(&args, &mut stdout) {
            Ok(verdict) if verdict.is_passed() => EXIT_PASSED,
            Ok(_) => EXIT_FAILED,
            Err(e) => {
                eprintln!("Error: {:#}", e);
                EXIT_ERROR
            }
        },
    };

    drop(stdout);
    process::exit(code);
}
