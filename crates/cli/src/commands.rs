//! `sign` and `verify` subcommands

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use tracing::info;
use xverify_protocol::{ArtifactBundle, Consumer, Producer, ProtocolConfig, Verdict};

use crate::default_output_path;
use crate::file_store::FileStore;

/// Number of hex characters shown for keys and signatures
const PREVIEW_CHARS: usize = 64;

#[derive(Debug, Clone, Default, Args)]
pub struct SignArgs {
    /// TOML file with `context`, `seed` and `message` overrides
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// 48-byte seed as hex (optional 0x prefix)
    #[arg(long)]
    pub seed: Option<String>,

    /// Message to sign
    #[arg(long)]
    pub message: Option<String>,

    /// Context tag
    #[arg(long)]
    pub context: Option<String>,

    /// Output file [default: <temp>/wallet_cross_verify/xverify_output.json]
    #[arg(long)]
    pub out: Option<PathBuf>,
}

#[derive(Debug, Clone, Args)]
pub struct VerifyArgs {
    /// Artifact file to check
    #[arg(long)]
    pub input: PathBuf,

    /// TOML file with a `context` override
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Context tag
    #[arg(long)]
    pub context: Option<String>,

    /// Also check that the public key derives from the bundled seed
    #[arg(long)]
    pub check_public_key: bool,
}

/// Defaults, then the config file, then individual flags
fn load_config(
    path: Option<&Path>,
    seed: Option<&str>,
    message: Option<&str>,
    context: Option<&str>,
) -> Result<ProtocolConfig> {
    let mut config = match path {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            ProtocolConfig::from_toml_str(&text)
                .with_context(|| format!("parsing config {}", path.display()))?
        }
        None => ProtocolConfig::default(),
    };

    if let Some(seed) = seed {
        config = config.with_seed_hex(seed).context("--seed")?;
    }
    if let Some(message) = message {
        config = config.with_message(message.as_bytes());
    }
    if let Some(context) = context {
        config = config.with_context(context.as_bytes()).context("--context")?;
    }
    Ok(config)
}

fn preview(bytes: &[u8]) -> String {
    let mut text = hex::encode(bytes);
    text.truncate(PREVIEW_CHARS);
    text
}

/// Producer role: derive, sign and write the artifact file
pub fn run_sign<W: Write>(args: &SignArgs, out: &mut W) -> Result<ArtifactBundle> {
    let config = load_config(
        args.config.as_deref(),
        args.seed.as_deref(),
        args.message.as_deref(),
        args.context.as_deref(),
    )?;
    let path = args.out.clone().unwrap_or_else(default_output_path);

    let mut store = FileStore::new(&path);
    let bundle = Producer::new(&config)
        .run(&mut store)
        .with_context(|| format!("writing {}", path.display()))?;
    info!(path = %path.display(), "sign finished");

    writeln!(out, "Artifact written to {}", path.display())?;
    writeln!(out, "Address:    {}", bundle.address)?;
    writeln!(out, "Public key: {}...", preview(&bundle.public_key))?;
    writeln!(out, "Signature:  {}...", preview(&bundle.signature))?;
    Ok(bundle)
}

/// Consumer role: read the artifact file and verify it
///
/// `Ok` carries the verdict, whichever way it went; `Err` means the artifact
/// or the configuration could not be used at all.
pub fn run_verify<W: Write>(args: &VerifyArgs, out: &mut W) -> Result<Verdict> {
    let config = load_config(args.config.as_deref(), None, None, args.context.as_deref())?;
    let store = FileStore::new(&args.input);

    let verdict = Consumer::new(&config)
        .check_public_key(args.check_public_key)
        .run(&store)
        .with_context(|| format!("checking {}", args.input.display()))?;

    match &verdict {
        Verdict::Passed => writeln!(
            out,
            "PASSED: signature in {} verifies",
            args.input.display()
        )?,
        Verdict::Failed(_) => writeln!(out, "{}", verdict)?,
    }
    Ok(verdict)
}
