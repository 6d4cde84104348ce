use anyhow::{Context as AnyhowContext, Result};
use clap::{Parser, ValueEnum};
use std::path::{Path, PathBuf};

/// Environment variable consulted when no root argument is given.
pub const ROOT_ENV_VAR: &str = "PATTERN_EXTRACTOR_ROOT";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Yaml,
}

#[derive(Parser, Debug)]
#[command(name = "pattern-extractor")]
#[command(about = "Extract regular expression patterns from Java source trees", long_about = None)]
pub struct Args {
    /// Directory or Java file to scan (defaults to $PATTERN_EXTRACTOR_ROOT, then ".")
    #[arg(value_name = "ROOT", env = ROOT_ENV_VAR, default_value = ".")]
    pub root: PathBuf,

    /// Output file path (prints to stdout if not specified)
    #[arg(short = 'O', long, value_name = "FILE")]
    pub output_file: Option<PathBuf>,

    /// Output format (json, yaml)
    #[arg(short = 'f', long, default_value = "json")]
    pub format: OutputFormat,

    /// Emit single-line JSON instead of pretty-printed output
    #[arg(long)]
    pub compact: bool,

    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    pub fn validate(&self) -> Result<()> {
        validate_root(&self.root)
    }
}

pub fn validate_root(path: &Path) -> Result<()> {
    if !path.exists() {
        anyhow::bail!("Path does not exist: {}", path.display());
    }

    if path.is_file() {
        std::fs::metadata(path).with_context(|| format!("Cannot read file: {}", path.display()))?;
    } else if path.is_dir() {
        std::fs::read_dir(path)
            .with_context(|| format!("Cannot read directory: {}", path.display()))?;
    } else {
        anyhow::bail!("Path is neither a file nor a directory: {}", path.display());
    }

    Ok(())
}
