use anyhow::{Context as AnyhowContext, Result};
use clap::Parser;
use pattern_extractor::cli;
use pattern_extractor::diagnostics::TracingSink;
use pattern_extractor::extractor::Extractor;
use pattern_extractor::logging::{self, Verbosity};
use pattern_extractor::output::OutputFormatter;
use std::io::Write;

fn main() -> Result<()> {
    let args = cli::Args::parse();
    logging::init(Verbosity::from_flags(args.verbose, args.quiet));
    args.validate().context("Invalid arguments")?;

    let mut extractor = Extractor::new()
        .context("Failed to initialize Java parser")?
        .with_sink(TracingSink);
    extractor
        .run(&args.root)
        .with_context(|| format!("Failed to scan {}", args.root.display()))?;

    let report = extractor.into_report();
    let document = OutputFormatter::format(&report, args.format, args.compact)?;

    match &args.output_file {
        Some(path) => {
            std::fs::write(path, format!("{document}\n"))
                .map_err(|e| pattern_extractor::error::IoError::write_error(path, e))?;
            tracing::info!(path = %path.display(), patterns = report.len(), "wrote report");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{document}").context("Failed to write to stdout")?;
        }
    }

    Ok(())
}
