use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::diagnostics::{Diagnostic, DiagnosticSink, DiscardSink};
use crate::discovery::{walk_source_files, JAVA_EXTENSION};
use crate::engine::{Classification, Classifier, ExtractionContext, Resolver, DEFAULT_MAX_DEPTH};
use crate::error::{IoError, ParserError, Result};
use crate::output::PatternReport;
use crate::scanner::JavaScanner;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractorConfig {
    /// Source file extension, without the leading dot.
    pub extension: String,
    /// Nesting limit for expression lowering and resolution.
    pub max_depth: usize,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            extension: JAVA_EXTENSION.to_string(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub files_scanned: usize,
    pub files_failed: usize,
    pub declarations: usize,
}

/// Drives one extraction run: walk, parse, collect, classify.
///
/// The extractor owns the [`ExtractionContext`] for the run; every file is
/// folded into it in traversal order, so a constant is visible to every
/// declaration processed after it, including those in later files.
pub struct Extractor<S: DiagnosticSink = DiscardSink> {
    config: ExtractorConfig,
    scanner: JavaScanner,
    classifier: Classifier,
    context: ExtractionContext,
    sink: S,
}

impl Extractor<DiscardSink> {
    pub fn new() -> std::result::Result<Self, ParserError> {
        Self::with_config(ExtractorConfig::default())
    }

    pub fn with_config(config: ExtractorConfig) -> std::result::Result<Self, ParserError> {
        let scanner = JavaScanner::new()?.with_max_depth(config.max_depth);
        let resolver = Resolver::builder().with_max_depth(config.max_depth).build();
        Ok(Self {
            config,
            scanner,
            classifier: Classifier::new(resolver),
            context: ExtractionContext::new(),
            sink: DiscardSink,
        })
    }
}

impl<S: DiagnosticSink> Extractor<S> {
    pub fn with_sink<T: DiagnosticSink>(self, sink: T) -> Extractor<T> {
        Extractor {
            config: self.config,
            scanner: self.scanner,
            classifier: self.classifier,
            context: self.context,
            sink,
        }
    }

    pub fn context(&self) -> &ExtractionContext {
        &self.context
    }

    /// Scan every source file under `root` and fold it into the context.
    ///
    /// Files that cannot be read or parsed are reported to the sink and
    /// skipped. Only a bad root fails the run.
    pub fn run(&mut self, root: &Path) -> Result<RunSummary> {
        let files = walk_source_files(root, &self.config.extension)?;
        info!(root = %root.display(), files = files.len(), "scanning source tree");

        let mut summary = RunSummary::default();
        for path in &files {
            match self.process_file(path) {
                Ok(declarations) => {
                    summary.files_scanned += 1;
                    summary.declarations += declarations;
                }
                Err(e) => {
                    summary.files_failed += 1;
                    self.sink.report(Diagnostic::new(path, e.to_string()));
                }
            }
        }

        info!(
            files_scanned = summary.files_scanned,
            files_failed = summary.files_failed,
            patterns = self.context.patterns().len(),
            unresolved = self.context.unresolved().len(),
            "extraction complete"
        );
        Ok(summary)
    }

    pub fn process_file(&mut self, path: &Path) -> Result<usize> {
        let bytes = fs::read(path).map_err(|e| IoError::read_error(path, e))?;
        let source = String::from_utf8_lossy(&bytes);
        Ok(self.process_source(&source, path)?)
    }

    /// Parse `source` and classify its declarations.
    ///
    /// Nothing is recorded unless the whole file parses.
    pub fn process_source(
        &mut self,
        source: &str,
        path: &Path,
    ) -> std::result::Result<usize, ParserError> {
        let declarations = self.scanner.scan_source(source, path)?;

        let mut patterns = 0;
        for declaration in &declarations {
            if self.classifier.classify(declaration, &mut self.context) == Classification::Pattern {
                patterns += 1;
            }
        }

        debug!(
            path = %path.display(),
            declarations = declarations.len(),
            patterns,
            "processed file"
        );
        Ok(declarations.len())
    }

    pub fn report(&self) -> PatternReport {
        PatternReport::from_context(&self.context)
    }

    pub fn into_report(self) -> PatternReport {
        PatternReport::from_patterns(self.context.into_patterns())
    }
}

/// Run a default extractor over `root`, discarding per-file diagnostics.
pub fn extract_patterns(root: &Path) -> Result<PatternReport> {
    let mut extractor = Extractor::new()?;
    extractor.run(root)?;
    Ok(extractor.into_report())
}
