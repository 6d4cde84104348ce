//! Pattern Extractor
//!
//! Statically scans a Java source tree for variables initialized with
//! `Pattern.compile(...)`, folds string constants and `+` concatenation
//! into literal regex text, and reports the patterns by variable name.

pub mod cli;
pub mod diagnostics;
pub mod discovery;
pub mod engine;
pub mod error;
pub mod extractor;
pub mod logging;
pub mod output;
pub mod scanner;
pub mod utils;

pub use engine::{Classifier, Expr, ExtractionContext, Resolver, Value};
pub use extractor::{extract_patterns, Extractor, ExtractorConfig};
pub use output::PatternReport;
