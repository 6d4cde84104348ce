mod formatter;
mod report;

pub use formatter::OutputFormatter;
pub use report::PatternReport;
