use anyhow::Result;

use crate::cli::OutputFormat;

use super::PatternReport;

pub struct OutputFormatter;

impl OutputFormatter {
    pub fn format(report: &PatternReport, format: OutputFormat, compact: bool) -> Result<String> {
        match format {
            OutputFormat::Json if compact => Ok(serde_json::to_string(report)?),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
            OutputFormat::Yaml => Ok(serde_yaml::to_string(report)?),
        }
    }
}
