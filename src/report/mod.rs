pub mod json;
pub mod text;

use crate::error::StarsError;
use crate::types::report::ScoreReport;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Text,
}

pub fn render(report: &ScoreReport, format: OutputFormat) -> Result<String, StarsError> {
    match format {
        OutputFormat::Json => json::to_json(report).map_err(StarsError::Json),
        OutputFormat::Text => Ok(text::to_text(report)),
    }
}
