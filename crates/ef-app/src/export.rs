//! Series export.

use core::str::FromStr;

use crate::error::{AppError, AppResult};
use crate::solve_service::SolveOutput;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExportFormat {
    #[default]
    Json,
    Csv,
}

impl FromStr for ExportFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(ExportFormat::Json),
            "csv" => Ok(ExportFormat::Csv),
            other => Err(AppError::InvalidInput(format!(
                "Unknown export format: {}",
                other
            ))),
        }
    }
}

/// One row per day: `day,s,e,i,r` in percent.
pub fn to_csv(output: &SolveOutput) -> String {
    let mut csv = String::from("day,s,e,i,r\n");
    for (((s, e), i), r) in output
        .s
        .iter()
        .zip(&output.e)
        .zip(&output.i)
        .zip(&output.r)
    {
        csv.push_str(&format!("{},{},{},{},{}\n", s.0, s.1, e.1, i.1, r.1));
    }
    csv
}

pub fn to_json(output: &SolveOutput) -> AppResult<String> {
    Ok(serde_json::to_string_pretty(output)?)
}

pub fn render(output: &SolveOutput, format: ExportFormat) -> AppResult<String> {
    match format {
        ExportFormat::Json => to_json(output),
        ExportFormat::Csv => Ok(to_csv(output)),
    }
}
