//! Check command presentation.

use super::format_section_heading;
use crate::bundle::{CheckReport, OutputState};
use crate::error::CommandError;
use owo_colors::OwoColorize;

fn state_label(state: OutputState, color: bool) -> String {
    let label = match state {
        OutputState::UpToDate => "up to date",
        OutputState::Stale => "stale",
        OutputState::Missing => "missing",
    };
    if !color {
        return label.to_string();
    }
    match state {
        OutputState::UpToDate => label.green().to_string(),
        OutputState::Stale => label.yellow().to_string(),
        OutputState::Missing => label.red().to_string(),
    }
}

pub fn format_check_report_text(report: &CheckReport, color: bool) -> String {
    let mut out = format!("{}\n", format_section_heading("Check", color));
    for output in &report.outputs {
        out.push_str(&format!(
            "\n  {:<24} {}",
            output.file,
            state_label(output.state, color)
        ));
    }
    if report.is_up_to_date() {
        out.push_str("\n\nAll outputs up to date.");
    } else {
        out.push_str(&format!(
            "\n\n{} of {} outputs out of date.",
            report.out_of_date().len(),
            report.outputs.len()
        ));
    }
    out
}

pub fn format_check_report_json(report: &CheckReport) -> Result<String, CommandError> {
    let value = serde_json::json!({
        "up_to_date": report.is_up_to_date(),
        "outputs": report.outputs,
    });
    Ok(serde_json::to_string_pretty(&value)?)
}
