//! Build command presentation.

use super::{format_section_heading, short_digest};
use crate::bundle::BundleReport;
use crate::error::CommandError;
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;

pub fn format_build_report_text(report: &BundleReport, color: bool) -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["Output", "Files", "Bytes", "Digest"]);
    for output in report.outputs.iter().chain(std::iter::once(&report.master)) {
        table.add_row(vec![
            output.file.clone(),
            output.members.to_string(),
            output.bytes.to_string(),
            short_digest(&output.digest).to_string(),
        ]);
    }

    format!(
        "{}\n\n{}\n\nWrote {} folder outputs and {} ({} source files).",
        format_section_heading("Build", color),
        table,
        report.outputs.len(),
        report.master.file,
        report.total_members()
    )
}

pub fn format_build_report_json(report: &BundleReport) -> Result<String, CommandError> {
    Ok(serde_json::to_string_pretty(report)?)
}
