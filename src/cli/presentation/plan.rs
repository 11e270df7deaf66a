//! Plan command presentation.

use super::format_section_heading;
use crate::bundle::BundlePlan;
use crate::error::CommandError;
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;

pub fn format_plan_text(plan: &BundlePlan, color: bool) -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["Folder", "Member", "Bytes", "Output"]);
    for folder in &plan.folders {
        if folder.members.is_empty() {
            table.add_row(vec![
                folder.folder.clone(),
                "(empty)".to_string(),
                "0".to_string(),
                folder.output.clone(),
            ]);
        }
        for member in &folder.members {
            table.add_row(vec![
                folder.folder.clone(),
                member.name.clone(),
                member.size.to_string(),
                folder.output.clone(),
            ]);
        }
    }

    format!(
        "{}\n\n{}\n\nMaster: {} (member order: {})",
        format_section_heading("Plan", color),
        table,
        plan.master,
        plan.order
    )
}

pub fn format_plan_json(plan: &BundlePlan) -> Result<String, CommandError> {
    Ok(serde_json::to_string_pretty(plan)?)
}
