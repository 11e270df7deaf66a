//! CLI presentation: text and json formatters per command.

mod build;
mod check;
mod plan;

pub use build::{format_build_report_json, format_build_report_text};
pub use check::{format_check_report_json, format_check_report_text};
pub use plan::{format_plan_json, format_plan_text};

use owo_colors::OwoColorize;

/// Section heading, bold and underlined when `color` is set.
pub fn format_section_heading(title: &str, color: bool) -> String {
    if color {
        format!("{}", title.bold().underline())
    } else {
        title.to_string()
    }
}

/// Short digest prefix for text output.
pub(crate) fn short_digest(digest: &str) -> &str {
    digest.get(..12).unwrap_or(digest)
}
