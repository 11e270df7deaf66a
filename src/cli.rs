//! CLI domain: parse, route, help, output, and presentation only.
//! No bundling logic; single route table dispatches to the aggregator.

mod help;
mod output;
mod parse;
mod presentation;
mod route;

pub use help::{command_format, command_name};
pub use output::map_error;
pub use parse::{Cli, Commands};
pub use presentation::{
    format_build_report_json, format_build_report_text, format_check_report_json,
    format_check_report_text, format_plan_json, format_plan_text, format_section_heading,
};
pub use route::RunContext;
