//! Merge rules: defaults, override order, conflict handling.

use crate::bundle::settings::{
    default_extension, default_folders, default_master_name, default_output_prefix,
};
use config::Config;
use config::ConfigBuilder;
use config::ConfigError;

/// Create a Config builder with merge policy defaults applied.
///
/// Only scalar and list keys live here; the banner and logging tables default
/// through serde so a file can replace them wholesale.
pub fn builder_with_defaults() -> Result<ConfigBuilder<config::builder::DefaultState>, ConfigError>
{
    Config::builder()
        .set_default("bundle.folders", default_folders())?
        .set_default("bundle.output_prefix", default_output_prefix())?
        .set_default("bundle.extension", default_extension())?
        .set_default("bundle.master_name", default_master_name())?
        .set_default("bundle.order", "name")
}
