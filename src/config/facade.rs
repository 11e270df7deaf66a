//! Config loader facade: the only entry point for building a MacrobundleConfig.

use super::merge::merge_policy;
use super::sources::{environment, global_file, workspace_file};
use super::MacrobundleConfig;
use config::{ConfigError, File, FileFormat, Map};
use std::path::Path;

/// Loads configuration from defaults, config files and the environment
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration for a workspace.
    ///
    /// Precedence (lowest to highest): defaults, global file, workspace
    /// `macrobundle.toml`, MACROBUNDLE_* environment variables.
    pub fn load(workspace_root: &Path) -> Result<MacrobundleConfig, ConfigError> {
        Self::load_with_env(workspace_root, None)
    }

    /// Same as [`ConfigLoader::load`], reading environment variables from `vars`
    /// instead of the process environment when given.
    pub fn load_with_env(
        workspace_root: &Path,
        vars: Option<Map<String, String>>,
    ) -> Result<MacrobundleConfig, ConfigError> {
        let builder = merge_policy::builder_with_defaults()?;
        let builder = global_file::add_to_builder(builder)?;
        let builder = workspace_file::add_to_builder(builder, workspace_root)?;
        let builder = environment::add_to_builder(builder, vars);
        builder.build()?.try_deserialize()
    }

    /// Load configuration from one explicit file (must exist), plus environment overrides.
    pub fn load_from_file(path: &Path) -> Result<MacrobundleConfig, ConfigError> {
        Self::load_from_file_with_env(path, None)
    }

    pub fn load_from_file_with_env(
        path: &Path,
        vars: Option<Map<String, String>>,
    ) -> Result<MacrobundleConfig, ConfigError> {
        let builder = merge_policy::builder_with_defaults()?
            .add_source(File::new(&path.to_string_lossy(), FileFormat::Toml).required(true));
        let builder = environment::add_to_builder(builder, vars);
        builder.build()?.try_deserialize()
    }
}
