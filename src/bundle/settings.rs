//! Bundle settings: which folders to concatenate and how outputs are named.

use crate::bundle::listing::EntryOrder;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Component, Path};

/// Banner written at the top of the master output.
pub const DEFAULT_BANNER: &str = r#"
/**
  @file
  @brief Auto-generated file
  @details
    This file contains all the macros in a single file - which means it can be
    'included' in SAS with just 2 lines of code:

      filename mc url
        "https://raw.githubusercontent.com/macropeople/macrocore/master/compileall.sas";
      %inc mc;

    The `build.py` file in the https://github.com/macropeople/macrocore repo
    is used to create this file.

  @author Allan Bowe
**/
"#;

/// Bundle settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BundleSettings {
    /// Source folders, processed in this exact order
    #[serde(default = "default_folders")]
    pub folders: Vec<String>,

    /// Per-folder output name prefix (`<prefix><folder>.<extension>`)
    #[serde(default = "default_output_prefix")]
    pub output_prefix: String,

    /// Per-folder output extension, without the dot
    #[serde(default = "default_extension")]
    pub extension: String,

    /// Master output file name
    #[serde(default = "default_master_name")]
    pub master_name: String,

    /// Member concatenation order within a folder
    #[serde(default)]
    pub order: EntryOrder,

    /// Text written before any folder content in the master output
    #[serde(default = "default_banner")]
    pub banner: String,
}

pub(crate) fn default_folders() -> Vec<String> {
    ["base", "meta", "xcmd", "viya"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

pub(crate) fn default_output_prefix() -> String {
    "compile".to_string()
}

pub(crate) fn default_extension() -> String {
    "sas".to_string()
}

pub(crate) fn default_master_name() -> String {
    "compileall.sas".to_string()
}

fn default_banner() -> String {
    DEFAULT_BANNER.to_string()
}

impl Default for BundleSettings {
    fn default() -> Self {
        Self {
            folders: default_folders(),
            output_prefix: default_output_prefix(),
            extension: default_extension(),
            master_name: default_master_name(),
            order: EntryOrder::default(),
            banner: default_banner(),
        }
    }
}

impl BundleSettings {
    /// File name of the per-folder output for `folder`.
    pub fn folder_output_name(&self, folder: &str) -> String {
        format!("{}{}.{}", self.output_prefix, folder, self.extension)
    }

    /// Validate bundle settings
    pub fn validate(&self) -> Result<(), String> {
        if self.folders.is_empty() {
            return Err("At least one folder must be configured".to_string());
        }
        if self.extension.is_empty() {
            return Err("Output extension cannot be empty".to_string());
        }
        if !is_plain_name(&self.master_name) {
            return Err(format!(
                "Master name '{}' must be a plain file name",
                self.master_name
            ));
        }

        let mut seen = HashSet::new();
        for folder in &self.folders {
            if !is_plain_name(folder) {
                return Err(format!(
                    "Folder '{}' must be a single directory name inside the workspace",
                    folder
                ));
            }
            if !seen.insert(folder.as_str()) {
                return Err(format!("Folder '{}' is listed more than once", folder));
            }
            let output = self.folder_output_name(folder);
            if !is_plain_name(&output) {
                return Err(format!(
                    "Output '{}' for folder '{}' must be a plain file name in the workspace",
                    output, folder
                ));
            }
            if output == self.master_name {
                return Err(format!(
                    "Output for folder '{}' would overwrite master file '{}'",
                    folder, self.master_name
                ));
            }
        }

        Ok(())
    }
}

/// A single normal path component: no separators, no `.` or `..`.
fn is_plain_name(name: &str) -> bool {
    let mut components = Path::new(name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    ) && !name.contains('/')
        && !name.contains('\\')
}
