//! Up-to-date check: compare the outputs on disk with what a build would write.

use crate::bundle::aggregate::Aggregator;
use crate::bundle::report::content_digest;
use crate::error::BundleError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputState {
    UpToDate,
    Stale,
    Missing,
}

/// Check result for one output file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputCheck {
    pub file: String,
    pub state: OutputState,
    pub expected_digest: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actual_digest: Option<String>,
}

/// Check result for every output, per-folder outputs first, master last
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckReport {
    pub outputs: Vec<OutputCheck>,
}

impl CheckReport {
    pub fn is_up_to_date(&self) -> bool {
        self.outputs.iter().all(|o| o.state == OutputState::UpToDate)
    }

    /// Files that are stale or missing.
    pub fn out_of_date(&self) -> Vec<String> {
        self.outputs
            .iter()
            .filter(|o| o.state != OutputState::UpToDate)
            .map(|o| o.file.clone())
            .collect()
    }
}

impl<'a> Aggregator<'a> {
    /// Render in memory and compare each expected output with the file on disk.
    pub fn check(&self) -> Result<CheckReport, BundleError> {
        let rendered = self.render()?;

        let mut outputs = Vec::with_capacity(rendered.folders.len() + 1);
        for bundle in &rendered.folders {
            outputs.push(check_output(self.root(), &bundle.output, &bundle.content)?);
        }
        outputs.push(check_output(
            self.root(),
            &rendered.master_name,
            &rendered.master,
        )?);

        Ok(CheckReport { outputs })
    }
}

fn check_output(root: &Path, file: &str, expected: &[u8]) -> Result<OutputCheck, BundleError> {
    let path = root.join(file);
    let expected_digest = content_digest(expected);

    let actual = match fs::read(&path) {
        Ok(bytes) => Some(bytes),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
        Err(source) => return Err(BundleError::ReadFailed { path, source }),
    };

    let (state, actual_digest) = match actual {
        None => (OutputState::Missing, None),
        Some(bytes) => {
            let digest = content_digest(&bytes);
            if digest == expected_digest {
                (OutputState::UpToDate, Some(digest))
            } else {
                (OutputState::Stale, Some(digest))
            }
        }
    };
    debug!(file, ?state, "Output checked");

    Ok(OutputCheck {
        file: file.to_string(),
        state,
        expected_digest,
        actual_digest,
    })
}
