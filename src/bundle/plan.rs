//! Build plan: folders, members and output names, without reading content.

use crate::bundle::aggregate::{member_name, Aggregator};
use crate::bundle::report::MemberFile;
use crate::error::BundleError;
use serde::{Deserialize, Serialize};
use std::fs;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FolderPlan {
    pub folder: String,
    pub output: String,
    pub members: Vec<MemberFile>,
}

impl FolderPlan {
    pub fn total_bytes(&self) -> u64 {
        self.members.iter().map(|m| m.size).sum()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BundlePlan {
    pub folders: Vec<FolderPlan>,
    pub master: String,
    pub order: String,
}

impl<'a> Aggregator<'a> {
    /// List what a build would concatenate, in order.
    pub fn plan(&self) -> Result<BundlePlan, BundleError> {
        let settings = self.settings();
        let mut folders = Vec::with_capacity(settings.folders.len());

        for folder in &settings.folders {
            let dir = self.root().join(folder);
            let paths = crate::bundle::listing::list_members(folder, &dir, settings.order)?;

            let mut members = Vec::with_capacity(paths.len());
            for path in paths {
                let metadata = fs::metadata(&path).map_err(|source| BundleError::ReadFailed {
                    path: path.clone(),
                    source,
                })?;
                members.push(MemberFile {
                    name: member_name(&path),
                    size: metadata.len(),
                });
            }

            folders.push(FolderPlan {
                folder: folder.clone(),
                output: settings.folder_output_name(folder),
                members,
            });
        }

        Ok(BundlePlan {
            folders,
            master: settings.master_name.clone(),
            order: settings.order.as_str().to_string(),
        })
    }
}
