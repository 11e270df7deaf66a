//! Build results: one record per written output.

use serde::{Deserialize, Serialize};

/// BLAKE3 digest of `content`, hex encoded.
pub fn content_digest(content: &[u8]) -> String {
    hex::encode(blake3::hash(content).as_bytes())
}

/// A member file of a folder
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberFile {
    /// File name inside the folder
    pub name: String,
    /// Size in bytes
    pub size: u64,
}

/// One written output file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputRecord {
    /// Output file name, relative to the workspace
    pub file: String,
    pub bytes: u64,
    /// Number of source files concatenated into this output
    pub members: usize,
    /// BLAKE3 digest (hex) of the written content
    pub digest: String,
}

impl OutputRecord {
    pub fn from_content(file: impl Into<String>, content: &[u8], members: usize) -> Self {
        Self {
            file: file.into(),
            bytes: content.len() as u64,
            members,
            digest: content_digest(content),
        }
    }
}

/// Result of a build
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BundleReport {
    /// Per-folder outputs, in folder order
    pub outputs: Vec<OutputRecord>,
    pub master: OutputRecord,
}

impl BundleReport {
    /// Total number of source files read.
    pub fn total_members(&self) -> usize {
        self.outputs.iter().map(|o| o.members).sum()
    }
}
