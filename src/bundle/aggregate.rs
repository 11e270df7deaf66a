//! Aggregation pass: concatenate each folder into its own output, and every
//! folder output (behind the banner) into the master output.

use crate::bundle::listing::list_members;
use crate::bundle::report::{BundleReport, MemberFile, OutputRecord};
use crate::bundle::settings::BundleSettings;
use crate::error::BundleError;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Concatenated content of one folder
#[derive(Debug, Clone)]
pub struct FolderBundle {
    pub folder: String,
    /// Per-folder output file name
    pub output: String,
    /// Members in concatenation order
    pub members: Vec<MemberFile>,
    pub content: Vec<u8>,
}

/// Every output computed in memory, nothing written
#[derive(Debug, Clone)]
pub struct RenderedBundle {
    pub folders: Vec<FolderBundle>,
    pub master_name: String,
    pub master: Vec<u8>,
}

impl RenderedBundle {
    /// Master content with the banner stripped.
    pub fn master_body<'a>(&'a self, banner: &str) -> &'a [u8] {
        self.master
            .strip_prefix(banner.as_bytes())
            .unwrap_or(&self.master)
    }
}

/// Aggregator over one workspace
pub struct Aggregator<'a> {
    root: PathBuf,
    settings: &'a BundleSettings,
}

impl<'a> Aggregator<'a> {
    pub fn new(root: impl Into<PathBuf>, settings: &'a BundleSettings) -> Self {
        Self {
            root: root.into(),
            settings,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn settings(&self) -> &BundleSettings {
        self.settings
    }

    /// Write every per-folder output and the master output.
    ///
    /// The master is truncated and receives the banner before any folder is
    /// listed, so a failure part way through leaves it partial.
    pub fn run(&self) -> Result<BundleReport, BundleError> {
        let master_path = self.root.join(&self.settings.master_name);
        let banner = self.settings.banner.as_bytes();

        let mut master = BufWriter::new(create_output(&master_path)?);
        write_output(&mut master, &master_path, banner)?;
        let mut master_hasher = blake3::Hasher::new();
        master_hasher.update(banner);
        let mut master_bytes = banner.len() as u64;

        let mut outputs = Vec::with_capacity(self.settings.folders.len());
        for folder in &self.settings.folders {
            let bundle = self.collect_folder(folder)?;

            let output_path = self.root.join(&bundle.output);
            fs::write(&output_path, &bundle.content).map_err(|source| {
                BundleError::WriteFailed {
                    path: output_path.clone(),
                    source,
                }
            })?;

            write_output(&mut master, &master_path, &bundle.content)?;
            master_hasher.update(&bundle.content);
            master_bytes += bundle.content.len() as u64;

            info!(
                folder = %bundle.folder,
                output = %bundle.output,
                members = bundle.members.len(),
                bytes = bundle.content.len(),
                "Folder bundled"
            );
            outputs.push(OutputRecord::from_content(
                bundle.output,
                &bundle.content,
                bundle.members.len(),
            ));
        }

        master.flush().map_err(|source| BundleError::WriteFailed {
            path: master_path.clone(),
            source,
        })?;

        let master_record = OutputRecord {
            file: self.settings.master_name.clone(),
            bytes: master_bytes,
            members: outputs.iter().map(|o| o.members).sum(),
            digest: hex::encode(master_hasher.finalize().as_bytes()),
        };
        info!(
            master = %master_record.file,
            bytes = master_record.bytes,
            folders = outputs.len(),
            "Master bundle written"
        );

        Ok(BundleReport {
            outputs,
            master: master_record,
        })
    }

    /// Compute every output in memory without touching the filesystem beyond reads.
    pub fn render(&self) -> Result<RenderedBundle, BundleError> {
        let mut master = self.settings.banner.as_bytes().to_vec();
        let mut folders = Vec::with_capacity(self.settings.folders.len());
        for folder in &self.settings.folders {
            let bundle = self.collect_folder(folder)?;
            master.extend_from_slice(&bundle.content);
            folders.push(bundle);
        }

        Ok(RenderedBundle {
            folders,
            master_name: self.settings.master_name.clone(),
            master,
        })
    }

    /// Read and concatenate the members of one folder.
    pub fn collect_folder(&self, folder: &str) -> Result<FolderBundle, BundleError> {
        let dir = self.root.join(folder);
        let paths = list_members(folder, &dir, self.settings.order)?;

        let mut content = Vec::new();
        let mut members = Vec::with_capacity(paths.len());
        for path in paths {
            let bytes = fs::read(&path).map_err(|source| BundleError::ReadFailed {
                path: path.clone(),
                source,
            })?;
            debug!(folder, member = %path.display(), bytes = bytes.len(), "Member read");
            members.push(MemberFile {
                name: member_name(&path),
                size: bytes.len() as u64,
            });
            content.extend_from_slice(&bytes);
        }

        Ok(FolderBundle {
            folder: folder.to_string(),
            output: self.settings.folder_output_name(folder),
            members,
            content,
        })
    }
}

pub(crate) fn member_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}

fn create_output(path: &Path) -> Result<File, BundleError> {
    File::create(path).map_err(|source| BundleError::WriteFailed {
        path: path.to_path_buf(),
        source,
    })
}

fn write_output<W: Write>(writer: &mut W, path: &Path, bytes: &[u8]) -> Result<(), BundleError> {
    writer
        .write_all(bytes)
        .map_err(|source| BundleError::WriteFailed {
            path: path.to_path_buf(),
            source,
        })
}
