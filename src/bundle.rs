//! Bundle domain: list folder members, concatenate them into per-folder
//! outputs, and assemble the master output behind its banner.

pub mod aggregate;
pub mod check;
pub mod listing;
pub mod plan;
pub mod report;
pub mod settings;

pub use aggregate::{Aggregator, FolderBundle, RenderedBundle};
pub use check::{CheckReport, OutputCheck, OutputState};
pub use listing::{list_members, EntryOrder};
pub use plan::{BundlePlan, FolderPlan};
pub use report::{content_digest, BundleReport, MemberFile, OutputRecord};
pub use settings::{BundleSettings, DEFAULT_BANNER};
