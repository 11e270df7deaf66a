//! Macrobundle: Deterministic Macro Bundling
//!
//! Concatenates folders of macro source files into one output per folder, then
//! bundles every folder output behind a banner into a single master file that a
//! downstream consumer can include with one statement.

pub mod bundle;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
