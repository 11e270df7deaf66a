//! End-to-end bundling scenarios against real directories.

use crate::integration::test_utils::{read, reference_workspace, workspace_with};
use macrobundle::bundle::{Aggregator, BundleSettings, EntryOrder, DEFAULT_BANNER};
use macrobundle::error::BundleError;
use std::fs;

fn settings(folders: &[&str]) -> BundleSettings {
    BundleSettings {
        folders: folders.iter().map(|f| f.to_string()).collect(),
        ..Default::default()
    }
}

#[test]
fn two_folders_concatenate_in_order() {
    let ws = workspace_with(
        &["A", "B"],
        &[("A", "x.txt", "1"), ("A", "y.txt", "2"), ("B", "z.txt", "3")],
    );
    let settings = settings(&["A", "B"]);

    Aggregator::new(ws.path(), &settings).run().unwrap();

    assert_eq!(read(ws.path(), "compileA.sas"), "12");
    assert_eq!(read(ws.path(), "compileB.sas"), "3");
    assert_eq!(
        read(ws.path(), "compileall.sas"),
        format!("{}123", DEFAULT_BANNER)
    );
}

#[test]
fn empty_folder_produces_empty_output() {
    let ws = workspace_with(&["A", "empty"], &[("A", "x.txt", "1")]);
    let settings = settings(&["A", "empty"]);

    let report = Aggregator::new(ws.path(), &settings).run().unwrap();

    let empty = ws.path().join("compileempty.sas");
    assert!(empty.exists());
    assert_eq!(fs::metadata(&empty).unwrap().len(), 0);
    assert_eq!(report.outputs[1].members, 0);
    assert_eq!(read(ws.path(), "compileall.sas"), format!("{}1", DEFAULT_BANNER));
}

#[test]
fn missing_folder_aborts_with_io_error() {
    let ws = workspace_with(&["base"], &[("base", "a.sas", "a")]);
    let settings = settings(&["base", "meta"]);

    let err = Aggregator::new(ws.path(), &settings).run().unwrap_err();

    assert_eq!(
        err.io_source().map(|e| e.kind()),
        Some(std::io::ErrorKind::NotFound)
    );
    // Master was started but never completed; no output for the missing folder
    assert!(read(ws.path(), "compileall.sas").starts_with(DEFAULT_BANNER));
    assert!(ws.path().join("compilebase.sas").exists());
    assert!(!ws.path().join("compilemeta.sas").exists());
}

#[test]
fn subdirectory_inside_folder_is_an_error() {
    let ws = workspace_with(&["base", "base/nested"], &[("base", "a.sas", "a")]);
    let settings = settings(&["base"]);

    let err = Aggregator::new(ws.path(), &settings).run().unwrap_err();
    assert!(matches!(err, BundleError::NotAFile { .. }));
}

#[test]
fn files_outside_configured_folders_are_ignored() {
    let ws = workspace_with(
        &["base", "lua"],
        &[("base", "a.sas", "a"), ("lua", "ignored.lua", "print()")],
    );
    fs::write(ws.path().join("README.md"), "readme").unwrap();
    let settings = settings(&["base"]);

    Aggregator::new(ws.path(), &settings).run().unwrap();
    assert_eq!(read(ws.path(), "compileall.sas"), format!("{}a", DEFAULT_BANNER));
    assert!(!ws.path().join("compilelua.sas").exists());
}

#[test]
fn repeated_runs_are_byte_identical() {
    let ws = reference_workspace();
    let settings = BundleSettings::default();
    let aggregator = Aggregator::new(ws.path(), &settings);

    let first_report = aggregator.run().unwrap();
    let first = fs::read(ws.path().join("compileall.sas")).unwrap();
    let second_report = aggregator.run().unwrap();
    let second = fs::read(ws.path().join("compileall.sas")).unwrap();

    assert_eq!(first, second);
    assert_eq!(first_report.master.digest, second_report.master.digest);
}

#[test]
fn master_is_banner_plus_folder_outputs() {
    let ws = reference_workspace();
    let settings = BundleSettings::default();

    Aggregator::new(ws.path(), &settings).run().unwrap();

    let mut expected = DEFAULT_BANNER.to_string();
    for folder in &settings.folders {
        expected.push_str(&read(ws.path(), &settings.folder_output_name(folder)));
    }
    assert_eq!(read(ws.path(), "compileall.sas"), expected);
}

#[test]
fn listing_order_keeps_every_member_once() {
    let ws = workspace_with(
        &["base"],
        &[("base", "b.sas", "B"), ("base", "a.sas", "A"), ("base", "c.sas", "C")],
    );
    let settings = BundleSettings {
        folders: vec!["base".to_string()],
        order: EntryOrder::Listing,
        ..Default::default()
    };

    Aggregator::new(ws.path(), &settings).run().unwrap();

    let mut chars: Vec<char> = read(ws.path(), "compilebase.sas").chars().collect();
    chars.sort();
    assert_eq!(chars, vec!['A', 'B', 'C']);
}

#[test]
fn check_tracks_build_state() {
    let ws = reference_workspace();
    let settings = BundleSettings::default();
    let aggregator = Aggregator::new(ws.path(), &settings);

    assert!(!aggregator.check().unwrap().is_up_to_date());
    aggregator.run().unwrap();
    assert!(aggregator.check().unwrap().is_up_to_date());

    fs::write(ws.path().join("viya").join("mv_new.sas"), "%macro mv_new;").unwrap();
    let stale = aggregator.check().unwrap().out_of_date();
    assert_eq!(stale, vec!["compileviya.sas", "compileall.sas"]);
}
