//! Property-based tests for the concatenation laws

use macrobundle::bundle::{Aggregator, BundleSettings};
use proptest::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Folders of (file name, content) pairs; names unique within a folder.
fn folders_strategy() -> impl Strategy<Value = Vec<Vec<(String, Vec<u8>)>>> {
    prop::collection::vec(
        prop::collection::btree_map("[a-z]{1,8}\\.sas", any::<Vec<u8>>(), 0..5)
            .prop_map(|files| files.into_iter().collect::<Vec<_>>()),
        1..4,
    )
}

fn build_workspace(folders: &[Vec<(String, Vec<u8>)>]) -> (TempDir, BundleSettings) {
    let temp_dir = TempDir::new().unwrap();
    let mut names = Vec::new();
    for (i, files) in folders.iter().enumerate() {
        let name = format!("f{}", i);
        let dir = temp_dir.path().join(&name);
        fs::create_dir(&dir).unwrap();
        for (file, content) in files {
            fs::write(dir.join(file), content).unwrap();
        }
        names.push(name);
    }
    let settings = BundleSettings {
        folders: names,
        banner: "/* banner */\n".to_string(),
        ..Default::default()
    };
    (temp_dir, settings)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// Master minus banner equals the per-folder outputs in folder order, and
    /// each per-folder output equals its members concatenated by name.
    #[test]
    fn master_is_banner_plus_folder_outputs(folders in folders_strategy()) {
        let (temp_dir, settings) = build_workspace(&folders);
        Aggregator::new(temp_dir.path(), &settings).run().unwrap();

        let mut expected_master = settings.banner.as_bytes().to_vec();
        for (folder, files) in settings.folders.iter().zip(&folders) {
            let output = fs::read(temp_dir.path().join(settings.folder_output_name(folder))).unwrap();
            let expected: Vec<u8> = files.iter().flat_map(|(_, c)| c.iter().copied()).collect();
            prop_assert_eq!(&output, &expected);
            expected_master.extend_from_slice(&output);
        }

        let master = fs::read(temp_dir.path().join(&settings.master_name)).unwrap();
        prop_assert_eq!(master, expected_master);
    }

    /// Two runs over unchanged inputs write identical bytes, and render agrees with run.
    #[test]
    fn runs_are_idempotent(folders in folders_strategy()) {
        let (temp_dir, settings) = build_workspace(&folders);
        let aggregator = Aggregator::new(temp_dir.path(), &settings);

        let first = aggregator.run().unwrap();
        let first_master = fs::read(temp_dir.path().join(&settings.master_name)).unwrap();
        let second = aggregator.run().unwrap();
        let second_master = fs::read(temp_dir.path().join(&settings.master_name)).unwrap();

        prop_assert_eq!(&first_master, &second_master);
        prop_assert_eq!(first.master.digest, second.master.digest);
        prop_assert_eq!(aggregator.render().unwrap().master, first_master);
    }
}
