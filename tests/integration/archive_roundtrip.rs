//! Archives written to disk and read back.

use sdgen::archive::{read_archive_file, write_to_dir, write_to_disk};
use sdgen::generators::{GeneratorInput, find_generator};
use sdgen::ids::folder_name;

use crate::common::init_test_logging;

#[test]
fn test_written_archive_matches_profile_set() {
    init_test_logging();
    let set = find_generator("simple-example")
        .unwrap()
        .generate(&GeneratorInput::default())
        .unwrap();
    let temp = tempfile::tempdir().unwrap();

    let report = write_to_dir(&set, temp.path()).unwrap();
    assert_eq!(report.file_name, "Example.streamDeckProfile");

    let contents = read_archive_file(&report.path).unwrap();
    assert_eq!(contents.root, format!("{}.sdProfile", set.main.id()));
    assert_eq!(contents.root_id, set.main.id());
    assert_eq!(contents.top_level, set.top_level_manifest());

    for profile in set.profiles() {
        let folder = folder_name(&profile.id());
        let dir = format!("{}/Profiles/{folder}/", contents.root);
        assert!(contents.entries.contains(&dir), "missing {dir}");

        let stored = contents.profile_manifest(&folder).unwrap();
        assert_eq!(stored, &serde_json::to_value(profile.manifest()).unwrap());
    }
}

#[test]
fn test_only_the_archive_is_left_behind() {
    let set = find_generator("simple-example")
        .unwrap()
        .generate(&GeneratorInput::default())
        .unwrap();
    let temp = tempfile::tempdir().unwrap();
    write_to_dir(&set, temp.path()).unwrap();

    let names: Vec<String> = std::fs::read_dir(temp.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["Example.streamDeckProfile".to_string()]);
}

#[tokio::test]
async fn test_async_write_overwrites_previous_archive() {
    let generator = find_generator("simple-example").unwrap();
    let temp = tempfile::tempdir().unwrap();

    let first = generator.generate(&GeneratorInput::default()).unwrap();
    write_to_disk(first, temp.path().to_path_buf()).await.unwrap();

    let second = generator.generate(&GeneratorInput::default()).unwrap();
    let second_id = second.main.id();
    let report = write_to_disk(second, temp.path().to_path_buf())
        .await
        .unwrap();

    let contents = read_archive_file(&report.path).unwrap();
    assert_eq!(contents.root_id, second_id);
}
