//! Generated layouts and their folder links.

use std::collections::HashSet;

use sdgen::action::ActionKind;
use sdgen::config::load_config;
use sdgen::error::GenError;
use sdgen::generators::{GeneratorInput, find_generator};
use sdgen::profile::ProfileSet;

use crate::common::{EVENT_JSON, init_test_logging, write_config};

fn generate(name: &str) -> ProfileSet {
    init_test_logging();
    let temp = tempfile::tempdir().unwrap();
    let path = write_config(temp.path(), "event.json", EVENT_JSON);
    let config = load_config(&path).unwrap();
    find_generator(name)
        .unwrap()
        .generate(&GeneratorInput::with_config(config))
        .unwrap()
}

fn assert_linked_with_back(set: &ProfileSet) {
    let ids: HashSet<_> = set.additional.iter().map(|p| p.id()).collect();
    let linked: HashSet<_> = set.main.folder_targets().collect();
    assert_eq!(linked, ids, "main profile links every sub-profile");

    for profile in &set.additional {
        let key = profile.action_at(0, 0).unwrap();
        assert_eq!(
            key.kind(),
            Some(ActionKind::BackToParent),
            "{} has back at 0,0",
            profile.name()
        );
    }
}

#[test]
fn test_lp_links_each_game() {
    let set = generate("lp");
    assert_eq!(set.main.name(), "Weekly 42");
    assert_eq!(set.additional.len(), 4);
    assert_linked_with_back(&set);

    let game_names: Vec<&str> = set.additional[2..].iter().map(|p| p.name()).collect();
    assert_eq!(game_names, vec!["T8", "SF6"]);
}

#[test]
fn test_lpxl_links_each_game() {
    let set = generate("lpxl");
    assert_eq!(set.additional.len(), 4);
    assert_linked_with_back(&set);
}

#[test]
fn test_overlay_keys_without_ids() {
    let set = generate("lp");
    let t8 = &set.additional[2];

    // Commentators fall back to the default overlay namespace
    assert_eq!(
        t8.action_at(2, 0).unwrap().kind(),
        Some(ActionKind::WebSocketMessage)
    );
    // The scoreboard has neither an id nor a source
    assert!(t8.action_at(0, 1).is_none());
}

#[test]
fn test_simple_example_needs_no_config() {
    let set = find_generator("simple-example")
        .unwrap()
        .generate(&GeneratorInput::default())
        .unwrap();
    assert_eq!(set.main.name(), "Example");
    assert_linked_with_back(&set);
}

#[test]
fn test_long_stream_title_fails_generation() {
    let temp = tempfile::tempdir().unwrap();
    let long_title = format!("\"title\": \"{}\"", "T".repeat(60));
    let long = EVENT_JSON.replacen("\"title\": \"Tekken 8\"", &long_title, 1);
    let path = write_config(temp.path(), "event.json", &long);
    let config = load_config(&path).unwrap();

    let err = find_generator("lp")
        .unwrap()
        .generate(&GeneratorInput::with_config(config))
        .unwrap_err();
    assert!(matches!(err, GenError::TitleTooLong { .. }));
}
