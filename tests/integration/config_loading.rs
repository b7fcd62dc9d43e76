//! Config files in every supported format.

use regex::Regex;
use sdgen::config::load_config;
use sdgen::error::GenError;

use crate::common::{EVENT_JSON, EVENT_TOML, EVENT_YAML, write_config};

#[test]
fn test_every_format_loads_the_same_event() {
    let temp = tempfile::tempdir().unwrap();
    let json = load_config(write_config(temp.path(), "event.json", EVENT_JSON)).unwrap();
    let yaml = load_config(write_config(temp.path(), "event.yml", EVENT_YAML)).unwrap();
    let toml = load_config(write_config(temp.path(), "event.toml", EVENT_TOML)).unwrap();

    assert_eq!(json.config, yaml.config);
    assert_eq!(json.config, toml.config);
    assert_eq!(json.config.commentary_scene, "commentators");
}

#[test]
fn test_parse_errors_name_the_format() {
    let temp = tempfile::tempdir().unwrap();
    let path = write_config(temp.path(), "event.yaml", "name: [unterminated");
    let err = load_config(&path).unwrap_err();

    assert!(matches!(err, GenError::ConfigParse(_)));
    let pattern = Regex::new(r"^Configuration parse error: YAML: ").unwrap();
    assert!(pattern.is_match(&err.to_string()), "{err}");
}

#[test]
fn test_missing_file() {
    let err = load_config("/nonexistent/event.json").unwrap_err();
    assert!(matches!(err, GenError::ConfigNotFound { .. }));
    assert_eq!(err.suggestion(), Some("Check the path passed to --config"));
}
