//! Common test utilities for the profile generator.
//!
//! - Sample event configs in each supported format
//! - Config file fixtures in scratch directories
//! - Test logging setup
#![allow(dead_code)]

use std::path::{Path, PathBuf};

use tracing_subscriber::EnvFilter;

/// Two games, idle and break scenes, no overlay ids or sources.
pub const EVENT_JSON: &str = r#"{
    "name": "Weekly 42",
    "eventName": "Weekly",
    "twitchAccountId": "123456",
    "obsCollection": "Weekly",
    "idleScene": "idle",
    "breakScene": "break",
    "endScene": "end",
    "games": [
        { "name": "T8", "title": "Tekken 8", "twitchId": "Tekken 8", "scoreboardScene": "scoreboard" },
        { "name": "SF6", "title": "Street Fighter 6", "twitchId": "Street Fighter 6", "scoreboardScene": "scoreboard" }
    ]
}"#;

pub const EVENT_YAML: &str = r"
name: Weekly 42
eventName: Weekly
twitchAccountId: '123456'
obsCollection: Weekly
idleScene: idle
breakScene: break
endScene: end
games:
  - name: T8
    title: Tekken 8
    twitchId: Tekken 8
    scoreboardScene: scoreboard
  - name: SF6
    title: Street Fighter 6
    twitchId: Street Fighter 6
    scoreboardScene: scoreboard
";

pub const EVENT_TOML: &str = r#"
name = "Weekly 42"
eventName = "Weekly"
twitchAccountId = "123456"
obsCollection = "Weekly"
idleScene = "idle"
breakScene = "break"
endScene = "end"

[[games]]
name = "T8"
title = "Tekken 8"
twitchId = "Tekken 8"
scoreboardScene = "scoreboard"

[[games]]
name = "SF6"
title = "Street Fighter 6"
twitchId = "Street Fighter 6"
scoreboardScene = "scoreboard"
"#;

/// Writes `content` to `dir/file_name` and returns the path.
pub fn write_config(dir: &Path, file_name: &str, content: &str) -> PathBuf {
    let path = dir.join(file_name);
    std::fs::write(&path, content).expect("Failed to write config fixture");
    path
}

pub fn init_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
