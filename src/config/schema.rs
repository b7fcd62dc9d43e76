//! Event configuration records.
//!
//! Keys are camelCase in every format, so a JSON config written for the
//! generators reads the same when converted to YAML or TOML.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::{GenError, Result};

/// Scene shown behind commentator overlays when the config names none.
pub const DEFAULT_COMMENTARY_SCENE: &str = "commentators";

fn default_commentary_scene() -> String {
    DEFAULT_COMMENTARY_SCENE.to_string()
}

/// Configuration for one event, shared by the event layouts.
///
/// # Example YAML
///
/// ```yaml
/// name: Weekly 42
/// eventName: Weekly
/// twitchAccountId: "123456"
/// obsCollection: Weekly
/// idleScene: idle
/// breakScene: break
/// endScene: end
/// games:
///   - name: T8
///     title: Tekken 8
///     twitchId: Tekken 8
///     scoreboardScene: scoreboard
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventConfig {
    /// Main profile name, also the archive file name
    pub name: String,
    /// Prefix of every Twitch stream title
    pub event_name: String,
    pub twitch_account_id: String,
    /// OBS scene collection the source toggles act on
    pub obs_collection: String,
    /// Script opened by the crossfade key, relative to the config file
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crossfade_script: Option<String>,
    pub idle_scene: String,
    #[serde(default = "default_commentary_scene")]
    pub commentary_scene: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commentary_source: Option<String>,
    pub break_scene: String,
    pub end_scene: String,
    /// Device model written into the archive, e.g. `20GAT9901`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device_model: Option<String>,
    #[serde(default)]
    pub games: Vec<GameConfig>,
}

/// One game played at the event.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameConfig {
    /// Short name used for key titles and the game's profile
    pub name: String,
    /// Full title used in the stream title
    pub title: String,
    /// Overlay namespace toggled over WebSocket
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scoreboard_id: Option<String>,
    /// Twitch category name
    pub twitch_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitch_game_id: Option<String>,
    pub scoreboard_scene: String,
    /// OBS source toggled when there is no overlay namespace
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scoreboard_source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub idle_scene: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub break_scene: Option<String>,
}

impl GameConfig {
    /// Scene shown before this game starts.
    pub fn break_scene_or<'a>(&'a self, default: &'a str) -> &'a str {
        self.break_scene.as_deref().unwrap_or(default)
    }

    /// Stream title for this game, prefixed with the event name.
    pub fn stream_title(&self, event_name: &str) -> String {
        format!("{event_name}: {}", self.title)
    }
}

impl EventConfig {
    /// Validate the configuration.
    ///
    /// Checks that the profile name is usable and every game has a name.
    /// Scene and source names are not checked against OBS.
    pub fn validate(&self) -> Result<()> {
        trace!(name = %self.name, "Validating event config");

        if self.name.trim().is_empty() {
            return Err(GenError::ConfigInvalid("'name' must not be empty".to_string()));
        }

        for (index, game) in self.games.iter().enumerate() {
            if game.name.trim().is_empty() {
                return Err(GenError::ConfigInvalid(format!(
                    "games[{index}]: 'name' must not be empty"
                )));
            }
        }

        debug!(games = self.games.len(), "Event config validated");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game(name: &str) -> GameConfig {
        GameConfig {
            name: name.to_string(),
            title: format!("{name} Title"),
            scoreboard_id: None,
            twitch_id: name.to_string(),
            twitch_game_id: None,
            scoreboard_scene: "scoreboard".to_string(),
            scoreboard_source: None,
            idle_scene: None,
            break_scene: None,
        }
    }

    #[test]
    fn test_commentary_scene_default() {
        let json = r#"{
            "name": "Weekly",
            "eventName": "Weekly",
            "twitchAccountId": "1",
            "obsCollection": "Weekly",
            "idleScene": "idle",
            "breakScene": "break",
            "endScene": "end"
        }"#;
        let config: EventConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.commentary_scene, "commentators");
        assert!(config.games.is_empty());
        assert!(config.device_model.is_none());
    }

    #[test]
    fn test_game_defaults() {
        let mut g = game("T8");
        assert_eq!(g.break_scene_or("break"), "break");
        g.break_scene = Some("t8 break".to_string());
        assert_eq!(g.break_scene_or("break"), "t8 break");
        assert_eq!(g.stream_title("Weekly 42"), "Weekly 42: T8 Title");
    }

    #[test]
    fn test_validate_rejects_unnamed_game() {
        let json = r#"{
            "name": "Weekly",
            "eventName": "Weekly",
            "twitchAccountId": "1",
            "obsCollection": "Weekly",
            "idleScene": "idle",
            "breakScene": "break",
            "endScene": "end",
            "games": [{ "name": " ", "title": "x", "twitchId": "x", "scoreboardScene": "s" }]
        }"#;
        let config: EventConfig = serde_json::from_str(json).unwrap();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("games[0]"));
    }
}
