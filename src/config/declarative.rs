//! Loading of declarative event configuration files.
//!
//! The format is detected from the file extension. JSON is the native format;
//! YAML and TOML carry the same keys.

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument, trace};

use super::path::PathResolver;
use super::schema::EventConfig;
use crate::error::{GenError, Result};

/// Event config file formats, all carrying the same camelCase keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    /// `.yaml` or `.yml`
    Yaml,
    Toml,
}

impl ConfigFormat {
    /// Format named by the extension of `path`, ignoring case.
    #[must_use]
    pub fn from_extension(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        let format = match ext.as_str() {
            "json" => Self::Json,
            "yml" | "yaml" => Self::Yaml,
            "toml" => Self::Toml,
            _ => return None,
        };
        trace!(%ext, ?format, "Config format from extension");
        Some(format)
    }
}

/// A validated config together with where it came from.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: EventConfig,
    /// File the config was read from, if any
    pub path: Option<PathBuf>,
    resolver: PathResolver,
}

impl LoadedConfig {
    /// Wraps an in-memory config whose relative paths resolve against `dir`.
    pub fn in_dir(config: EventConfig, dir: impl Into<PathBuf>) -> Self {
        Self {
            config,
            path: None,
            resolver: PathResolver::with_dir(dir),
        }
    }

    /// Resolves a path named in the config.
    pub fn resolve(&self, path: &str) -> Result<PathBuf> {
        self.resolver.resolve(Path::new(path))
    }

    /// Directory relative paths resolve against.
    pub fn config_dir(&self) -> &Path {
        self.resolver.config_dir()
    }
}

/// Reads, parses and validates the event config at `path`.
///
/// The format comes from the extension. A missing file is
/// [`GenError::ConfigNotFound`]; an unknown extension or bad content is
/// [`GenError::ConfigParse`].
#[instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<LoadedConfig> {
    let path = path.as_ref();

    let Some(format) = ConfigFormat::from_extension(path) else {
        return Err(GenError::ConfigParse(format!(
            "Unknown config format for '{}': expected .json, .yaml, .yml, or .toml",
            path.display()
        )));
    };

    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(GenError::ConfigNotFound {
                path: path.display().to_string(),
            });
        }
        Err(e) => return Err(e.into()),
    };
    debug!(?format, bytes = content.len(), "Read event config");

    let config = load_config_from_str(&content, format)?;
    Ok(LoadedConfig {
        config,
        path: Some(path.to_path_buf()),
        resolver: PathResolver::new(path),
    })
}

/// Parses and validates an event config held in memory.
#[instrument(skip(content))]
pub fn load_config_from_str(content: &str, format: ConfigFormat) -> Result<EventConfig> {
    let config: EventConfig = match format {
        ConfigFormat::Json => serde_json::from_str(content)
            .map_err(|e| GenError::ConfigParse(format!("JSON: {e}")))?,
        ConfigFormat::Yaml => {
            serde_yaml::from_str(content).map_err(|e| GenError::ConfigParse(format!("YAML: {e}")))?
        }
        ConfigFormat::Toml => {
            toml::from_str(content).map_err(|e| GenError::ConfigParse(format!("TOML: {e}")))?
        }
    };

    config.validate()?;

    info!(
        name = %config.name,
        games = config.games.len(),
        device = ?config.device_model,
        "Event config loaded"
    );

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const JSON: &str = r#"{
        "name": "Weekly 42",
        "eventName": "Weekly",
        "twitchAccountId": "123456",
        "obsCollection": "Weekly",
        "crossfadeScript": "scripts/crossfade.sh",
        "idleScene": "idle",
        "breakScene": "break",
        "endScene": "end",
        "games": [
            { "name": "T8", "title": "Tekken 8", "twitchId": "Tekken 8", "scoreboardScene": "scoreboard", "scoreboardId": "t8" },
            { "name": "SF6", "title": "Street Fighter 6", "twitchId": "Street Fighter 6", "twitchGameId": "55453844", "scoreboardScene": "scoreboard" }
        ]
    }"#;

    #[test]
    fn test_format_detection() {
        assert_eq!(
            ConfigFormat::from_extension(Path::new("event.json")),
            Some(ConfigFormat::Json)
        );
        assert_eq!(
            ConfigFormat::from_extension(Path::new("event.YML")),
            Some(ConfigFormat::Yaml)
        );
        assert_eq!(
            ConfigFormat::from_extension(Path::new("event.toml")),
            Some(ConfigFormat::Toml)
        );
        assert_eq!(ConfigFormat::from_extension(Path::new("event.txt")), None);
        assert_eq!(ConfigFormat::from_extension(Path::new("event")), None);
    }

    #[test]
    fn test_load_json() {
        let config = load_config_from_str(JSON, ConfigFormat::Json).unwrap();
        assert_eq!(config.name, "Weekly 42");
        assert_eq!(config.games.len(), 2);
        assert_eq!(config.games[0].scoreboard_id.as_deref(), Some("t8"));
        assert_eq!(config.games[1].twitch_game_id.as_deref(), Some("55453844"));
    }

    #[test]
    fn test_formats_agree() {
        let yaml = r"
name: Weekly 42
eventName: Weekly
twitchAccountId: '123456'
obsCollection: Weekly
crossfadeScript: scripts/crossfade.sh
idleScene: idle
breakScene: break
endScene: end
games:
  - name: T8
    title: Tekken 8
    twitchId: Tekken 8
    scoreboardScene: scoreboard
    scoreboardId: t8
  - name: SF6
    title: Street Fighter 6
    twitchId: Street Fighter 6
    twitchGameId: '55453844'
    scoreboardScene: scoreboard
";
        let toml_str = r#"
name = "Weekly 42"
eventName = "Weekly"
twitchAccountId = "123456"
obsCollection = "Weekly"
crossfadeScript = "scripts/crossfade.sh"
idleScene = "idle"
breakScene = "break"
endScene = "end"

[[games]]
name = "T8"
title = "Tekken 8"
twitchId = "Tekken 8"
scoreboardScene = "scoreboard"
scoreboardId = "t8"

[[games]]
name = "SF6"
title = "Street Fighter 6"
twitchId = "Street Fighter 6"
twitchGameId = "55453844"
scoreboardScene = "scoreboard"
"#;
        let json = load_config_from_str(JSON, ConfigFormat::Json).unwrap();
        assert_eq!(load_config_from_str(yaml, ConfigFormat::Yaml).unwrap(), json);
        assert_eq!(load_config_from_str(toml_str, ConfigFormat::Toml).unwrap(), json);
    }

    #[test]
    fn test_missing_required_key() {
        let err = load_config_from_str(r#"{ "name": "x" }"#, ConfigFormat::Json).unwrap_err();
        assert!(matches!(err, GenError::ConfigParse(_)));
    }

    #[test]
    fn test_load_config_file_not_found() {
        let temp = TempDir::new().unwrap();
        let err = load_config(temp.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, GenError::ConfigNotFound { .. }));
    }

    #[test]
    fn test_load_config_unknown_extension() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("event.ini");
        fs::write(&path, JSON).unwrap();
        let err = load_config(&path).unwrap_err();
        assert!(matches!(err, GenError::ConfigParse(_)));
    }

    #[test]
    fn test_loaded_config_resolves_against_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("event.json");
        fs::write(&path, JSON).unwrap();

        let loaded = load_config(&path).unwrap();
        let script = loaded
            .resolve(loaded.config.crossfade_script.as_deref().unwrap())
            .unwrap();

        assert_eq!(
            script,
            temp.path().canonicalize().unwrap().join("scripts/crossfade.sh")
        );
        assert_eq!(loaded.path.as_deref(), Some(path.as_path()));
        assert_eq!(
            loaded.config_dir(),
            temp.path().canonicalize().unwrap().as_path()
        );
    }
}
