//! Paths named inside a config file, such as the crossfade script.

use std::path::{Path, PathBuf};

use tracing::{trace, warn};

use crate::error::{GenError, Result};

/// Resolves `path` as written in a config file.
///
/// A leading `~` component expands to the home directory, absolute paths are
/// kept and anything else is taken relative to `config_dir`.
pub fn resolve_path(path: &Path, config_dir: &Path) -> Result<PathBuf> {
    let resolved = if let Ok(rest) = path.strip_prefix("~") {
        home_dir()?.join(rest)
    } else if path.is_absolute() {
        path.to_path_buf()
    } else {
        config_dir.join(path)
    };
    trace!(
        original = %path.display(),
        resolved = %resolved.display(),
        "Resolved config path"
    );
    Ok(resolved)
}

/// The user's home directory.
pub fn home_dir() -> Result<PathBuf> {
    dirs::home_dir()
        .ok_or_else(|| GenError::ConfigInvalid("Could not determine home directory".to_string()))
}

/// Resolves paths against the directory of one config file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathResolver {
    config_dir: PathBuf,
}

impl PathResolver {
    /// Resolver for paths inside the config file at `config_path`.
    pub fn new(config_path: &Path) -> Self {
        let dir = config_path
            .parent()
            .filter(|dir| !dir.as_os_str().is_empty())
            .unwrap_or(Path::new("."));

        match dir.canonicalize() {
            Ok(config_dir) => Self { config_dir },
            Err(e) => {
                warn!(dir = %dir.display(), error = %e, "Config directory kept as given");
                Self::with_dir(dir)
            }
        }
    }

    /// Resolver rooted at `dir` as given.
    pub fn with_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            config_dir: dir.into(),
        }
    }

    /// Resolves `path` against this config file.
    pub fn resolve(&self, path: &Path) -> Result<PathBuf> {
        resolve_path(path, &self.config_dir)
    }

    /// Directory relative paths are resolved against.
    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }
}
