//! Named layout generators.
//!
//! A generator turns an optional event config into a [`ProfileSet`]. The CLI
//! looks generators up by name in a fixed registry.

pub mod common;
mod lp;
mod lpxl;
mod simple_example;

pub use common::DeckLayout;
pub use lp::Lp;
pub use lpxl::LpXl;
pub use simple_example::SimpleExample;

use serde::Serialize;
use tracing::debug;

use crate::config::LoadedConfig;
use crate::error::{GenError, Result};
use crate::profile::ProfileSet;

/// A layout generator.
pub trait Generator: Send + Sync {
    /// Name used on the command line.
    fn name(&self) -> &'static str;

    /// One-line description for listings.
    fn description(&self) -> &'static str;

    /// Whether `--config` must be given.
    fn requires_config(&self) -> bool {
        true
    }

    /// Device layout the generator targets, if it targets one.
    fn layout(&self) -> Option<DeckLayout> {
        None
    }

    /// Builds the profile set.
    ///
    /// # Errors
    ///
    /// Returns an error if a required config is missing or a key cannot be
    /// built from it.
    fn generate(&self, input: &GeneratorInput) -> Result<ProfileSet>;
}

/// Everything a generator reads.
#[derive(Debug, Clone, Default)]
pub struct GeneratorInput {
    pub config: Option<LoadedConfig>,
}

impl GeneratorInput {
    pub fn with_config(config: LoadedConfig) -> Self {
        Self {
            config: Some(config),
        }
    }

    /// The loaded config, or a configuration error naming `generator`.
    pub fn require_config(&self, generator: &str) -> Result<&LoadedConfig> {
        self.config.as_ref().ok_or_else(|| {
            GenError::ConfigInvalid(format!(
                "--config must be provided for generator '{generator}'"
            ))
        })
    }
}

static GENERATORS: [&dyn Generator; 3] = [&Lp, &LpXl, &SimpleExample];

/// Every registered generator, in listing order.
pub fn generators() -> &'static [&'static dyn Generator] {
    &GENERATORS
}

/// Names of every registered generator.
pub fn generator_names() -> Vec<&'static str> {
    GENERATORS.iter().map(|g| g.name()).collect()
}

/// Looks a generator up by name.
pub fn find_generator(name: &str) -> Result<&'static dyn Generator> {
    let found = GENERATORS.iter().copied().find(|g| g.name() == name);
    debug!(name, found = found.is_some(), "Generator lookup");
    found.ok_or_else(|| GenError::UnknownGenerator {
        name: name.to_string(),
        available: generator_names(),
    })
}

/// Listing entry for a generator.
#[derive(Debug, Clone, Serialize)]
pub struct GeneratorInfo {
    pub name: &'static str,
    pub description: &'static str,
    pub requires_config: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout: Option<DeckLayout>,
}

impl From<&dyn Generator> for GeneratorInfo {
    fn from(g: &dyn Generator) -> Self {
        Self {
            name: g.name(),
            description: g.description(),
            requires_config: g.requires_config(),
            layout: g.layout(),
        }
    }
}
