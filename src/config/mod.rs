//! Event configuration: the records the event layouts read, and loading them
//! from JSON, YAML or TOML files.

mod declarative;
mod path;
mod schema;

pub use declarative::{ConfigFormat, LoadedConfig, load_config, load_config_from_str};
pub use path::{PathResolver, home_dir, resolve_path};
pub use schema::{DEFAULT_COMMENTARY_SCENE, EventConfig, GameConfig};
