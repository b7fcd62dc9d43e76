//! Stream Deck profile generator library.
//!
//! Builds linked Stream Deck button layouts and packs them as
//! `.streamDeckProfile` archives. The `sdgen` binary is a thin CLI over this
//! library.
//!
//! # Modules
//!
//! - `action`: Key action schema and constructors
//! - `ids`: Profile identifiers and their folder-name encoding
//! - `grid`: Key grids and matrix helpers
//! - `profile`: Profiles, profile sets and their manifests
//! - `generators`: Named layout generators
//! - `archive`: Writing and reading profile archives
//! - `config`: Event configuration files
//! - `error`: Error types with user-recoverable hints
//! - `output`: Human and robot (JSON) renderers for command results
//! - `cli`: Command-line arguments of the `sdgen` binary
//! - `logging`: Tracing subscriber setup
#![forbid(unsafe_code)]

pub mod action;
pub mod archive;
pub mod cli;
pub mod config;
pub mod error;
pub mod generators;
pub mod grid;
pub mod ids;
pub mod logging;
pub mod output;
pub mod profile;
