//! Command results rendered for people or for scripts.

use serde::Serialize;

use crate::archive::{ArchiveSummary, WriteReport};
use crate::cli::Cli;
use crate::error::GenError;
use crate::generators::GeneratorInfo;

pub mod human;
pub mod robot;

pub use human::HumanOutput;
pub use robot::RobotOutput;

/// One line of `sdgen folder-name` output.
#[derive(Debug, Clone, Serialize)]
pub struct FolderNameEntry {
    pub id: String,
    pub folder: String,
}

/// Build details reported by `sdgen version`.
#[derive(Debug, Clone, Serialize)]
pub struct VersionInfo {
    pub version: &'static str,
    pub git_sha: &'static str,
    pub git_dirty: bool,
    pub build_timestamp: &'static str,
    pub rustc_version: &'static str,
    pub target: &'static str,
}

/// Layout of robot-mode JSON.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RobotFormat {
    /// Indented; `--robot` and `--format=json`
    Json,
    /// One line per document; `--format=json-compact`
    JsonCompact,
}

/// Where and how command results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Robot(RobotFormat),
    /// Styled text; `quiet` drops everything but errors
    Human { quiet: bool },
}

impl OutputMode {
    /// Mode selected by the global flags.
    #[must_use]
    pub const fn from_cli(cli: &Cli) -> Self {
        if cli.use_json() {
            let format = if cli.use_compact_json() {
                RobotFormat::JsonCompact
            } else {
                RobotFormat::Json
            };
            Self::Robot(format)
        } else {
            Self::Human { quiet: cli.quiet }
        }
    }

    /// True for either JSON layout.
    #[must_use]
    pub const fn is_robot(&self) -> bool {
        matches!(self, Self::Robot(_))
    }

    /// Renderer for this mode.
    #[must_use]
    pub fn into_output(self) -> Box<dyn Output> {
        match self {
            Self::Robot(format) => Box::new(RobotOutput::new(format)),
            Self::Human { quiet } => Box::new(HumanOutput::new(quiet)),
        }
    }
}

/// Sink for everything a command reports.
///
/// Results go to stdout; errors and warnings to stderr.
pub trait Output {
    fn error(&self, error: &GenError);
    fn warning(&self, message: &str);

    /// An archive was written.
    fn archive_written(&self, report: &WriteReport);

    fn generator_list(&self, generators: &[GeneratorInfo]);
    fn archive_summary(&self, summary: &ArchiveSummary);
    fn folder_names(&self, entries: &[FolderNameEntry]);
    fn version_info(&self, info: &VersionInfo);
}
