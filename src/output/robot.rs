//! JSON output for `--robot` and `--format=json`.

use serde::Serialize;
use tracing::error;

use crate::archive::{ArchiveSummary, WriteReport};
use crate::error::GenError;
use crate::generators::GeneratorInfo;

use super::{FolderNameEntry, Output, RobotFormat, VersionInfo};

/// Prints every result as one JSON document.
pub struct RobotOutput {
    format: RobotFormat,
}

impl RobotOutput {
    pub fn new(format: RobotFormat) -> Self {
        Self { format }
    }

    fn render<T: Serialize + ?Sized>(&self, data: &T) -> Option<String> {
        let json = match self.format {
            RobotFormat::Json => serde_json::to_string_pretty(data),
            RobotFormat::JsonCompact => serde_json::to_string(data),
        };
        json.map_err(|e| error!(error = %e, "Failed to serialize output"))
            .ok()
    }

    fn output_json<T: Serialize + ?Sized>(&self, data: &T) {
        if let Some(json) = self.render(data) {
            println!("{json}");
        }
    }

    fn output_json_stderr<T: Serialize + ?Sized>(&self, data: &T) {
        if let Some(json) = self.render(data) {
            eprintln!("{json}");
        }
    }
}

impl Output for RobotOutput {
    fn error(&self, error: &GenError) {
        self.output_json_stderr(&serde_json::json!({
            "error": true,
            "message": error.to_string(),
            "suggestion": error.suggestion(),
            "recoverable": error.is_user_recoverable(),
        }));
    }

    fn warning(&self, message: &str) {
        self.output_json_stderr(&serde_json::json!({
            "warning": true,
            "message": message,
        }));
    }

    fn archive_written(&self, report: &WriteReport) {
        self.output_json(&serde_json::json!({
            "ok": true,
            "archive": report,
        }));
    }

    fn generator_list(&self, generators: &[GeneratorInfo]) {
        self.output_json(generators);
    }

    fn archive_summary(&self, summary: &ArchiveSummary) {
        self.output_json(summary);
    }

    fn folder_names(&self, entries: &[FolderNameEntry]) {
        self.output_json(entries);
    }

    fn version_info(&self, info: &VersionInfo) {
        self.output_json(info);
    }
}
