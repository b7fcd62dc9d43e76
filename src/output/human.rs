//! Human-friendly terminal output.

use console::style;
use tracing::debug;

use crate::archive::{ArchiveSummary, WriteReport};
use crate::error::GenError;
use crate::generators::GeneratorInfo;

use super::{FolderNameEntry, Output, VersionInfo};

/// Styled terminal output implementation for human users.
///
/// Results go to stdout, errors and warnings to stderr. Coloring follows
/// `console`'s global switches, which `--no-color` turns off.
pub struct HumanOutput {
    quiet: bool,
}

impl HumanOutput {
    pub fn new(quiet: bool) -> Self {
        debug!(quiet, "Creating HumanOutput");
        Self { quiet }
    }
}

impl Output for HumanOutput {
    fn error(&self, error: &GenError) {
        eprintln!("{}: {}", style("Error").red().bold(), error);
        if let Some(suggestion) = error.suggestion() {
            eprintln!("{}: {}", style("Hint").yellow(), suggestion);
        }
    }

    fn warning(&self, message: &str) {
        if !self.quiet {
            eprintln!("{}: {}", style("Warning").yellow().bold(), message);
        }
    }

    fn archive_written(&self, report: &WriteReport) {
        if self.quiet {
            return;
        }
        println!("{} created", style(&report.file_name).green().bold());
        println!(
            "  {} profiles, {} bytes, sha256 {}",
            report.profiles,
            report.bytes,
            style(&report.sha256[..12.min(report.sha256.len())]).dim()
        );
    }

    fn generator_list(&self, generators: &[GeneratorInfo]) {
        let width = generators.iter().map(|g| g.name.len()).max().unwrap_or(0);
        for g in generators {
            let name = format!("{:width$}", g.name);
            let needs = if g.requires_config {
                style("--config").cyan().to_string()
            } else {
                String::new()
            };
            println!("  {}  {}  {}", style(name).green(), g.description, needs);
        }
    }

    fn archive_summary(&self, summary: &ArchiveSummary) {
        println!("{} ({})", style(&summary.name).bold(), summary.root);
        for profile in &summary.profiles {
            let marker = if profile.main { "*" } else { " " };
            println!(
                "{marker} {}  {} keys, {} folder links",
                style(&profile.folder).cyan(),
                profile.keys,
                profile.links.len()
            );
            for (kind, count) in &profile.kinds {
                println!("      {count:>3}  {kind}");
            }
        }
    }

    fn folder_names(&self, entries: &[FolderNameEntry]) {
        for entry in entries {
            println!("{}  {}", entry.id, style(&entry.folder).cyan());
        }
    }

    fn version_info(&self, info: &VersionInfo) {
        println!("sdgen {}", info.version);
        println!(
            "git: {}{}",
            info.git_sha,
            if info.git_dirty { " (dirty)" } else { "" }
        );
        println!("built: {}", info.build_timestamp);
        println!("rustc: {}", info.rustc_version);
        println!("target: {}", info.target);
    }
}
