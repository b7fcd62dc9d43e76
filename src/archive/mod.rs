//! `.streamDeckProfile` archives: writing generated profile sets and reading
//! them back.

mod reader;
mod writer;

use uuid::Uuid;

pub use reader::{ArchiveContents, ArchiveSummary, ProfileSummary, read_archive, read_archive_file};
pub use writer::{WriteReport, archive_file_name, write_archive, write_to_dir, write_to_disk};

/// File extension of profile archives.
pub const ARCHIVE_EXTENSION: &str = "streamDeckProfile";

/// Suffix of the archive's root directory.
pub const ROOT_SUFFIX: &str = ".sdProfile";

/// Directory holding the per-profile folders.
pub const PROFILES_DIR: &str = "Profiles";

/// Name of every manifest file.
pub const MANIFEST_FILE: &str = "manifest.json";

/// Root directory name for a main profile id.
pub fn root_dir(main_id: Uuid) -> String {
    format!("{main_id}{ROOT_SUFFIX}")
}
