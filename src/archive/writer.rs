//! Writer for `.streamDeckProfile` ZIP archives.
//!
//! Layout produced for a profile set whose main profile has id `<main>`:
//!
//! ```text
//! <main>.sdProfile/
//!   manifest.json                      top-level manifest
//!   Profiles/
//!     <folder_name(main)>/manifest.json
//!     <folder_name(sub)>/manifest.json one per additional profile
//! ```

use std::fs::{self, File};
use std::io::{BufWriter, Seek, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use sha2::{Digest, Sha256};
use tracing::{debug, info, instrument, warn};
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

use super::{ARCHIVE_EXTENSION, MANIFEST_FILE, PROFILES_DIR, root_dir};
use crate::error::{GenError, Result, ResultExt};
use crate::ids::folder_name;
use crate::profile::ProfileSet;

/// Outcome of a successful archive write.
#[derive(Debug, Clone, Serialize)]
pub struct WriteReport {
    /// File name of the archive
    pub file_name: String,
    /// Full path of the archive
    pub path: PathBuf,
    /// Archive root directory (`<main id>.sdProfile`)
    pub root: String,
    /// Number of profiles written, main included
    pub profiles: usize,
    /// Archive size in bytes
    pub bytes: u64,
    /// SHA-256 of the archive, hex encoded
    pub sha256: String,
}

/// File name of the archive for `set`: `<main profile name>.streamDeckProfile`.
///
/// Names that would escape the output directory are rejected.
pub fn archive_file_name(set: &ProfileSet) -> Result<String> {
    let name = set.main.name();
    if name.trim().is_empty() {
        return Err(GenError::ConfigInvalid(
            "Profile name must not be empty".to_string(),
        ));
    }
    if name.contains(['/', '\\']) || name == "." || name == ".." {
        return Err(GenError::ConfigInvalid(format!(
            "Profile name '{name}' cannot be used as a file name"
        )));
    }
    Ok(format!("{name}.{ARCHIVE_EXTENSION}"))
}

/// Serializes `set` as a ZIP archive into `writer` and returns the writer.
#[instrument(skip_all, fields(main = %set.main.id(), profiles = set.len()))]
pub fn write_archive<W: Write + Seek>(set: &ProfileSet, writer: W) -> Result<W> {
    let root = root_dir(set.main.id());
    let options = SimpleFileOptions::default()
        .compression_method(zip::CompressionMethod::Deflated)
        .unix_permissions(0o644);
    let dir_options = SimpleFileOptions::default().unix_permissions(0o755);

    let mut zip = ZipWriter::new(writer);

    zip.add_directory(format!("{root}/"), dir_options)?;
    add_json(
        &mut zip,
        &format!("{root}/{MANIFEST_FILE}"),
        &set.top_level_manifest(),
        options,
    )?;

    zip.add_directory(format!("{root}/{PROFILES_DIR}/"), dir_options)?;
    for profile in set.profiles() {
        let dir = format!("{root}/{PROFILES_DIR}/{}", folder_name(&profile.id()));
        zip.add_directory(format!("{dir}/"), dir_options)?;
        add_json(
            &mut zip,
            &format!("{dir}/{MANIFEST_FILE}"),
            profile.manifest(),
            options,
        )?;
        debug!(profile = profile.name(), dir = %dir, "Added profile to archive");
    }

    Ok(zip.finish()?)
}

/// Writes the archive for `set` into `dir`.
///
/// The archive is assembled in a hidden temporary file next to the target and
/// renamed into place once complete, so a failed write never leaves a file
/// under the final name. The temporary file is removed on failure. The rename
/// is the last fallible step.
#[instrument(skip(set), fields(dir = %dir.display()))]
pub fn write_to_dir(set: &ProfileSet, dir: &Path) -> Result<WriteReport> {
    let file_name = archive_file_name(set)?;
    let final_path = dir.join(&file_name);
    let temp_path = dir.join(format!(".{file_name}.tmp"));

    for id in set.unresolved_links() {
        warn!(target_id = %id, "Folder key links to a profile that is not in the set");
    }

    let digest = write_temp(set, &temp_path).and_then(|digest| {
        fs::rename(&temp_path, &final_path)?;
        Ok(digest)
    });
    let (bytes, sha256) = match digest {
        Ok(digest) => digest,
        Err(e) => {
            let _ = fs::remove_file(&temp_path);
            return Err(e);
        }
    };

    let report = WriteReport {
        file_name,
        path: final_path,
        root: root_dir(set.main.id()),
        profiles: set.len(),
        bytes,
        sha256,
    };
    info!(
        path = %report.path.display(),
        bytes = report.bytes,
        profiles = report.profiles,
        "Archive written"
    );
    Ok(report)
}

/// Writes the archive for `set` into `dir` on a blocking worker thread.
///
/// Resolves once the archive has been renamed into place.
pub async fn write_to_disk(set: ProfileSet, dir: PathBuf) -> Result<WriteReport> {
    tokio::task::spawn_blocking(move || write_to_dir(&set, &dir))
        .await
        .map_err(|e| GenError::Archive(format!("Archive write task failed: {e}")))?
}

/// Writes and syncs the temporary archive, returning its size and SHA-256.
fn write_temp(set: &ProfileSet, temp_path: &Path) -> Result<(u64, String)> {
    let file = File::create(temp_path)
        .with_context(|| format!("Failed to create {}", temp_path.display()))?;
    let writer = write_archive(set, BufWriter::new(file))?;
    let file = writer
        .into_inner()
        .map_err(|e| GenError::Io(e.into_error()))?;
    file.sync_all()?;

    let data = fs::read(temp_path)?;
    Ok((data.len() as u64, hex::encode(Sha256::digest(&data))))
}

fn add_json<W: Write + Seek, T: Serialize>(
    zip: &mut ZipWriter<W>,
    path: &str,
    value: &T,
    options: SimpleFileOptions,
) -> Result<()> {
    let bytes = serde_json::to_vec(value)
        .map_err(|e| GenError::Archive(format!("Failed to serialize {path}: {e}")))?;
    zip.start_file(path, options)?;
    zip.write_all(&bytes)?;
    Ok(())
}
