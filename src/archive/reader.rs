//! Reader for `.streamDeckProfile` archives produced by the writer.
//!
//! Used to inspect generated archives and to check them after writing.

use std::collections::BTreeMap;
use std::io::{Read, Seek};
use std::path::Path;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};
use uuid::Uuid;
use zip::ZipArchive;

use super::{MANIFEST_FILE, PROFILES_DIR, ROOT_SUFFIX};
use crate::action::ActionSettings;
use crate::error::{GenError, Result};
use crate::ids::folder_name;
use crate::profile::{ProfileManifest, TopLevelManifest};

/// Parsed contents of a profile archive.
#[derive(Debug, Clone)]
pub struct ArchiveContents {
    /// Main profile id, taken from the root directory name
    pub root_id: Uuid,
    /// Root directory name (`<id>.sdProfile`)
    pub root: String,
    /// Top-level manifest
    pub top_level: TopLevelManifest,
    /// Profile manifests keyed by folder name, as raw JSON
    pub profiles: BTreeMap<String, serde_json::Value>,
    /// Every entry name in the archive
    pub entries: Vec<String>,
}

impl ArchiveContents {
    /// Raw manifest of the profile stored under `folder`.
    pub fn profile_manifest(&self, folder: &str) -> Option<&serde_json::Value> {
        self.profiles.get(folder)
    }

    /// Manifest of the profile with id `id`, parsed into the typed schema.
    pub fn typed_manifest(&self, id: &Uuid) -> Result<Option<ProfileManifest>> {
        self.profiles
            .get(&folder_name(id))
            .map(|value| {
                serde_json::from_value(value.clone())
                    .map_err(|e| GenError::ConfigParse(format!("Invalid profile manifest: {e}")))
            })
            .transpose()
    }

    /// Per-profile overview, main profile first.
    pub fn summary(&self) -> Result<ArchiveSummary> {
        let main_folder = folder_name(&self.root_id);
        let mut profiles = Vec::with_capacity(self.profiles.len());

        for (folder, value) in &self.profiles {
            let manifest: ProfileManifest = serde_json::from_value(value.clone())
                .map_err(|e| GenError::ConfigParse(format!("Invalid profile manifest {folder}: {e}")))?;

            let mut keys = 0;
            let mut kinds: BTreeMap<String, usize> = BTreeMap::new();
            let mut links = Vec::new();
            for action in manifest.controllers.iter().flat_map(|c| c.actions.values()) {
                keys += 1;
                let kind = action
                    .kind()
                    .map_or_else(|| action.uuid.clone(), |k| k.display_name().to_string());
                *kinds.entry(kind).or_default() += 1;
                if let Some(ActionSettings::OpenChild(s)) = &action.settings {
                    links.push(folder_name(&s.profile_uuid));
                }
            }

            profiles.push(ProfileSummary {
                folder: folder.clone(),
                main: *folder == main_folder,
                keys,
                kinds,
                links,
            });
        }
        profiles.sort_by_key(|p| !p.main);

        Ok(ArchiveSummary {
            name: self.top_level.name.clone(),
            root: self.root.clone(),
            profiles,
        })
    }
}

/// Overview of an archive, for display.
#[derive(Debug, Clone, Serialize)]
pub struct ArchiveSummary {
    pub name: String,
    pub root: String,
    pub profiles: Vec<ProfileSummary>,
}

/// Overview of one profile in an archive.
#[derive(Debug, Clone, Serialize)]
pub struct ProfileSummary {
    pub folder: String,
    pub main: bool,
    pub keys: usize,
    pub kinds: BTreeMap<String, usize>,
    /// Folder names the profile's folder keys point at
    pub links: Vec<String>,
}

/// Reads an archive from a file.
pub fn read_archive_file<P: AsRef<Path>>(path: P) -> Result<ArchiveContents> {
    let file = std::fs::File::open(path.as_ref()).map_err(|e| {
        GenError::Archive(format!(
            "Failed to open {}: {e}",
            path.as_ref().display()
        ))
    })?;
    read_archive(file)
}

/// Reads an archive from any readable/seekable source.
#[instrument(skip_all)]
pub fn read_archive<R: Read + Seek>(reader: R) -> Result<ArchiveContents> {
    let mut archive = ZipArchive::new(reader)
        .map_err(|e| GenError::Archive(format!("Invalid ZIP archive: {e}")))?;
    let entries: Vec<String> = archive.file_names().map(str::to_string).collect();

    let root = find_root(&entries)?;
    let root_id = root
        .strip_suffix(ROOT_SUFFIX)
        .and_then(|id| Uuid::parse_str(id).ok())
        .ok_or_else(|| GenError::Archive(format!("Root directory '{root}' is not <uuid>{ROOT_SUFFIX}")))?;

    let top_level: TopLevelManifest =
        read_json(&mut archive, &format!("{root}/{MANIFEST_FILE}"))?;

    let prefix = format!("{root}/{PROFILES_DIR}/");
    let suffix = format!("/{MANIFEST_FILE}");
    let mut profiles = BTreeMap::new();
    for name in &entries {
        let Some(folder) = name
            .strip_prefix(&prefix)
            .and_then(|rest| rest.strip_suffix(&suffix))
        else {
            continue;
        };
        if folder.contains('/') {
            continue;
        }
        let manifest: serde_json::Value = read_json(&mut archive, name)?;
        profiles.insert(folder.to_string(), manifest);
    }

    debug!(root = %root, profiles = profiles.len(), "Read archive");
    Ok(ArchiveContents {
        root_id,
        root,
        top_level,
        profiles,
        entries,
    })
}

/// Finds the single `<id>.sdProfile` directory holding the top-level manifest.
fn find_root(entries: &[String]) -> Result<String> {
    let suffix = format!("{ROOT_SUFFIX}/{MANIFEST_FILE}");
    entries
        .iter()
        .find(|name| name.ends_with(&suffix) && name.matches('/').count() == 1)
        .and_then(|name| name.split('/').next())
        .map(str::to_string)
        .ok_or_else(|| GenError::Archive("Missing top-level manifest.json".to_string()))
}

fn read_json<R: Read + Seek, T: DeserializeOwned>(
    archive: &mut ZipArchive<R>,
    path: &str,
) -> Result<T> {
    let mut file = archive
        .by_name(path)
        .map_err(|e| GenError::Archive(format!("Failed to open {path}: {e}")))?;

    let mut contents = String::new();
    file.read_to_string(&mut contents)
        .map_err(|e| GenError::Archive(format!("Failed to read {path}: {e}")))?;

    serde_json::from_str(&contents)
        .map_err(|e| GenError::ConfigParse(format!("Invalid manifest {path}: {e}")))
}
