//! Profiles: named grids with an identity, and the manifests written for them.

use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::action::{Action, ActionKind, ActionSettings, OpenChildSettings, shaped};
use crate::grid::Grid;
use crate::ids::new_profile_id;

/// Version string of the top-level manifest format.
pub const MANIFEST_VERSION: &str = "2.0";

/// A finished profile. Immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    name: String,
    id: Uuid,
    manifest: ProfileManifest,
}

impl Profile {
    /// Builds a profile from a finished grid, assigning it a fresh identifier.
    ///
    /// Empty keys are left out of the manifest.
    pub fn new(name: impl Into<String>, grid: &Grid) -> Self {
        let name = name.into();
        let actions: BTreeMap<String, Arc<Action>> = grid
            .cells()
            .map(|(col, row, action)| (position_key(col, row), Arc::clone(action)))
            .collect();
        let id = new_profile_id();

        debug!(%id, name = %name, keys = actions.len(), "Built profile");
        Self {
            name,
            id,
            manifest: ProfileManifest {
                controllers: vec![Controller {
                    actions,
                    controller_type: ControllerType::Keypad,
                }],
            },
        }
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Profile identifier.
    pub const fn id(&self) -> Uuid {
        self.id
    }

    /// The profile's own manifest (`Profiles/<folder>/manifest.json`).
    pub const fn manifest(&self) -> &ProfileManifest {
        &self.manifest
    }

    /// Action at the manifest key for `(col, row)` on the keypad.
    pub fn action_at(&self, col: usize, row: usize) -> Option<&Action> {
        self.manifest
            .keypad()?
            .actions
            .get(&position_key(col, row))
            .map(AsRef::as_ref)
    }

    /// Targets of every folder-link key in this profile.
    pub fn folder_targets(&self) -> impl Iterator<Item = Uuid> + '_ {
        self.manifest
            .controllers
            .iter()
            .flat_map(|c| c.actions.values())
            .filter_map(|a| match &a.settings {
                Some(ActionSettings::OpenChild(s)) => Some(s.profile_uuid),
                _ => None,
            })
    }
}

/// Builds a key that opens `profile` as a folder, titled with its name.
pub fn folder(profile: &Profile) -> Action {
    shaped(
        ActionKind::OpenChild,
        profile.name(),
        Some(ActionSettings::OpenChild(OpenChildSettings {
            profile_uuid: profile.id(),
        })),
    )
}

/// Manifest key for a grid position.
pub fn position_key(col: usize, row: usize) -> String {
    format!("{col},{row}")
}

/// Per-profile manifest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ProfileManifest {
    pub controllers: Vec<Controller>,
}

impl ProfileManifest {
    /// The keypad controller, if present.
    pub fn keypad(&self) -> Option<&Controller> {
        self.controllers
            .iter()
            .find(|c| c.controller_type == ControllerType::Keypad)
    }
}

/// Actions for one input surface of the device.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Controller {
    /// Actions mapped by "col,row" position
    #[serde(default)]
    pub actions: BTreeMap<String, Arc<Action>>,
    #[serde(rename = "Type")]
    pub controller_type: ControllerType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ControllerType {
    Keypad,
    Encoder,
}

/// Manifest at the archive root (`<id>.sdProfile/manifest.json`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TopLevelManifest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device: Option<Device>,
    pub name: String,
    pub pages: Pages,
    pub version: String,
}

impl TopLevelManifest {
    /// Manifest listing `profile` as the only, current page.
    pub fn for_profile(profile: &Profile, device_model: Option<&str>) -> Self {
        Self {
            device: device_model.map(|model| Device {
                model: model.to_string(),
                uuid: String::new(),
            }),
            name: profile.name().to_string(),
            pages: Pages {
                current: profile.id(),
                pages: vec![profile.id()],
            },
            version: MANIFEST_VERSION.to_string(),
        }
    }
}

/// Device information. The UUID is left blank so the app binds the profile to
/// whichever device imports it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Device {
    pub model: String,
    #[serde(rename = "UUID")]
    pub uuid: String,
}

/// Page navigation info.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Pages {
    pub current: Uuid,
    pub pages: Vec<Uuid>,
}

/// A main profile and every profile reachable from it through folder keys.
#[derive(Debug, Clone)]
pub struct ProfileSet {
    pub main: Profile,
    pub additional: Vec<Profile>,
    /// Device model written into the top-level manifest, if known.
    pub device_model: Option<String>,
}

impl ProfileSet {
    pub fn new(main: Profile, additional: Vec<Profile>) -> Self {
        Self {
            main,
            additional,
            device_model: None,
        }
    }

    /// Sets the device model written into the top-level manifest.
    pub fn with_device_model(mut self, model: Option<String>) -> Self {
        self.device_model = model;
        self
    }

    /// Main profile first, then the additional profiles in order.
    pub fn profiles(&self) -> impl Iterator<Item = &Profile> {
        std::iter::once(&self.main).chain(&self.additional)
    }

    /// Number of profiles, main included.
    pub fn len(&self) -> usize {
        1 + self.additional.len()
    }

    /// Always false; a set has at least its main profile.
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Looks up a profile by identifier.
    pub fn find(&self, id: Uuid) -> Option<&Profile> {
        self.profiles().find(|p| p.id() == id)
    }

    /// Folder-link targets that do not name a profile in this set.
    ///
    /// Such links import fine but lead nowhere on the device.
    pub fn unresolved_links(&self) -> Vec<Uuid> {
        let known: HashSet<Uuid> = self.profiles().map(Profile::id).collect();
        let mut missing: Vec<Uuid> = self
            .profiles()
            .flat_map(Profile::folder_targets)
            .filter(|id| !known.contains(id))
            .collect();
        missing.sort_unstable();
        missing.dedup();
        missing
    }

    /// Top-level manifest for the archive root.
    pub fn top_level_manifest(&self) -> TopLevelManifest {
        TopLevelManifest::for_profile(&self.main, self.device_model.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::{back, program_scene};
    use crate::grid::cell;
    use serde_json::json;

    fn sample_grid() -> Grid {
        Grid::from_rows(vec![
            vec![cell(back()), None, cell(program_scene("Idle", "idle"))],
            vec![None],
            vec![None, cell(program_scene("BRB", "brb"))],
        ])
    }

    #[test]
    fn test_manifest_skips_empty_keys() {
        let profile = Profile::new("Test", &sample_grid());
        let keypad = profile.manifest().keypad().unwrap();

        let keys: Vec<&str> = keypad.actions.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["0,0", "1,2", "2,0"]);
        assert!(profile.action_at(1, 0).is_none());
        assert!(profile.action_at(0, 1).is_none());
    }

    #[test]
    fn test_manifest_keeps_exact_actions() {
        let grid = sample_grid();
        let profile = Profile::new("Test", &grid);
        for (col, row, action) in grid.cells() {
            assert_eq!(profile.action_at(col, row), Some(action.as_ref()));
        }
    }

    #[test]
    fn test_manifest_json_shape() {
        let grid = Grid::from_rows(vec![vec![cell(back())]]);
        let profile = Profile::new("Test", &grid);
        let value = serde_json::to_value(profile.manifest()).unwrap();

        assert_eq!(value["Controllers"][0]["Type"], "Keypad");
        assert_eq!(
            value["Controllers"][0]["Actions"]["0,0"]["UUID"],
            "com.elgato.streamdeck.profile.backtoparent"
        );
    }

    #[test]
    fn test_profiles_get_distinct_ids() {
        let grid = sample_grid();
        let a = Profile::new("A", &grid);
        let b = Profile::new("A", &grid);
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_folder_links_to_profile() {
        let child = Profile::new("Child", &sample_grid());
        let link = folder(&child);

        assert_eq!(link.title(), Some("Child"));
        assert_eq!(
            serde_json::to_value(&link).unwrap()["Settings"],
            json!({ "ProfileUUID": child.id().to_string() })
        );
    }

    #[test]
    fn test_top_level_manifest() {
        let profile = Profile::new("Weekly", &sample_grid());
        let set = ProfileSet::new(profile, Vec::new());
        let value = serde_json::to_value(set.top_level_manifest()).unwrap();
        let id = set.main.id().to_string();

        assert_eq!(
            value,
            json!({
                "Name": "Weekly",
                "Pages": { "Current": id, "Pages": [id] },
                "Version": "2.0"
            })
        );

        let with_device = set.with_device_model(Some("20GAT9901".to_string()));
        let value = serde_json::to_value(with_device.top_level_manifest()).unwrap();
        assert_eq!(value["Device"], json!({ "Model": "20GAT9901", "UUID": "" }));
    }

    #[test]
    fn test_unresolved_links() {
        let child = Profile::new("Child", &sample_grid());
        let orphan = Profile::new("Orphan", &sample_grid());
        let main = Profile::new(
            "Main",
            &Grid::from_rows(vec![vec![cell(folder(&child)), cell(folder(&orphan))]]),
        );

        let set = ProfileSet::new(main, vec![child]);
        assert_eq!(set.unresolved_links(), vec![orphan.id()]);
        assert_eq!(set.len(), 2);
        assert!(set.find(orphan.id()).is_none());
    }
}
