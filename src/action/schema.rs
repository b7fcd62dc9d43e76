//! Serialized shape of a single key action.
//!
//! These types map 1:1 onto the JSON the Stream Deck app stores under a
//! profile's `Controllers[].Actions` map. Field names follow the app's mixed
//! conventions (PascalCase at the action level, plugin-defined casing inside
//! `Settings`), so most fields carry an explicit rename.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The plugin action a key runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    /// Switch OBS to a scene.
    ObsScene,
    /// Toggle the visibility of an OBS scene item.
    ObsSource,
    /// Toggle OBS studio mode.
    ObsStudioMode,
    /// Update the Twitch stream title and category.
    TwitchTitle,
    /// Send an HTTP request (Web Requests plugin).
    HttpRequest,
    /// Send a WebSocket message (Web Requests plugin).
    WebSocketMessage,
    /// Open a file or application.
    Open,
    /// Open a URL.
    Website,
    /// Press a hotkey.
    Hotkey,
    /// Navigate into a child profile.
    OpenChild,
    /// Navigate back to the parent profile.
    BackToParent,
}

impl ActionKind {
    /// All kinds, in declaration order.
    pub const ALL: [Self; 11] = [
        Self::ObsScene,
        Self::ObsSource,
        Self::ObsStudioMode,
        Self::TwitchTitle,
        Self::HttpRequest,
        Self::WebSocketMessage,
        Self::Open,
        Self::Website,
        Self::Hotkey,
        Self::OpenChild,
        Self::BackToParent,
    ];

    /// Display name stored in the action's `Name` field.
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::ObsScene => "Scene",
            Self::ObsSource => "Source Visibility",
            // The app names studio mode keys like source toggles
            Self::ObsStudioMode => "Source Visibility",
            Self::TwitchTitle => "Stream/Game Title",
            Self::HttpRequest => "HTTP Request",
            Self::WebSocketMessage => "WebSocket Message",
            Self::Open => "Open",
            Self::Website => "Website",
            Self::Hotkey => "Hotkey",
            Self::OpenChild => "Create Folder",
            Self::BackToParent => "Open Folder",
        }
    }

    /// Plugin action identifier stored in the action's `UUID` field.
    pub const fn plugin_uuid(self) -> &'static str {
        match self {
            Self::ObsScene => "com.elgato.obsstudio.scene",
            Self::ObsSource => "com.elgato.obsstudio.source",
            Self::ObsStudioMode => "com.elgato.obsstudio.studiomode",
            Self::TwitchTitle => "com.elgato.twitch.streamtitle",
            Self::HttpRequest => "gg.datagram.web-requests.http",
            Self::WebSocketMessage => "gg.datagram.web-requests.websocket",
            Self::Open => "com.elgato.streamdeck.system.open",
            Self::Website => "com.elgato.streamdeck.system.website",
            Self::Hotkey => "com.elgato.streamdeck.system.hotkey",
            Self::OpenChild => "com.elgato.streamdeck.profile.openchild",
            Self::BackToParent => "com.elgato.streamdeck.profile.backtoparent",
        }
    }

    /// Number of display states (toggles have two).
    pub const fn state_count(self) -> usize {
        match self {
            Self::ObsScene | Self::ObsSource | Self::ObsStudioMode => 2,
            _ => 1,
        }
    }

    /// State index the key starts in.
    pub const fn initial_state(self) -> u32 {
        match self {
            Self::ObsScene | Self::ObsStudioMode => 1,
            _ => 0,
        }
    }

    /// Looks a kind up by its plugin identifier.
    pub fn from_plugin_uuid(uuid: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.plugin_uuid() == uuid)
    }
}

/// Action configuration for a single key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
#[allow(clippy::struct_field_names)] // Field names match the JSON schema
pub struct Action {
    /// Action instance ID (the nil UUID in generated profiles)
    #[serde(rename = "ActionID")]
    pub action_id: Uuid,
    /// Whether the title is linked to the plugin
    pub linked_title: bool,
    /// Action display name
    pub name: String,
    /// Plugin-specific settings, `null` for actions without any
    pub settings: Option<ActionSettings>,
    /// Current state index
    pub state: u32,
    /// One record per display state
    pub states: Vec<ActionState>,
    /// Plugin action identifier
    #[serde(rename = "UUID")]
    pub uuid: String,
}

impl Action {
    /// Resolves the kind from the plugin identifier.
    pub fn kind(&self) -> Option<ActionKind> {
        ActionKind::from_plugin_uuid(&self.uuid)
    }

    /// Title of the first state, if any.
    pub fn title(&self) -> Option<&str> {
        self.states.first().map(|s| s.title.as_str())
    }
}

/// Per-state display record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ActionState {
    /// Button title text (may contain newlines)
    pub title: String,
}

/// Plugin-specific settings, one variant per settings shape.
///
/// Deserialization tries the variants in order, so shapes with more required
/// fields come first and the empty object comes last.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ActionSettings {
    Hotkey(HotkeySettings),
    OpenChild(OpenChildSettings),
    TwitchTitle(TwitchTitleSettings),
    ObsSource(ObsSourceSettings),
    ObsScene(ObsSceneSettings),
    HttpRequest(HttpRequestSettings),
    WebSocket(WebSocketSettings),
    Open(OpenSettings),
    Empty(EmptySettings),
}

/// Where a scene switch lands in OBS studio mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SceneTarget {
    Preview,
    Program,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObsSceneSettings {
    pub scene: String,
    pub target: SceneTarget,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObsSourceSettings {
    pub collection: String,
    pub scene: String,
    #[serde(rename = "sceneitemid", default, skip_serializing_if = "Option::is_none")]
    pub scene_item_id: Option<String>,
    #[serde(rename = "sceneitemname")]
    pub scene_item_name: String,
    #[serde(rename = "sceneitemscene")]
    pub scene_item_scene: String,
    #[serde(rename = "toplevelscene")]
    pub top_level_scene: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TwitchTitleSettings {
    #[serde(rename = "accountId")]
    pub account_id: String,
    #[serde(rename = "ChannelGameID", default, skip_serializing_if = "Option::is_none")]
    pub game_id: Option<String>,
    #[serde(rename = "ChannelGameTitle")]
    pub game_title: String,
    #[serde(rename = "ChannelStatus")]
    pub status: String,
}

/// HTTP verbs accepted by the Web Requests plugin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpRequestSettings {
    pub url: String,
    pub method: HttpMethod,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebSocketSettings {
    pub url: String,
    pub body: String,
}

/// Settings for both the open-path and the website actions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenSettings {
    #[serde(rename = "openInBrowser")]
    pub open_in_browser: bool,
    pub path: String,
}

/// One key combination, in the app's cross-platform encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct HotkeyRecord {
    pub key_cmd: bool,
    pub key_ctrl: bool,
    pub key_modifiers: u32,
    pub key_option: bool,
    pub key_shift: bool,
    pub native_code: i32,
    #[serde(rename = "QTKeyCode")]
    pub qt_key_code: i64,
    #[serde(rename = "VKeyCode")]
    pub v_key_code: i32,
}

impl HotkeyRecord {
    /// The empty record the app appends after the last real hotkey.
    pub const TERMINATOR: Self = Self {
        key_cmd: false,
        key_ctrl: false,
        key_modifiers: 0,
        key_option: false,
        key_shift: false,
        native_code: 146,
        qt_key_code: 33_554_431,
        v_key_code: -1,
    };
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HotkeySettings {
    #[serde(rename = "Hotkeys")]
    pub hotkeys: Vec<HotkeyRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenChildSettings {
    #[serde(rename = "ProfileUUID")]
    pub profile_uuid: Uuid,
}

/// Serializes as `{}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmptySettings {}
