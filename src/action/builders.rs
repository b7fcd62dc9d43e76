//! Constructors for every key action the generators use.
//!
//! Each constructor takes a small parameter struct for its kind and returns a
//! finished [`Action`]. They are pure: the only shared piece is [`shaped`],
//! which fills in the state records every action carries.

use tracing::trace;

use super::schema::{
    Action, ActionKind, ActionSettings, ActionState, EmptySettings, HotkeyRecord,
    HotkeySettings, HttpMethod, HttpRequestSettings, ObsSceneSettings, ObsSourceSettings,
    OpenSettings, SceneTarget, TwitchTitleSettings, WebSocketSettings,
};
use crate::error::{GenError, Result};
use crate::ids::action_id;

/// Longest stream title the Twitch action can set.
pub const MAX_STREAM_TITLE_CHARS: usize = 50;

/// Builds an action of `kind` with one title record per state.
pub fn shaped(kind: ActionKind, title: &str, settings: Option<ActionSettings>) -> Action {
    Action {
        action_id: action_id(),
        linked_title: false,
        name: kind.display_name().to_string(),
        settings,
        state: kind.initial_state(),
        states: vec![
            ActionState {
                title: title.to_string(),
            };
            kind.state_count()
        ],
        uuid: kind.plugin_uuid().to_string(),
    }
}

pub struct ObsScene<'a> {
    pub title: &'a str,
    pub scene: &'a str,
    pub target: SceneTarget,
}

/// Switches OBS to a scene.
pub fn obs_scene(p: ObsScene<'_>) -> Action {
    shaped(
        ActionKind::ObsScene,
        p.title,
        Some(ActionSettings::ObsScene(ObsSceneSettings {
            scene: p.scene.to_string(),
            target: p.target,
        })),
    )
}

/// Shorthand for the common case of a program-output scene switch.
pub fn program_scene(title: &str, scene: &str) -> Action {
    obs_scene(ObsScene {
        title,
        scene,
        target: SceneTarget::Program,
    })
}

pub struct ObsSource<'a> {
    pub title: &'a str,
    pub collection: &'a str,
    pub scene: &'a str,
    pub source: &'a str,
    pub item_id: Option<&'a str>,
}

/// Toggles the visibility of a source inside a scene.
pub fn obs_source(p: ObsSource<'_>) -> Action {
    shaped(
        ActionKind::ObsSource,
        p.title,
        Some(ActionSettings::ObsSource(ObsSourceSettings {
            collection: p.collection.to_string(),
            scene: p.scene.to_string(),
            scene_item_id: p.item_id.map(str::to_string),
            scene_item_name: p.source.to_string(),
            scene_item_scene: p.scene.to_string(),
            top_level_scene: p.scene.to_string(),
        })),
    )
}

/// Toggles OBS studio mode. Defaults to the title "Studio Mode".
pub fn obs_studio_mode(title: Option<&str>) -> Action {
    shaped(
        ActionKind::ObsStudioMode,
        title.unwrap_or("Studio Mode"),
        Some(ActionSettings::Empty(EmptySettings {})),
    )
}

pub struct TwitchTitle<'a> {
    pub title: &'a str,
    pub account_id: &'a str,
    pub stream_title: &'a str,
    pub stream_game: &'a str,
    pub stream_game_id: Option<&'a str>,
}

/// Sets the Twitch stream title and category.
///
/// Fails with [`GenError::TitleTooLong`] when the stream title is longer than
/// [`MAX_STREAM_TITLE_CHARS`]; the app rejects longer titles, so they are
/// never truncated here.
pub fn twitch_title(p: TwitchTitle<'_>) -> Result<Action> {
    let len = p.stream_title.chars().count();
    if len > MAX_STREAM_TITLE_CHARS {
        return Err(GenError::TitleTooLong {
            title: p.stream_title.to_string(),
            len,
            max: MAX_STREAM_TITLE_CHARS,
        });
    }
    trace!(stream_title = p.stream_title, len, "Twitch title accepted");

    Ok(shaped(
        ActionKind::TwitchTitle,
        p.title,
        Some(ActionSettings::TwitchTitle(TwitchTitleSettings {
            account_id: p.account_id.to_string(),
            game_id: p.stream_game_id.map(str::to_string),
            game_title: p.stream_game.to_string(),
            status: p.stream_title.to_string(),
        })),
    ))
}

pub struct HttpRequest<'a> {
    pub title: &'a str,
    pub url: &'a str,
    pub method: HttpMethod,
    pub body: Option<&'a str>,
}

/// Sends an HTTP request.
pub fn web_request_http(p: HttpRequest<'_>) -> Action {
    shaped(
        ActionKind::HttpRequest,
        p.title,
        Some(ActionSettings::HttpRequest(HttpRequestSettings {
            url: p.url.to_string(),
            method: p.method,
            body: p.body.map(str::to_string),
        })),
    )
}

pub struct WebSocketMessage<'a> {
    pub title: &'a str,
    pub url: &'a str,
    pub body: &'a str,
}

/// Sends a message over a WebSocket.
pub fn web_request_websocket(p: WebSocketMessage<'_>) -> Action {
    shaped(
        ActionKind::WebSocketMessage,
        p.title,
        Some(ActionSettings::WebSocket(WebSocketSettings {
            url: p.url.to_string(),
            body: p.body.to_string(),
        })),
    )
}

/// Opens a file, script or application.
pub fn open(title: &str, path: &str) -> Action {
    shaped(
        ActionKind::Open,
        title,
        Some(ActionSettings::Open(OpenSettings {
            open_in_browser: true,
            path: path.to_string(),
        })),
    )
}

/// Opens a URL in the browser.
pub fn website(title: &str, url: &str) -> Action {
    shaped(
        ActionKind::Website,
        title,
        Some(ActionSettings::Open(OpenSettings {
            open_in_browser: true,
            path: url.to_string(),
        })),
    )
}

/// Presses a key combination.
pub fn hotkey(title: &str, hotkey: HotkeyRecord) -> Action {
    shaped(
        ActionKind::Hotkey,
        title,
        Some(ActionSettings::Hotkey(HotkeySettings {
            hotkeys: vec![hotkey, HotkeyRecord::TERMINATOR],
        })),
    )
}

/// Returns to the parent profile.
pub fn back() -> Action {
    shaped(ActionKind::BackToParent, "", None)
}
