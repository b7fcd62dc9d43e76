//! Key actions: the serialized schema and the constructors that build them.

mod builders;
mod schema;

pub use builders::{
    HttpRequest, MAX_STREAM_TITLE_CHARS, ObsScene, ObsSource, TwitchTitle, WebSocketMessage, back,
    hotkey, obs_scene, obs_source, obs_studio_mode, open, program_scene, shaped, twitch_title,
    web_request_http, web_request_websocket, website,
};
pub use schema::{
    Action, ActionKind, ActionSettings, ActionState, EmptySettings, HotkeyRecord, HotkeySettings,
    HttpMethod, HttpRequestSettings, ObsSceneSettings, ObsSourceSettings, OpenChildSettings,
    OpenSettings, SceneTarget, TwitchTitleSettings, WebSocketSettings,
};
