//! Building blocks shared by the event layouts.
//!
//! The recording, clip and score keys talk to a local detocs instance; the
//! overlay toggles talk to its WebSocket overlay server.

use serde::Serialize;
use tracing::{debug, warn};

use crate::action::{
    HotkeyRecord, HttpMethod, HttpRequest, ObsSource, TwitchTitle, WebSocketMessage, back, hotkey,
    obs_source, open, program_scene, twitch_title, web_request_http, web_request_websocket,
};
use crate::config::{EventConfig, GameConfig, LoadedConfig};
use crate::error::{GenError, Result};
use crate::grid::{Cell, Grid, cell, paginate, transpose};
use crate::profile::{Profile, folder};

/// Recording control endpoint.
pub const RECORDING_URL: &str = "http://localhost:58587";
/// Clip and screenshot endpoint.
pub const MEDIA_URL: &str = "http://localhost:58590";
/// Scoreboard endpoint.
pub const SCORE_URL: &str = "http://localhost:58586";
/// Overlay server receiving toggle messages.
pub const OVERLAY_WEBSOCKET_URL: &str = "ws://localhost:58585";

/// Overlay namespace toggled by the commentator key when no source is set.
pub const COMMENTATORS_OVERLAY_ID: &str = "commentators";

/// Column of the trailing key in the first prep row.
const PREP_TRAILING_COL: usize = 4;

/// Key grid dimensions of a device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DeckLayout {
    pub model: &'static str,
    pub width: usize,
    pub height: usize,
}

impl DeckLayout {
    /// Stream Deck MK.2 (15 keys, 5x3)
    pub const MK2: Self = Self {
        model: "Stream Deck MK.2",
        width: 5,
        height: 3,
    };

    /// Stream Deck XL (32 keys, 8x4)
    pub const XL: Self = Self {
        model: "Stream Deck XL",
        width: 8,
        height: 4,
    };

    /// Columns left over after `used` keys in a row. Negative on narrow decks.
    #[allow(clippy::cast_possible_wrap)]
    pub const fn spare_cols(self, used: usize) -> isize {
        self.width as isize - used as isize
    }

    /// Rows left over after `used` rows. Negative on short decks.
    #[allow(clippy::cast_possible_wrap)]
    pub const fn spare_rows(self, used: usize) -> isize {
        self.height as isize - used as isize
    }

    /// Number of games the main profile can link: two rows of folder keys.
    pub const fn game_capacity(self) -> usize {
        self.width * 2
    }
}

fn detocs_post(title: &str, url: &str) -> Cell {
    cell(web_request_http(HttpRequest {
        title,
        url,
        method: HttpMethod::Post,
        body: None,
    }))
}

pub fn start_recording() -> Cell {
    detocs_post("Start\nRecording", &format!("{RECORDING_URL}/start"))
}

pub fn stop_recording() -> Cell {
    detocs_post("Stop\nRecording", &format!("{RECORDING_URL}/stop"))
}

pub fn start_group() -> Cell {
    detocs_post("Start\nGroup", &format!("{RECORDING_URL}/startGroup"))
}

pub fn end_group() -> Cell {
    detocs_post("End\nGroup", &format!("{RECORDING_URL}/endGroup"))
}

pub fn clip_15s() -> Cell {
    detocs_post("Clip", &format!("{MEDIA_URL}/clip?seconds=15"))
}

pub fn screenshot() -> Cell {
    detocs_post("Screenshot", &format!("{MEDIA_URL}/screenshot"))
}

pub fn increment_p1() -> Cell {
    detocs_post("P1++", &format!("{SCORE_URL}/incrementScore?player=1"))
}

pub fn increment_p2() -> Cell {
    detocs_post("P2++", &format!("{SCORE_URL}/incrementScore?player=2"))
}

/// Option+] advances the promotion rotation in the overlay.
pub fn next_promo_hotkey() -> Cell {
    cell(hotkey(
        "Next\nPromotion",
        HotkeyRecord {
            key_cmd: false,
            key_ctrl: false,
            key_modifiers: 4,
            key_option: true,
            key_shift: false,
            native_code: 221,
            qt_key_code: 93,
            v_key_code: 221,
        },
    ))
}

/// How an overlay is toggled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayChoice<'a> {
    /// Message the overlay server with this namespace.
    WebSocket(&'a str),
    /// Toggle this OBS source.
    Source(&'a str),
    /// Nothing to toggle; the key stays empty.
    None,
}

impl<'a> OverlayChoice<'a> {
    /// An overlay id wins over a source. Empty strings count as given.
    pub const fn decide(id: Option<&'a str>, source: Option<&'a str>) -> Self {
        match (id, source) {
            (Some(id), _) => Self::WebSocket(id),
            (None, Some(source)) => Self::Source(source),
            (None, None) => Self::None,
        }
    }
}

pub struct OverlayToggle<'a> {
    pub title: &'a str,
    pub collection: &'a str,
    pub scene: &'a str,
    pub source: Option<&'a str>,
    pub id: Option<&'a str>,
}

#[derive(Serialize)]
struct OverlayMessage<'a> {
    namespace: &'a str,
    #[serde(rename = "type")]
    kind: &'static str,
}

/// Key toggling an overlay, by WebSocket message or by OBS source visibility.
pub fn overlay_toggle(p: OverlayToggle<'_>) -> Result<Cell> {
    let choice = OverlayChoice::decide(p.id, p.source);
    debug!(title = p.title, ?choice, "Overlay toggle");

    Ok(match choice {
        OverlayChoice::WebSocket(namespace) => {
            let body = serde_json::to_string_pretty(&OverlayMessage {
                namespace,
                kind: "toggle",
            })
            .map_err(|e| GenError::Other(format!("Failed to encode overlay message: {e}")))?;
            cell(web_request_websocket(WebSocketMessage {
                title: p.title,
                url: OVERLAY_WEBSOCKET_URL,
                body: &body,
            }))
        }
        OverlayChoice::Source(source) => cell(obs_source(ObsSource {
            title: p.title,
            collection: p.collection,
            scene: p.scene,
            source,
            item_id: None,
        })),
        OverlayChoice::None => None,
    })
}

pub struct PrepPage<'a> {
    pub games: &'a [GameConfig],
    pub break_scene: &'a str,
    pub account_id: &'a str,
    pub event_name: &'a str,
    /// Key placed at the end of the first row
    pub trailing: Cell,
}

/// Pre-game grid: one column per game holding its break scene and its Twitch
/// title update, with back navigation and `trailing` in the first row.
pub fn prep_grid(p: PrepPage<'_>) -> Result<Grid> {
    let columns = p
        .games
        .iter()
        .map(|game| {
            let pre_game = program_scene(
                &format!("Pre-{}", game.name),
                game.break_scene_or(p.break_scene),
            );
            let stream_title = game.stream_title(p.event_name);
            let title_update = twitch_title(TwitchTitle {
                title: &game.name,
                account_id: p.account_id,
                stream_title: &stream_title,
                stream_game: &game.twitch_id,
                stream_game_id: game.twitch_game_id.as_deref(),
            })?;
            Ok(vec![None, cell(pre_game), cell(title_update)])
        })
        .collect::<Result<Vec<Vec<Cell>>>>()?;

    let mut grid = Grid::from_rows(transpose(&columns));
    grid.ensure_row(1)
        .set_cell(0, 0, cell(back()))
        .set_cell(PREP_TRAILING_COL, 0, p.trailing);
    Ok(grid)
}

/// Both prep folders, one per page of games.
pub fn prep_profiles(
    config: &EventConfig,
    layout: DeckLayout,
    trailing: impl Fn() -> Cell,
) -> Result<[Profile; 2]> {
    let page = |index| {
        prep_grid(PrepPage {
            games: paginate(&config.games, layout.width, index),
            break_scene: &config.break_scene,
            account_id: &config.twitch_account_id,
            event_name: &config.event_name,
            trailing: trailing(),
        })
        .map(|grid| Profile::new("Prep", &grid))
    };
    Ok([page(0)?, page(1)?])
}

/// Folder keys for a page of profiles.
pub fn folder_row(profiles: &[Profile]) -> Vec<Cell> {
    profiles.iter().map(|p| cell(folder(p))).collect()
}

/// Warns when some games will not get a folder key on the main profile.
pub fn check_game_capacity(config: &EventConfig, layout: DeckLayout) {
    let capacity = layout.game_capacity();
    if config.games.len() > capacity {
        warn!(
            games = config.games.len(),
            capacity,
            model = layout.model,
            "Games past the second page get a profile but no folder key"
        );
    }
}

/// Keys every game profile of an event shares.
pub struct EventKeys {
    pub idle: Cell,
    pub brb: Cell,
    pub goodbye: Cell,
    pub players: Cell,
    pub venue: Cell,
    pub commentary: Cell,
    pub info: Cell,
    pub promo: Cell,
    pub shill: Cell,
    pub replay: Cell,
    pub crossfade: Cell,
    pub toggle_commentators: Cell,
}

impl EventKeys {
    pub fn new(loaded: &LoadedConfig) -> Result<Self> {
        let config = &loaded.config;

        let crossfade = match config.crossfade_script.as_deref() {
            Some(script) => {
                let path = loaded.resolve(script)?;
                cell(open("Crossfade", &path.to_string_lossy()))
            }
            None => None,
        };

        // A configured source replaces the default overlay namespace
        let commentary_source = config.commentary_source.as_deref();
        let toggle_commentators = overlay_toggle(OverlayToggle {
            title: "Toggle\nCommentator\nNames",
            collection: &config.obs_collection,
            scene: &config.commentary_scene,
            source: commentary_source,
            id: commentary_source.is_none().then_some(COMMENTATORS_OVERLAY_ID),
        })?;

        Ok(Self {
            idle: cell(program_scene("Idle", &config.idle_scene)),
            brb: cell(program_scene("BRB", &config.break_scene)),
            goodbye: cell(program_scene("Goodbye", &config.end_scene)),
            players: cell(program_scene("Players", "players")),
            venue: cell(program_scene("Venue", "venue")),
            commentary: cell(program_scene("Commentary", &config.commentary_scene)),
            info: cell(program_scene("Info", "info")),
            promo: cell(program_scene("Promo", "promo")),
            shill: cell(program_scene("Shill", "shill")),
            replay: cell(program_scene("Replay", "replay")),
            crossfade,
            toggle_commentators,
        })
    }
}

/// Keys specific to one game.
pub struct GameKeys {
    pub scoreboard: Cell,
    pub toggle_scoreboard: Cell,
    pub idle: Cell,
}

impl GameKeys {
    pub fn new(game: &GameConfig, config: &EventConfig, event: &EventKeys) -> Result<Self> {
        let toggle_scoreboard = overlay_toggle(OverlayToggle {
            title: "Toggle\nScoreboard",
            collection: &config.obs_collection,
            scene: &game.scoreboard_scene,
            source: game.scoreboard_source.as_deref(),
            id: game.scoreboard_id.as_deref(),
        })?;
        let idle = game
            .idle_scene
            .as_deref()
            .map_or_else(|| event.idle.clone(), |scene| cell(program_scene("Idle", scene)));

        Ok(Self {
            scoreboard: cell(program_scene(&game.name, &game.scoreboard_scene)),
            toggle_scoreboard,
            idle,
        })
    }
}
