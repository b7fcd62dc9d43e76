//! Event layout for an 8x4 Stream Deck XL.
//!
//! Adds recording groups and a second players scene to the 15-key layout,
//! and keeps the commentary keys on the main profile.

use tracing::{info, instrument};

use super::common::{
    DeckLayout, EventKeys, GameKeys, check_game_capacity, clip_15s, end_group, folder_row,
    next_promo_hotkey, prep_profiles, screenshot, start_group, start_recording, stop_recording,
};
use super::{Generator, GeneratorInput};
use crate::action::{back, obs_studio_mode, program_scene};
use crate::config::{EventConfig, GameConfig};
use crate::error::Result;
use crate::grid::{Cell, Grid, cell, paginate, repeat_row};
use crate::profile::{Profile, ProfileSet, folder};

const LAYOUT: DeckLayout = DeckLayout::XL;

#[derive(Debug, Clone, Copy, Default)]
pub struct LpXl;

impl Generator for LpXl {
    fn name(&self) -> &'static str {
        "lpxl"
    }

    fn description(&self) -> &'static str {
        "Event layout for a 32-key Stream Deck XL"
    }

    fn layout(&self) -> Option<DeckLayout> {
        Some(LAYOUT)
    }

    #[instrument(skip_all, fields(generator = "lpxl"))]
    fn generate(&self, input: &GeneratorInput) -> Result<ProfileSet> {
        let loaded = input.require_config(self.name())?;
        let config = &loaded.config;
        check_game_capacity(config, LAYOUT);

        let keys = EventKeys::new(loaded)?;
        let [prep1, prep2] = prep_profiles(config, LAYOUT, end_group)?;

        let players2 = cell(program_scene("Players 2", "players 2"));
        let studio_mode = cell(obs_studio_mode(Some("Studio\nMode")));
        let game_profiles = config
            .games
            .iter()
            .map(|game| game_profile(game, config, &keys, &players2, &studio_mode))
            .collect::<Result<Vec<_>>>()?;

        let first_row: Vec<Cell> = [cell(folder(&prep1)), cell(folder(&prep2))]
            .into_iter()
            .chain(repeat_row(LAYOUT.spare_cols(5), &None))
            .chain([end_group(), keys.brb.clone(), keys.goodbye.clone()])
            .collect();
        let second_row: Vec<Cell> = repeat_row(LAYOUT.spare_cols(3), &None)
            .into_iter()
            .chain([
                start_group(),
                keys.commentary.clone(),
                keys.toggle_commentators.clone(),
            ])
            .collect();

        let main = Profile::new(
            config.name.as_str(),
            &Grid::from_rows(vec![
                first_row,
                second_row,
                folder_row(paginate(&game_profiles, LAYOUT.width, 1)),
                folder_row(paginate(&game_profiles, LAYOUT.width, 0)),
            ]),
        );

        let additional: Vec<Profile> = [prep1, prep2].into_iter().chain(game_profiles).collect();
        info!(games = config.games.len(), profiles = additional.len() + 1, "Generated lpxl layout");

        Ok(ProfileSet::new(main, additional).with_device_model(config.device_model.clone()))
    }
}

fn game_profile(
    game: &GameConfig,
    config: &EventConfig,
    keys: &EventKeys,
    players2: &Cell,
    studio_mode: &Cell,
) -> Result<Profile> {
    let game_keys = GameKeys::new(game, config, keys)?;

    let grid = Grid::from_rows(vec![
        vec![
            cell(back()),
            keys.replay.clone(),
            None,
            None,
            start_group(),
            end_group(),
            keys.brb.clone(),
            keys.goodbye.clone(),
        ],
        vec![
            keys.players.clone(),
            players2.clone(),
            keys.commentary.clone(),
            keys.toggle_commentators.clone(),
        ],
        vec![
            game_keys.toggle_scoreboard,
            keys.venue.clone(),
            stop_recording(),
            keys.info.clone(),
            keys.shill.clone(),
            keys.promo.clone(),
            next_promo_hotkey(),
        ],
        vec![
            game_keys.scoreboard,
            game_keys.idle,
            start_recording(),
            keys.crossfade.clone(),
            screenshot(),
            clip_15s(),
            None,
            studio_mode.clone(),
        ],
    ]);
    Ok(Profile::new(game.name.as_str(), &grid))
}
