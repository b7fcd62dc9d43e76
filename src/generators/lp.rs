//! Event layout for a 5x3 Stream Deck MK.2.
//!
//! Main profile:
//!
//! ```text
//! [Prep 1] [Prep 2] [Stop Rec] [BRB] [Goodbye]
//! [game 6] ... [game 10]
//! [game 1] ... [game 5]
//! ```

use tracing::{info, instrument};

use super::common::{
    DeckLayout, EventKeys, GameKeys, check_game_capacity, clip_15s, folder_row, next_promo_hotkey,
    prep_profiles, screenshot, start_recording, stop_recording,
};
use super::{Generator, GeneratorInput};
use crate::action::{back, obs_studio_mode};
use crate::config::{EventConfig, GameConfig};
use crate::error::Result;
use crate::grid::{Cell, Grid, cell, paginate, repeat_row};
use crate::profile::{Profile, ProfileSet, folder};

const LAYOUT: DeckLayout = DeckLayout::MK2;

#[derive(Debug, Clone, Copy, Default)]
pub struct Lp;

impl Generator for Lp {
    fn name(&self) -> &'static str {
        "lp"
    }

    fn description(&self) -> &'static str {
        "Event layout for a 15-key Stream Deck"
    }

    fn layout(&self) -> Option<DeckLayout> {
        Some(LAYOUT)
    }

    #[instrument(skip_all, fields(generator = "lp"))]
    fn generate(&self, input: &GeneratorInput) -> Result<ProfileSet> {
        let loaded = input.require_config(self.name())?;
        let config = &loaded.config;
        check_game_capacity(config, LAYOUT);

        let keys = EventKeys::new(loaded)?;
        let [prep1, prep2] = prep_profiles(config, LAYOUT, stop_recording)?;

        let game_profiles = config
            .games
            .iter()
            .map(|game| game_profile(game, config, &keys))
            .collect::<Result<Vec<_>>>()?;

        let mut grid = Grid::new();
        grid.push_row(
            [cell(folder(&prep1)), cell(folder(&prep2))]
                .into_iter()
                .chain(repeat_row(LAYOUT.spare_cols(5), &None))
                .chain([stop_recording(), keys.brb.clone(), keys.goodbye.clone()])
                .collect::<Vec<Cell>>(),
        );
        for row in repeat_row(LAYOUT.spare_rows(3), &Vec::new()) {
            grid.push_row(row);
        }
        grid.push_row(folder_row(paginate(&game_profiles, LAYOUT.width, 1)))
            .push_row(folder_row(paginate(&game_profiles, LAYOUT.width, 0)));
        let main = Profile::new(config.name.as_str(), &grid);

        let additional: Vec<Profile> = [prep1, prep2].into_iter().chain(game_profiles).collect();
        info!(games = config.games.len(), profiles = additional.len() + 1, "Generated lp layout");

        Ok(ProfileSet::new(main, additional).with_device_model(config.device_model.clone()))
    }
}

/// Per-game profile. On a three-row deck back navigation replaces the
/// players key.
fn game_profile(game: &GameConfig, config: &EventConfig, keys: &EventKeys) -> Result<Profile> {
    let game_keys = GameKeys::new(game, config, keys)?;

    let mut rows = repeat_row(
        LAYOUT.spare_rows(3),
        &vec![
            None,
            keys.replay.clone(),
            keys.crossfade.clone(),
            cell(obs_studio_mode(None)),
        ],
    );
    rows.push(vec![
        keys.players.clone(),
        keys.commentary.clone(),
        keys.toggle_commentators.clone(),
        keys.promo.clone(),
        next_promo_hotkey(),
    ]);
    rows.push(vec![
        game_keys.toggle_scoreboard,
        keys.venue.clone(),
        stop_recording(),
        keys.shill.clone(),
        screenshot(),
    ]);
    rows.push(vec![
        game_keys.scoreboard,
        game_keys.idle,
        start_recording(),
        keys.info.clone(),
        clip_15s(),
    ]);

    let mut grid = Grid::from_rows(rows);
    grid.set_cell(0, 0, cell(back()));
    Ok(Profile::new(game.name.as_str(), &grid))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::ActionKind;
    use crate::config::LoadedConfig;
    use crate::generators::common::tests::{event, game};

    fn generate(config: EventConfig) -> ProfileSet {
        Lp.generate(&GeneratorInput::with_config(LoadedConfig::in_dir(
            config, "/events",
        )))
        .unwrap()
    }

    #[test]
    fn test_profile_order() {
        let set = generate(event(vec![game("T8"), game("SF6")]));
        let names: Vec<&str> = set.profiles().map(Profile::name).collect();
        assert_eq!(names, vec!["Weekly 42", "Prep", "Prep", "T8", "SF6"]);
        assert!(set.unresolved_links().is_empty());
    }

    #[test]
    fn test_main_profile_layout() {
        let set = generate(event(vec![game("T8"), game("SF6")]));
        let main = &set.main;

        assert_eq!(main.action_at(0, 0).unwrap().title(), Some("Prep"));
        assert_eq!(main.action_at(2, 0).unwrap().title(), Some("Stop\nRecording"));
        assert_eq!(main.action_at(3, 0).unwrap().title(), Some("BRB"));
        assert_eq!(main.action_at(4, 0).unwrap().title(), Some("Goodbye"));

        // Second page is empty with two games, first page sits on the bottom row
        assert!(main.action_at(0, 1).is_none());
        assert_eq!(main.action_at(0, 2).unwrap().title(), Some("T8"));
        assert_eq!(main.action_at(1, 2).unwrap().title(), Some("SF6"));
    }

    #[test]
    fn test_game_profile_layout() {
        let set = generate(event(vec![game("T8")]));
        let t8 = &set.additional[2];

        assert_eq!(t8.action_at(0, 0).unwrap().kind(), Some(ActionKind::BackToParent));
        assert_eq!(t8.action_at(4, 0).unwrap().title(), Some("Next\nPromotion"));
        assert_eq!(t8.action_at(1, 1).unwrap().title(), Some("Venue"));
        assert_eq!(t8.action_at(0, 2).unwrap().title(), Some("T8"));
        assert_eq!(t8.action_at(4, 2).unwrap().title(), Some("Clip"));

        // No scoreboard id or source: the toggle key stays empty
        assert!(t8.action_at(0, 1).is_none());
    }

    #[test]
    fn test_eleventh_game_has_no_folder_key() {
        let games = (1..=11).map(|i| game(&format!("G{i}"))).collect();
        let set = generate(event(games));

        assert_eq!(set.additional.len(), 13);
        assert_eq!(set.main.action_at(4, 1).unwrap().title(), Some("G10"));
        assert!(set.main.action_at(5, 1).is_none());
        let linked: Vec<_> = set.main.folder_targets().collect();
        assert_eq!(linked.len(), 12);
    }

    #[test]
    fn test_device_model_passed_through() {
        let mut config = event(Vec::new());
        config.device_model = Some("20GBA9901".to_string());
        let set = generate(config);
        assert_eq!(set.device_model.as_deref(), Some("20GBA9901"));
    }

    #[test]
    fn test_requires_config() {
        let err = Lp.generate(&GeneratorInput::default()).unwrap_err();
        assert!(err.to_string().contains("--config"));
    }
}
