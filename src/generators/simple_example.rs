//! Minimal layout that needs no config: one folder and a few link keys.

use tracing::instrument;

use super::{Generator, GeneratorInput};
use crate::action::{back, obs_studio_mode, website};
use crate::error::Result;
use crate::grid::{Grid, cell, repeat_row};
use crate::profile::{Profile, ProfileSet, folder};

pub const REPO_URL: &str = "https://github.com/data-enabler/streamdeck-profile-generator";

#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleExample;

impl Generator for SimpleExample {
    fn name(&self) -> &'static str {
        "simple-example"
    }

    fn description(&self) -> &'static str {
        "Example profile with a folder and website keys; no config needed"
    }

    fn requires_config(&self) -> bool {
        false
    }

    #[instrument(skip_all, fields(generator = "simple-example"))]
    fn generate(&self, _input: &GeneratorInput) -> Result<ProfileSet> {
        let open_repo = cell(website("Open Repo", REPO_URL));
        let studio_mode = cell(obs_studio_mode(Some("Studio\nMode")));

        let folder1 = Profile::new(
            "Folder 1",
            &Grid::from_rows(vec![vec![cell(back()), open_repo.clone()]]),
        );

        let main = Profile::new(
            "Example",
            &Grid::from_rows(vec![
                vec![cell(folder(&folder1)), None, studio_mode],
                repeat_row(3, &open_repo),
            ]),
        );

        Ok(ProfileSet::new(main, vec![folder1]))
    }
}
