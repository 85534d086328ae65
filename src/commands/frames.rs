use std::path::Path;

use anyhow::bail;
use clap::{arg, App};

use crate::commands::Command;
use crate::sequencer;
use crate::settings::SettingsParser;


/// Same pipeline as `animate`, minus the video hand-off. Useful when the
/// frames themselves are the deliverable or ffmpeg isn't installed.
pub struct Frames {
    settings: Box<dyn SettingsParser>,
}

impl Frames {
    pub fn new(settings: Box<dyn SettingsParser>) -> Self {
        Frames { settings }
    }
}

impl Command for Frames {
    fn name(&self) -> &'static str {
        "frames"
    }

    fn register(&self) -> App<'static> {
        App::new(self.name())
            .about("Render depth frames for a simulation run without assembling a video.")
            .arg(arg!(<PREFIX> "Path to the simulation run directory"))
    }

    fn run(&self, args: &clap::ArgMatches) -> anyhow::Result<()> {
        let prefix = Path::new(args.value_of("PREFIX").unwrap());

        if !prefix.is_dir() {
            bail!("Run directory {} does not exist", prefix.display());
        }

        let settings = self.settings.parse(&prefix.join("render.json"))?;

        sequencer::run(prefix, &settings, false)
    }
}
