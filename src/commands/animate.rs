use std::path::Path;

use anyhow::bail;
use clap::{arg, App};

use crate::commands::Command;
use crate::sequencer;
use crate::settings::SettingsParser;


pub struct Animate {
    settings: Box<dyn SettingsParser>,
}

impl Animate {
    pub fn new(settings: Box<dyn SettingsParser>) -> Self {
        Animate { settings }
    }
}

impl Command for Animate {
    fn name(&self) -> &'static str {
        "animate"
    }

    fn register(&self) -> App<'static> {
        App::new(self.name())
            .about("Render depth frames for a simulation run and assemble them into an MP4.")
            .arg(arg!(<PREFIX> "Path to the simulation run directory"))
    }

    fn run(&self, args: &clap::ArgMatches) -> anyhow::Result<()> {
        let prefix = Path::new(args.value_of("PREFIX").unwrap());

        if !prefix.is_dir() {
            bail!("Run directory {} does not exist", prefix.display());
        }

        let settings = self.settings.parse(&prefix.join("render.json"))?;

        sequencer::run(prefix, &settings, true)
    }
}
