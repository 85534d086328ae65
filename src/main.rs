use clap::{app_from_crate, AppSettings};

use crate::commands::{Animate, Command, Frames};
use crate::settings::SerdeSettingsParser;

mod commands;
mod raster;
mod render;
mod sequencer;
mod settings;
mod utils;
mod video;

fn main() {
    let args: Vec<_> = std::env::args().collect();

    if let Err(e) = execute(&args) {
        println!("❌ Error: {}", e);
        std::process::exit(1);
    }
}

fn execute(input: &[String]) -> anyhow::Result<()> {
    let commands: Vec<Box<dyn Command>> = vec![
        Box::new(Animate::new(Box::new(SerdeSettingsParser {}))),
        Box::new(Frames::new(Box::new(SerdeSettingsParser {}))),
        // Add commands here
    ];

    let mut app = app_from_crate!()
        .global_setting(AppSettings::PropagateVersion)
        .global_setting(AppSettings::UseLongFormatForHelpSubcommand)
        .setting(AppSettings::SubcommandRequiredElseHelp);

    app = commands.iter().fold(app, |a, c| a.subcommand(c.register()));

    let matches = app.get_matches_from(input);

    match matches.subcommand() {
        Some((name, sub_matches)) => match commands.iter().find(|c| c.name() == name) {
            Some(command) => command.run(sub_matches),
            _ => unreachable!(),
        },
        _ => unreachable!(),
    }
}
