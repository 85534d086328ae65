mod animate;
mod frames;

pub use animate::Animate;
pub use frames::Frames;

pub trait Command {
    fn name(&self) -> &'static str;
    fn register(&self) -> clap::App<'static>;
    fn run(&self, args: &clap::ArgMatches) -> anyhow::Result<()>;
}
