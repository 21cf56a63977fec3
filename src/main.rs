mod app;
mod art;
mod audio;
mod cli;
mod config;
mod document;
mod dodge;
mod effects;
mod flows;
mod geom;
mod input;
mod layout;
mod logging;
mod page;
mod palette;
mod particles;
mod render;
mod scene;
mod timers;
mod typewriter;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let args = cli::Args::parse();
    app::run(args)
}
