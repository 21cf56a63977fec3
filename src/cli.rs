use crate::page::Page;
use clap::Parser;
use std::path::PathBuf;

/// A small question, asked in the terminal.
#[derive(Parser, Debug)]
#[command(name = "sweetheart", version, about)]
pub(crate) struct Args {
    /// Page to open on, by name or file (index.html, verify, gallery.html, final).
    #[arg(long, default_value = "index.html", value_parser = parse_page)]
    pub(crate) page: Page,

    /// Frame rate cap.
    #[arg(long)]
    pub(crate) fps: Option<u32>,

    /// Seed for every random choice; 0 seeds from the OS.
    #[arg(long)]
    pub(crate) seed: Option<u64>,

    /// Draw with the basic terminal palette only.
    #[arg(long)]
    pub(crate) no_color: bool,

    /// Never play the chord.
    #[arg(long)]
    pub(crate) mute: bool,

    /// Write logs here instead of the data directory.
    #[arg(long)]
    pub(crate) log_file: Option<PathBuf>,
}

fn parse_page(s: &str) -> Result<Page, String> {
    Page::resolve(s).ok_or_else(|| format!("unknown page `{s}`"))
}
