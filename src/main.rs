//! Swaptui — match-3 swap puzzle simulation in the terminal.

mod app;
mod game;
mod grid;
mod input;
mod logging;
mod state;
mod theme;
mod ui;

use anyhow::{Result, bail};
use app::App;
use clap::{Parser, ValueEnum};
use logging::EventLog;

/// Options derived from CLI that affect the simulation itself.
#[derive(Debug, Clone)]
pub struct GameConfig {
    pub width: usize,
    pub height: usize,
    /// Distinct symbol codes, the empty code included.
    pub nb_symbols: u8,
    pub seed: Option<u64>,
    pub ai: bool,
    pub strategy: ReconcileStrategy,
}

fn main() -> Result<()> {
    let args = Args::parse();
    // With fewer than 3 colours the combo-free generator can run out
    // of legal colours for a cell.
    if !(3..=6).contains(&args.colors) {
        bail!("--colors must be between 3 and 6");
    }
    let config = GameConfig {
        width: args.width,
        height: args.height,
        nb_symbols: args.colors + 1,
        seed: args.seed,
        ai: !args.no_ai,
        strategy: args.reconcile,
    };
    let log = match args.log_file.as_deref() {
        Some(path) => EventLog::to_file(path)?,
        None => EventLog::disabled(),
    };
    let theme = theme::Theme::for_palette(args.palette);
    let game = game::Game::new(&config, log)?;
    let mut app = App::new(game, theme, args.frame_rate, args.no_animation);
    app.run()?;
    Ok(())
}

/// Match-3 swap puzzle simulation in the terminal.
#[derive(Debug, Parser)]
#[command(
    name = "swaptui",
    version,
    about = "Match-3 swap puzzle simulation in the terminal. Swap adjacent blocks to line up three of a colour; matches clear, columns fall, cascades multiply the score.",
    long_about = "Swaptui is a terminal match-3 simulation.\n\n\
        Blocks sit in columns; swapping two horizontally adjacent cells can line up three or \
        more of a colour, which clear after a short delay. Columns then fall row by row, and \
        chains of clears multiply the score. An AI swapper plays on its own unless --no-ai is \
        given; you can move the cursor and swap at any time.\n\n\
        CONTROLS (normal):\n  Arrows      Move cursor   Enter/Space  Swap\n  P           Pause         Q / Esc      Quit\n\n\
        CONTROLS (vim):\n  h/j/k/l     Move cursor   Space        Swap   p  Pause   q  Quit"
)]
pub struct Args {
    /// Grid width in columns.
    #[arg(long, default_value = "15", value_name = "COLS")]
    pub width: usize,

    /// Grid height in rows.
    #[arg(long, default_value = "20", value_name = "ROWS")]
    pub height: usize,

    /// Number of block colours (3-6).
    #[arg(short, long, default_value = "4", value_name = "N")]
    pub colors: u8,

    /// RNG seed for the grid and the AI; random when not set.
    #[arg(short, long, value_name = "SEED")]
    pub seed: Option<u64>,

    /// Disable the AI swapper (manual play only).
    #[arg(long)]
    pub no_ai: bool,

    /// How pending combos are re-validated when their timer ends.
    #[arg(long, default_value = "lazy")]
    pub reconcile: ReconcileStrategy,

    /// Colour palette: normal (One Dark), high-contrast, or colorblind.
    #[arg(long, default_value = "normal")]
    pub palette: Palette,

    /// Append timestamped game events to FILE.
    #[arg(long, value_name = "FILE")]
    pub log_file: Option<std::path::PathBuf>,

    /// Target render frames per second.
    #[arg(long, default_value = "25.0", value_name = "RATE")]
    pub frame_rate: f64,

    /// Disable the combo fade animation.
    #[arg(long)]
    pub no_animation: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ReconcileStrategy {
    /// Keep only combos still on the grid exactly as detected.
    #[default]
    Lazy,
    /// Follow combos that grew or shifted since detection.
    Morph,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Palette {
    #[default]
    Normal,

    #[value(alias = "highcontrast", alias = "contrast")]
    HighContrast,

    #[value(alias = "colourblind")]
    Colorblind,
}
