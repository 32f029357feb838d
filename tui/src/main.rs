//! Terminal Minesweeper.
//!
//! Pick a board size in the menu, then uncover every cell that is not a mine.

use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};

use app::{App, Control};
use seed::SeedSource;
use term::{FrameBuffer, TerminalRenderer, Viewport};

mod app;
mod input;
mod menu;
mod seed;
mod session;
mod term;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Seed for the first board; every later board takes the next seed
    #[arg(short, long)]
    seed: Option<u64>,

    /// Write logs to this file, the terminal itself is taken by the game
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args)?;
    log::debug!("seed: {:?}", args.seed);

    let mut term = TerminalRenderer::new();
    term.enter().context("Could not set up the terminal")?;

    let result = run(&mut term, App::new(SeedSource::new(args.seed)));

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn init_logging(args: &Args) -> Result<()> {
    let Some(path) = &args.log_file else {
        return Ok(());
    };

    let file = File::create(path)
        .with_context(|| format!("Could not create log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_max_level(args.verbose.tracing_level_filter())
        .try_init()
        .map_err(|err| anyhow::anyhow!("Error initializing logger: {err}"))
}

fn run(term: &mut TerminalRenderer, mut app: App) -> Result<()> {
    let mut fb = FrameBuffer::new(0, 0);

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        app.render_into(Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if app.handle_key(key) == Control::Exit {
                    log::debug!("Exit requested");
                    return Ok(());
                }
            }
            Event::Resize(..) => term.invalidate(),
            _ => {}
        }
    }
}
