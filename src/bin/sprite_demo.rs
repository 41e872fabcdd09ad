//! Sprite movement demo.
//!
//! A single square sprite that moves with the arrow keys (or WASD) and stops at
//! the edges of its field.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event};

use blockfall::core::SpriteField;
use blockfall::init_file_logger;
use blockfall::input::{accepts_key, direction_for_key, should_quit};
use blockfall::term::{FrameBuffer, SpriteView, TerminalRenderer, Viewport};
use blockfall::types::FRAME_MS;

/// Largest field edge accepted on the command line.
const MAX_FIELD: i64 = 1000;

/// Move a square sprite around a terminal field.
#[derive(Debug, Parser)]
#[command(name = "sprite-demo", version)]
struct Args {
    /// Field width in sprite cells.
    #[arg(long, default_value_t = 40, value_name = "COLS", value_parser = clap::value_parser!(u16).range(1..=MAX_FIELD))]
    cols: u16,

    /// Field height in sprite cells.
    #[arg(long, default_value_t = 20, value_name = "ROWS", value_parser = clap::value_parser!(u16).range(1..=MAX_FIELD))]
    rows: u16,

    /// Sprite edge length in cells.
    #[arg(long, default_value_t = 4, value_name = "N", value_parser = clap::value_parser!(u16).range(1..=MAX_FIELD))]
    size: u16,

    /// Cells moved per key press.
    #[arg(long, default_value_t = 1, value_name = "N")]
    speed: u16,

    /// Input poll timeout in milliseconds.
    #[arg(long, default_value_t = FRAME_MS, value_name = "MS")]
    frame_ms: u32,

    /// Append log output to this file.
    #[arg(long, env = "BLOCKFALL_LOG", value_name = "FILE")]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    if let Some(path) = &args.log_file {
        init_file_logger(path)?;
    }

    let field = SpriteField::new(args.cols, args.rows, args.size, args.speed);
    log::info!(
        "sprite demo: {}x{} field, sprite {} at {:?}",
        field.cols(),
        field.rows(),
        field.size(),
        field.position()
    );

    let needed = SpriteView::required_size(&field);
    if let Ok((w, h)) = crossterm::terminal::size() {
        if w < needed.width || h < needed.height {
            log::warn!(
                "terminal is {w}x{h}, the field needs {}x{} and will be clipped",
                needed.width,
                needed.height
            );
        }
    }

    let mut term = TerminalRenderer::new();
    term.enter().context("failed to set up the terminal")?;

    let result = run(&mut term, field, args.frame_ms.max(1));

    if let Err(err) = term.exit() {
        log::error!("failed to restore terminal: {err}");
    }
    result
}

fn run(term: &mut TerminalRenderer, mut field: SpriteField, frame_ms: u32) -> Result<()> {
    let view = SpriteView;
    let mut fb = FrameBuffer::new(0, 0);
    let frame = Duration::from_millis(frame_ms as u64);

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&field, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb).context("failed to draw frame")?;

        if !event::poll(frame)? {
            continue;
        }
        loop {
            match event::read()? {
                Event::Key(key) if accepts_key(key) => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(direction) = direction_for_key(key) {
                        if field.step(direction) {
                            log::trace!("sprite moved {:?} to {:?}", direction, field.position());
                        }
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
            if !event::poll(Duration::ZERO)? {
                break;
            }
        }
    }
}
