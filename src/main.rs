//! Terminal falling-block game (default binary).
//!
//! Uses crossterm for input and the framebuffer/diff renderer from
//! `blockfall-term`. One loop: render, wait for input until the next frame is
//! due, apply actions, advance gravity by the measured frame time.

use std::path::PathBuf;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event};

use blockfall::core::GameState;
use blockfall::init_file_logger;
use blockfall::input::{accepts_key, handle_key_event, mouse_press, should_quit};
use blockfall::term::{ButtonPad, FrameBuffer, GameView, TerminalRenderer, Viewport};
use blockfall::types::FRAME_MS;

/// Falling-block puzzle in the terminal.
#[derive(Debug, Parser)]
#[command(
    name = "blockfall",
    version,
    about = "Falling-block puzzle in the terminal.",
    long_about = "Falling-block puzzle in the terminal.\n\n\
        CONTROLS:\n  Left/Right, h/l, a/d   Move\n  Up, k, w               Rotate\n  \
        Down, j, s             Soft drop\n  Space/Enter            Hard drop\n  \
        P                      Pause\n  R                      Restart after game over\n  \
        Q / Esc / Ctrl-C       Quit\n\n\
        The on-screen buttons next to the board can be clicked as well."
)]
struct Args {
    /// Seed for the piece sequence. Derived from the clock when omitted.
    #[arg(long, env = "BLOCKFALL_SEED", value_name = "N")]
    seed: Option<u32>,

    /// Target frame time in milliseconds.
    #[arg(long, default_value_t = FRAME_MS, value_name = "MS")]
    frame_ms: u32,

    /// Append log output to this file (the terminal itself is the game screen).
    #[arg(long, env = "BLOCKFALL_LOG", value_name = "FILE")]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    if let Some(path) = &args.log_file {
        init_file_logger(path)?;
    }

    let seed = args.seed.unwrap_or_else(clock_seed);
    log::info!("starting game with seed {seed}");

    let mut term = TerminalRenderer::new().with_mouse_capture();
    term.enter().context("failed to set up the terminal")?;

    let result = run(&mut term, seed, args.frame_ms.max(1));

    // Always try to restore terminal state.
    if let Err(err) = term.exit() {
        log::error!("failed to restore terminal: {err}");
    }
    result
}

fn run(term: &mut TerminalRenderer, seed: u32, frame_ms: u32) -> Result<()> {
    let mut game = GameState::new(seed);
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = game.snapshot();

    let frame = Duration::from_millis(frame_ms as u64);
    let mut last_frame = Instant::now();

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let viewport = Viewport::new(w, h);
        game.snapshot_into(&mut snap);
        view.render_into(&snap, viewport, &mut fb);
        term.draw_swap(&mut fb).context("failed to draw frame")?;

        let timeout = frame.saturating_sub(last_frame.elapsed());
        if event::poll(timeout)? {
            // Drain everything already queued so a burst of input lands
            // before the next tick and render.
            loop {
                match handle_event(&mut game, view.button_pad(viewport), event::read()?) {
                    EventOutcome::Quit => {
                        log::info!("quit requested; final score {}", game.score());
                        return Ok(());
                    }
                    EventOutcome::Resized => term.invalidate(),
                    EventOutcome::Handled => {}
                }
                if !event::poll(Duration::ZERO)? {
                    break;
                }
            }
        }

        let elapsed = last_frame.elapsed();
        if elapsed >= frame {
            last_frame = Instant::now();
            game.tick(elapsed.as_millis().min(u32::MAX as u128) as u32);
        }

        if let Some(lock) = game.take_last_event() {
            log::debug!(
                "locked {} clearing {} lines for {} points (game over: {})",
                lock.kind.as_str(),
                lock.lines_cleared,
                lock.points,
                lock.game_over
            );
        }
    }
}

/// What the loop has to do after one terminal event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EventOutcome {
    Handled,
    Resized,
    Quit,
}

/// Apply one terminal event to the game.
fn handle_event(game: &mut GameState, pad: ButtonPad, event: Event) -> EventOutcome {
    let action = match event {
        Event::Key(key) if accepts_key(key) => {
            if should_quit(key) {
                return EventOutcome::Quit;
            }
            handle_key_event(key)
        }
        Event::Mouse(mouse) => mouse_press(mouse).and_then(|(col, row)| pad.hit_test(col, row)),
        Event::Resize(w, h) => {
            log::debug!("resized to {w}x{h}");
            return EventOutcome::Resized;
        }
        _ => None,
    };

    if let Some(action) = action {
        if !game.apply_action(action) {
            log::trace!("{} rejected in {}", action.as_str(), game.phase().as_str());
        }
    }
    EventOutcome::Handled
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| (d.as_nanos() & u32::MAX as u128) as u32)
        .unwrap_or(1)
}
