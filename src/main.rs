//! Terminal runner (default binary).
//!
//! Wires crossterm key events to engine commands, drives gravity from a fixed
//! clock and redraws whenever the controller reports a change.

mod logger;

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};

use blockfall::core::{Controller, GameConfig, Gravity};
use blockfall::input::{handle_key_event, should_quit};
use blockfall::term::{BoardView, TerminalRenderer};

fn main() -> Result<()> {
    logger::init_from_env()?;
    let config = GameConfig::from_env().context("reading BLOCKFALL_* configuration")?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, config);

    // Always try to restore terminal state.
    let _ = term.exit();

    if let Ok(score) = &result {
        println!("Cleared {score} line(s).");
    }
    result.map(|_| ())
}

fn run(term: &mut TerminalRenderer, config: GameConfig) -> Result<u32> {
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1);
    let source = config.shape_source(seed)?;
    let view = BoardView::new(config.width, config.height);
    let mut gravity = Gravity::new(config.tick_ms);

    let mut game = Controller::new(config, source, view)?;
    game.start();
    log::info!("game started");

    let mut last = Instant::now();

    loop {
        if game.listener_mut().take_dirty() {
            term.draw(&game.listener().render_lines(game.score()))?;
        }

        if game.is_game_over() {
            gravity.disarm();
            // Wait for any key before leaving the final frame.
            loop {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        return Ok(game.score());
                    }
                }
            }
        }

        // Input with timeout until the next gravity tick.
        let timeout = Duration::from_millis(gravity.remaining_ms().unwrap_or(0) as u64);
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if should_quit(key) {
                        return Ok(game.score());
                    }
                    if let Some(command) = handle_key_event(key) {
                        game.apply(command);
                    }
                }
            }
        }

        let elapsed = last.elapsed();
        last = Instant::now();
        for _ in 0..gravity.advance_by(elapsed) {
            if !game.tick() {
                gravity.disarm();
                break;
            }
        }
    }
}
