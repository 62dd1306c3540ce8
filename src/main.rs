//! Terminal 2048 runner (default binary).
//!
//! Restores the saved board (or starts fresh), then loops: draw, wait for a key,
//! apply the mapped action, persist. Rendering uses crossterm and the
//! framebuffer renderer from the `term` crate.

use std::fs::File;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use log::info;
use rand::{rngs::StdRng, SeedableRng};

use tui_2048::config::AppConfig;
use tui_2048::core::{load_or_fresh, ActionOutcome, BoardState, BoardStore, Game};
use tui_2048::file_store::JsonFileStore;
use tui_2048::input::{handle_key_event, should_quit};
use tui_2048::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};

const POLL_MS: u64 = 250;

fn main() -> Result<()> {
    let config = AppConfig::from_env();
    init_logging(&config)?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn init_logging(config: &AppConfig) -> Result<()> {
    // The game owns the screen; log lines only go to a file.
    let Some(path) = &config.log_path else {
        return Ok(());
    };
    let file = File::create(path)?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

fn run(term: &mut TerminalRenderer, config: &AppConfig) -> Result<()> {
    let mut store = config.save_path.clone().map(JsonFileStore::new);

    let fresh = || BoardState::new(config.size, config.win_tile).unwrap_or_default();
    let board = match &store {
        Some(store) => load_or_fresh(store, fresh).0,
        None => fresh(),
    };

    let seed = config.seed.unwrap_or_else(rand::random);
    info!("seed {}", seed);

    let mut game = Game::new(board, StdRng::seed_from_u64(seed));
    game.start();
    persist(&mut store, game.board());

    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&game.snapshot(), Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        if !event::poll(Duration::from_millis(POLL_MS))? {
            continue;
        }

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if should_quit(key) {
                    return Ok(());
                }
                let Some(action) = handle_key_event(key) else {
                    continue;
                };
                match game.apply_action(action) {
                    ActionOutcome::Unchanged | ActionOutcome::Rejected => {}
                    _ => persist(&mut store, game.board()),
                }
            }
            Event::Resize(_, _) => term.invalidate(),
            _ => {}
        }
    }
}

/// Save failures are logged by the store and never end the game.
fn persist(store: &mut Option<JsonFileStore>, board: &BoardState) {
    if let Some(store) = store {
        let _ = store.save(board);
    }
}
