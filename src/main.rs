mod app;
mod config;
mod logging;
mod ui;
mod view;

use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::handler;
use crate::app::state::AppState;
use crate::logging::ConsoleLogger;
use crate::view::timer::{PeriodicTimer, HEARTBEAT_PERIOD};
use anyhow::{Context, Result};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, EventStream},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::prelude::*;
use std::io;
use std::time::Duration;
use tokio::sync::mpsc;

#[tokio::main]
async fn main() -> Result<()> {
    // Install panic hook to restore terminal
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        original_hook(info);
    }));

    let cfg = config::load_config()?;
    logging::init_tracing(&cfg.logging)?;
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "starting");

    // Setup terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, cfg).await;

    restore_terminal()?;

    if let Err(e) = result {
        tracing::error!(error = %e, "exiting with error");
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    tracing::info!("exited cleanly");
    Ok(())
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture)?;
    Ok(())
}

fn mount_root(state: &mut AppState, event_tx: &mpsc::UnboundedSender<AppEvent>) {
    let generation = state.allocate_generation();
    let timer = PeriodicTimer::start(generation, HEARTBEAT_PERIOD, event_tx.clone());
    state.mount_root(timer);
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    cfg: config::AppConfig,
) -> Result<()> {
    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<AppEvent>();

    let size = terminal.size()?;
    let mut state = AppState::new(&cfg, Rect::new(0, 0, size.width, size.height));
    let mut console_logger = ConsoleLogger::new(&cfg.logging);

    // Spawn terminal input task
    let term_tx = event_tx.clone();
    tokio::spawn(async move {
        let mut reader = EventStream::new();
        loop {
            match reader.next().await {
                Some(Ok(event)) => {
                    if term_tx.send(AppEvent::Terminal(event)).is_err() {
                        break;
                    }
                }
                Some(Err(e)) => {
                    tracing::warn!(error = %e, "terminal input stream failed");
                    break;
                }
                None => break,
            }
        }
    });

    // Spawn render tick task
    let tick_tx = event_tx.clone();
    let tick_rate = Duration::from_millis(cfg.ui.tick_rate_ms);
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(tick_rate);
        loop {
            interval.tick().await;
            if tick_tx.send(AppEvent::Tick).is_err() {
                break;
            }
        }
    });

    mount_root(&mut state, &event_tx);

    // Initial render
    terminal.draw(|f| ui::render(f, &state))?;

    // Main event loop
    loop {
        let event = event_rx.recv().await;
        let Some(event) = event else { break };

        let actions = handler::handle_event(&mut state, event);

        for action in actions {
            match action {
                Action::ToggleRoot => {
                    if !state.unmount_root() {
                        mount_root(&mut state, &event_tx);
                    }
                }
                Action::Quit => {
                    state.unmount_root();
                    state.should_quit = true;
                }
            }
        }

        for line in state.console.drain_new() {
            console_logger.log_line(&line);
        }

        if state.should_quit {
            break;
        }

        // Conditional render (only if dirty)
        if state.dirty {
            terminal.draw(|f| ui::render(f, &state))?;
            state.dirty = false;
        }
    }

    Ok(())
}
