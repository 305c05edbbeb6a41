use color_eyre::Result;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::Stdout;
use std::time::Duration;

use crate::app::{handle_input, App};
use crate::ui;

// Short enough for the spinner to look alive
const EVENT_POLL_TIMEOUT: Duration = Duration::from_millis(50);

/// Run the main application event loop
pub async fn run(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    tracing::info!("dashboard event loop started");

    while app.running {
        app.update();

        let applied = app.drain_outcomes();
        if applied > 0 {
            tracing::debug!(applied, "applied background outcomes");
        }

        if let Err(e) = terminal.draw(|f| ui::ui(app, f)) {
            return Err(color_eyre::eyre::eyre!("Terminal draw error: {e}"));
        }

        if !matches!(event::poll(EVENT_POLL_TIMEOUT), Ok(true)) {
            // Let spawned requests make progress between frames
            tokio::task::yield_now().await;
            continue;
        }

        match event::read() {
            Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => handle_input(app, key),
            Ok(Event::Resize(width, height)) => {
                tracing::debug!(width, height, "terminal resized");
            }
            Ok(_) => {}
            Err(e) => tracing::warn!(error = %e, "failed to read terminal event"),
        }
    }

    tracing::info!("dashboard event loop finished");
    Ok(())
}
