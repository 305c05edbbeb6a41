use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use crossterm::{
    cursor, execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{stdout, Stdout, Write};

pub type DashboardTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Raw mode plus alternate screen. Anything entered is undone when a later step fails.
pub fn setup_terminal() -> Result<DashboardTerminal> {
    enable_raw_mode().wrap_err("Failed to enable raw mode")?;

    let terminal = enter_dashboard_screen().inspect_err(|_| cleanup_terminal_state(true, true))?;

    tracing::info!(size = ?terminal.size().ok(), "terminal ready");
    Ok(terminal)
}

fn enter_dashboard_screen() -> Result<DashboardTerminal> {
    execute!(stdout(), EnterAlternateScreen).wrap_err("Failed to enter alternate screen")?;
    let mut terminal =
        Terminal::new(CrosstermBackend::new(stdout())).wrap_err("Failed to create terminal")?;

    // A dirty first frame or a visible cursor is cosmetic
    if let Err(e) = terminal.clear() {
        tracing::warn!(error = %e, "failed to clear terminal");
    }
    if let Err(e) = terminal.hide_cursor() {
        tracing::warn!(error = %e, "failed to hide cursor");
    }

    Ok(terminal)
}

/// Restore the terminal, logging anything that could not be undone
pub fn cleanup_terminal_state(raw_mode: bool, alternate_screen: bool) {
    let mut out = stdout();

    let steps = [
        ("show cursor", execute!(out, cursor::Show)),
        (
            "leave alternate screen",
            if alternate_screen {
                execute!(out, LeaveAlternateScreen)
            } else {
                Ok(())
            },
        ),
        (
            "disable raw mode",
            if raw_mode { disable_raw_mode() } else { Ok(()) },
        ),
    ];
    for (step, outcome) in steps {
        if let Err(e) = outcome {
            tracing::warn!(error = %e, step, "terminal cleanup step failed");
        }
    }

    let _ = execute!(out, cursor::MoveToNextLine(1));
    let _ = out.flush();
}
