pub mod screens;
pub mod widgets;

use crate::app::{App, AppScreen};
use ratatui::Frame;

pub fn ui(app: &App, f: &mut Frame<'_>) {
    match app.screen {
        AppScreen::Risk => screens::risk::render_risk(app, f),
        AppScreen::Workbench => screens::workbench::render_workbench(app, f),
        AppScreen::Map => screens::map::render_map(app, f),
    }

    if app.show_help {
        screens::help::render_help_popup(app, f);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::tests::{sample_report, test_app};
    use crate::app::Outcome;
    use crate::lifecycle::Refusal;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn draw(app: &App) -> Result<String, Box<dyn std::error::Error>> {
        let mut terminal = Terminal::new(TestBackend::new(140, 44))?;
        terminal.draw(|f| ui(app, f))?;
        Ok(terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect())
    }

    #[tokio::test]
    async fn test_idle_risk_screen() -> Result<(), Box<dyn std::error::Error>> {
        let app = test_app();
        let screen = draw(&app)?;

        assert!(screen.contains("RUN ANALYSIS"));
        assert!(screen.contains("Checking backend"));
        Ok(())
    }

    #[tokio::test]
    async fn test_report_renders_cards() -> Result<(), Box<dyn std::error::Error>> {
        let mut app = test_app();
        let ticket = app.analysis.begin().map_err(|e: Refusal| e.to_string())?;
        app.apply_outcome(Outcome::Analysis(ticket, Ok(sample_report())));

        let screen = draw(&app)?;

        assert!(screen.contains("82/100"));
        assert!(screen.contains("Location Data Unavailable"));
        assert!(screen.contains("Hsinchu Science Park, Taiwan"));
        assert!(screen.contains("View Satellite Data"));
        Ok(())
    }

    #[tokio::test]
    async fn test_failed_analysis_shows_static_message() -> Result<(), Box<dyn std::error::Error>>
    {
        let mut app = test_app();
        let ticket = app.analysis.begin().map_err(|e: Refusal| e.to_string())?;
        app.apply_outcome(Outcome::Analysis(
            ticket,
            Err(crate::error::FetchError::Semantic {
                message: "upstream detail".to_string(),
            }),
        ));

        let screen = draw(&app)?;

        assert!(screen.contains("System could not analyze supply chain."));
        assert!(!screen.contains("upstream detail"));
        Ok(())
    }

    #[tokio::test]
    async fn test_map_screen_lists_markers() -> Result<(), Box<dyn std::error::Error>> {
        let mut app = test_app();
        let ticket = app.analysis.begin().map_err(|e: Refusal| e.to_string())?;
        app.apply_outcome(Outcome::Analysis(ticket, Ok(sample_report())));
        app.open_map();

        let screen = draw(&app)?;

        assert!(screen.contains("Markers (1)"));
        assert!(screen.contains("Legend"));
        Ok(())
    }

    #[tokio::test]
    async fn test_help_popup_overlays_screen() -> Result<(), Box<dyn std::error::Error>> {
        let mut app = test_app();
        app.show_help = true;

        let screen = draw(&app)?;

        assert!(screen.contains("Help & Keyboard Shortcuts"));
        Ok(())
    }
}
