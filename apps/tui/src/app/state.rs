use crate::app::actions::{AppActions, Outcome};
use crate::config::Settings;
use crate::domain::{CompanyLocation, CrisisReport, LocationRequest, Recipe};
use crate::error::FetchError;
use crate::lifecycle::{FetchSlot, Refusal};
use crate::map::MapOverlay;
use chrono::{DateTime, Local};
use ratatui::style::Color;
use std::sync::Mutex;
use std::time::{Duration, Instant};
use tachyonfx::{fx, Effect, Interpolation};
use throbber_widgets_tui::ThrobberState;
use tokio::sync::mpsc::UnboundedReceiver;

pub const ANALYSIS_FAILED: &str = "System could not analyze supply chain.";
pub const RECIPE_FAILED: &str = "Kitchen could not generate a recipe.";
pub const LOCATION_FAILED: &str = "Could not locate that company.";

const REPORT_FADE_MS: u32 = 500;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppScreen {
    Risk,
    Workbench,
    Map,
}

/// Which part of the risk dashboard receives keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskFocus {
    Query,
    Nodes,
}

/// Which control of the dual-tool dashboard receives keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkbenchFocus {
    Company,
    City,
    Recipe,
}

impl WorkbenchFocus {
    pub const fn next(self) -> Self {
        match self {
            Self::Company => Self::City,
            Self::City => Self::Recipe,
            Self::Recipe => Self::Company,
        }
    }

    pub const fn previous(self) -> Self {
        match self {
            Self::Company => Self::Recipe,
            Self::City => Self::Company,
            Self::Recipe => Self::City,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendStatus {
    Checking,
    Online(String),
    Offline,
}

pub struct App {
    pub running: bool,
    pub screen: AppScreen,
    pub map_return_screen: AppScreen,
    pub show_help: bool,
    pub status_message: String,
    pub product_query: String,
    pub company_query: String,
    pub city_query: String,
    pub risk_focus: RiskFocus,
    pub workbench_focus: WorkbenchFocus,
    pub analysis: FetchSlot<CrisisReport>,
    pub recipe: FetchSlot<Recipe>,
    pub location: FetchSlot<CompanyLocation>,
    pub analyzed_at: Option<DateTime<Local>>,
    pub selected_node_index: usize,
    pub report_overlay: Option<MapOverlay>,
    pub location_overlay: Option<MapOverlay>,
    pub backend_status: BackendStatus,
    pub animation_counter: f64,
    pub last_frame: Instant,
    pub last_tick: Duration,
    pub throbber_state: ThrobberState,
    pub report_fx: Mutex<Option<Effect>>,
    pub actions: AppActions,
    outcomes: UnboundedReceiver<Outcome>,
}

impl App {
    pub fn new(settings: &Settings) -> Result<Self, FetchError> {
        let (actions, outcomes) = AppActions::new(settings)?;
        Ok(Self::with_actions(actions, outcomes))
    }

    pub fn with_actions(actions: AppActions, outcomes: UnboundedReceiver<Outcome>) -> Self {
        Self {
            running: true,
            screen: AppScreen::Risk,
            map_return_screen: AppScreen::Risk,
            show_help: false,
            status_message: String::new(),
            product_query: String::new(),
            company_query: String::new(),
            city_query: String::new(),
            risk_focus: RiskFocus::Query,
            workbench_focus: WorkbenchFocus::Company,
            analysis: FetchSlot::new(ANALYSIS_FAILED),
            recipe: FetchSlot::new(RECIPE_FAILED),
            location: FetchSlot::new(LOCATION_FAILED),
            analyzed_at: None,
            selected_node_index: 0,
            report_overlay: None,
            location_overlay: None,
            backend_status: BackendStatus::Checking,
            animation_counter: 0.0,
            last_frame: Instant::now(),
            last_tick: Duration::ZERO,
            throbber_state: ThrobberState::default(),
            report_fx: Mutex::new(None),
            actions,
            outcomes,
        }
    }

    pub fn update(&mut self) {
        let now = Instant::now();
        let delta = now.duration_since(self.last_frame);
        self.last_frame = now;
        self.last_tick = delta;

        // Update animation counter (cycles between 0 and 2*PI)
        self.animation_counter += delta.as_secs_f64() * 2.0;
        if self.animation_counter > 2.0 * std::f64::consts::PI {
            self.animation_counter -= 2.0 * std::f64::consts::PI;
        }

        if self.is_busy() {
            self.throbber_state.calc_next();
        }
    }

    pub const fn is_busy(&self) -> bool {
        self.analysis.is_loading() || self.recipe.is_loading() || self.location.is_loading()
    }

    pub fn check_backend(&mut self) {
        self.backend_status = BackendStatus::Checking;
        self.actions.check_backend();
    }

    pub fn start_analysis(&mut self) {
        match self.analysis.begin_query(&self.product_query) {
            Ok((ticket, product)) => {
                let product = product.to_string();
                self.report_overlay = None;
                self.analyzed_at = None;
                self.selected_node_index = 0;
                self.status_message = format!("Analyzing {product}...");
                self.actions.analyze(ticket, product);
            }
            Err(refusal) => self.refuse(refusal),
        }
    }

    pub fn start_recipe(&mut self) {
        match self.recipe.begin() {
            Ok(ticket) => {
                self.status_message = "Generating recipe...".to_string();
                self.actions.generate_recipe(ticket);
            }
            Err(refusal) => self.refuse(refusal),
        }
    }

    pub fn start_location(&mut self) {
        match self.location.begin_query(&self.company_query) {
            Ok((ticket, company)) => {
                let request = LocationRequest {
                    company_name: company.to_string(),
                    city: self.city_query.trim().to_string(),
                };
                self.location_overlay = None;
                self.status_message = format!("Locating {}...", request.company_name);
                self.actions.locate(ticket, request);
            }
            Err(refusal) => self.refuse(refusal),
        }
    }

    /// A disabled control ignores presses; only an empty query needs explaining
    fn refuse(&mut self, refusal: Refusal) {
        match refusal {
            Refusal::EmptyQuery => self.status_message = format!("Error: {refusal}"),
            Refusal::InFlight => tracing::debug!("ignored trigger while request is running"),
        }
    }

    /// Applies every outcome that has arrived since the last frame
    pub fn drain_outcomes(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(outcome) = self.outcomes.try_recv() {
            self.apply_outcome(outcome);
            applied += 1;
        }
        applied
    }

    pub fn apply_outcome(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Analysis(ticket, result) => {
                if !self.analysis.resolve(ticket, result) {
                    return;
                }
                match self.analysis.result() {
                    Some(report) => {
                        self.report_overlay = Some(MapOverlay::new(
                            &report.supply_chain,
                            self.actions.map_config(),
                        ));
                        self.analyzed_at = Some(Local::now());
                        self.status_message = format!(
                            "Analysis complete: {} supply nodes, {} located",
                            report.supply_chain.len(),
                            report.located_count()
                        );
                        self.start_report_fade();
                    }
                    None => self.status_message = format!("Error: {ANALYSIS_FAILED}"),
                }
            }
            Outcome::Recipe(ticket, result) => {
                if !self.recipe.resolve(ticket, result) {
                    return;
                }
                self.status_message = match self.recipe.result() {
                    Some(recipe) => format!("Recipe ready: {}", recipe.title),
                    None => format!("Error: {RECIPE_FAILED}"),
                };
            }
            Outcome::Location(ticket, result) => {
                if !self.location.resolve(ticket, result) {
                    return;
                }
                match self.location.result() {
                    Some(location) => {
                        self.location_overlay = Some(MapOverlay::new(
                            std::slice::from_ref(location),
                            self.actions.map_config(),
                        ));
                        self.status_message = format!("Located {}", location.name);
                    }
                    None => self.status_message = format!("Error: {LOCATION_FAILED}"),
                }
            }
            Outcome::Backend(result) => {
                self.backend_status = match result {
                    Ok(greeting) => BackendStatus::Online(greeting.message),
                    Err(error) => {
                        tracing::warn!(%error, "backend health check failed");
                        BackendStatus::Offline
                    }
                };
            }
        }
    }

    fn start_report_fade(&self) {
        if let Ok(mut effect) = self.report_fx.lock() {
            *effect = Some(fx::fade_from_fg(
                Color::Black,
                (REPORT_FADE_MS, Interpolation::QuadOut),
            ));
        }
    }

    pub fn open_map(&mut self) {
        if self.screen == AppScreen::Map {
            return;
        }
        if self.report_overlay.is_none() {
            self.status_message = "Error: Run an analysis before opening the map".to_string();
            return;
        }
        self.map_return_screen = self.screen;
        self.screen = AppScreen::Map;
    }

    pub fn close_map(&mut self) {
        self.screen = self.map_return_screen;
    }

    pub fn switch_screen(&mut self, screen: AppScreen) {
        if screen == AppScreen::Map {
            self.open_map();
        } else {
            self.screen = screen;
        }
    }

    pub fn node_count(&self) -> usize {
        self.analysis
            .result()
            .map_or(0, |report| report.supply_chain.len())
    }

    /// Puts the selected node's deep link into the status bar
    pub fn show_selected_link(&mut self) {
        let link = self
            .analysis
            .result()
            .and_then(|report| report.supply_chain.get(self.selected_node_index))
            .map(|node| (node.company_name.clone(), node.maps_link()));

        self.status_message = match link {
            Some((_, Some(url))) => url,
            Some((name, None)) => format!("Error: No location data for {name}"),
            None => "Error: No supply node selected".to_string(),
        };
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::api::ApiClient;
    use crate::domain::{Coordinates, RecipeRequest, SupplyChainNode};
    use crate::lifecycle::FetchState;
    use crate::map::MapConfig;
    use url::Url;

    pub(crate) fn test_app() -> App {
        test_app_at("http://127.0.0.1:9")
    }

    pub(crate) fn test_app_at(base: &str) -> App {
        let base = Url::parse(base).expect("test base url");
        let client = ApiClient::new(base, Duration::from_secs(5)).expect("test client");
        let (actions, outcomes) = AppActions::with_client(
            client,
            MapConfig {
                api_key: "test-key".to_string(),
                map_id: "DEMO_MAP_ID".to_string(),
                zoom: 2,
            },
            RecipeRequest::new(vec!["chicken".to_string()], "none"),
        );
        App::with_actions(actions, outcomes)
    }

    pub(crate) fn sample_report() -> CrisisReport {
        CrisisReport {
            product: "Nvidia H100".to_string(),
            risk_score: 82.0,
            risk_summary: "Advanced packaging is concentrated in one region.".to_string(),
            supply_chain: vec![
                SupplyChainNode {
                    company_name: "Unknown Packager".to_string(),
                    role: "Packaging".to_string(),
                    found: false,
                    address: None,
                    coordinates: None,
                },
                SupplyChainNode {
                    company_name: "TSMC".to_string(),
                    role: "Foundry".to_string(),
                    found: true,
                    address: Some("Hsinchu Science Park, Taiwan".to_string()),
                    coordinates: Some(Coordinates::new(24.77, 121.01)),
                },
            ],
        }
    }

    #[tokio::test]
    async fn test_empty_query_does_not_start_analysis() {
        let mut app = test_app();
        app.product_query = "   ".to_string();

        app.start_analysis();

        assert_eq!(app.analysis.state(), &FetchState::Idle);
        assert!(app.status_message.starts_with("Error"));
    }

    #[tokio::test]
    async fn test_successful_analysis_builds_overlay() -> Result<(), Refusal> {
        let mut app = test_app();
        let ticket = app.analysis.begin()?;

        app.apply_outcome(Outcome::Analysis(ticket, Ok(sample_report())));

        let overlay = app.report_overlay.as_ref();
        assert_eq!(
            overlay.map(MapOverlay::center),
            Some(Coordinates::new(24.77, 121.01))
        );
        assert_eq!(overlay.map(|o| o.markers().len()), Some(1));
        assert!(app.analyzed_at.is_some());
        Ok(())
    }

    #[tokio::test]
    async fn test_failed_analysis_leaves_no_report() -> Result<(), Refusal> {
        let mut app = test_app();
        let first = app.analysis.begin()?;
        app.apply_outcome(Outcome::Analysis(first, Ok(sample_report())));

        let second = app.analysis.begin()?;
        app.apply_outcome(Outcome::Analysis(
            second,
            Err(FetchError::Semantic {
                message: "quota exceeded".to_string(),
            }),
        ));

        assert!(!app.analysis.is_loading());
        assert!(app.analysis.result().is_none());
        assert_eq!(app.analysis.error(), Some(ANALYSIS_FAILED));
        assert!(!app.status_message.contains("quota"));
        Ok(())
    }

    #[tokio::test]
    async fn test_map_requires_report() -> Result<(), Refusal> {
        let mut app = test_app();
        app.open_map();
        assert_eq!(app.screen, AppScreen::Risk);

        let ticket = app.analysis.begin()?;
        app.apply_outcome(Outcome::Analysis(ticket, Ok(sample_report())));
        app.open_map();
        assert_eq!(app.screen, AppScreen::Map);

        app.close_map();
        assert_eq!(app.screen, AppScreen::Risk);
        Ok(())
    }

    #[tokio::test]
    async fn test_selected_link_for_unlocated_node() -> Result<(), Refusal> {
        let mut app = test_app();
        let ticket = app.analysis.begin()?;
        app.apply_outcome(Outcome::Analysis(ticket, Ok(sample_report())));

        app.selected_node_index = 0;
        app.show_selected_link();
        assert_eq!(app.status_message, "Error: No location data for Unknown Packager");

        app.selected_node_index = 1;
        app.show_selected_link();
        assert!(app.status_message.starts_with("https://www.google.com/maps/search/"));
        Ok(())
    }

    #[test]
    fn test_workbench_focus_cycles() {
        let focus = WorkbenchFocus::Company;
        assert_eq!(focus.next().next().next(), focus);
        assert_eq!(focus.previous(), WorkbenchFocus::Recipe);
    }
}
