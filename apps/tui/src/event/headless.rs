use color_eyre::eyre::eyre;
use color_eyre::Result;
use serde::Serialize;

use crate::api::ApiClient;
use crate::app::state::{ANALYSIS_FAILED, LOCATION_FAILED, RECIPE_FAILED};
use crate::cli::Command;
use crate::config::Settings;
use crate::domain::{CompanyLocation, CrisisReport, LocationRequest, Recipe, RiskLevel};
use crate::lifecycle::{FetchSlot, FetchState};
use crate::map::{MapConfig, MapOverlay};

const BACKEND_UNREACHABLE: &str = "Backend is unreachable.";

/// Run one command against the backend and print its result to stdout
pub async fn run_headless(settings: &Settings, command: &Command, json: bool) -> Result<()> {
    let client = ApiClient::from_settings(settings)?;
    tracing::info!(?command, api_url = %client.base_url(), "running headless command");

    match command {
        Command::Analyze { product } => {
            let mut slot = FetchSlot::new(ANALYSIS_FAILED);
            let (ticket, product) = slot.begin_query(product)?;
            let outcome = client.analyze_supply_chain(product).await;
            slot.resolve(ticket, outcome);

            let report = settled(&slot)?;
            let view = AnalysisView::new(report, &settings.map);
            if json {
                print_json(&view)
            } else {
                print_analysis(&view);
                Ok(())
            }
        }
        Command::Recipe => {
            let mut slot = FetchSlot::new(RECIPE_FAILED);
            let ticket = slot.begin()?;
            let outcome = client.generate_recipe(&settings.recipe).await;
            slot.resolve(ticket, outcome);

            let recipe = settled(&slot)?;
            if json {
                print_json(recipe)
            } else {
                print_recipe(recipe);
                Ok(())
            }
        }
        Command::Locate { company, city } => {
            let mut slot = FetchSlot::new(LOCATION_FAILED);
            let (ticket, company) = slot.begin_query(company)?;
            let request = LocationRequest {
                company_name: company.to_string(),
                city: city.trim().to_string(),
            };
            let outcome = client.locate_company(&request).await;
            slot.resolve(ticket, outcome);

            let location = settled(&slot)?;
            let view = LocationView::new(location, &settings.map);
            if json {
                print_json(&view)
            } else {
                print_location(&view);
                Ok(())
            }
        }
        Command::Ping => match client.hello().await {
            Ok(greeting) => {
                if json {
                    print_json(&greeting)
                } else {
                    println!("Backend online: {}", greeting.message);
                    Ok(())
                }
            }
            Err(error) => {
                tracing::error!(%error, "backend health check failed");
                Err(eyre!(BACKEND_UNREACHABLE))
            }
        },
    }
}

/// The finished payload, or the slot's static failure message as the error
fn settled<T>(slot: &FetchSlot<T>) -> Result<&T> {
    match slot.state() {
        FetchState::Succeeded(payload) => Ok(payload),
        FetchState::Failed(message) => Err(eyre!(message.clone())),
        FetchState::Idle | FetchState::Loading => Err(eyre!("request did not complete")),
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{json}");
    Ok(())
}

#[derive(Debug, Serialize)]
struct MapView {
    #[serde(flatten)]
    overlay: MapOverlay,
    static_map_url: String,
}

impl MapView {
    fn new(overlay: MapOverlay, config: &MapConfig) -> Self {
        let static_map_url = overlay.static_map_url(config);
        Self {
            overlay,
            static_map_url,
        }
    }
}

#[derive(Debug, Serialize)]
struct NodeLink<'a> {
    company_name: &'a str,
    url: Option<String>,
}

#[derive(Debug, Serialize)]
struct AnalysisView<'a> {
    #[serde(flatten)]
    report: &'a CrisisReport,
    risk_level: RiskLevel,
    located: usize,
    map: MapView,
    links: Vec<NodeLink<'a>>,
}

impl<'a> AnalysisView<'a> {
    fn new(report: &'a CrisisReport, config: &MapConfig) -> Self {
        let links = report
            .supply_chain
            .iter()
            .map(|node| NodeLink {
                company_name: &node.company_name,
                url: node.maps_link(),
            })
            .collect();

        Self {
            report,
            risk_level: report.risk_level(),
            located: report.located_count(),
            map: MapView::new(MapOverlay::new(&report.supply_chain, config), config),
            links,
        }
    }
}

#[derive(Debug, Serialize)]
struct LocationView<'a> {
    #[serde(flatten)]
    location: &'a CompanyLocation,
    link: String,
    map: MapView,
}

impl<'a> LocationView<'a> {
    fn new(location: &'a CompanyLocation, config: &MapConfig) -> Self {
        Self {
            location,
            link: location.maps_link(),
            map: MapView::new(
                MapOverlay::new(std::slice::from_ref(location), config),
                config,
            ),
        }
    }
}

fn print_map(map: &MapView) {
    let center = map.overlay.center();
    println!(
        "\nMap center: {:.5}, {:.5} (zoom {})",
        center.lat,
        center.lng,
        map.overlay.zoom()
    );
    println!("Static map: {}", map.static_map_url);
}

fn print_analysis(view: &AnalysisView<'_>) {
    let report = view.report;
    println!("{}", report.product);
    println!(
        "Risk: {} ({})",
        report.score_label(),
        view.risk_level.label()
    );
    println!("{}", report.risk_summary);

    println!(
        "\nSupply chain ({} nodes, {} located):",
        report.supply_chain.len(),
        view.located
    );
    for (node, link) in report.supply_chain.iter().zip(&view.links) {
        let pin = if node.found { "📍" } else { "- " };
        println!("  {pin} {} | {}", node.company_name, node.role);
        println!("     {}", node.display_address());
        if let Some(url) = &link.url {
            println!("     {url}");
        }
    }

    print_map(&view.map);
}

fn print_recipe(recipe: &Recipe) {
    println!("{}", recipe.title);
    println!(
        "{} | {} min | {} kcal",
        recipe.difficulty, recipe.prep_time_minutes, recipe.calories
    );

    println!("\nIngredients:");
    for item in &recipe.ingredients {
        println!("- {} {}", item.amount, item.name);
    }

    println!("\nInstructions:");
    for (step, text) in recipe.instructions.iter().enumerate() {
        println!("{}. {text}", step + 1);
    }
}

fn print_location(view: &LocationView<'_>) {
    let location = view.location;
    println!("{}", location.name);
    println!("{}", location.address);
    println!(
        "{:.5}, {:.5}",
        location.coordinates.lat, location.coordinates.lng
    );
    println!("{}", view.link);

    print_map(&view.map);
}
