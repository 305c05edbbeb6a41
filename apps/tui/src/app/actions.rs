use crate::api::ApiClient;
use crate::config::Settings;
use crate::domain::{CompanyLocation, CrisisReport, Greeting, LocationRequest, Recipe, RecipeRequest};
use crate::error::FetchError;
use crate::lifecycle::Ticket;
use crate::map::MapConfig;
use std::future::Future;
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};

/// Result of a background request, delivered back to the event loop
#[derive(Debug)]
pub enum Outcome {
    Analysis(Ticket, Result<CrisisReport, FetchError>),
    Recipe(Ticket, Result<Recipe, FetchError>),
    Location(Ticket, Result<CompanyLocation, FetchError>),
    Backend(Result<Greeting, FetchError>),
}

/// Issues backend requests on spawned tasks so the UI keeps drawing while they run
#[derive(Debug, Clone)]
pub struct AppActions {
    client: ApiClient,
    map_config: MapConfig,
    recipe_request: RecipeRequest,
    outcomes: UnboundedSender<Outcome>,
}

impl AppActions {
    pub fn new(settings: &Settings) -> Result<(Self, UnboundedReceiver<Outcome>), FetchError> {
        let client = ApiClient::from_settings(settings)?;
        Ok(Self::with_client(
            client,
            settings.map.clone(),
            settings.recipe.clone(),
        ))
    }

    pub fn with_client(
        client: ApiClient,
        map_config: MapConfig,
        recipe_request: RecipeRequest,
    ) -> (Self, UnboundedReceiver<Outcome>) {
        let (outcomes, receiver) = unbounded_channel();
        (
            Self {
                client,
                map_config,
                recipe_request,
                outcomes,
            },
            receiver,
        )
    }

    pub const fn map_config(&self) -> &MapConfig {
        &self.map_config
    }

    pub const fn recipe_request(&self) -> &RecipeRequest {
        &self.recipe_request
    }

    pub fn analyze(&self, ticket: Ticket, product: String) {
        let client = self.client.clone();
        self.spawn(async move {
            Outcome::Analysis(ticket, client.analyze_supply_chain(&product).await)
        });
    }

    pub fn generate_recipe(&self, ticket: Ticket) {
        let client = self.client.clone();
        let request = self.recipe_request.clone();
        self.spawn(async move { Outcome::Recipe(ticket, client.generate_recipe(&request).await) });
    }

    pub fn locate(&self, ticket: Ticket, request: LocationRequest) {
        let client = self.client.clone();
        self.spawn(async move { Outcome::Location(ticket, client.locate_company(&request).await) });
    }

    pub fn check_backend(&self) {
        let client = self.client.clone();
        self.spawn(async move { Outcome::Backend(client.hello().await) });
    }

    fn spawn<F>(&self, request: F)
    where
        F: Future<Output = Outcome> + Send + 'static,
    {
        let outcomes = self.outcomes.clone();
        tokio::spawn(async move {
            let outcome = request.await;
            if outcomes.send(outcome).is_err() {
                tracing::debug!("dashboard closed before the outcome arrived");
            }
        });
    }
}
