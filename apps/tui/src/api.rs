use crate::config::Settings;
use crate::domain::{
    CompanyLocation, CrisisReport, Greeting, LocationRequest, Recipe, RecipeRequest, Validate,
};
use crate::error::FetchError;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;
use url::Url;

const SUPPLY_CHAIN_PATH: &str = "api/supply-chain";
const RECIPE_PATH: &str = "api/generate-recipe";
const COORDS_PATH: &str = "api/get-coords";
const HELLO_PATH: &str = "api/hello";

/// Thin client over the dashboard backend. One call per user action, no retries.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: Url,
    http: Client,
}

impl ApiClient {
    pub fn new(base_url: Url, timeout: Duration) -> Result<Self, FetchError> {
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self { base_url, http })
    }

    pub fn from_settings(settings: &Settings) -> Result<Self, FetchError> {
        Self::new(settings.api_url.clone(), settings.request_timeout)
    }

    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub async fn analyze_supply_chain(&self, product: &str) -> Result<CrisisReport, FetchError> {
        let url = self.endpoint(SUPPLY_CHAIN_PATH)?;
        tracing::info!(product, "requesting supply chain analysis");
        self.send(self.http.post(url).query(&[("product_name", product)]))
            .await
    }

    pub async fn generate_recipe(&self, request: &RecipeRequest) -> Result<Recipe, FetchError> {
        let url = self.endpoint(RECIPE_PATH)?;
        tracing::info!(ingredients = ?request.ingredients, "requesting recipe");
        self.send(self.http.post(url).json(request)).await
    }

    pub async fn locate_company(
        &self,
        request: &LocationRequest,
    ) -> Result<CompanyLocation, FetchError> {
        let url = self.endpoint(COORDS_PATH)?;
        tracing::info!(company = %request.company_name, city = %request.city, "requesting coordinates");
        self.send(self.http.post(url).json(request)).await
    }

    pub async fn hello(&self) -> Result<Greeting, FetchError> {
        let url = self.endpoint(HELLO_PATH)?;
        self.send(self.http.get(url)).await
    }

    fn endpoint(&self, path: &str) -> Result<Url, FetchError> {
        Ok(self.base_url.join(path)?)
    }

    async fn send<T>(&self, request: RequestBuilder) -> Result<T, FetchError>
    where
        T: DeserializeOwned + Validate,
    {
        let response = request.send().await?;
        let status = response.status();
        tracing::debug!(%status, url = %response.url(), "backend responded");

        if !status.is_success() {
            return Err(FetchError::Status { status });
        }

        let body = response.bytes().await?;
        let value: Value = serde_json::from_slice(&body)?;

        if let Some(message) = semantic_error(&value) {
            return Err(FetchError::Semantic { message });
        }

        let payload: T = serde_json::from_value(value)?;
        payload
            .validate()
            .map_err(|message| FetchError::Schema { message })?;

        Ok(payload)
    }
}

/// A success status can still carry `{ "error": ... }`
fn semantic_error(value: &Value) -> Option<String> {
    let error = value.get("error").filter(|error| !error.is_null())?;
    Some(
        error
            .as_str()
            .map_or_else(|| error.to_string(), str::to_string),
    )
}
