use crate::domain::RecipeRequest;
use crate::error::ConfigError;
use crate::map::MapConfig;
use dotenv::dotenv;
use std::env;
use std::path::PathBuf;
use std::time::Duration;
use url::Url;

const DEFAULT_API_URL: &str = "http://127.0.0.1:8000";
const DEFAULT_MAP_ID: &str = "DEMO_MAP_ID";
const DEFAULT_MAP_ZOOM: u8 = 2;
const DEFAULT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_INGREDIENTS: &str = "chicken,rice,broccoli";
const DEFAULT_DIETARY: &str = "none";
const DEFAULT_LOG_FILE: &str = "crisis-dashboard.log";

/// Everything the dashboard reads from its environment
#[derive(Debug, Clone)]
pub struct Settings {
    pub api_url: Url,
    pub map: MapConfig,
    pub request_timeout: Duration,
    pub recipe: RecipeRequest,
    pub log_file: PathBuf,
}

impl Settings {
    /// Loads `.env` (if present) and reads the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv().ok();
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |name: &str| {
            lookup(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let api_url = parse_api_url(
            &var("DASHBOARD_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string()),
        )?;

        let api_key = var("MAPS_API_KEY").ok_or(ConfigError::MissingVar {
            name: "MAPS_API_KEY",
        })?;

        let zoom = match var("MAP_ZOOM") {
            Some(value) => parse_zoom(&value)?,
            None => DEFAULT_MAP_ZOOM,
        };

        let timeout_secs = match var("REQUEST_TIMEOUT_SECS") {
            Some(value) => parse_timeout(&value)?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        let ingredients = parse_ingredients(
            &var("RECIPE_INGREDIENTS").unwrap_or_else(|| DEFAULT_INGREDIENTS.to_string()),
        )?;
        let dietary = var("RECIPE_DIETARY").unwrap_or_else(|| DEFAULT_DIETARY.to_string());

        Ok(Self {
            api_url,
            map: MapConfig {
                api_key,
                map_id: var("MAP_ID").unwrap_or_else(|| DEFAULT_MAP_ID.to_string()),
                zoom,
            },
            request_timeout: Duration::from_secs(timeout_secs),
            recipe: RecipeRequest::new(ingredients, dietary),
            log_file: PathBuf::from(
                var("LOG_FILE").unwrap_or_else(|| DEFAULT_LOG_FILE.to_string()),
            ),
        })
    }
}

/// Endpoint paths are joined onto the base, so it must end with a slash
fn parse_api_url(value: &str) -> Result<Url, ConfigError> {
    let mut url = Url::parse(value).map_err(|e| ConfigError::InvalidVar {
        name: "DASHBOARD_API_URL",
        value: value.to_string(),
        reason: e.to_string(),
    })?;

    if url.cannot_be_a_base() {
        return Err(ConfigError::InvalidVar {
            name: "DASHBOARD_API_URL",
            value: value.to_string(),
            reason: "not a base url".to_string(),
        });
    }

    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }

    Ok(url)
}

fn parse_zoom(value: &str) -> Result<u8, ConfigError> {
    match value.parse::<u8>() {
        Ok(zoom) if (1..=20).contains(&zoom) => Ok(zoom),
        _ => Err(ConfigError::InvalidVar {
            name: "MAP_ZOOM",
            value: value.to_string(),
            reason: "expected a zoom level between 1 and 20".to_string(),
        }),
    }
}

fn parse_timeout(value: &str) -> Result<u64, ConfigError> {
    match value.parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(secs),
        _ => Err(ConfigError::InvalidVar {
            name: "REQUEST_TIMEOUT_SECS",
            value: value.to_string(),
            reason: "expected a positive number of seconds".to_string(),
        }),
    }
}

fn parse_ingredients(value: &str) -> Result<Vec<String>, ConfigError> {
    let ingredients: Vec<String> = value
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect();

    if ingredients.is_empty() {
        return Err(ConfigError::InvalidVar {
            name: "RECIPE_INGREDIENTS",
            value: value.to_string(),
            reason: "expected a comma separated list".to_string(),
        });
    }

    Ok(ingredients)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn settings(vars: &[(&str, &str)]) -> Result<Settings, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        Settings::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn test_defaults_with_only_the_key() -> Result<(), ConfigError> {
        let settings = settings(&[("MAPS_API_KEY", "abc123")])?;

        assert_eq!(settings.api_url.as_str(), "http://127.0.0.1:8000/");
        assert_eq!(settings.map.api_key, "abc123");
        assert_eq!(settings.map.map_id, "DEMO_MAP_ID");
        assert_eq!(settings.map.zoom, 2);
        assert_eq!(settings.request_timeout, Duration::from_secs(30));
        assert_eq!(settings.recipe.ingredients, ["chicken", "rice", "broccoli"]);
        assert_eq!(settings.recipe.dietary_restrictions, "none");
        Ok(())
    }

    #[test]
    fn test_missing_key_fails_fast() {
        let err = settings(&[]).err();
        assert!(matches!(
            err,
            Some(ConfigError::MissingVar {
                name: "MAPS_API_KEY"
            })
        ));

        let blank = settings(&[("MAPS_API_KEY", "   ")]).err();
        assert!(matches!(blank, Some(ConfigError::MissingVar { .. })));
    }

    #[test]
    fn test_api_url_gets_trailing_slash() -> Result<(), ConfigError> {
        let settings = settings(&[
            ("MAPS_API_KEY", "k"),
            ("DASHBOARD_API_URL", "https://crisis.example.com/v1"),
        ])?;

        assert_eq!(settings.api_url.as_str(), "https://crisis.example.com/v1/");
        Ok(())
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        assert!(settings(&[("MAPS_API_KEY", "k"), ("MAP_ZOOM", "0")]).is_err());
        assert!(settings(&[("MAPS_API_KEY", "k"), ("REQUEST_TIMEOUT_SECS", "soon")]).is_err());
        assert!(settings(&[("MAPS_API_KEY", "k"), ("RECIPE_INGREDIENTS", " , ")]).is_err());
        assert!(settings(&[("MAPS_API_KEY", "k"), ("DASHBOARD_API_URL", "not a url")]).is_err());
    }

    #[test]
    fn test_recipe_overrides() -> Result<(), ConfigError> {
        let settings = settings(&[
            ("MAPS_API_KEY", "k"),
            ("RECIPE_INGREDIENTS", "tofu, spinach ,garlic"),
            ("RECIPE_DIETARY", "vegan"),
        ])?;

        assert_eq!(settings.recipe.ingredients, ["tofu", "spinach", "garlic"]);
        assert_eq!(settings.recipe.dietary_restrictions, "vegan");
        Ok(())
    }
}
