use serde::{Deserialize, Serialize};

use crate::links::maps_search_url;

/// Text shown in place of an address for nodes the backend could not locate
pub const LOCATION_UNAVAILABLE: &str = "Location Data Unavailable";

/// Boundary checks applied to every payload after it has been decoded
pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// Bands are half-open: 40 is medium and 75 is high.
    pub fn from_score(score: f64) -> Self {
        if score < 40.0 {
            Self::Low
        } else if score < 75.0 {
            Self::Medium
        } else {
            Self::High
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }

    pub const fn rgb(self) -> (u8, u8, u8) {
        match self {
            Self::Low => (0x4a, 0xde, 0x80),
            Self::Medium => (0xfb, 0xbf, 0x24),
            Self::High => (0xef, 0x44, 0x44),
        }
    }

    pub fn hex(self) -> String {
        let (r, g, b) = self.rgb();
        format!("#{r:02x}{g:02x}{b:02x}")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    pub fn is_finite(self) -> bool {
        self.lat.is_finite() && self.lng.is_finite()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupplyChainNode {
    pub company_name: String,
    pub role: String,
    #[serde(default)]
    pub found: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinates>,
}

impl SupplyChainNode {
    /// Coordinates are only trusted for nodes the backend marked as found
    pub fn position(&self) -> Option<Coordinates> {
        if self.found {
            self.coordinates
        } else {
            None
        }
    }

    pub fn display_address(&self) -> &str {
        if self.found {
            self.address.as_deref().unwrap_or_default()
        } else {
            LOCATION_UNAVAILABLE
        }
    }

    pub fn maps_link(&self) -> Option<String> {
        self.position()?;
        Some(maps_search_url(self.address.as_deref().unwrap_or_default()))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrisisReport {
    pub product: String,
    pub risk_score: f64,
    pub risk_summary: String,
    #[serde(default)]
    pub supply_chain: Vec<SupplyChainNode>,
}

impl CrisisReport {
    pub fn risk_level(&self) -> RiskLevel {
        RiskLevel::from_score(self.risk_score)
    }

    /// Score formatted for the gauge, e.g. `73/100`
    pub fn score_label(&self) -> String {
        if self.risk_score.fract().abs() < f64::EPSILON {
            format!("{:.0}/100", self.risk_score)
        } else {
            format!("{:.1}/100", self.risk_score)
        }
    }

    pub fn located_count(&self) -> usize {
        self.supply_chain
            .iter()
            .filter(|node| node.position().is_some())
            .count()
    }
}

impl Validate for CrisisReport {
    fn validate(&self) -> Result<(), String> {
        if !self.risk_score.is_finite() || !(0.0..=100.0).contains(&self.risk_score) {
            return Err(format!(
                "risk_score {} is outside 0..=100",
                self.risk_score
            ));
        }

        for node in &self.supply_chain {
            if let Some(coordinates) = node.coordinates {
                if !coordinates.is_finite() {
                    return Err(format!(
                        "node {} has non-finite coordinates",
                        node.company_name
                    ));
                }
            }
        }

        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
    pub amount: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    pub title: String,
    pub difficulty: String,
    pub prep_time_minutes: u32,
    pub calories: u32,
    pub ingredients: Vec<Ingredient>,
    pub instructions: Vec<String>,
}

impl Validate for Recipe {
    fn validate(&self) -> Result<(), String> {
        if self.title.trim().is_empty() {
            return Err("recipe title is empty".to_string());
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyLocation {
    pub name: String,
    pub address: String,
    pub coordinates: Coordinates,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub place_id: Option<String>,
}

impl CompanyLocation {
    /// The locator searches by name and address together
    pub fn maps_link(&self) -> String {
        maps_search_url(&format!("{} {}", self.name, self.address))
    }
}

impl Validate for CompanyLocation {
    fn validate(&self) -> Result<(), String> {
        if self.coordinates.is_finite() {
            Ok(())
        } else {
            Err(format!("{} has non-finite coordinates", self.name))
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Greeting {
    pub message: String,
}

impl Validate for Greeting {
    fn validate(&self) -> Result<(), String> {
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecipeRequest {
    pub ingredients: Vec<String>,
    pub dietary_restrictions: String,
}

impl RecipeRequest {
    pub fn new(ingredients: Vec<String>, dietary_restrictions: impl Into<String>) -> Self {
        let dietary_restrictions = dietary_restrictions.into();
        Self {
            ingredients,
            dietary_restrictions: if dietary_restrictions.trim().is_empty() {
                "none".to_string()
            } else {
                dietary_restrictions
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocationRequest {
    pub company_name: String,
    pub city: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(found: bool, coordinates: Option<Coordinates>) -> SupplyChainNode {
        SupplyChainNode {
            company_name: "TSMC".to_string(),
            role: "Foundry".to_string(),
            found,
            address: Some("Hsinchu Science Park".to_string()),
            coordinates,
        }
    }

    #[test]
    fn test_risk_bands_put_boundaries_in_upper_band() {
        assert_eq!(RiskLevel::from_score(0.0), RiskLevel::Low);
        assert_eq!(RiskLevel::from_score(39.9), RiskLevel::Low);
        assert_eq!(RiskLevel::from_score(40.0), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_score(74.99), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_score(75.0), RiskLevel::High);
        assert_eq!(RiskLevel::from_score(100.0), RiskLevel::High);
    }

    #[test]
    fn test_risk_colors() {
        assert_eq!(RiskLevel::Low.hex(), "#4ade80");
        assert_eq!(RiskLevel::Medium.hex(), "#fbbf24");
        assert_eq!(RiskLevel::High.hex(), "#ef4444");
    }

    #[test]
    fn test_report_without_supply_chain_decodes_empty() -> Result<(), serde_json::Error> {
        let report: CrisisReport = serde_json::from_str(
            r#"{"product":"F-35 Jet","risk_score":81,"risk_summary":"Single-source titanium"}"#,
        )?;

        assert!(report.supply_chain.is_empty());
        assert_eq!(report.risk_level(), RiskLevel::High);
        assert_eq!(report.score_label(), "81/100");
        Ok(())
    }

    #[test]
    fn test_report_rejects_out_of_range_score() {
        let report = CrisisReport {
            product: "Widget".to_string(),
            risk_score: 140.0,
            risk_summary: String::new(),
            supply_chain: Vec::new(),
        };

        assert!(report.validate().is_err());
    }

    #[test]
    fn test_unfound_node_hides_location() {
        let hidden = node(false, Some(Coordinates::new(24.7, 121.0)));

        assert_eq!(hidden.position(), None);
        assert_eq!(hidden.display_address(), LOCATION_UNAVAILABLE);
        assert!(hidden.maps_link().is_none());
    }

    #[test]
    fn test_found_node_without_coordinates_has_no_link() {
        let partial = node(true, None);

        assert_eq!(partial.display_address(), "Hsinchu Science Park");
        assert!(partial.maps_link().is_none());
    }

    #[test]
    fn test_found_node_links_to_its_address() {
        let located = node(true, Some(Coordinates::new(24.7, 121.0)));
        assert_eq!(
            located.maps_link().as_deref(),
            Some("https://www.google.com/maps/search/?api=1&query=Hsinchu%20Science%20Park")
        );
    }

    #[test]
    fn test_recipe_request_defaults_dietary_restrictions() {
        let request = RecipeRequest::new(vec!["rice".to_string()], "  ");
        assert_eq!(request.dietary_restrictions, "none");
    }
}
