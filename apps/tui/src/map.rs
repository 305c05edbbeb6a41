use crate::domain::{CompanyLocation, Coordinates, SupplyChainNode};
use serde::Serialize;
use url::form_urlencoded;

/// Center used when no entity has a usable position
pub const FALLBACK_CENTER: Coordinates = Coordinates::new(20.0, 0.0);

const STATIC_MAP_BASE: &str = "https://maps.googleapis.com/maps/api/staticmap";
const STATIC_MAP_SIZE: &str = "640x400";

/// Map provider settings, built once at startup and handed to every overlay
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapConfig {
    pub api_key: String,
    pub map_id: String,
    pub zoom: u8,
}

/// Anything that can be placed on the map overlay
pub trait Locatable {
    fn label(&self) -> &str;
    fn marker_position(&self) -> Option<Coordinates>;
}

impl Locatable for SupplyChainNode {
    fn label(&self) -> &str {
        &self.company_name
    }

    fn marker_position(&self) -> Option<Coordinates> {
        self.position()
    }
}

impl Locatable for CompanyLocation {
    fn label(&self) -> &str {
        &self.name
    }

    fn marker_position(&self) -> Option<Coordinates> {
        Some(self.coordinates)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapMarker {
    pub position: Coordinates,
    pub label: String,
}

/// Longitude/latitude window the canvas is drawn in
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub x_bounds: [f64; 2],
    pub y_bounds: [f64; 2],
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapOverlay {
    center: Coordinates,
    zoom: u8,
    markers: Vec<MapMarker>,
}

pub fn initial_center<T: Locatable>(entities: &[T]) -> Coordinates {
    entities
        .iter()
        .find_map(T::marker_position)
        .unwrap_or(FALLBACK_CENTER)
}

impl MapOverlay {
    pub fn new<T: Locatable>(entities: &[T], config: &MapConfig) -> Self {
        let markers = entities
            .iter()
            .filter_map(|entity| {
                entity.marker_position().map(|position| MapMarker {
                    position,
                    label: entity.label().to_string(),
                })
            })
            .collect();

        Self {
            center: initial_center(entities),
            zoom: config.zoom,
            markers,
        }
    }

    pub const fn center(&self) -> Coordinates {
        self.center
    }

    pub const fn zoom(&self) -> u8 {
        self.zoom
    }

    pub fn markers(&self) -> &[MapMarker] {
        &self.markers
    }

    /// Zoom 2 and below show the whole world; each level above halves the window.
    pub fn viewport(&self) -> Viewport {
        let scale = 2_f64.powi(i32::from(self.zoom.saturating_sub(2)));
        let lng_span = (360.0 / scale).min(360.0);
        let lat_span = (180.0 / scale).min(180.0);

        Viewport {
            x_bounds: clamp_window(self.center.lng, lng_span, -180.0, 180.0),
            y_bounds: clamp_window(self.center.lat, lat_span, -90.0, 90.0),
        }
    }

    pub fn static_map_url(&self, config: &MapConfig) -> String {
        let mut params = form_urlencoded::Serializer::new(String::new());
        params
            .append_pair(
                "center",
                &format!("{:.5},{:.5}", self.center.lat, self.center.lng),
            )
            .append_pair("zoom", &self.zoom.to_string())
            .append_pair("size", STATIC_MAP_SIZE)
            .append_pair("maptype", "hybrid")
            .append_pair("map_id", &config.map_id);

        for marker in &self.markers {
            params.append_pair(
                "markers",
                &format!(
                    "color:red|{:.5},{:.5}",
                    marker.position.lat, marker.position.lng
                ),
            );
        }

        params.append_pair("key", &config.api_key);

        format!("{STATIC_MAP_BASE}?{}", params.finish())
    }
}

fn clamp_window(center: f64, span: f64, min: f64, max: f64) -> [f64; 2] {
    let half = span / 2.0;
    let mut low = center - half;
    let mut high = center + half;

    if low < min {
        high += min - low;
        low = min;
    }
    if high > max {
        low -= high - max;
        high = max;
    }

    [low.max(min), high.min(max)]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(zoom: u8) -> MapConfig {
        MapConfig {
            api_key: "test-key".to_string(),
            map_id: "DEMO_MAP_ID".to_string(),
            zoom,
        }
    }

    fn node(name: &str, found: bool, coordinates: Option<Coordinates>) -> SupplyChainNode {
        SupplyChainNode {
            company_name: name.to_string(),
            role: "Supplier".to_string(),
            found,
            address: None,
            coordinates,
        }
    }

    #[test]
    fn test_center_uses_first_found_node() {
        let nodes = vec![
            node("Ghost", false, Some(Coordinates::new(-5.0, -5.0))),
            node("ASML", true, Some(Coordinates::new(10.0, 20.0))),
            node("Zeiss", true, Some(Coordinates::new(48.0, 10.0))),
        ];

        assert_eq!(initial_center(&nodes), Coordinates::new(10.0, 20.0));
    }

    #[test]
    fn test_center_falls_back_without_found_nodes() {
        let nodes = vec![
            node("Ghost", false, Some(Coordinates::new(-5.0, -5.0))),
            node("Unmapped", true, None),
        ];

        assert_eq!(initial_center(&nodes), FALLBACK_CENTER);
        assert_eq!(initial_center::<SupplyChainNode>(&[]), FALLBACK_CENTER);
    }

    #[test]
    fn test_markers_skip_unlocated_nodes() {
        let nodes = vec![
            node("Ghost", false, Some(Coordinates::new(-5.0, -5.0))),
            node("Unmapped", true, None),
            node("ASML", true, Some(Coordinates::new(51.4, 5.4))),
        ];

        let overlay = MapOverlay::new(&nodes, &config(2));

        assert_eq!(overlay.markers().len(), 1);
        assert_eq!(overlay.markers()[0].label, "ASML");
    }

    #[test]
    fn test_company_location_is_always_placed() {
        let location = CompanyLocation {
            name: "OpenAI".to_string(),
            address: "San Francisco, CA".to_string(),
            coordinates: Coordinates::new(37.77, -122.41),
            place_id: None,
        };

        let overlay = MapOverlay::new(std::slice::from_ref(&location), &config(2));

        assert_eq!(overlay.center(), location.coordinates);
        assert_eq!(overlay.markers().len(), 1);
    }

    #[test]
    fn test_world_viewport_at_default_zoom() {
        let overlay = MapOverlay::new::<SupplyChainNode>(&[], &config(2));
        let viewport = overlay.viewport();

        assert_eq!(viewport.x_bounds, [-180.0, 180.0]);
        assert_eq!(viewport.y_bounds, [-90.0, 90.0]);
    }

    #[test]
    fn test_zoomed_viewport_stays_on_the_map() {
        let nodes = vec![node("Polar", true, Some(Coordinates::new(85.0, 170.0)))];
        let viewport = MapOverlay::new(&nodes, &config(4)).viewport();

        assert_eq!(viewport.x_bounds, [90.0, 180.0]);
        assert_eq!(viewport.y_bounds, [45.0, 90.0]);
    }

    #[test]
    fn test_static_map_url_is_signed() {
        let nodes = vec![node("ASML", true, Some(Coordinates::new(51.4, 5.4)))];
        let url = MapOverlay::new(&nodes, &config(2)).static_map_url(&config(2));

        assert!(url.starts_with(STATIC_MAP_BASE));
        assert!(url.contains("maptype=hybrid"));
        assert!(url.contains("markers=color%3Ared%7C51.40000%2C5.40000"));
        assert!(url.ends_with("key=test-key"));
    }
}
