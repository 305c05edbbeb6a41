use url::form_urlencoded;

const MAPS_SEARCH_BASE: &str = "https://www.google.com/maps/search/";

/// Builds a map-search deep link for a free-text query.
///
/// Spaces are sent as `%20`, matching `encodeURIComponent`.
pub fn maps_search_url(query: &str) -> String {
    let params = form_urlencoded::Serializer::new(String::new())
        .append_pair("api", "1")
        .append_pair("query", query)
        .finish();

    // A literal '+' in the query is already escaped as %2B
    format!("{MAPS_SEARCH_BASE}?{}", params.replace('+', "%20"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_is_encoded() {
        assert_eq!(
            maps_search_url("Nvidia HQ, Santa Clara & Co"),
            "https://www.google.com/maps/search/?api=1&query=Nvidia%20HQ%2C%20Santa%20Clara%20%26%20Co"
        );
    }

    #[test]
    fn test_literal_plus_survives() {
        assert_eq!(
            maps_search_url("C++ Labs"),
            "https://www.google.com/maps/search/?api=1&query=C%2B%2B%20Labs"
        );
    }

    #[test]
    fn test_empty_query_still_builds_link() {
        assert_eq!(
            maps_search_url(""),
            "https://www.google.com/maps/search/?api=1&query="
        );
    }
}
