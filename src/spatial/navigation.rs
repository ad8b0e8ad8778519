//! External map-service deep links.
//!
//! Pure string construction; navigation itself happens in the user's
//! browser, outside this system.

use url::Url;

use crate::models::Coordinate;

const DIRECTIONS_BASE: &str = "https://www.google.com/maps/dir/";
const SEARCH_BASE: &str = "https://www.google.com/maps/search/";

/// Driving-directions deep link from `origin` to `destination`.
pub fn directions_url(origin: Coordinate, destination: Coordinate) -> Url {
    let mut url = Url::parse(DIRECTIONS_BASE).expect("static base URL");
    url.query_pairs_mut()
        .append_pair("api", "1")
        .append_pair("origin", &format!("{},{}", origin.lat, origin.lng))
        .append_pair("destination", &format!("{},{}", destination.lat, destination.lng))
        .append_pair("travelmode", "driving");
    url
}

/// Search deep link for a free-text query (e.g. a shelter name).
pub fn search_url(query: &str) -> Url {
    let mut url = Url::parse(SEARCH_BASE).expect("static base URL");
    url.query_pairs_mut()
        .append_pair("api", "1")
        .append_pair("query", query);
    url
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directions_url() {
        let url = directions_url(
            Coordinate::new(34.0837, 74.7973),
            Coordinate::new(34.10, 74.80),
        );

        assert_eq!(url.host_str(), Some("www.google.com"));
        assert_eq!(url.path(), "/maps/dir/");

        let pairs: Vec<(String, String)> = url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        assert!(pairs.contains(&("api".to_string(), "1".to_string())));
        assert!(pairs.contains(&("origin".to_string(), "34.0837,74.7973".to_string())));
        assert!(pairs.contains(&("destination".to_string(), "34.1,74.8".to_string())));
        assert!(pairs.contains(&("travelmode".to_string(), "driving".to_string())));
    }

    #[test]
    fn test_search_url_encodes_query() {
        let url = search_url("SK Stadium shelter");
        assert_eq!(url.path(), "/maps/search/");
        let query: Vec<(String, String)> = url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        assert!(query.contains(&("query".to_string(), "SK Stadium shelter".to_string())));
    }
}
