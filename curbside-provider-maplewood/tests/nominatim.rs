//! Nominatim geocoder against a mock HTTP server.

use curbside_core::{GeocodePort, PortError};
use curbside_provider_maplewood::NominatimGeocoder;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn geocoder_for(server: &MockServer) -> NominatimGeocoder {
    NominatimGeocoder::with_base_url(reqwest::Client::new(), server.uri())
}

#[tokio::test]
async fn parses_candidates_and_biases_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("q", "574 Valley St Maplewood NJ"))
        .and(query_param("format", "json"))
        .and(query_param("bounded", "1"))
        .and(query_param("limit", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "lat": "40.7342",
                "lon": "-74.2642",
                "display_name": "574, Valley Street, Maplewood, Essex County, New Jersey",
                "address": { "house_number": "574", "road": "Valley Street" }
            },
            {
                "lat": "40.7214",
                "lon": "-74.2580",
                "display_name": "Valley Street Park, Maplewood"
            }
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let geocoder = geocoder_for(&server);
    let candidates = geocoder.search("574 Valley St", 5).await.unwrap();

    assert_eq!(candidates.len(), 2);
    assert_eq!(candidates[0].label, "574 Valley Street");
    assert!((candidates[0].point.lat - 40.7342).abs() < 1e-9);
    assert!((candidates[0].point.lng + 74.2642).abs() < 1e-9);
    assert_eq!(candidates[1].label, "Valley Street Park");
}

#[tokio::test]
async fn short_queries_skip_the_network() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(0)
        .mount(&server)
        .await;

    let geocoder = geocoder_for(&server);
    assert!(geocoder.search("ab", 5).await.unwrap().is_empty());
    assert!(geocoder.search("Valley", 0).await.unwrap().is_empty());
}

#[tokio::test]
async fn server_errors_surface_as_network_errors() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let geocoder = geocoder_for(&server);
    let err = geocoder.search("Valley Street", 1).await.unwrap_err();
    assert!(matches!(err, PortError::Network(_)), "got {err:?}");
}

#[tokio::test]
async fn malformed_coordinates_are_rejected() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "lat": "n/a", "lon": "-74.2", "display_name": "Somewhere" }
        ])))
        .mount(&server)
        .await;

    let geocoder = geocoder_for(&server);
    let err = geocoder.search("Somewhere", 1).await.unwrap_err();
    assert!(matches!(err, PortError::InvalidCoordinate(ref raw) if raw == "n/a"));
}
