//! `HttpSource` against a local mock server.
#![cfg(feature = "http")]

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use truecity_core::prelude::*;

fn regions_request(country: &str) -> FetchRequest {
    FetchRequest {
        target: Level::Region,
        seq: 1,
        country: country.into(),
        region: None,
    }
}

#[tokio::test]
async fn fetches_regions_from_country_file() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/geo/countries/CO.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"i": "ANT", "n": "Antioquia"},
            {"i": 11, "n": "Bogotá"}
        ])))
        .mount(&server)
        .await;

    let source = HttpSource::new(&format!("{}/geo/", server.uri()));
    let entries = source.fetch(&regions_request("CO")).await.expect("regions");
    assert_eq!(entries, vec![Entry::new("ANT", "Antioquia"), Entry::new("11", "Bogotá")]);
}

#[tokio::test]
async fn fetches_cities_from_region_file() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/regions/CO_ANT.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"i": "1", "n": "Medellín"}])))
        .mount(&server)
        .await;

    let source = HttpSource::new(&server.uri());
    let request = FetchRequest {
        target: Level::City,
        seq: 1,
        country: "CO".into(),
        region: Some("ANT".into()),
    };
    let entries = source.fetch(&request).await.expect("cities");
    assert_eq!(entries, vec![Entry::new("1", "Medellín")]);
}

#[tokio::test]
async fn non_array_body_is_an_invalid_format() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/countries/CO.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"regions": []})))
        .mount(&server)
        .await;

    let source = HttpSource::new(&server.uri());
    let err = source.fetch(&regions_request("CO")).await.unwrap_err();
    assert!(matches!(err, DataLoadError::InvalidFormat { file: Level::Country, .. }), "got {err:?}");
    assert_eq!(err.message_key(), MessageKey::InvalidRegionsDataFormat);
}

#[tokio::test]
async fn missing_file_is_a_status_error() {
    let server = MockServer::start().await;
    // No mocks mounted: wiremock answers 404.
    let source = HttpSource::new(&server.uri());
    let err = source.fetch(&regions_request("ZZ")).await.unwrap_err();
    assert!(matches!(err, DataLoadError::Status { status: 404, .. }), "got {err:?}");
    assert_eq!(err.message_key(), MessageKey::FailedToLoadCountryData);
}

#[tokio::test]
async fn session_over_http_restores_a_stored_value() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/countries/CO.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"i": "R2", "n": "Zeta"},
            {"i": "R1", "n": "Alpha"}
        ])))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/regions/CO_R1.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"i": "C9", "n": "Nine"}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let config = SelectorConfig::new("http-1", &server.uri()).unwrap();
    let lists = Widgets {
        country: MemorySelect::prefilled(vec![LocationOption::new("CO", "Colombia")], "CO"),
        region: MemorySelect::new("Select a region"),
        city: MemorySelect::new("Select a city"),
    };
    let stored = r#"{"country":{"value":"CO"},"region":{"value":"R1"},"city":{"value":"C9"}}"#;
    let session = CascadeSession::initialize(
        HttpSource::new(config.base_url()),
        &config,
        lists,
        RecordingFeedback::default(),
        Messages::default(),
        Some(stored),
    )
    .await;

    let controller = session.controller();
    assert_eq!(controller.list(Level::Region).value(), "R1");
    assert_eq!(controller.list(Level::City).value(), "C9");
    let region_labels: Vec<_> = controller
        .list(Level::Region)
        .choices()
        .iter()
        .map(|o| o.display_name.clone())
        .collect();
    assert_eq!(region_labels, vec!["Alpha", "Zeta"]);
}
