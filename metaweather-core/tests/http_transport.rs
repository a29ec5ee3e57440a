use metaweather_core::{
    Failure, HttpTransport, LocationId, ServiceConfig, Transport, TransportError, WeatherClient,
};
use mockito::{Matcher, Server};

const LOOKUP: &str = r#"{
    "title": "London",
    "woeid": 44418,
    "consolidated_weather": [
        {
            "weather_state_name": "Snow",
            "wind_direction_compass": "NW",
            "min_temp": -2.333,
            "max_temp": 1.666,
            "wind_speed": 5.005
        },
        {
            "weather_state_name": "Clear",
            "wind_direction_compass": "S",
            "min_temp": 4.0,
            "max_temp": 9.0,
            "wind_speed": 2.0
        }
    ]
}"#;

#[tokio::test]
async fn fetch_returns_body() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/location/44418/")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(LOOKUP)
        .create_async()
        .await;

    let config = ServiceConfig::new(server.url());
    let transport = HttpTransport::new(&config).unwrap();

    let body = transport.fetch(&config.location_url(LocationId::new(44418))).await.unwrap();

    assert_eq!(body, LOOKUP.as_bytes());
    mock.assert_async().await;
}

#[tokio::test]
async fn error_status_is_transport_error() {
    let mut server = Server::new_async().await;
    let _mock = server.mock("GET", "/api/location/1/").with_status(500).create_async().await;

    let config = ServiceConfig::new(server.url());
    let transport = HttpTransport::new(&config).unwrap();

    let err = transport.fetch(&config.location_url(LocationId::new(1))).await.unwrap_err();

    assert!(matches!(err, TransportError::Status { status: 500, .. }));
}

#[tokio::test]
async fn unreachable_host_is_transport_error() {
    // Port 9 (discard) is closed on test machines.
    let config = ServiceConfig::new("http://127.0.0.1:9");
    let transport = HttpTransport::new(&config).unwrap();

    let err = transport.fetch(&config.search_url("London")).await.unwrap_err();

    assert!(matches!(err, TransportError::Request { .. }));
}

#[tokio::test]
async fn report_for_over_http() {
    let mut server = Server::new_async().await;
    let search = server
        .mock("GET", "/api/location/search/")
        .match_query(Matcher::UrlEncoded("query".into(), "London".into()))
        .with_status(200)
        .with_body(r#"[{"title": "London", "woeid": 44418}, {"title": "Londrina", "woeid": 455867}]"#)
        .create_async()
        .await;
    let lookup = server
        .mock("GET", "/api/location/44418/")
        .with_status(200)
        .with_body(LOOKUP)
        .create_async()
        .await;

    let client = WeatherClient::http(ServiceConfig::new(server.url())).unwrap();
    let report = client.report_for("London").await.unwrap();

    assert_eq!(
        report.to_string(),
        "Weather: Snow, wind direction: NW, wind speed: 5.01, min temperature: -2.33, max temperature: 1.67"
    );
    search.assert_async().await;
    lookup.assert_async().await;
}

#[tokio::test]
async fn query_with_spaces_is_escaped() {
    let mut server = Server::new_async().await;
    let search = server
        .mock("GET", "/api/location/search/")
        .match_query(Matcher::UrlEncoded("query".into(), "New York".into()))
        .with_status(200)
        .with_body("[]")
        .create_async()
        .await;

    let client = WeatherClient::http(ServiceConfig::new(server.url())).unwrap();
    let err = client.report_for("New York").await.unwrap_err();

    assert!(matches!(err, Failure::NoData));
    search.assert_async().await;
}

#[tokio::test]
async fn lookup_failure_after_search_is_transport_failure() {
    let mut server = Server::new_async().await;
    let _search = server
        .mock("GET", "/api/location/search/")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"[{"woeid": 44418}]"#)
        .create_async()
        .await;
    let _lookup = server.mock("GET", "/api/location/44418/").with_status(503).create_async().await;

    let client = WeatherClient::http(ServiceConfig::new(server.url())).unwrap();
    let err = client.report_for("London").await.unwrap_err();

    assert!(matches!(err, Failure::Transport(_)));
    assert!(err.to_string().starts_with("Weather api connection error"));
}
