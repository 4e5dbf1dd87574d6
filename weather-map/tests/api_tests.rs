//! Forecast client against a loopback server

mod support;

use weather_map::api::WeatherError;
use weather_map::geo::Coordinate;

use support::{PRAGUE_BODY, client, refused_url, serve};

#[tokio::test]
async fn test_current_weather_success() {
    let mut server = serve(200, PRAGUE_BODY).await;
    let client = client(&server.url);

    let weather = client
        .current_weather(Coordinate::new(50.08, 14.43))
        .await
        .unwrap();

    assert_eq!(weather.temperature, 15.2);
    assert_eq!(weather.wind_speed, 3.4);
    assert_eq!(weather.wind_direction, 270.0);
    assert_eq!(weather.time, "2024-01-01T12:00");

    let request = server.requests.recv().await.unwrap();
    assert!(request.starts_with("GET /v1/forecast?"), "got {request}");
    assert!(
        request.contains("latitude=50.08&longitude=14.43&current_weather=true"),
        "got {request}"
    );
}

#[tokio::test]
async fn test_negative_coordinates_in_query() {
    let mut server = serve(200, PRAGUE_BODY).await;
    let client = client(&server.url);

    client
        .current_weather(Coordinate::new(-33.8688, -70.5))
        .await
        .unwrap();

    let request = server.requests.recv().await.unwrap();
    assert!(request.contains("latitude=-33.8688&longitude=-70.5"), "got {request}");
}

#[tokio::test]
async fn test_server_error_status() {
    let server = serve(500, r#"{"error":true}"#).await;
    let client = client(&server.url);

    let err = client
        .current_weather(Coordinate::new(0.0, 0.0))
        .await
        .unwrap_err();

    match err {
        WeatherError::Status(status) => assert_eq!(status.as_u16(), 500),
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_invalid_body() {
    let server = serve(200, "not json").await;
    let client = client(&server.url);

    let err = client
        .current_weather(Coordinate::new(0.0, 0.0))
        .await
        .unwrap_err();
    assert!(matches!(err, WeatherError::Decode(_)), "got {err:?}");
}

#[tokio::test]
async fn test_missing_current_weather() {
    let server = serve(200, r#"{"latitude": 0.0, "longitude": 0.0}"#).await;
    let client = client(&server.url);

    let err = client
        .current_weather(Coordinate::new(0.0, 0.0))
        .await
        .unwrap_err();
    assert!(matches!(err, WeatherError::Decode(_)), "got {err:?}");
}

#[tokio::test]
async fn test_connection_refused() {
    let client = client(&refused_url().await);

    let err = client
        .current_weather(Coordinate::new(0.0, 0.0))
        .await
        .unwrap_err();
    assert!(matches!(err, WeatherError::Request(_)), "got {err:?}");
}
