//! Loopback HTTP responder standing in for the forecast endpoint

#![allow(dead_code)]

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::mpsc;

pub const PRAGUE_BODY: &str = r#"{
    "latitude": 50.08,
    "longitude": 14.43,
    "current_weather": {
        "temperature": 15.2,
        "windspeed": 3.4,
        "winddirection": 270,
        "weathercode": 3,
        "time": "2024-01-01T12:00"
    }
}"#;

/// A server answering every request with the same status and body
pub struct FakeForecast {
    pub url: String,
    /// Request lines (`GET /v1/forecast?... HTTP/1.1`) in arrival order
    pub requests: mpsc::UnboundedReceiver<String>,
}

pub async fn serve(status: u16, body: &'static str) -> FakeForecast {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let (tx, requests) = mpsc::unbounded_channel();

    tokio::spawn(async move {
        loop {
            let Ok((mut socket, _)) = listener.accept().await else {
                return;
            };
            let tx = tx.clone();
            tokio::spawn(async move {
                let mut buf = Vec::new();
                let mut chunk = [0u8; 1024];
                while !buf.windows(4).any(|w| w == b"\r\n\r\n") {
                    match socket.read(&mut chunk).await {
                        Ok(0) | Err(_) => return,
                        Ok(n) => buf.extend_from_slice(&chunk[..n]),
                    }
                }
                let request = String::from_utf8_lossy(&buf);
                let line = request.lines().next().unwrap_or_default().to_string();
                let _ = tx.send(line);

                let response = format!(
                    "HTTP/1.1 {status} Test\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
                    body.len()
                );
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.shutdown().await;
            });
        }
    });

    FakeForecast {
        url: format!("http://{addr}/v1/forecast"),
        requests,
    }
}

/// URL of a port nothing listens on
pub async fn refused_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}/v1/forecast")
}

/// Client that talks to the loopback server directly, ignoring proxy settings
pub fn client(url: &str) -> weather_map::api::WeatherClient {
    let http = reqwest::Client::builder().no_proxy().build().unwrap();
    weather_map::api::WeatherClient::with_http_client(http, url)
}
