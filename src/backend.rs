//! Native static host for the Trunk `dist/` bundle.
//!
//! Serves built assets and falls back to `index.html` for any unknown path so
//! in-page anchors survive reloads. There are no API routes.

use axum::{
    extract::Request,
    http::{header, HeaderValue},
    middleware::{self, Next},
    response::Response,
    Router,
};
use serde_json::json;
use std::{
    net::{IpAddr, Ipv4Addr, SocketAddr},
    path::PathBuf,
    time::Instant,
};
use tower_http::services::{ServeDir, ServeFile};

use crate::telemetry::{self, log_event, LogLevel, DEFAULT_LOG_LEVEL};

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_BIND_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
const DEFAULT_DIST_DIR: &str = "dist";
const PORT_BOUNDS: (u16, u16) = (1, u16::MAX);
const INDEX_CACHE_CONTROL: &str = "no-cache";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HostConfig {
    pub bind_host: IpAddr,
    pub port: u16,
    pub dist_dir: PathBuf,
    pub log_level: LogLevel,
}

impl HostConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the config from any variable source; unusable values keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let port = parse_u16_with_bounds(lookup("PORT"), DEFAULT_PORT, PORT_BOUNDS);
        let bind_host = non_empty(lookup("BIND_HOST"))
            .and_then(|value| value.parse::<IpAddr>().ok())
            .unwrap_or(DEFAULT_BIND_HOST);
        let dist_dir = non_empty(lookup("DIST_DIR"))
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DIST_DIR));
        let log_level = non_empty(lookup("LOG_LEVEL"))
            .and_then(|value| LogLevel::parse(&value))
            .unwrap_or(DEFAULT_LOG_LEVEL);

        Self {
            bind_host,
            port,
            dist_dir,
            log_level,
        }
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_host, self.port)
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn parse_u16_with_bounds(value: Option<String>, default: u16, bounds: (u16, u16)) -> u16 {
    value
        .and_then(|value| value.trim().parse::<u16>().ok())
        .filter(|value| (bounds.0..=bounds.1).contains(value))
        .unwrap_or(default)
}

pub fn router(config: &HostConfig) -> Router {
    let index = config.dist_dir.join("index.html");
    let static_service = ServeDir::new(&config.dist_dir).fallback(ServeFile::new(index));

    Router::new()
        .fallback_service(static_service)
        .layer(middleware::from_fn(log_request))
}

async fn log_request(request: Request, next: Next) -> Response {
    let started = Instant::now();
    let method = request.method().to_string();
    let path = request.uri().path().to_string();

    let mut response = next.run(request).await;

    let is_html = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.starts_with("text/html"));
    if is_html {
        response
            .headers_mut()
            .insert(header::CACHE_CONTROL, HeaderValue::from_static(INDEX_CACHE_CONTROL));
    }

    log_event(
        LogLevel::Info,
        "http_request",
        json!({
            "method": method,
            "path": path,
            "status": response.status().as_u16(),
            "duration_ms": started.elapsed().as_millis() as u64,
        }),
    );

    response
}

pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = HostConfig::from_env();
    telemetry::init(config.log_level);

    if !config.dist_dir.join("index.html").is_file() {
        log_event(
            LogLevel::Warn,
            "dist_missing",
            json!({
                "dist_dir": config.dist_dir.display().to_string(),
                "hint": "run `trunk build --release` first",
            }),
        );
    }

    let app = router(&config);
    let address = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(address).await?;

    log_event(
        LogLevel::Info,
        "server_listening",
        json!({
            "address": address.to_string(),
            "dist_dir": config.dist_dir.display().to_string(),
            "log_level": config.log_level.as_str(),
        }),
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    log_event(LogLevel::Info, "server_stopped", json!({}));
    Ok(())
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        log_event(
            LogLevel::Warn,
            "shutdown_signal_failed",
            json!({ "error": error.to_string() }),
        );
        std::future::pending::<()>().await;
    }
}
