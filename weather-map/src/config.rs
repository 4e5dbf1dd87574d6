//! Command-line configuration

use std::path::PathBuf;

use clap::Parser;

use crate::geo::Coordinate;

/// Open-Meteo forecast endpoint
pub const DEFAULT_API_URL: &str = "https://api.open-meteo.com/v1/forecast";

/// Prague
pub const DEFAULT_CENTER: Coordinate = Coordinate::new(50.08, 14.43);
pub const DEFAULT_ZOOM: u8 = 3;

pub const DEFAULT_LOG_FILE: &str = "weather-map.log";

/// Weather Map - click anywhere on the map to see current weather there
#[derive(Parser, Debug)]
#[command(name = "weather-map")]
#[command(about = "Click anywhere on the map to see current weather for that point")]
pub struct Args {
    /// Latitude of the initial map center
    #[arg(long, default_value_t = DEFAULT_CENTER.lat, allow_negative_numbers = true)]
    pub lat: f64,

    /// Longitude of the initial map center
    #[arg(long, default_value_t = DEFAULT_CENTER.lon, allow_negative_numbers = true)]
    pub lon: f64,

    /// Initial zoom level (0 = whole world, 6 = closest)
    #[arg(long, short, default_value_t = DEFAULT_ZOOM)]
    pub zoom: u8,

    /// Forecast endpoint queried for current weather
    #[arg(long, default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Log file (the terminal itself is used by the UI)
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Log filter, e.g. "info" or "weather_map=debug"
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Enable diagnostics: per-action logging and debug log level
    #[arg(long)]
    pub debug: bool,
}

/// Resolved application configuration
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub center: Coordinate,
    pub zoom: u8,
    pub api_url: String,
    pub log_file: PathBuf,
    pub log_level: String,
    pub debug: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            center: DEFAULT_CENTER,
            zoom: DEFAULT_ZOOM,
            api_url: DEFAULT_API_URL.to_string(),
            log_file: std::env::temp_dir().join(DEFAULT_LOG_FILE),
            log_level: "info".to_string(),
            debug: false,
        }
    }
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        let log_level = if args.debug {
            "debug".to_string()
        } else {
            args.log_level
        };

        Self {
            center: Coordinate::new(args.lat, args.lon),
            zoom: args.zoom,
            api_url: args.api_url,
            log_file: args
                .log_file
                .unwrap_or_else(|| std::env::temp_dir().join(DEFAULT_LOG_FILE)),
            log_level,
            debug: args.debug,
        }
    }
}
