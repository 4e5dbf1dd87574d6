//! Weather Map
//!
//! # Usage
//!
//! ```sh
//! # Start over Prague
//! cargo run -p weather-map
//!
//! # Start over Sydney, zoomed in, with action logging
//! cargo run -p weather-map -- --lat -33.87 --lon 151.21 -z 5 --debug
//! ```

use std::io;

use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::info;

use weather_map::api::WeatherClient;
use weather_map::components::{MarkerIcon, WeatherMapView, install_default_icon};
use weather_map::config::{Args, Config};
use weather_map::geo::Viewport;
use weather_map::logging;
use weather_map::runtime::Runtime;
use weather_map::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from(Args::parse());
    logging::init(&config)?;
    install_default_icon(MarkerIcon::default());

    info!(
        lat = config.center.lat,
        lon = config.center.lon,
        zoom = config.zoom,
        api_url = %config.api_url,
        "Starting weather map"
    );

    // ===== Terminal setup =====
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run the app and capture result
    let result = run_app(&mut terminal, &config).await;

    // ===== Cleanup =====
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    info!("Exiting");
    Ok(result?)
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    config: &Config,
) -> io::Result<()> {
    let state = AppState::new(Viewport::new(config.center, config.zoom));
    let client = WeatherClient::new(config.api_url.clone());
    let mut runtime = Runtime::new(state, client).with_action_log(config.debug);

    let mut view = WeatherMapView::new();
    runtime.run(terminal, &mut view).await
}
