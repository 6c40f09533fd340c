//! Solar System Web Server
//!
//! Serves the 3D viewer entry page plus the Sun and planet lookup API.

use solar_system::{build_router, AppState, Catalog, Config, Error};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let config = Config::from_env().map_err(Error::from)?;

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_filter().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Solar System Web Server");
    if config.debug {
        tracing::debug!("Debug mode enabled: {:?}", config);
    }

    let catalog = Catalog::global();
    tracing::info!(
        "Loaded {} planets: {}",
        catalog.len(),
        catalog.planet_ids().collect::<Vec<_>>().join(", ")
    );

    let app = build_router(AppState::new(catalog), &config);
    let addr = config.addr();

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            tracing::error!("Failed to bind to {}: {}", addr, e);
            if e.kind() == std::io::ErrorKind::AddrInUse {
                tracing::error!(
                    "Port {} is already in use. Set SOLAR_PORT to choose another",
                    config.port
                );
            }
            return Err(Error::Bind { addr, source: e }.into());
        }
    };

    print_banner(&config);

    axum::serve(listener, app).await.map_err(Error::Serve)?;

    Ok(())
}

fn print_banner(config: &Config) {
    tracing::info!("");
    tracing::info!("===========================================");
    tracing::info!("  3D ANIMATED SOLAR SYSTEM");
    tracing::info!("===========================================");
    tracing::info!("  Open your browser and go to: http://localhost:{}", config.port);
    tracing::info!("  Listening on http://{}", config.addr());
    tracing::info!("");
    tracing::info!("API Endpoints:");
    tracing::info!("  /api/planet-info/:name - Planet facts ({{}} if unknown)");
    tracing::info!("  /api/sun-info          - Sun facts");
    tracing::info!("  /api/health            - Health check");
    tracing::info!("");
    tracing::info!("Controls:");
    tracing::info!("  - Left Mouse: Rotate camera");
    tracing::info!("  - Right Mouse: Pan camera");
    tracing::info!("  - Scroll: Zoom in/out");
    tracing::info!("  - Click on planets for info");
    tracing::info!("===========================================");
}
