//! Solar System facts server
//!
//! Serves the viewer entry page and read-only JSON lookups for the Sun and
//! the eight planets. All facts live in a fixed, process-wide [`catalog`].

pub mod bodies;
pub mod catalog;
pub mod config;
pub mod error;
pub mod router;
pub mod routes;
pub mod state;

pub use bodies::{Planet, PlanetInfo, Sun};
pub use catalog::{get_planet, get_sun, Catalog};
pub use config::Config;
pub use error::{ConfigError, Error};
pub use router::build_router;
pub use state::AppState;
