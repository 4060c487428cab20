//! Configuration loading and management for the roster service.
//!
//! This module loads the service settings and the optional startup seed
//! roster from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use roster_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/roster").unwrap();
//! println!("Loaded service: {}", config.service().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{SeedConfig, SeedEmployee, ServiceConfig, ServiceSettings};
