//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the roster
//! service configuration from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};
use crate::models::{EmployeeDraft, NewEmployee};
use crate::roster::validate_employee;

use super::types::{SeedConfig, ServiceConfig, ServiceSettings};

/// Loads and provides access to the service configuration.
///
/// # Directory Structure
///
/// ```text
/// config/roster/
/// ├── service.yaml   # Service name and bind address (required)
/// └── seed.yaml      # Employees loaded at startup (optional)
/// ```
///
/// # Example
///
/// ```no_run
/// use roster_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/roster").unwrap();
/// println!("Serving {} on {}", loader.service().name, loader.service().bind);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    service: ServiceConfig,
    seed: SeedConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - `service.yaml` is missing
    /// - Any file contains invalid YAML
    /// - Any required field is missing from the configuration
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let service = Self::load_yaml::<ServiceConfig>(&path.join("service.yaml"))?;

        let seed_path = path.join("seed.yaml");
        let seed = if seed_path.exists() {
            Self::load_yaml::<SeedConfig>(&seed_path)?
        } else {
            SeedConfig::default()
        };

        Ok(Self { service, seed })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the service settings.
    pub fn service(&self) -> &ServiceSettings {
        &self.service.service
    }

    /// Validates and returns the seed employees, in file order.
    ///
    /// Fails with `InvalidSeed` on the first record that does not pass
    /// validation.
    pub fn seed_employees(&self) -> EngineResult<Vec<NewEmployee>> {
        self.seed
            .employees
            .iter()
            .cloned()
            .enumerate()
            .map(|(index, seed)| {
                let draft: EmployeeDraft = seed.into();
                validate_employee(&draft).map_err(|e| EngineError::InvalidSeed {
                    index,
                    message: e.to_string(),
                })
            })
            .collect()
    }
}
