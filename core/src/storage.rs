use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_path_to_error as spte;

use crate::errors::PackageError;

/// One raw sensor package: workout code plus positional readings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Package {
    pub code: String,
    pub params: Vec<f64>,
}

impl Package {
    pub fn new(code: &str, params: &[f64]) -> Self {
        Self { code: code.to_string(), params: params.to_vec() }
    }
}

/// Built-in demo packages the driver runs when no file is given.
pub fn demo_packages() -> Vec<Package> {
    vec![
        Package::new("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]),
        Package::new("RUN", &[15000.0, 1.0, 75.0]),
        Package::new("WLK", &[9000.0, 1.0, 75.0, 180.0]),
    ]
}

/// Parse a JSON array of packages. Errors carry the path of the offending field.
pub fn parse_packages(json: &str) -> Result<Vec<Package>, PackageError> {
    let de = &mut serde_json::Deserializer::from_str(json);
    spte::deserialize(de).map_err(|e| PackageError::Parse {
        path: e.path().to_string(),
        message: e.inner().to_string(),
    })
}

/// Read packages from a JSON file on disk.
pub fn load_packages<P: AsRef<Path>>(path: P) -> Result<Vec<Package>, PackageError> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path)?;
    let packages = parse_packages(&contents)?;
    log::info!("loaded {} packages from {}", packages.len(), path.display());
    Ok(packages)
}

/// Write packages to disk as JSON (pretty-print).
pub fn save_packages<P: AsRef<Path>>(packages: &[Package], path: P) -> Result<(), PackageError> {
    let path = path.as_ref();
    let json = serde_json::to_string_pretty(packages)?;
    std::fs::write(path, json)?;
    log::info!("saved {} packages to {}", packages.len(), path.display());
    Ok(())
}
