//! # stencil-cli — Command-Line Tooling for Component Declarations
//!
//! Provides the `stencil` command-line interface for working with component
//! manifests outside a running application.
//!
//! ## Subcommands
//!
//! - `stencil lint` — resolve every declaration in a manifest.
//! - `stencil schema` — print the compiled JSON Schema of a component.
//! - `stencil check` — validate a render request document offline.
//!
//! ```bash
//! stencil lint components.yaml
//! stencil schema components.yaml --component TestComponent --channel kwargs
//! stencil check components.yaml --request request.yaml
//! stencil --config validator.yaml check components.yaml --request request.json
//! ```
//!
//! Every subcommand exits 0 on success and 1 on any failure.

pub mod check;
pub mod lint;
pub mod schema;

use std::path::Path;

use anyhow::{Context, Result};
use stencil_schema::ComponentManifest;
use stencil_validate::ValidatorConfig;

/// Load a component manifest with path context on failure.
pub fn load_manifest(path: &Path) -> Result<ComponentManifest> {
    ComponentManifest::load(path)
        .with_context(|| format!("failed to load manifest {}", path.display()))
}

/// Load the validator configuration, or the defaults when no path is given.
pub fn load_config(path: Option<&Path>) -> Result<ValidatorConfig> {
    match path {
        Some(path) => ValidatorConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display())),
        None => Ok(ValidatorConfig::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_config_path_uses_defaults() {
        let config = load_config(None).unwrap();
        assert_eq!(config, ValidatorConfig::default());
    }

    #[test]
    fn missing_manifest_reports_path() {
        let err = load_manifest(Path::new("/nonexistent/components.yaml")).unwrap_err();
        assert!(format!("{err:#}").contains("/nonexistent/components.yaml"));
    }
}
