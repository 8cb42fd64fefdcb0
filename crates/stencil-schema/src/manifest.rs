//! # Component Manifests
//!
//! A manifest declares components and their type positions in YAML, for
//! tooling that works without compiled component code:
//!
//! ```yaml
//! components:
//!   - name: TestComponent
//!     types:
//!       args: { tuple: [int, str, int] }
//!       kwargs: { record: { fields: { var1: int, var2: str, var3: int } } }
//!       data: any
//! ```
//!
//! Omitted positions, `any`, and `null` are unchecked.

use std::path::Path;

use serde::{Deserialize, Serialize};
use stencil_core::{ComponentName, ComponentTypeSpec};

use crate::document::parse_yaml;
use crate::error::SchemaError;

/// One declared component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ComponentDeclaration {
    /// Component class name.
    pub name: ComponentName,
    /// Declared type positions.
    #[serde(default)]
    pub types: ComponentTypeSpec,
}

/// A set of component declarations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ComponentManifest {
    /// Declared components, in file order.
    #[serde(default)]
    pub components: Vec<ComponentDeclaration>,
}

impl ComponentManifest {
    /// Parse a manifest from YAML text.
    pub fn from_yaml_str(content: &str) -> Result<Self, SchemaError> {
        Self::parse(content, "<inline>")
    }

    /// Load a manifest from a YAML file.
    pub fn load(path: &Path) -> Result<Self, SchemaError> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content, &path.display().to_string())
    }

    fn parse(content: &str, origin: &str) -> Result<Self, SchemaError> {
        let fail = |reason: String| SchemaError::ManifestLoad {
            path: origin.to_string(),
            reason,
        };

        // Externally tagged descriptors go through a JSON value so YAML
        // single-key maps read as enum variants.
        let value = parse_yaml(content).map_err(fail)?;
        let manifest: Self = serde_json::from_value(value).map_err(|e| fail(e.to_string()))?;

        let mut seen = std::collections::BTreeSet::new();
        for decl in &manifest.components {
            if !seen.insert(decl.name.as_str()) {
                return Err(fail(format!("component '{}' is declared twice", decl.name)));
            }
        }
        Ok(manifest)
    }

    /// Find a declaration by component name.
    pub fn find(&self, name: &str) -> Option<&ComponentDeclaration> {
        self.components.iter().find(|c| c.name.as_str() == name)
    }
}
