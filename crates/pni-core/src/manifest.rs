//! `package.json` reading
//!
//! The manifest is read-only input for detection and dependency checks; it
//! is only ever written by the package manager itself.

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

/// The subset of `package.json` this tool cares about
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PackageManifest {
    #[serde(default)]
    pub dependencies: BTreeMap<String, String>,

    #[serde(default, rename = "devDependencies")]
    pub dev_dependencies: BTreeMap<String, String>,
}

impl PackageManifest {
    /// Read `package.json` from a project directory.
    ///
    /// Returns `None` when the file is missing OR fails to parse; a corrupt
    /// manifest must not abort detection.
    pub fn load(project_dir: &Path) -> Option<Self> {
        let path = project_dir.join("package.json");
        let raw = std::fs::read_to_string(path).ok()?;
        serde_json::from_str(&raw).ok()
    }

    /// Check both dependency maps for a package name
    pub fn has_dependency(&self, name: &str) -> bool {
        self.dependencies.contains_key(name) || self.dev_dependencies.contains_key(name)
    }
}
