//! Project type detection
//!
//! Classification is a pure function of directory state: config file probes
//! first, then manifest dependency checks. First match wins.

use crate::manifest::PackageManifest;
use std::fmt;
use std::path::Path;

/// Supported framework targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProjectType {
    Nuxt,
    Vue,
}

impl ProjectType {
    pub fn display_name(&self) -> &'static str {
        match self {
            ProjectType::Nuxt => "Nuxt",
            ProjectType::Vue => "Vue",
        }
    }
}

impl fmt::Display for ProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Nuxt config filenames checked before falling back to the manifest
const NUXT_CONFIG_FILES: &[&str] = &["nuxt.config.ts", "nuxt.config.js", "nuxt.config.mjs"];

/// Vite config filenames that mark a Vue project
const VITE_CONFIG_FILES: &[&str] = &["vite.config.ts", "vite.config.js", "vite.config.mjs"];

/// Legacy vue-cli config filenames that also mark a Vue project
const VUE_CONFIG_FILES: &[&str] = &["vue.config.js", "vue.config.ts"];

fn any_exists(dir: &Path, names: &[&str]) -> bool {
    names.iter().any(|name| dir.join(name).exists())
}

/// Classify the project in `cwd`, or `None` when nothing recognizable exists.
///
/// A manifest that fails to parse is treated as absent; detection continues.
pub fn detect_project_type(cwd: &Path) -> Option<ProjectType> {
    if any_exists(cwd, NUXT_CONFIG_FILES) {
        return Some(ProjectType::Nuxt);
    }

    let manifest = PackageManifest::load(cwd);

    if let Some(manifest) = &manifest {
        if manifest.has_dependency("nuxt") || manifest.has_dependency("@nuxt/kit") {
            return Some(ProjectType::Nuxt);
        }
    }

    if any_exists(cwd, VITE_CONFIG_FILES) || any_exists(cwd, VUE_CONFIG_FILES) {
        return Some(ProjectType::Vue);
    }

    if let Some(manifest) = &manifest {
        if manifest.has_dependency("vue") && !manifest.has_dependency("nuxt") {
            return Some(ProjectType::Vue);
        }
    }

    None
}
