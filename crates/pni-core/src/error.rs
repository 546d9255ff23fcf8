//! Fatal error conditions surfaced to the user
//!
//! Anchor misses during config patching are deliberately NOT errors; they
//! are reported as [`crate::config::PatchOutcome::AnchorMissing`] and the
//! file is left intact.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort the current command
#[derive(Debug, Error)]
pub enum SetupError {
    /// No `package.json` found walking up from the invocation directory
    #[error("Project root not found. Please run this command in a Nuxt/Vue project.")]
    ProjectRootNotFound,

    /// The `three` package is not declared in the project manifest
    #[error("Three.js is not installed. Please install it first: npm install three")]
    ThreeNotInstalled,

    /// Detection yielded neither Nuxt nor Vue
    #[error("Project type not supported. Please run this command in a Nuxt or Vue project.")]
    UnsupportedProjectType,

    /// The conventional source folder (`app/` for Nuxt, `src/` for Vue) is missing
    #[error("{folder} folder not found. Please run this command in a {framework} project{hint}.")]
    SourceFolderNotFound {
        folder: &'static str,
        framework: &'static str,
        hint: &'static str,
    },

    /// A new project must be created but no name was collected
    #[error("Project name is required to create a new project.")]
    MissingProjectName,

    /// Child process exited non-zero
    #[error("Command `{command}` failed with exit code {code}.")]
    CommandFailed { command: String, code: i32 },

    /// Neither template search root exists
    #[error("Template directory not found. Expected at: {} or {}", .primary.display(), .fallback.display())]
    TemplateRootNotFound { primary: PathBuf, fallback: PathBuf },

    /// A named template file is missing from the resolved root
    #[error("Template not found: {}", .0.display())]
    TemplateMissing(PathBuf),

    /// Target of a verbatim directory copy already exists
    #[error("{0} directory already exists. Please remove it first.")]
    DestinationExists(String),
}
