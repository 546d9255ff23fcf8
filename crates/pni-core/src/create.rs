//! New project creation via the framework's official generator
//!
//! Both generators run as blocking child processes in the parent directory
//! with inherited stdio, so their own interactive prompts work as usual.

use crate::detect::ProjectType;
use crate::exec::run_interactive;
use anyhow::Result;
use std::path::Path;

/// Scaffold a new project of the given kind under `parent_dir`
pub async fn create_app(project_type: ProjectType, parent_dir: &Path, name: &str) -> Result<()> {
    let command = match project_type {
        ProjectType::Nuxt => format!("npx nuxi@latest init {}", name),
        ProjectType::Vue => format!("npm create vue@latest {}", name),
    };
    run_interactive(&command, parent_dir).await
}
