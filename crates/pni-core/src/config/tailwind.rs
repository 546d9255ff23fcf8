//! Legacy style-pipeline configs (Tailwind v3 + PostCSS)
//!
//! The Tailwind v4 vite-plugin path needs neither of these files; they are
//! kept for projects that still run the classic pipeline.

use crate::detect::ProjectType;
use crate::templates::TemplateLoader;
use anyhow::Result;
use std::path::Path;

/// Write `tailwind.config.js` with content globs for the project kind
pub fn generate_tailwind_config(
    loader: &TemplateLoader,
    project_path: &Path,
    project_type: ProjectType,
) -> Result<()> {
    let content_paths = match project_type {
        ProjectType::Nuxt => {
            "    './components/**/*.{js,vue,ts}',
    './layouts/**/*.vue',
    './pages/**/*.vue',
    './plugins/**/*.{js,ts}',
    './app.vue',
    './error.vue',"
        }
        ProjectType::Vue => {
            "    './index.html',
    './src/**/*.{vue,js,ts,jsx,tsx}',"
        }
    };

    loader.materialize(
        "tailwind/tailwind.config.js.template",
        &[("CONTENT_PATHS", content_paths)],
        &project_path.join("tailwind.config.js"),
    )
}

/// Write `postcss.config.js`
pub fn generate_postcss_config(loader: &TemplateLoader, project_path: &Path) -> Result<()> {
    loader.materialize(
        "postcss/postcss.config.js.template",
        &[],
        &project_path.join("postcss.config.js"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn loader() -> TemplateLoader {
        TemplateLoader::locate().unwrap()
    }

    #[test]
    fn test_nuxt_content_globs() {
        let dir = TempDir::new().unwrap();
        generate_tailwind_config(&loader(), dir.path(), ProjectType::Nuxt).unwrap();

        let content = std::fs::read_to_string(dir.path().join("tailwind.config.js")).unwrap();
        assert!(content.contains("'./layouts/**/*.vue'"));
        assert!(!content.contains("'./index.html'"));
    }

    #[test]
    fn test_vue_content_globs() {
        let dir = TempDir::new().unwrap();
        generate_tailwind_config(&loader(), dir.path(), ProjectType::Vue).unwrap();

        let content = std::fs::read_to_string(dir.path().join("tailwind.config.js")).unwrap();
        assert!(content.contains("'./src/**/*.{vue,js,ts,jsx,tsx}'"));
        assert!(!content.contains("layouts"));
    }

    #[test]
    fn test_postcss_config_written() {
        let dir = TempDir::new().unwrap();
        generate_postcss_config(&loader(), dir.path()).unwrap();

        let content = std::fs::read_to_string(dir.path().join("postcss.config.js")).unwrap();
        assert!(content.contains("tailwindcss"));
    }
}
