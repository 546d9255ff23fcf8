//! Design-token stylesheet generation and related page wiring
//!
//! Nuxt keeps its stylesheet at `app/assets/css/tailwind.css`, Vue at
//! `src/assets/style.css`. The Nuxt flow writes a minimal import first so
//! the shadcn setup script has a valid entry file to reconfigure, then the
//! full token content replaces it afterwards.

use crate::config::{ConfigDocument, Insertion, Section};
use crate::detect::ProjectType;
use crate::templates::TemplateLoader;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Minimal entry content used during the initial Nuxt setup phase
const MINIMAL_STYLE_IMPORT: &str = "@import \"tailwindcss\";\n";

/// Stylesheet path for a project kind
pub fn stylesheet_path(project_type: ProjectType, project_path: &Path) -> PathBuf {
    match project_type {
        ProjectType::Nuxt => project_path
            .join("app")
            .join("assets")
            .join("css")
            .join("tailwind.css"),
        ProjectType::Vue => project_path.join("src").join("assets").join("style.css"),
    }
}

/// Write the design-token stylesheet.
///
/// With `initial_setup` set (Nuxt only), just the bare tailwind import is
/// written; the full content lands after the shadcn setup has run.
pub fn generate_css_variables(
    loader: &TemplateLoader,
    project_type: ProjectType,
    project_path: &Path,
    initial_setup: bool,
) -> Result<()> {
    let css_path = stylesheet_path(project_type, project_path);
    if let Some(parent) = css_path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    if initial_setup && project_type == ProjectType::Nuxt {
        std::fs::write(&css_path, MINIMAL_STYLE_IMPORT)
            .with_context(|| format!("Failed to write stylesheet: {}", css_path.display()))?;
        return Ok(());
    }

    let content = loader.load("styles/tokens.css.template")?;
    std::fs::write(&css_path, content)
        .with_context(|| format!("Failed to write stylesheet: {}", css_path.display()))?;
    Ok(())
}

/// Link the Vue stylesheet from `index.html`, once.
///
/// Missing `index.html` is a skip, not an error; anchor fallbacks cover
/// documents without a closing (or any) head tag.
pub fn update_index_html(project_path: &Path) -> Result<()> {
    let index_path = project_path.join("index.html");
    if !index_path.exists() {
        return Ok(());
    }

    let link = "/src/assets/style.css";
    let section = Section::new(
        "stylesheet-link",
        link,
        vec![
            Insertion::before(
                "</head>",
                format!("  <link href=\"{}\" rel=\"stylesheet\">\n", link),
            ),
            Insertion::after(
                "<head>",
                format!("\n  <link href=\"{}\" rel=\"stylesheet\">", link),
            ),
            Insertion::after(
                "<html>",
                format!("\n<head>\n  <link href=\"{}\" rel=\"stylesheet\">\n</head>", link),
            ),
        ],
    );

    let mut doc = ConfigDocument::load(&index_path)?;
    doc.apply(&section);
    doc.write_if_changed()?;
    Ok(())
}

/// Write the typography starter page showing the fluid type scale
pub fn create_typography_page(
    loader: &TemplateLoader,
    project_path: &Path,
    project_type: ProjectType,
) -> Result<()> {
    let pages_dir = match project_type {
        ProjectType::Nuxt => project_path.join("app").join("pages"),
        ProjectType::Vue => project_path.join("pages"),
    };
    loader.materialize(
        "styles/typography.vue.template",
        &[],
        &pages_dir.join("typography").join("index.vue"),
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
    fn test_initial_nuxt_stylesheet_is_minimal() {
        let dir = TempDir::new().unwrap();
        generate_css_variables(&loader(), ProjectType::Nuxt, dir.path(), true).unwrap();

        let css = std::fs::read_to_string(
            dir.path().join("app/assets/css/tailwind.css"),
        )
        .unwrap();
        assert_eq!(css, MINIMAL_STYLE_IMPORT);
    }

    #[test]
    fn test_full_stylesheet_replaces_minimal_one() {
        let dir = TempDir::new().unwrap();
        generate_css_variables(&loader(), ProjectType::Nuxt, dir.path(), true).unwrap();
        generate_css_variables(&loader(), ProjectType::Nuxt, dir.path(), false).unwrap();

        let css = std::fs::read_to_string(
            dir.path().join("app/assets/css/tailwind.css"),
        )
        .unwrap();
        assert!(css.contains("@theme inline"));
        assert!(css.contains("--color-background"));
    }

    #[test]
    fn test_vue_stylesheet_path() {
        let dir = TempDir::new().unwrap();
        generate_css_variables(&loader(), ProjectType::Vue, dir.path(), false).unwrap();
        assert!(dir.path().join("src/assets/style.css").exists());
    }

    #[test]
    fn test_index_html_link_inserted_once() {
        let dir = TempDir::new().unwrap();
        let index = dir.path().join("index.html");
        std::fs::write(
            &index,
            "<!DOCTYPE html>\n<html>\n<head>\n  <title>demo</title>\n</head>\n<body></body>\n</html>\n",
        )
        .unwrap();

        update_index_html(dir.path()).unwrap();
        update_index_html(dir.path()).unwrap();

        let html = std::fs::read_to_string(&index).unwrap();
        assert_eq!(html.matches("/src/assets/style.css").count(), 1);
        assert!(html.contains("<link href=\"/src/assets/style.css\" rel=\"stylesheet\">\n</head>"));
    }

    #[test]
    fn test_index_html_without_head_gets_one() {
        let dir = TempDir::new().unwrap();
        let index = dir.path().join("index.html");
        std::fs::write(&index, "<html>\n<body></body>\n</html>\n").unwrap();

        update_index_html(dir.path()).unwrap();

        let html = std::fs::read_to_string(&index).unwrap();
        assert!(html.contains("<head>\n  <link href=\"/src/assets/style.css\" rel=\"stylesheet\">\n</head>"));
    }

    #[test]
    fn test_missing_index_html_is_skipped() {
        let dir = TempDir::new().unwrap();
        update_index_html(dir.path()).unwrap();
        assert!(!dir.path().join("index.html").exists());
    }

    #[test]
    fn test_typography_page_locations() {
        let dir = TempDir::new().unwrap();
        create_typography_page(&loader(), dir.path(), ProjectType::Nuxt).unwrap();
        assert!(dir.path().join("app/pages/typography/index.vue").exists());

        let dir = TempDir::new().unwrap();
        create_typography_page(&loader(), dir.path(), ProjectType::Vue).unwrap();
        assert!(dir.path().join("pages/typography/index.vue").exists());
    }
}
