//! Vite config creation and patching for Vue projects
//!
//! The target convention is `vite.config.js`. An existing `.js` config is
//! patched in place; an existing `.ts` config is read, patched, written as
//! `.js`, and the `.ts` file removed so the two never coexist. Absent
//! configs are rendered fresh from the template.

use crate::config::document::{ConfigDocument, Insertion, PatchOutcome, Section};
use crate::templates::TemplateLoader;
use anyhow::{Context, Result};
use std::path::Path;

/// Sections required in an existing config when the design-token setup is on
fn tailwind_sections() -> Vec<Section> {
    vec![
        Section::new(
            "tailwind-import",
            "import tailwindcss from '@tailwindcss/vite'",
            vec![Insertion::after(
                "import { defineConfig } from 'vite'",
                "\nimport tailwindcss from '@tailwindcss/vite'",
            )],
        ),
        Section::new(
            "tailwind-plugin",
            "tailwindcss(),",
            vec![Insertion::after("plugins: [", "\n      tailwindcss(),")],
        ),
    ]
}

/// Outcome summary for reporting which path the engine took
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViteConfigAction {
    Created,
    Patched,
    Migrated,
    Unchanged,
}

/// Create or patch `vite.config.js`, migrating a legacy `.ts` config
pub fn generate_vite_config(
    loader: &TemplateLoader,
    project_path: &Path,
    threejs: bool,
    css_vars: bool,
) -> Result<ViteConfigAction> {
    let js_path = project_path.join("vite.config.js");
    let ts_path = project_path.join("vite.config.ts");

    let (mut doc, migrating) = if js_path.exists() {
        (ConfigDocument::load(&js_path)?, false)
    } else if ts_path.exists() {
        let existing = std::fs::read_to_string(&ts_path)
            .with_context(|| format!("Failed to read config: {}", ts_path.display()))?;
        (ConfigDocument::from_existing(&js_path, existing), true)
    } else {
        let content = render_fresh(loader, threejs, css_vars)?;
        let mut doc = ConfigDocument::load(&js_path)?;
        doc.set_content(content);
        doc.write_if_changed()?;
        return Ok(ViteConfigAction::Created);
    };

    let mut patched = false;
    if css_vars {
        for section in tailwind_sections() {
            if doc.apply(&section) == PatchOutcome::Inserted {
                patched = true;
            }
        }
    }

    if migrating {
        doc.write_if_changed()?;
        std::fs::remove_file(&ts_path)
            .with_context(|| format!("Failed to remove legacy config: {}", ts_path.display()))?;
        return Ok(ViteConfigAction::Migrated);
    }

    if doc.write_if_changed()? {
        debug_assert!(patched);
        Ok(ViteConfigAction::Patched)
    } else {
        Ok(ViteConfigAction::Unchanged)
    }
}

fn render_fresh(loader: &TemplateLoader, threejs: bool, css_vars: bool) -> Result<String> {
    let threejs_chunk = if threejs {
        "              // If you use heavy libs (like Three.js), split them too
              if (id.includes('three')) return 'three-vendor';"
    } else {
        ""
    };

    let tailwind_import = if css_vars {
        "import tailwindcss from '@tailwindcss/vite'\n"
    } else {
        ""
    };

    let tailwind_plugin = if css_vars { "      tailwindcss(),\n" } else { "" };

    Ok(loader.render(
        "vite/vite.config.js.template",
        &[
            ("TAILWIND_IMPORT", tailwind_import),
            ("TAILWIND_PLUGIN", tailwind_plugin),
            ("THREEJS_CHUNK", threejs_chunk),
        ],
    )?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const EXISTING_CONFIG: &str = "import { defineConfig } from 'vite'\nimport vue from '@vitejs/plugin-vue'\n\nexport default defineConfig({\n  plugins: [\n    vue(),\n  ],\n})\n";

    fn loader() -> TemplateLoader {
        TemplateLoader::locate().unwrap()
    }

    #[test]
    fn test_fresh_config_created_from_template() {
        let dir = TempDir::new().unwrap();
        let action = generate_vite_config(&loader(), dir.path(), true, true).unwrap();
        assert_eq!(action, ViteConfigAction::Created);

        let content = std::fs::read_to_string(dir.path().join("vite.config.js")).unwrap();
        assert!(content.contains("tailwindcss(),"));
        assert!(content.contains("three-vendor"));
        assert!(!content.contains("{{"));
    }

    #[test]
    fn test_existing_js_config_gains_tailwind_once() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("vite.config.js");
        std::fs::write(&path, EXISTING_CONFIG).unwrap();

        let action = generate_vite_config(&loader(), dir.path(), false, true).unwrap();
        assert_eq!(action, ViteConfigAction::Patched);

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            content
                .matches("import tailwindcss from '@tailwindcss/vite'")
                .count(),
            1
        );
        assert_eq!(content.matches("tailwindcss(),").count(), 1);
        // Untouched lines survive byte for byte
        assert!(content.contains("import vue from '@vitejs/plugin-vue'"));
        assert!(content.contains("    vue(),"));
    }

    #[test]
    fn test_second_pass_is_a_no_op() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("vite.config.js");
        std::fs::write(&path, EXISTING_CONFIG).unwrap();

        generate_vite_config(&loader(), dir.path(), false, true).unwrap();
        let first = std::fs::read_to_string(&path).unwrap();

        let action = generate_vite_config(&loader(), dir.path(), false, true).unwrap();
        assert_eq!(action, ViteConfigAction::Unchanged);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), first);
    }

    #[test]
    fn test_ts_config_migrates_to_js() {
        let dir = TempDir::new().unwrap();
        let ts_path = dir.path().join("vite.config.ts");
        std::fs::write(&ts_path, EXISTING_CONFIG).unwrap();

        let action = generate_vite_config(&loader(), dir.path(), false, true).unwrap();
        assert_eq!(action, ViteConfigAction::Migrated);

        assert!(!ts_path.exists());
        let js = std::fs::read_to_string(dir.path().join("vite.config.js")).unwrap();
        assert!(js.contains("@tailwindcss/vite"));
    }

    #[test]
    fn test_js_config_wins_over_stale_ts_config() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("vite.config.js"), EXISTING_CONFIG).unwrap();
        std::fs::write(dir.path().join("vite.config.ts"), "export default {}\n").unwrap();

        generate_vite_config(&loader(), dir.path(), false, true).unwrap();

        // The .ts file was not the patch source, and survives untouched
        assert_eq!(
            std::fs::read_to_string(dir.path().join("vite.config.ts")).unwrap(),
            "export default {}\n"
        );
    }

    #[test]
    fn test_customized_config_without_anchors_is_left_intact() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("vite.config.js");
        let customized = "const config = require('./base')\nmodule.exports = config\n";
        std::fs::write(&path, customized).unwrap();

        let action = generate_vite_config(&loader(), dir.path(), false, true).unwrap();
        assert_eq!(action, ViteConfigAction::Unchanged);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), customized);
    }

    #[test]
    fn test_without_css_vars_existing_config_untouched() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("vite.config.js");
        std::fs::write(&path, EXISTING_CONFIG).unwrap();

        let action = generate_vite_config(&loader(), dir.path(), true, false).unwrap();
        assert_eq!(action, ViteConfigAction::Unchanged);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), EXISTING_CONFIG);
    }
}
