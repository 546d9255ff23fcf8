//! Nuxt config generation
//!
//! The Nuxt config is regenerated wholesale from the template on every run,
//! existing file or not. Incremental patching was abandoned for this file;
//! the module list and vite/shadcn blocks interlock too tightly for
//! anchor-based splicing to stay coherent.

use crate::templates::TemplateLoader;
use anyhow::Result;
use std::path::Path;

/// Nuxt modules registered in the generated config
const NUXT_MODULES: &[&str] = &[
    "lenis/nuxt",
    "shadcn-nuxt",
    "@nuxtjs/seo",
    "@nuxt/image",
    "@nuxtjs/device",
];

/// Stylesheet path registered in the config's `css` array
const CSS_IMPORT: &str = "~/assets/css/tailwind.css";

/// Write `nuxt.config.ts`, replacing any existing file
pub fn generate_nuxt_config(
    loader: &TemplateLoader,
    project_path: &Path,
    _threejs: bool,
    css_vars: bool,
) -> Result<()> {
    let tailwind_import = if css_vars {
        "import tailwindcss from '@tailwindcss/vite'\n\n"
    } else {
        ""
    };

    let css_import = if css_vars {
        format!("  css: ['{}'],\n\n", CSS_IMPORT)
    } else {
        String::new()
    };

    let vite_config = if css_vars {
        "  vite: {
    plugins: [tailwindcss()],
    esbuild: {
      drop: process.env.NODE_ENV === 'production' ? ['console', 'debugger'] : [],
    },
    build: {
      // Ensures CSS is also minified correctly by lightningcss (default in Vite 6)
      cssMinify: 'lightningcss'
    }
  },

"
    } else {
        ""
    };

    let shadcn_config = if css_vars {
        "  shadcn: {
    prefix: '',
    componentDir: '@/components/ui',
  },

"
    } else {
        ""
    };

    let modules = NUXT_MODULES
        .iter()
        .map(|module| format!("'{}'", module))
        .collect::<Vec<_>>()
        .join(", ");

    loader.materialize(
        "nuxt/nuxt.config.ts.template",
        &[
            ("TAILWIND_IMPORT", tailwind_import),
            ("CSS_IMPORT", css_import.as_str()),
            ("VITE_CONFIG", vite_config),
            ("MODULES", modules.as_str()),
            ("SHADCN_CONFIG", shadcn_config),
        ],
        &project_path.join("nuxt.config.ts"),
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
    fn test_existing_config_is_replaced() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("nuxt.config.ts");
        std::fs::write(&config_path, "export default defineNuxtConfig({})\n").unwrap();

        generate_nuxt_config(&loader(), dir.path(), false, true).unwrap();

        let content = std::fs::read_to_string(&config_path).unwrap();
        assert!(content.contains("defineNuxtConfig"));
        assert!(content.contains("'lenis/nuxt', 'shadcn-nuxt', '@nuxtjs/seo', '@nuxt/image', '@nuxtjs/device'"));
        assert!(content.contains("import tailwindcss from '@tailwindcss/vite'"));
        assert!(content.contains("css: ['~/assets/css/tailwind.css']"));
        assert!(content.contains("componentDir: '@/components/ui'"));
    }

    #[test]
    fn test_without_css_vars_the_style_blocks_disappear() {
        let dir = TempDir::new().unwrap();
        generate_nuxt_config(&loader(), dir.path(), true, false).unwrap();

        let content = std::fs::read_to_string(dir.path().join("nuxt.config.ts")).unwrap();
        assert!(!content.contains("@tailwindcss/vite"));
        assert!(!content.contains("css:"));
        assert!(!content.contains("shadcn:"));
        assert!(!content.contains("{{"));
    }

    #[test]
    fn test_regeneration_is_stable() {
        let dir = TempDir::new().unwrap();
        generate_nuxt_config(&loader(), dir.path(), true, true).unwrap();
        let first = std::fs::read_to_string(dir.path().join("nuxt.config.ts")).unwrap();

        generate_nuxt_config(&loader(), dir.path(), true, true).unwrap();
        let second = std::fs::read_to_string(dir.path().join("nuxt.config.ts")).unwrap();
        assert_eq!(first, second);
    }
}
