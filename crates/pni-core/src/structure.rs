//! App structure scaffolding
//!
//! Writes the entry component, router, and starter pages for the detected
//! project kind, and wires the router plus any detected Vue plugins into an
//! existing `src/main.js`. The main-script patch follows the same
//! best-effort rule as config patching: an unrecognizable file shape is
//! left alone rather than risk producing invalid code.

use crate::manifest::PackageManifest;
use crate::templates::TemplateLoader;
use anyhow::{Context, Result};
use std::path::Path;

/// A Vue plugin this tool knows how to register in `main.js`
struct VuePlugin {
    name: &'static str,
    import: &'static str,
    use_stmt: &'static str,
    /// Some plugins are only wired when their conventional setup file exists
    check_file: Option<&'static str>,
}

const VUE_PLUGINS: &[VuePlugin] = &[
    VuePlugin {
        name: "pinia",
        import: "import { createPinia } from 'pinia'",
        use_stmt: "app.use(createPinia())",
        check_file: None,
    },
    VuePlugin {
        name: "vuex",
        import: "import store from './store'",
        use_stmt: "app.use(store)",
        check_file: Some("src/store/index.js"),
    },
    VuePlugin {
        name: "vue-i18n",
        import: "import i18n from './i18n'",
        use_stmt: "app.use(i18n)",
        check_file: Some("src/i18n/index.js"),
    },
    VuePlugin {
        name: "vue-toastification",
        import: "import Toast from 'vue-toastification'\nimport 'vue-toastification/dist/index.css'",
        use_stmt: "app.use(Toast)",
        check_file: None,
    },
];

/// Set up the Nuxt `app/` directory: entry component and index page
pub fn setup_nuxt_app_structure(loader: &TemplateLoader, project_path: &Path) -> Result<()> {
    let app_dir = project_path.join("app");
    loader.materialize("nuxt/app.vue.template", &[], &app_dir.join("app.vue"))?;
    loader.materialize(
        "nuxt/pages/index.vue.template",
        &[],
        &app_dir.join("pages").join("index.vue"),
    )?;
    Ok(())
}

/// Set up the Vue `src/` directory: entry component, router, starter pages,
/// and the `main.js` wiring for router and detected plugins
pub fn setup_vue_app_structure(loader: &TemplateLoader, project_path: &Path) -> Result<()> {
    let src_dir = project_path.join("src");

    loader.materialize("vue/App.vue.template", &[], &src_dir.join("App.vue"))?;
    loader.materialize(
        "vue/router/index.js.template",
        &[],
        &src_dir.join("router").join("index.js"),
    )?;
    loader.materialize(
        "vue/pages/Home.vue.template",
        &[],
        &src_dir.join("pages").join("Home.vue"),
    )?;
    loader.materialize(
        "vue/pages/Typography.vue.template",
        &[],
        &src_dir.join("pages").join("Typography.vue"),
    )?;

    let plugins = detect_vue_plugins(project_path);
    wire_main_script(loader, project_path, &plugins)?;

    Ok(())
}

/// Plugins declared in the manifest whose setup conventions are satisfied
fn detect_vue_plugins(project_path: &Path) -> Vec<&'static VuePlugin> {
    let Some(manifest) = PackageManifest::load(project_path) else {
        return Vec::new();
    };

    VUE_PLUGINS
        .iter()
        .filter(|plugin| manifest.has_dependency(plugin.name))
        .filter(|plugin| match plugin.check_file {
            Some(rel) => {
                let js = project_path.join(rel);
                let ts = js.with_extension("ts");
                js.exists() || ts.exists()
            }
            None => true,
        })
        .collect()
}

/// Ensure `src/main.js` imports and registers the router and plugins.
///
/// An existing `main.ts` is patched and the result written as `main.js`
/// (the legacy file is left in place). A missing entry script is rendered
/// fresh from the template.
fn wire_main_script(
    loader: &TemplateLoader,
    project_path: &Path,
    plugins: &[&VuePlugin],
) -> Result<()> {
    let src_dir = project_path.join("src");
    let main_js = src_dir.join("main.js");
    let main_ts = src_dir.join("main.ts");

    let source = if main_js.exists() {
        Some(main_js.clone())
    } else if main_ts.exists() {
        Some(main_ts.clone())
    } else {
        None
    };

    let Some(source) = source else {
        let mut imports = String::new();
        let mut uses = String::new();
        for plugin in plugins {
            imports.push_str(plugin.import);
            imports.push('\n');
            uses.push_str(plugin.use_stmt);
            uses.push('\n');
        }
        return loader.materialize(
            "vue/main.js.template",
            &[("PLUGIN_IMPORTS", &imports), ("PLUGIN_USES", &uses)],
            &main_js,
        );
    };

    let mut content = std::fs::read_to_string(&source)
        .with_context(|| format!("Failed to read entry script: {}", source.display()))?;

    if content.contains("import router") {
        return Ok(());
    }

    // Import block goes right after the createApp import
    const CREATE_APP_IMPORT: &str = "import { createApp } from 'vue'";
    if content.contains(CREATE_APP_IMPORT) {
        let mut imports = String::from("import router from './router'");
        for plugin in plugins {
            let first_line = plugin.import.lines().next().unwrap_or(plugin.import);
            if !content.contains(first_line) {
                imports.push('\n');
                imports.push_str(plugin.import);
            }
        }
        content = content.replace(
            CREATE_APP_IMPORT,
            &format!("{}\n{}", CREATE_APP_IMPORT, imports),
        );
    }

    if content.contains("createApp") {
        let mut use_chain = String::from("app.use(router)");
        for plugin in plugins {
            if !content.contains(plugin.use_stmt) {
                use_chain.push('\n');
                use_chain.push_str(plugin.use_stmt);
            }
        }

        if let Some(rewritten) = rewrite_chained_create_app(&content, &use_chain) {
            content = rewritten;
        } else if content.contains("const app = createApp") {
            if !content.contains("app.use(router)") {
                content = insert_after_create_app_binding(&content, &use_chain);
            } else {
                // Router already registered without an import; only add the
                // missing plugin registrations
                for plugin in plugins {
                    if !content.contains(plugin.use_stmt) {
                        if let Some(pos) = find_statement_end(&content, "app.use(") {
                            content.insert_str(pos, &format!("\n{}", plugin.use_stmt));
                        }
                    }
                }
            }
        }
    }

    let dest = if source == main_ts { &main_js } else { &source };
    std::fs::write(dest, content)
        .with_context(|| format!("Failed to write entry script: {}", dest.display()))?;
    Ok(())
}

/// Rewrite a chained one-liner like `createApp(App).mount('#app')` into a
/// `const app = ...` binding followed by the use chain.
///
/// Returns `None` when the content does not have that shape.
fn rewrite_chained_create_app(content: &str, use_chain: &str) -> Option<String> {
    let start = content.find("createApp(")?;
    let open = start + "createApp".len();
    let close = content[open..].find(')')? + open;
    let rest = &content[close + 1..];
    if !(rest.starts_with(".use(") || rest.starts_with(".mount(")) {
        return None;
    }

    let expr = &content[start..=close];
    let mut tail = rest;

    // Drop intermediate .use(...) calls; their registrations are re-added
    // through the use chain when still installed
    while tail.starts_with(".use(") {
        let use_close = tail.find(')')?;
        tail = &tail[use_close + 1..];
    }
    if !tail.starts_with(".mount(") {
        return None;
    }

    Some(format!(
        "{}const app = {}\n\n{}\napp{}",
        &content[..start],
        expr,
        use_chain,
        tail
    ))
}

/// Insert the use chain after the `const app = createApp(...)` statement
fn insert_after_create_app_binding(content: &str, use_chain: &str) -> String {
    let Some(start) = content.find("const app = createApp(") else {
        return content.to_string();
    };
    let open = start + "const app = createApp".len();
    let Some(close) = content[open..].find(')').map(|idx| idx + open) else {
        return content.to_string();
    };

    let mut result = content.to_string();
    result.insert_str(close + 1, &format!("\n\n{}", use_chain));
    result
}

/// Byte offset just past the closing paren of the first `needle(...)` call
fn find_statement_end(content: &str, needle: &str) -> Option<usize> {
    let start = content.find(needle)?;
    let open = start + needle.len();
    content[open..].find(')').map(|idx| idx + open + 1)
}
