//! shadcn-nuxt component setup
//!
//! Runs after the minimal stylesheet exists and before the full token
//! content is regenerated; the init script rewrites the stylesheet, which
//! is why the ordering is fixed in the orchestrator.

use crate::exec::run_interactive;
use crate::pm::PackageManager;
use anyhow::{Context, Result};
use std::path::Path;

const SSR_WIDTH_PLUGIN: &str = "import { provideSSRWidth } from '@vueuse/core'

export default defineNuxtPlugin((nuxtApp) => {
  provideSSRWidth(1024, nuxtApp.vueApp)
})
";

/// Register the shadcn-nuxt module and generate the starter button component
pub async fn setup_shadcn_nuxt(project_path: &Path, pm: PackageManager) -> Result<()> {
    let dlx = pm.dlx_prefix();

    // Module registration needs a resolvable stylesheet entry, written by
    // the caller beforehand
    run_interactive(&format!("{} nuxi@latest module add shadcn-nuxt", dlx), project_path).await?;

    write_ssr_width_plugin(project_path)?;

    run_interactive(&format!("{} nuxi@latest prepare", dlx), project_path).await?;
    run_interactive(&format!("{} shadcn-vue@latest init", dlx), project_path).await?;
    run_interactive(&format!("{} shadcn-vue@latest add button", dlx), project_path).await?;

    Ok(())
}

/// Write the SSR width plugin so @vueuse breakpoints hydrate consistently
fn write_ssr_width_plugin(project_path: &Path) -> Result<()> {
    let plugin_dir = if project_path.join("app").exists() {
        project_path.join("app").join("plugins")
    } else {
        project_path.join("plugins")
    };
    std::fs::create_dir_all(&plugin_dir)
        .with_context(|| format!("Failed to create directory: {}", plugin_dir.display()))?;
    let plugin_path = plugin_dir.join("ssr-width.ts");
    std::fs::write(&plugin_path, SSR_WIDTH_PLUGIN)
        .with_context(|| format!("Failed to write plugin: {}", plugin_path.display()))?;
    Ok(())
}
