//! Config file generation and patching
//!
//! Each target file runs the same per-file state machine: absent files are
//! rendered whole from a template, present files are patched section by
//! section through [`document::ConfigDocument`], and nothing is written
//! unless content actually changed.

pub mod document;
pub mod nuxt;
pub mod tailwind;
pub mod vite;

pub use document::{ConfigDocument, Insertion, PatchOutcome, Placement, Section};
pub use nuxt::generate_nuxt_config;
pub use tailwind::{generate_postcss_config, generate_tailwind_config};
pub use vite::{generate_vite_config, ViteConfigAction};

use crate::detect::ProjectType;
use crate::templates::TemplateLoader;
use anyhow::Result;
use std::path::Path;

/// Generate the framework config for the detected project kind
pub fn generate_config_files(
    loader: &TemplateLoader,
    project_type: ProjectType,
    project_path: &Path,
    threejs: bool,
    css_vars: bool,
) -> Result<()> {
    match project_type {
        ProjectType::Nuxt => generate_nuxt_config(loader, project_path, threejs, css_vars),
        ProjectType::Vue => {
            generate_vite_config(loader, project_path, threejs, css_vars).map(|_| ())
        }
    }
    // The @tailwindcss/vite plugin path needs no tailwind.config.js or
    // postcss.config.js; those generators stay available for legacy setups.
}
