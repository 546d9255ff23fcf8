//! Template loading, placeholder rendering, and verbatim tree copies
//!
//! Templates ship in a `templates/` directory next to the installed binary.
//! During development and in tests they resolve from the workspace source
//! tree instead; both roots are tried in order before failing.

use crate::error::SetupError;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Substitute `{{KEY}}` tokens in a template body.
///
/// Single pass per key, no recursion. Unresolved tokens are left verbatim so
/// a stale template degrades visibly instead of erroring.
pub fn render_str(template: &str, placeholders: &[(&str, &str)]) -> String {
    let mut content = template.to_string();
    for (key, value) in placeholders {
        content = content.replace(&format!("{{{{{}}}}}", key), value);
    }
    content
}

/// Resolves template files from the build-output or development source root
#[derive(Debug, Clone)]
pub struct TemplateLoader {
    root: PathBuf,
}

impl TemplateLoader {
    /// Locate the template root, preferring the directory next to the
    /// running executable and falling back to the workspace source tree.
    pub fn locate() -> Result<Self, SetupError> {
        let exe_root = std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|dir| dir.join("templates")));
        let dev_root = Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("..")
            .join("..")
            .join("templates");

        if let Some(primary) = &exe_root {
            if primary.is_dir() {
                return Ok(Self {
                    root: primary.clone(),
                });
            }
        }

        if dev_root.is_dir() {
            return Ok(Self { root: dev_root });
        }

        Err(SetupError::TemplateRootNotFound {
            primary: exe_root.unwrap_or_else(|| PathBuf::from("templates")),
            fallback: dev_root,
        })
    }

    /// Create a loader rooted at an explicit directory
    pub fn with_root(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Load a template body by its path relative to the template root
    pub fn load(&self, template: &str) -> Result<String, SetupError> {
        let path = self.root.join(template);
        std::fs::read_to_string(&path).map_err(|_| SetupError::TemplateMissing(path))
    }

    /// Load a template and substitute `{{KEY}}` placeholders
    pub fn render(&self, template: &str, placeholders: &[(&str, &str)]) -> Result<String, SetupError> {
        Ok(render_str(&self.load(template)?, placeholders))
    }

    /// Render a template and write the result to `dest`, creating parents
    pub fn materialize(
        &self,
        template: &str,
        placeholders: &[(&str, &str)],
        dest: &Path,
    ) -> Result<()> {
        let content = self.render(template, placeholders)?;
        if let Some(parent) = dest.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
        std::fs::write(dest, content)
            .with_context(|| format!("Failed to write file: {}", dest.display()))?;
        Ok(())
    }

    /// Copy a template directory tree verbatim.
    ///
    /// Refuses to merge into an existing destination; returns the number of
    /// files copied.
    pub fn copy_tree(&self, template_dir: &str, dest: &Path) -> Result<usize> {
        let source = self.root.join(template_dir);
        if !source.is_dir() {
            return Err(SetupError::TemplateMissing(source).into());
        }
        if dest.exists() {
            let name = dest
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| dest.display().to_string());
            return Err(SetupError::DestinationExists(name).into());
        }

        let mut copied = 0;
        for entry in WalkDir::new(&source) {
            let entry = entry.context("Failed to walk template directory")?;
            let rel = entry
                .path()
                .strip_prefix(&source)
                .context("Template entry outside source root")?;
            let target = dest.join(rel);

            if entry.file_type().is_dir() {
                std::fs::create_dir_all(&target)
                    .with_context(|| format!("Failed to create directory: {}", target.display()))?;
            } else {
                if let Some(parent) = target.parent() {
                    std::fs::create_dir_all(parent).with_context(|| {
                        format!("Failed to create directory: {}", parent.display())
                    })?;
                }
                std::fs::copy(entry.path(), &target)
                    .with_context(|| format!("Failed to copy file: {}", target.display()))?;
                copied += 1;
            }
        }

        Ok(copied)
    }
}
