//! `pni three` - add the Three.js starter to an existing project
//!
//! Non-interactive: copies the static `three/` template tree next to the
//! invocation directory and generates `useThree` composables pointing at
//! it. All preconditions are hard errors; nothing is written until every
//! check has passed except the template copy itself, which refuses to
//! overwrite.

use crate::detect::{detect_project_type, ProjectType};
use crate::error::SetupError;
use crate::manifest::PackageManifest;
use crate::templates::TemplateLoader;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Everything the summary output needs about what was created
#[derive(Debug, Clone)]
pub struct ThreeSetup {
    pub directory_name: String,
    pub three_path: PathBuf,
    pub composables_dir: PathBuf,
    pub project_type: ProjectType,
    pub file_extension: &'static str,
}

/// Walk up from `start` to the nearest directory containing `package.json`
fn find_project_root(start: &Path) -> Result<PathBuf, SetupError> {
    let mut current = start;
    loop {
        if current.join("package.json").exists() {
            return Ok(current.to_path_buf());
        }
        match current.parent() {
            Some(parent) => current = parent,
            None => return Err(SetupError::ProjectRootNotFound),
        }
    }
}

/// Walk up from `start` to the conventional source folder for the project
/// kind (`app/` for Nuxt, `src/` for Vue) and return its composables path
fn find_composables_folder(start: &Path, project_type: ProjectType) -> Result<PathBuf, SetupError> {
    let source_folder = match project_type {
        ProjectType::Nuxt => "app",
        ProjectType::Vue => "src",
    };

    let mut current = start;
    loop {
        let candidate = current.join(source_folder);
        if candidate.exists() {
            return Ok(candidate.join("composables"));
        }
        match current.parent() {
            Some(parent) => current = parent,
            None => {
                return Err(match project_type {
                    ProjectType::Nuxt => SetupError::SourceFolderNotFound {
                        folder: "app",
                        framework: "Nuxt",
                        hint: " with an app directory",
                    },
                    ProjectType::Vue => SetupError::SourceFolderNotFound {
                        folder: "src",
                        framework: "Vue",
                        hint: "",
                    },
                })
            }
        }
    }
}

/// Path relative to `root` with forward slashes, for alias-style imports
fn alias_relative(root: &Path, path: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .components()
        .map(|component| component.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

/// Import path for the copied `World.js` as seen from a component.
///
/// Inside a pages directory the framework alias maps to `@/pages/...`;
/// anywhere else the project-root-relative path is used directly.
fn world_import_path(project_root: &Path, current_path: &Path, target_dir: &Path) -> String {
    let directory_name = current_path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let relative = alias_relative(project_root, current_path);

    if relative.starts_with("pages/") || relative.starts_with("app/pages/") {
        format!("@/pages/{}/three/World.js", directory_name)
    } else {
        format!("@/{}/World.js", alias_relative(project_root, target_dir))
    }
}

/// Copy the Three.js starter into `current_dir` and generate composables
pub fn add_three(current_dir: &Path, loader: &TemplateLoader) -> Result<ThreeSetup> {
    let directory_name = current_dir
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    let project_root = find_project_root(current_dir)?;
    let manifest = PackageManifest::load(&project_root).unwrap_or_default();
    if !manifest.has_dependency("three") {
        return Err(SetupError::ThreeNotInstalled.into());
    }

    let project_type =
        detect_project_type(&project_root).ok_or(SetupError::UnsupportedProjectType)?;

    let composables_folder = find_composables_folder(current_dir, project_type)?;

    let target_dir = current_dir.join("three");
    loader.copy_tree("three", &target_dir)?;

    let composables_dir = composables_folder.join(&directory_name);
    std::fs::create_dir_all(&composables_dir).with_context(|| {
        format!("Failed to create directory: {}", composables_dir.display())
    })?;

    let import_path = world_import_path(&project_root, current_dir, &target_dir);

    // Nuxt projects get typed composables, Vue projects plain JS
    let (file_extension, placeholders): (&'static str, Vec<(&str, &str)>) = match project_type {
        ProjectType::Nuxt => (
            "ts",
            vec![
                ("TYPE_IMPORTS", ", type Ref"),
                ("CONTAINER_TYPE", ": Ref<HTMLElement | null>"),
                ("WORLD_TYPE", "<World | null>"),
                ("ERROR_TYPE", "<Error | null>"),
                (
                    "THREE_TYPE_IMPORTS",
                    "import type { Scene, Camera, WebGLRenderer } from 'three';\n",
                ),
                ("SCENE_TYPE", "<Scene | null>"),
                ("CAMERA_TYPE", "<Camera | null>"),
                ("RENDERER_TYPE", "<WebGLRenderer | null>"),
                ("SCENE_CAST", " as Scene"),
            ],
        ),
        ProjectType::Vue => (
            "js",
            vec![
                ("TYPE_IMPORTS", ""),
                ("CONTAINER_TYPE", ""),
                ("WORLD_TYPE", ""),
                ("ERROR_TYPE", ""),
                ("THREE_TYPE_IMPORTS", ""),
                ("SCENE_TYPE", ""),
                ("CAMERA_TYPE", ""),
                ("RENDERER_TYPE", ""),
                ("SCENE_CAST", ""),
            ],
        ),
    };

    let mut all_placeholders = placeholders;
    all_placeholders.push(("IMPORT_PATH", import_path.as_str()));

    loader.materialize(
        "composables/usethree.js.template",
        &all_placeholders,
        &composables_dir.join(format!("usethree.{}", file_extension)),
    )?;
    loader.materialize(
        "composables/useThreeAdvanced.js.template",
        &all_placeholders,
        &composables_dir.join(format!("useThreeAdvanced.{}", file_extension)),
    )?;

    Ok(ThreeSetup {
        directory_name,
        three_path: target_dir,
        composables_dir,
        project_type,
        file_extension,
    })
}
