//! Dependency resolution
//!
//! Pure mapping from (project type, feature flags) to the npm packages to
//! install. No I/O; the install commands are built elsewhere.

use crate::detect::ProjectType;

/// Packages to install, split by `dependencies` vs `devDependencies`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencySet {
    pub production: Vec<&'static str>,
    pub dev: Vec<&'static str>,
}

impl DependencySet {
    fn push_production(&mut self, packages: &[&'static str]) {
        for pkg in packages {
            if !self.production.contains(pkg) {
                self.production.push(pkg);
            }
        }
    }

    fn push_dev(&mut self, packages: &[&'static str]) {
        for pkg in packages {
            if !self.dev.contains(pkg) {
                self.dev.push(pkg);
            }
        }
    }
}

/// Animation/scroll stack shared by every project kind
const COMMON_PRODUCTION: &[&str] = &["gsap", "lenis"];

const NUXT_BASE_PRODUCTION: &[&str] = &[
    "@vueuse/core",
    "@nuxtjs/seo",
    "@nuxt/image",
    "@nuxtjs/device",
    "shadcn-nuxt",
];

const THREEJS_NUXT_PRODUCTION: &[&str] = &["three", "@vueuse/core", "postprocessing"];
const THREEJS_NUXT_DEV: &[&str] = &["@types/three"];

const THREEJS_VUE_PRODUCTION: &[&str] = &["three", "@vueuse/core"];

const CSS_VARS_NUXT_DEV: &[&str] = &["typescript", "tailwindcss", "@tailwindcss/vite"];
const CSS_VARS_VUE_DEV: &[&str] = &["tailwindcss", "@tailwindcss/vite"];

/// Resolve the full install set for a project kind and feature selection.
///
/// Base set entries precede feature-set entries; duplicates collapse onto
/// their first occurrence so install commands stay reproducible.
pub fn resolve(project_type: ProjectType, threejs: bool, css_vars: bool) -> DependencySet {
    let mut deps = DependencySet::default();
    deps.push_production(COMMON_PRODUCTION);

    if project_type == ProjectType::Nuxt {
        deps.push_production(NUXT_BASE_PRODUCTION);
    }

    if threejs {
        match project_type {
            ProjectType::Nuxt => {
                deps.push_production(THREEJS_NUXT_PRODUCTION);
                deps.push_dev(THREEJS_NUXT_DEV);
            }
            ProjectType::Vue => deps.push_production(THREEJS_VUE_PRODUCTION),
        }
    }

    if css_vars {
        match project_type {
            ProjectType::Nuxt => deps.push_dev(CSS_VARS_NUXT_DEV),
            ProjectType::Vue => deps.push_dev(CSS_VARS_VUE_DEV),
        }
    }

    deps
}
