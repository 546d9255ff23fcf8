//! Package manager detection and install command construction
//!
//! Resolution order: lock files in the project directory, then probing for
//! an available manager, then npm as the universal fallback.

use std::path::Path;
use std::process::Command;

/// Supported npm-compatible package managers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageManager {
    Npm,
    Pnpm,
    Yarn,
}

impl PackageManager {
    pub fn display_name(&self) -> &'static str {
        match self {
            PackageManager::Npm => "npm",
            PackageManager::Pnpm => "pnpm",
            PackageManager::Yarn => "yarn",
        }
    }

    /// Build the install command for runtime dependencies
    pub fn install_command(&self, packages: &[&str]) -> String {
        let list = packages.join(" ");
        match self {
            PackageManager::Pnpm => format!("pnpm add {}", list),
            PackageManager::Yarn => format!("yarn add {}", list),
            PackageManager::Npm => format!("npm install {}", list),
        }
    }

    /// Build the install command for dev-only dependencies
    pub fn dev_install_command(&self, packages: &[&str]) -> String {
        let list = packages.join(" ");
        match self {
            PackageManager::Pnpm => format!("pnpm add -D {}", list),
            PackageManager::Yarn => format!("yarn add -D {}", list),
            PackageManager::Npm => format!("npm install --save-dev {}", list),
        }
    }

    /// Prefix for one-off package execution (used by the shadcn setup)
    pub fn dlx_prefix(&self) -> &'static str {
        match self {
            PackageManager::Pnpm => "pnpm dlx",
            _ => "npx",
        }
    }
}

fn is_available(binary: &str) -> bool {
    Command::new(binary)
        .arg("--version")
        .output()
        .is_ok_and(|out| out.status.success())
}

/// Detect the package manager for a project directory
pub fn detect_package_manager(cwd: &Path) -> PackageManager {
    if cwd.join("pnpm-lock.yaml").exists() {
        return PackageManager::Pnpm;
    }
    if cwd.join("yarn.lock").exists() {
        return PackageManager::Yarn;
    }
    if cwd.join("package-lock.json").exists() {
        return PackageManager::Npm;
    }

    if is_available("pnpm") {
        return PackageManager::Pnpm;
    }
    if is_available("yarn") {
        return PackageManager::Yarn;
    }

    PackageManager::Npm
}
