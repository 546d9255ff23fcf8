//! Charm-style CLI prompts and the setup run driver

use crate::config;
use crate::create::create_app;
use crate::deps;
use crate::detect::{detect_project_type, ProjectType};
use crate::error::SetupError;
use crate::exec::run_interactive;
use crate::features::{resolve_features, FeatureFlags, FeatureSelection, PromptAnswers};
use crate::pm::{detect_package_manager, PackageManager};
use crate::shadcn::setup_shadcn_nuxt;
use crate::structure;
use crate::styles;
use crate::templates::TemplateLoader;
use crate::three::add_three;
use crate::tui::flow::{prompt_steps, PromptStep};
use crate::workflow::{Stage, Workflow};
use anyhow::Result;
use std::path::PathBuf;

/// CLI arguments for the setup command
#[derive(Debug, Clone, Default)]
pub struct SetupArgs {
    /// Force Nuxt project type
    pub nuxt: bool,

    /// Force Vue project type
    pub vue: bool,

    /// Include the Three.js starter
    pub threejs: bool,

    /// Include the CSS design-token setup (currently always applied)
    pub css_vars: bool,

    /// Name for a newly created project
    pub name: Option<String>,

    /// Target directory (defaults to the current directory)
    pub dir: Option<PathBuf>,

    /// Skip prompts; flags and detection fully determine the run
    pub non_interactive: bool,
}

impl SetupArgs {
    fn flags(&self) -> FeatureFlags {
        FeatureFlags {
            nuxt: self.nuxt,
            vue: self.vue,
            threejs: self.threejs,
            css_vars: self.css_vars,
        }
    }
}

/// Run the interactive setup flow
pub async fn run(args: SetupArgs) -> Result<()> {
    cliclack::intro("pni - Nuxt/Vue project setup")?;

    let mut workflow = Workflow::new();
    match execute(&args, &mut workflow).await {
        Ok(summary) => {
            print_summary(&summary)?;
            cliclack::outro("Happy building!")?;
            Ok(())
        }
        Err(err) => {
            // Single catch boundary: record the failure, let main print it
            workflow.fail(err.to_string());
            Err(err)
        }
    }
}

struct RunSummary {
    selection: FeatureSelection,
    project_path: PathBuf,
    package_manager: PackageManager,
    created_project: bool,
}

async fn execute(args: &SetupArgs, workflow: &mut Workflow) -> Result<RunSummary> {
    let cwd = match &args.dir {
        Some(dir) if dir.is_absolute() => dir.clone(),
        Some(dir) => std::env::current_dir()?.join(dir),
        None => std::env::current_dir()?,
    };

    // Detecting
    let detected = detect_project_type(&cwd);
    match detected {
        Some(kind) => cliclack::log::success(format!("Detected {} project", kind))?,
        None => cliclack::log::info("No existing project detected")?,
    }

    workflow.advance(Stage::Selecting)?;
    let selection = select_features(args, detected)?;
    let loader = TemplateLoader::locate()?;

    // Creating (new projects only)
    let mut project_path = cwd.clone();
    let mut created_project = false;
    if detected.is_none() {
        let name = selection
            .project_name
            .clone()
            .filter(|name| !name.trim().is_empty())
            .ok_or(SetupError::MissingProjectName)?;

        workflow.advance(Stage::Creating)?;
        cliclack::log::step(format!(
            "Creating {} app `{}`...",
            selection.project_type, name
        ))?;
        create_app(selection.project_type, &cwd, &name).await?;
        project_path = cwd.join(&name);
        created_project = true;
    }

    // Installing
    workflow.advance(Stage::Installing)?;
    let pm = detect_package_manager(&project_path);
    cliclack::log::info(format!("Using {}", pm.display_name()))?;

    let dep_set = deps::resolve(selection.project_type, selection.threejs, selection.css_vars);
    if !dep_set.production.is_empty() {
        run_interactive(&pm.install_command(&dep_set.production), &project_path).await?;
    }
    if !dep_set.dev.is_empty() {
        run_interactive(&pm.dev_install_command(&dep_set.dev), &project_path).await?;
    }

    // Configuring
    workflow.advance(Stage::Configuring)?;
    cliclack::log::step("Generating configuration files...")?;
    config::generate_config_files(
        &loader,
        selection.project_type,
        &project_path,
        selection.threejs,
        selection.css_vars,
    )?;

    match selection.project_type {
        ProjectType::Nuxt => {
            structure::setup_nuxt_app_structure(&loader, &project_path)?;

            // The shadcn init script reconfigures the stylesheet, so a
            // minimal entry goes first and the full token content after
            styles::generate_css_variables(&loader, ProjectType::Nuxt, &project_path, true)?;
            setup_shadcn_nuxt(&project_path, pm).await?;
            styles::generate_css_variables(&loader, ProjectType::Nuxt, &project_path, false)?;

            if selection.css_vars {
                styles::create_typography_page(&loader, &project_path, ProjectType::Nuxt)?;
            }
        }
        ProjectType::Vue => {
            structure::setup_vue_app_structure(&loader, &project_path)?;
            styles::generate_css_variables(&loader, ProjectType::Vue, &project_path, false)?;

            if selection.css_vars {
                styles::update_index_html(&project_path)?;
            }
        }
    }

    workflow.advance(Stage::Completed)?;

    Ok(RunSummary {
        selection,
        project_path,
        package_manager: pm,
        created_project,
    })
}

/// Collect the feature selection from flags and, unless suppressed, prompts
fn select_features(args: &SetupArgs, detected: Option<ProjectType>) -> Result<FeatureSelection> {
    let flags = args.flags();

    if args.non_interactive {
        let answers = PromptAnswers {
            project_name: args.name.clone(),
            ..Default::default()
        };
        let selection = resolve_features(&flags, detected, &answers);
        cliclack::log::info(format!(
            "Non-interactive: {} project, Three.js {}",
            selection.project_type,
            if selection.threejs { "on" } else { "off" }
        ))?;
        return Ok(selection);
    }

    let mut answers = PromptAnswers::default();
    for step in prompt_steps(detected) {
        match step {
            PromptStep::ProjectKind => {
                if flags.nuxt || flags.vue {
                    continue;
                }
                let kind: ProjectType = cliclack::select("Which framework?")
                    .item(ProjectType::Nuxt, "Nuxt", "server-rendered, file-based routing")
                    .item(ProjectType::Vue, "Vue", "single-page app with Vite")
                    .interact()?;
                answers.project_type = Some(kind);
            }
            PromptStep::ProjectName => {
                if let Some(name) = &args.name {
                    answers.project_name = Some(name.clone());
                    continue;
                }
                let name: String = cliclack::input("Project name")
                    .placeholder("my-app")
                    .validate(|input: &String| {
                        if input.trim().is_empty() {
                            Err("Project name is required to create a new project.")
                        } else {
                            Ok(())
                        }
                    })
                    .interact()?;
                answers.project_name = Some(name);
            }
            PromptStep::ThreeConfirm => {
                if flags.threejs {
                    continue;
                }
                let include: bool = cliclack::confirm("Include the Three.js starter?")
                    .initial_value(false)
                    .interact()?;
                answers.threejs = Some(include);
            }
        }
    }

    Ok(resolve_features(&flags, detected, &answers))
}

fn print_summary(summary: &RunSummary) -> Result<()> {
    let selection = &summary.selection;

    cliclack::log::success(format!(
        "{} project configured at {}",
        selection.project_type,
        summary.project_path.display()
    ))?;

    println!();
    println!("  Next steps");
    println!();

    let mut step = 1;
    if summary.created_project {
        if let Some(name) = &selection.project_name {
            println!("  {}.  cd {}", step, name);
            step += 1;
        }
    }
    let dev_command = match summary.package_manager {
        PackageManager::Npm => "npm run dev",
        PackageManager::Pnpm => "pnpm dev",
        PackageManager::Yarn => "yarn dev",
    };
    println!("  {}.  {}", step, dev_command);
    if selection.threejs {
        println!(
            "  {}.  Run `pni three` inside a page directory to add a Three.js scene",
            step + 1
        );
    }
    println!();

    Ok(())
}

/// Run the non-interactive `three` subcommand
pub fn run_three(dir: Option<PathBuf>) -> Result<()> {
    cliclack::intro("pni three - Three.js starter")?;

    let cwd = match dir {
        Some(dir) if dir.is_absolute() => dir,
        Some(dir) => std::env::current_dir()?.join(dir),
        None => std::env::current_dir()?,
    };

    let loader = TemplateLoader::locate()?;
    let result = add_three(&cwd, &loader)?;

    cliclack::log::success("Three.js template added successfully!")?;
    cliclack::log::info(format!(
        "Created:\n  {}/\n  {}/usethree.{}\n  {}/useThreeAdvanced.{}",
        result.three_path.display(),
        result.composables_dir.display(),
        result.file_extension,
        result.composables_dir.display(),
        result.file_extension,
    ))?;
    cliclack::outro(format!(
        "Import it with: import {{ useThree }} from '@/composables/{}/usethree'",
        result.directory_name
    ))?;

    Ok(())
}
