//! pni - set up Nuxt/Vue projects with Three.js and Tailwind design tokens

use clap::{Parser, Subcommand};
use colored::Colorize;
use pni_core::tui::SetupArgs;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "pni")]
#[command(about = "Set up Nuxt/Vue projects with Three.js and Tailwind design tokens")]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    #[command(flatten)]
    pub setup: CliSetupArgs,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Add the Three.js starter template to an existing project
    Three(ThreeArgs),
}

#[derive(Parser, Debug, Default)]
pub struct CliSetupArgs {
    /// Force Nuxt project type
    #[arg(long)]
    pub nuxt: bool,

    /// Force Vue project type
    #[arg(long)]
    pub vue: bool,

    /// Include the Three.js starter
    #[arg(long)]
    pub threejs: bool,

    /// Include the CSS variables (shadcn-style) setup
    #[arg(long = "css-vars")]
    pub css_vars: bool,

    /// Name for a newly created project
    #[arg(long)]
    pub name: Option<String>,

    /// Target directory (default: current directory)
    #[arg(long)]
    pub dir: Option<PathBuf>,

    /// Skip prompts, use flags only
    #[arg(long = "non-interactive")]
    pub non_interactive: bool,
}

impl From<CliSetupArgs> for SetupArgs {
    fn from(args: CliSetupArgs) -> Self {
        SetupArgs {
            nuxt: args.nuxt,
            vue: args.vue,
            threejs: args.threejs,
            css_vars: args.css_vars,
            name: args.name,
            dir: args.dir,
            non_interactive: args.non_interactive,
        }
    }
}

#[derive(Parser, Debug)]
pub struct ThreeArgs {
    /// Directory to add the template to (default: current directory)
    #[arg(long)]
    pub dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let args = Args::parse();

    let result = match args.command {
        Some(Command::Three(three_args)) => pni_core::tui::run_three(three_args.dir),
        None => pni_core::tui::run(args.setup.into()).await,
    };

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    if let Err(err) = result {
        eprintln!("{} {}", "Error:".red().bold(), err);
        std::process::exit(1);
    }
}
