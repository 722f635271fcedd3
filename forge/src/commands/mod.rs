mod completions;
mod generate;
mod init;
mod load;
mod watch;

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use generate::GenerateCommand;
use iconforge_engine::IconForge;
use iconforge_manifest::{CollisionPolicy, FILE_NAME, ForgeToml, Manifest, Overrides};
use init::InitCommand;
use tracing::debug;
use load::LoadCommand;
use watch::WatchCommand;

/// Extension trait for exiting on manifest errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for iconforge_manifest::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "icon-forge")]
#[command(version)]
#[command(about = "Generate and maintain barrel modules for SVG icon directories")]
pub(crate) struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn verbosity(&self) -> u8 {
        self.verbose
    }

    pub async fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Init(cmd) => cmd.run().await,
            Commands::Generate(cmd) => cmd.run().await,
            Commands::Watch(cmd) => cmd.run().await,
            Commands::Load(cmd) => cmd.run().await,
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default icon-forge.toml
    Init(InitCommand),

    /// Regenerate every barrel once
    Generate(GenerateCommand),

    /// Regenerate barrels whenever an SVG changes
    Watch(WatchCommand),

    /// Transform one marked SVG import and print the module code
    Load(LoadCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}

/// Options shared by every command that works on a project.
#[derive(Args)]
pub(crate) struct ProjectArgs {
    /// Project root the icons directory is resolved against
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// Path to icon-forge.toml (defaults to <root>/icon-forge.toml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Icons directory, relative to the project root
    #[arg(long)]
    pub icons_dir: Option<String>,

    /// Prefix for every export name
    #[arg(long)]
    pub prefix: Option<String>,

    /// Suffix for every export name
    #[arg(long)]
    pub suffix: Option<String>,

    /// What to do with duplicate export names in one directory (error or allow)
    #[arg(long)]
    pub collisions: Option<CollisionPolicy>,
}

impl ProjectArgs {
    /// Load the manifest and apply flag overrides; exits on invalid configuration.
    pub fn manifest(&self) -> Manifest {
        // An explicit config path must exist; the implicit one is optional
        let forge_toml = match &self.config {
            Some(path) => ForgeToml::open(path),
            None => ForgeToml::open_or_default(self.root.join(FILE_NAME)),
        }
        .unwrap_or_exit();

        if forge_toml.is_default() {
            debug!("No {} found, using defaults", forge_toml.path().display());
        } else {
            debug!("Loaded {}", forge_toml.path().display());
        }

        let mut manifest = forge_toml.into_manifest();
        manifest
            .apply_overrides(&Overrides {
                icons_dir: self.icons_dir.clone(),
                prefix: self.prefix.clone(),
                suffix: self.suffix.clone(),
                collisions: self.collisions,
            })
            .unwrap_or_exit();
        manifest
    }

    /// Set up the plugin for this project.
    pub fn plugin(&self) -> IconForge {
        IconForge::on_config_resolved(&self.root, &self.manifest())
    }
}
