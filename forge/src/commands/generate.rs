use clap::Args;
use eyre::{Result, bail};

use super::ProjectArgs;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    #[command(flatten)]
    pub project: ProjectArgs,

    /// Preview generated barrels without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    /// Run the generate command
    pub async fn run(&self) -> Result<()> {
        let plugin = self.project.plugin();
        let mut out = TerminalOutput;

        if self.dry_run {
            ops::preview(&plugin).await.render(&mut out);
            return Ok(());
        }

        // build_start has already logged the failure
        let Ok(report) = ops::generate(&plugin).await else {
            std::process::exit(1);
        };
        report.render(&mut out);

        if report.has_collisions() {
            bail!(
                "{} director{} skipped because of duplicate export names",
                report.collisions,
                if report.collisions == 1 { "y" } else { "ies" }
            );
        }
        Ok(())
    }
}
