use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use iconforge_engine::LoadError;

use super::ProjectArgs;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct LoadCommand {
    /// Import id carrying the `?icon-forge` marker
    pub id: String,

    /// Module the import appears in; relative ids resolve next to it
    #[arg(long)]
    pub importer: Option<PathBuf>,

    /// Also print the source map, when the compiler produced one
    #[arg(long)]
    pub map: bool,

    #[command(flatten)]
    pub project: ProjectArgs,
}

impl LoadCommand {
    /// Run the load command
    pub async fn run(&self) -> Result<()> {
        let plugin = self.project.plugin();
        let mut report = match ops::load(&plugin, &self.id, self.importer.as_deref()).await {
            Ok(report) => report,
            // Already logged by the plugin
            Err(e) if e.downcast_ref::<LoadError>().is_some() => std::process::exit(1),
            Err(e) => return Err(e),
        };
        if !self.map {
            report.map = None;
        }
        report.render(&mut TerminalOutput);
        Ok(())
    }
}
