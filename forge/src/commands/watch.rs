use clap::Args;
use eyre::{Context, Result};
use tracing::info;

use super::ProjectArgs;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct WatchCommand {
    #[command(flatten)]
    pub project: ProjectArgs,
}

impl WatchCommand {
    /// Run the watch command until interrupted
    pub async fn run(&self) -> Result<()> {
        let plugin = self.project.plugin();

        // A failed initial pass is logged by build_start and does not stop watching
        if let Ok(report) = ops::generate(&plugin).await {
            report.render(&mut TerminalOutput);
        }

        let Ok(handle) = plugin.on_dev_server_start().await else {
            std::process::exit(1);
        };
        println!("Watching for changes. Press Ctrl-C to stop.");

        tokio::signal::ctrl_c()
            .await
            .wrap_err("Failed to listen for Ctrl-C")?;
        info!("Stopping watcher");
        handle.shutdown().await;
        Ok(())
    }
}
