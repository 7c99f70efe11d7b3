//! Taskdown - terminal task list with per-task countdown timers

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::generate;
use taskdown::cli::{Cli, Commands};
use taskdown::tui;

#[tokio::main]
async fn main() -> Result<()> {
    if std::env::var("TASKDOWN_DEBUG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter("taskdown=debug")
            .init();
    }

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Completion { shell }) => {
            generate(
                shell,
                &mut Cli::command(),
                "taskdown",
                &mut std::io::stdout(),
            );
            Ok(())
        }
        None => tui::run().await,
    }
}
