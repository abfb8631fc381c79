use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use rustyline::DefaultEditor;
use std::io;
use tracing::{debug, warn};

use rag_chat::cli::Args;
use rag_chat::config::{Config, FileConfig};
use rag_chat::orchestrator::{self, Mode};
use rag_chat::{interactive, logging, RagClient};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Logging depends on the resolved config, so a bad config file is only
    // reported once the subscriber is up.
    let (file_config, file_error) = match FileConfig::load() {
        Ok(file_config) => (file_config, None),
        Err(e) => (FileConfig::default(), Some(e)),
    };
    let config = Config::from_env_and_args(&args, &file_config);

    logging::init(config.verbose);
    if let Some(e) = file_error {
        warn!("{:#}; using defaults", e);
    }
    debug!(?config, "configuration loaded");

    let mode = Mode::from_args(&args);
    if mode == Mode::Help {
        Args::command().print_help()?;
        return Ok(());
    }

    let client = RagClient::new(&config).context("Failed to build HTTP client")?;
    let mut stdout = io::stdout();

    match mode {
        Mode::Interactive => {
            let mut editor = DefaultEditor::new().context("Failed to initialise line editor")?;
            interactive::run(&client, args.session_id.as_deref(), &mut editor, &mut stdout)
                .await?;
        }
        Mode::Once(query) => {
            orchestrator::ask_once(
                &client,
                &query,
                args.session_id.as_deref(),
                args.json,
                &mut stdout,
            )
            .await?;
        }
        Mode::Help => {}
    }

    Ok(())
}
