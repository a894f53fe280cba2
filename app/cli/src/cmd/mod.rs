//! CLI argument parsing and command dispatch.

use crate::config::{OrionConfig, resolve_config};
use anyhow::Result;
use clap::{Parser, Subcommand};
use compact_str::CompactString;
use llm::{Client, Gemini};
use session::{Restore, SessionManager, SessionState, SessionStore};
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, fmt};

pub mod chat;
pub mod history;
pub mod reset;
pub mod send;
pub mod start;

/// Shown when a command needs a mission and none is running.
const NO_MISSION: &str = "no active mission, start one with `orion start`";

/// Orion: the urban explorer's analyst.
#[derive(Parser, Debug)]
#[command(name = "orion", version, about = "Orion: the urban explorer's analyst")]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,

    /// Config file override.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Session file override.
    #[arg(long, global = true)]
    pub session: Option<PathBuf>,

    /// Model name override.
    #[arg(long, global = true)]
    pub model: Option<CompactString>,

    /// Print whole replies instead of streaming them.
    #[arg(long, global = true)]
    pub no_stream: bool,

    /// Verbosity level (use -v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start a new mission and enter the chat.
    Start(start::Start),
    /// Resume the active mission in an interactive chat.
    Chat(chat::Chat),
    /// Send a single trigger to the active mission.
    Send(send::Send),
    /// Print the history of the active mission.
    History,
    /// End the mission and delete the session file.
    Reset,
}

impl Cli {
    /// Initialize the tracing subscriber from `RUST_LOG` or the `-v` count.
    pub fn init_tracing(&self) {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            let directive = match self.verbose {
                0 => "warn",
                1 => "orion_cli=info,orion_session=info,orion_llm=info",
                2 => "orion_cli=debug,orion_session=debug,orion_llm=debug",
                3 => "debug",
                _ => "trace",
            };
            EnvFilter::new(directive)
        });

        fmt()
            .without_time()
            .with_env_filter(filter)
            .with_target(self.verbose != 0)
            .with_writer(std::io::stderr)
            .init();
    }

    /// Resolve configuration and run the selected command.
    pub async fn run(self) -> Result<()> {
        let Cli {
            command,
            config,
            session: session_path,
            model,
            no_stream,
            ..
        } = self;

        let config = resolve_config(config.as_deref())?;
        let store = SessionStore::new(session_path.unwrap_or_else(|| config.session.path.clone()));
        let stream = config.session.stream && !no_stream;

        match command {
            Command::Start(cmd) => cmd.run(build_manager(&config, model, store)?, stream).await,
            Command::Chat(cmd) => cmd.run(build_manager(&config, model, store)?, stream).await,
            Command::Send(cmd) => cmd.run(build_manager(&config, model, store)?, stream).await,
            Command::History => history::run(&store),
            Command::Reset => reset::run(&store),
        }
    }
}

/// Build the session manager against the configured Gemini backend.
///
/// A missing or unusable credential is an initialization failure.
pub fn build_manager(
    config: &OrionConfig,
    model: Option<CompactString>,
    store: SessionStore,
) -> Result<SessionManager<Gemini>> {
    let base_url = config.llm.base_url.as_deref().unwrap_or(llm::BASE_URL);
    let provider =
        Gemini::with_base_url(Client::new(), &config.llm.api_key, base_url).map_err(|err| {
            session::Error::Initialization(format!(
                "{err:#}; set GEMINI_API_KEY or llm.api_key in orion.toml"
            ))
        })?;

    let mut general = config.llm.general();
    if let Some(model) = model {
        general.model = model;
    }
    Ok(SessionManager::new(provider, general, store))
}

/// The running mission described by `restore`, if any.
///
/// A discarded session file is reported as a warning.
pub fn active_state(restore: Restore) -> Option<SessionState> {
    match restore {
        Restore::Resumed(state) if state.is_active() => Some(state),
        Restore::Discarded(err) => {
            eprintln!("warning: {err}; the session file was deleted");
            None
        }
        _ => None,
    }
}
