//! Start a new mission.

use super::active_state;
use crate::{repl::ChatRepl, terminal::render_message};
use anyhow::{Result, bail};
use chrono::Utc;
use clap::Args;
use llm::LLM;
use session::{MissionParameters, SessionManager};

/// Start a new mission and enter the chat.
#[derive(Args, Debug)]
pub struct Start {
    /// Where the mission starts.
    #[arg(long = "from")]
    pub start_point: String,

    /// Time available, in minutes.
    #[arg(long, value_parser = clap::value_parser!(u32).range(15..=1440))]
    pub duration: u32,

    /// Exploration radius, in kilometres (0.1 to 20.0).
    #[arg(long)]
    pub scope: f64,

    /// Budget, in yen.
    #[arg(long, value_parser = clap::value_parser!(u32).range(0..=10000))]
    pub budget: Option<u32>,
}

impl Start {
    /// Validate the parameters, brief the backend, then enter the REPL.
    pub async fn run<P: LLM>(self, manager: SessionManager<P>, stream: bool) -> Result<()> {
        if active_state(manager.restore()?).is_some() {
            bail!("a mission is already active, end it with `orion reset` first");
        }

        let params =
            MissionParameters::new(self.start_point, self.duration, self.scope, self.budget)?;
        let state = manager.start(params, Utc::now()).await?;
        if let Some(ack) = state.history.first() {
            println!("{}\n", render_message(ack));
        }

        let mut repl = ChatRepl::new(manager, state, stream)?;
        repl.run().await
    }
}
