//! One-shot trigger command.

use super::{NO_MISSION, active_state};
use crate::repl::run_turn;
use anyhow::{Result, bail};
use clap::Args;
use llm::LLM;
use session::SessionManager;

/// Send a single trigger to the active mission.
#[derive(Args, Debug)]
pub struct Send {
    /// Trigger text, or `/reroll` / `/report`.
    pub trigger: String,
}

impl Send {
    /// Run one turn and print the reply.
    pub async fn run<P: LLM>(self, manager: SessionManager<P>, stream: bool) -> Result<()> {
        let Some(mut state) = active_state(manager.restore()?) else {
            bail!(NO_MISSION);
        };
        run_turn(&manager, &mut state, &self.trigger, stream).await
    }
}
