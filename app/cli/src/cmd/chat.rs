//! Interactive chat REPL command.

use super::{NO_MISSION, active_state};
use crate::{repl::ChatRepl, terminal::print_history};
use anyhow::{Result, bail};
use clap::Args;
use llm::LLM;
use session::SessionManager;

/// Resume the active mission in an interactive chat.
#[derive(Args, Debug)]
pub struct Chat;

impl Chat {
    /// Restore the session file and enter the REPL.
    pub async fn run<P: LLM>(self, manager: SessionManager<P>, stream: bool) -> Result<()> {
        let Some(state) = active_state(manager.restore()?) else {
            bail!(NO_MISSION);
        };

        print_history(&state.history);
        let mut repl = ChatRepl::new(manager, state, stream)?;
        repl.run().await
    }
}
