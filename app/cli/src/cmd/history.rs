//! Print the session history.

use super::{NO_MISSION, active_state};
use crate::terminal::print_history;
use anyhow::Result;
use session::SessionStore;

/// Print the history of the active mission.
pub fn run(store: &SessionStore) -> Result<()> {
    match active_state(store.restore()?) {
        Some(state) => print_history(&state.history),
        None => println!("{NO_MISSION}"),
    }
    Ok(())
}
