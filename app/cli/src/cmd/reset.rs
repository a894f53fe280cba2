//! End the mission.

use anyhow::Result;
use session::SessionStore;

/// Delete the session file.
pub fn run(store: &SessionStore) -> Result<()> {
    store.remove()?;
    println!("Mission ended. Start a new one with `orion start`.");
    Ok(())
}
