//! Orion mission sessions.
//!
//! A session is an explicit [`SessionState`] value threaded through the
//! [`SessionManager`]: it is created by [`SessionManager::start`], grows one
//! [`Message`] per turn, is written to a single JSON file by the
//! [`SessionStore`] after every turn, and is rebuilt from that file (backend
//! context included) by [`SessionManager::restore`]. User input is turned into
//! the text actually sent to the backend by the [`router`].

pub use error::{Error, Result};
pub use manager::{Outgoing, SessionManager};
pub use message::{Message, Role};
pub use mission::MissionParameters;
pub use router::Command;
pub use session::{RESUME_PREAMBLE, SessionState, elapsed_minutes};
pub use store::{DEFAULT_SESSION_FILE, Restore, SessionFile, SessionStore};

mod error;
mod manager;
mod message;
pub mod mission;
pub mod router;
mod session;
mod store;
