//! In-memory session state.

use crate::{Message, MissionParameters, Role, SessionFile};
use chrono::{DateTime, Utc};

/// Opens a restored backend context when the briefing cannot be rebuilt; the
/// backend requires a conversation to start with a user turn.
pub const RESUME_PREAMBLE: &str =
    "Resume the urban exploration mission recorded in this conversation.";

/// Everything known about the current mission.
///
/// The default value is the inactive, pre-mission state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    /// Whether a mission is running.
    pub session_started: bool,
    /// When the mission started.
    pub start_time: Option<DateTime<Utc>>,
    /// Recorded turns, oldest first.
    pub history: Vec<Message>,
    /// Parameters the mission was started with, when known.
    pub mission: Option<MissionParameters>,
    /// Context the backend continues from, in its own role vocabulary.
    pub conversation: Vec<llm::Message>,
}

impl SessionState {
    /// Whether a mission is running.
    pub fn is_active(&self) -> bool {
        self.session_started
    }

    /// Append a message stamped at `at`. Content is not validated.
    pub fn append(&mut self, role: Role, content: impl Into<String>, at: DateTime<Utc>) {
        self.history.push(Message::new(role, content, at));
    }

    /// Whole minutes since the mission started, `0` before it starts.
    pub fn elapsed_minutes(&self, now: DateTime<Utc>) -> i64 {
        self.start_time
            .map(|start| elapsed_minutes(start, now))
            .unwrap_or_default()
    }

    /// Rebuild the state a session file describes.
    ///
    /// The backend context is the mission briefing (when the parameters were
    /// stored) followed by the role-mapped history. Without a briefing, a
    /// history that opens with the assistant is preceded by
    /// [`RESUME_PREAMBLE`].
    pub fn from_file(file: SessionFile) -> Self {
        let mut conversation = Vec::with_capacity(file.history.len() + 1);
        if let (Some(mission), Some(start)) = (&file.mission, file.start_time) {
            conversation.push(llm::Message::user(mission.system_prompt(start)));
        } else if file
            .history
            .first()
            .is_some_and(|first| first.role == Role::Assistant)
        {
            conversation.push(llm::Message::user(RESUME_PREAMBLE));
        }
        conversation.extend(file.history.iter().map(Message::to_backend));

        Self {
            session_started: file.session_started,
            start_time: file.start_time,
            history: file.history,
            mission: file.mission,
            conversation,
        }
    }

    /// The persisted view of this state.
    pub fn to_file(&self) -> SessionFile {
        SessionFile {
            start_time: self.start_time,
            session_started: self.session_started,
            history: self.history.clone(),
            mission: self.mission.clone(),
        }
    }
}

/// `floor((now - start) in minutes)`, clamped at zero.
pub fn elapsed_minutes(start: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    (now - start).num_minutes().max(0)
}
