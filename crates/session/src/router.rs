//! Turns raw user input into the text sent to the backend.
//!
//! Two inputs are reserved: `/reroll` asks for an alternative to the last
//! proposal and `/report` asks for the closing report. Anything else is a
//! trigger and is forwarded verbatim behind a line of time context. Matching
//! is exact after trimming.

use crate::{Message, Role, elapsed_minutes};
use chrono::{DateTime, Local, Utc};

/// Reserved input requesting an alternative mission.
pub const REROLL: &str = "/reroll";
/// Reserved input requesting the summary report.
pub const REPORT: &str = "/report";

/// Sent for `/reroll` when no earlier trigger exists.
pub const GENERIC_REROLL: &str = "The explorer did not like the last proposal. Propose a \
     different mission that still fits the remaining time, the radius and the budget.";

/// Sent for `/report`.
pub const REPORT_REQUEST: &str = "The explorer is ending the mission. Write a summary report \
     of the whole session: the triggers received, the missions proposed, the time spent and \
     the money used. Then close the session.";

/// What a line of user input asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command<'a> {
    /// Ask for an alternative mission.
    Reroll,
    /// Ask for the summary report.
    Report,
    /// Forward an observation.
    Trigger(&'a str),
}

impl<'a> Command<'a> {
    /// Classify trimmed user input.
    pub fn parse(input: &'a str) -> Self {
        match input.trim() {
            REROLL => Self::Reroll,
            REPORT => Self::Report,
            trigger => Self::Trigger(trigger),
        }
    }
}

/// Outgoing text for `input`.
///
/// `history` is the history before `input` is recorded. Pure: the same
/// arguments always produce the same text.
pub fn route(
    input: &str,
    history: &[Message],
    start_time: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
) -> String {
    match Command::parse(input) {
        Command::Reroll => match last_trigger(history) {
            Some(trigger) => format!(
                "The explorer rejected the mission you proposed for the trigger \"{trigger}\". \
                 Propose a different mission for the same trigger, within the same time, \
                 radius and budget."
            ),
            None => GENERIC_REROLL.to_owned(),
        },
        Command::Report => REPORT_REQUEST.to_owned(),
        Command::Trigger(trigger) => {
            let elapsed = start_time
                .map(|start| elapsed_minutes(start, now))
                .unwrap_or_default();
            format!(
                "[Current time: {} | Elapsed: {elapsed} min]\nTrigger: {trigger}",
                now.with_timezone(&Local).format("%H:%M")
            )
        }
    }
}

/// Most recent user trigger, skipping earlier reserved commands.
fn last_trigger(history: &[Message]) -> Option<&str> {
    history.iter().rev().find_map(|message| {
        if message.role != Role::User {
            return None;
        }
        match Command::parse(&message.content) {
            Command::Trigger(trigger) => Some(trigger),
            _ => None,
        }
    })
}
