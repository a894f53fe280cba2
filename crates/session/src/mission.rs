//! Mission parameters and the briefing sent to the backend.

use crate::{Error, Result};
use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};

/// Allowed mission duration in minutes.
pub const DURATION_MINUTES: (u32, u32) = (15, 1440);
/// Allowed exploration radius in kilometres.
pub const SCOPE_KM: (f64, f64) = (0.1, 20.0);
/// Allowed budget in yen.
pub const BUDGET_JPY: (u32, u32) = (0, 10_000);

/// Parameters fixed when a mission starts.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct MissionParameters {
    /// Where the explorer sets off from.
    pub start_point: String,
    /// Time available for the mission.
    pub duration_minutes: u32,
    /// Exploration radius around the starting point.
    pub scope_km: f64,
    /// Money available, if the explorer set a budget.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget_jpy: Option<u32>,
}

impl MissionParameters {
    /// Validate and build mission parameters.
    pub fn new(
        start_point: impl Into<String>,
        duration_minutes: u32,
        scope_km: f64,
        budget_jpy: Option<u32>,
    ) -> Result<Self> {
        let params = Self {
            start_point: start_point.into().trim().to_owned(),
            duration_minutes,
            scope_km,
            budget_jpy,
        };
        params.validate()?;
        Ok(params)
    }

    /// Check every parameter against its bounds.
    pub fn validate(&self) -> Result<()> {
        if self.start_point.trim().is_empty() {
            return Err(Error::InvalidParameter(
                "starting point must not be empty".into(),
            ));
        }

        let (min, max) = DURATION_MINUTES;
        if !(min..=max).contains(&self.duration_minutes) {
            return Err(Error::InvalidParameter(format!(
                "duration must be between {min} and {max} minutes, got {}",
                self.duration_minutes
            )));
        }

        let (min, max) = SCOPE_KM;
        if !(min..=max).contains(&self.scope_km) {
            return Err(Error::InvalidParameter(format!(
                "radius must be between {min} and {max} km, got {}",
                self.scope_km
            )));
        }

        if let Some(budget) = self.budget_jpy {
            let (min, max) = BUDGET_JPY;
            if !(min..=max).contains(&budget) {
                return Err(Error::InvalidParameter(format!(
                    "budget must be between {min} and {max} JPY, got {budget}"
                )));
            }
        }

        Ok(())
    }

    /// The one-time briefing that opens the backend conversation.
    ///
    /// Deterministic in `start_time`, so a restored session can rebuild it.
    pub fn system_prompt(&self, start_time: DateTime<Utc>) -> String {
        let budget = match self.budget_jpy {
            Some(budget) => format!("{budget} JPY"),
            None => "not specified".to_owned(),
        };
        format!(
            "You are Orion, an analyst for urban explorers. You turn the explorer's \
             observations (\"triggers\") into short, concrete micro-missions.\n\n\
             Mission briefing\n\
             - Mission start: {start}\n\
             - Starting point: {start_point}\n\
             - Time available: {duration} minutes\n\
             - Exploration radius: {scope:.1} km\n\
             - Budget: {budget}\n\n\
             Rules\n\
             - Every trigger arrives with the current time and the minutes elapsed since the \
             mission started. Keep every proposal inside the remaining time, the radius and \
             the budget.\n\
             - Answer each trigger with one mission: a title, what to do, where to go, and the \
             estimated time and cost.\n\
             - When asked for a report, summarise the whole mission and close the session.\n\n\
             Acknowledge this briefing in one short sentence and wait for the first trigger.",
            start = start_time.with_timezone(&Local).format("%Y-%m-%d %H:%M"),
            start_point = self.start_point,
            duration = self.duration_minutes,
            scope = self.scope_km,
        )
    }
}
