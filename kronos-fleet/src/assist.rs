//! Context assembly for the RakeAssist chat boundary.
//!
//! The relay endpoint answers free-text questions about the fleet plan. The
//! core does not call it; it only extracts which trains a question mentions
//! and gathers the per-day rows and branding-pace figures a host may want to
//! show or forward alongside the question.

use crate::constants::DAILY_HOURS_PER_TRAIN;
use crate::data::TrainRecord;
use crate::index::LogIndex;
use crate::status::OperationalStatus;
use once_cell::sync::Lazy;
use regex::Regex;

static TRAIN_ID: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b[A-Za-z]+-\d+\b").expect("train id pattern is a valid literal")
});

/// Train IDs mentioned in a question, in order of appearance, deduplicated.
#[must_use]
pub fn mentioned_train_ids(question: &str) -> Vec<String> {
    let mut seen = Vec::new();
    for found in TRAIN_ID.find_iter(question) {
        let id = found.as_str();
        if !seen.iter().any(|known| known == id) {
            seen.push(id.to_string());
        }
    }
    seen
}

/// Branding-SLA pace for one train on one day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlaPace {
    pub target_hours: f64,
    pub current_hours: f64,
    /// Hours per remaining day needed to close the gap.
    pub required_rate: f64,
    /// True when the required rate exceeds what a full service day yields.
    pub behind_schedule: bool,
}

/// One mentioned train's row for the selected day.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainContext {
    pub status: OperationalStatus,
    pub record: TrainRecord,
    pub sla: Option<SlaPace>,
}

/// Everything the host forwards to (or shows beside) the chat relay.
#[derive(Debug, Clone, PartialEq)]
pub struct AssistContext {
    pub day: u32,
    pub days_remaining: u32,
    pub trains: Vec<TrainContext>,
}

impl AssistContext {
    /// One human-readable line per train, in the relay prompt's format.
    #[must_use]
    pub fn summary_lines(&self) -> Vec<String> {
        self.trains
            .iter()
            .map(|ctx| match &ctx.sla {
                Some(pace) => {
                    let standing = if pace.behind_schedule {
                        "behind schedule"
                    } else {
                        "on pace"
                    };
                    format!(
                        "{} is {} today with an active branding SLA ({standing}: {:.1} of {:.1} hours, needs {:.1} h/day).",
                        ctx.record.train_id,
                        ctx.status,
                        pace.current_hours,
                        pace.target_hours,
                        pace.required_rate,
                    )
                }
                None => format!(
                    "{} is {} today and has no active branding SLA.",
                    ctx.record.train_id, ctx.status,
                ),
            })
            .collect()
    }
}

/// Gather the context for `question` on the given logical day.
///
/// Mentioned trains absent from that day's snapshot are skipped, and a day
/// with no record yields an empty context; both are expected conditions the
/// host words its reply around, not errors.
#[must_use]
pub fn context_for_question(index: &LogIndex, day: u32, question: &str) -> AssistContext {
    let month_days = u32::try_from(index.day_count()).unwrap_or(u32::MAX).max(day);
    let days_remaining = month_days - day + 1;

    let mut trains = Vec::new();
    if let Some(record) = index.record_for_day(day) {
        for id in mentioned_train_ids(question) {
            let Some(train) = record.fleet_status_today.iter().find(|t| t.train_id == id) else {
                continue;
            };
            trains.push(TrainContext {
                status: index.status_of(record, &id),
                record: train.clone(),
                sla: sla_pace(train, days_remaining),
            });
        }
    }

    AssistContext {
        day,
        days_remaining,
        trains,
    }
}

fn sla_pace(train: &TrainRecord, days_remaining: u32) -> Option<SlaPace> {
    if !train.branding_sla_active {
        return None;
    }
    let hours_needed = (train.target_hours - train.current_hours).max(0.0);
    let required_rate = hours_needed / f64::from(days_remaining.max(1));
    Some(SlaPace {
        target_hours: train.target_hours,
        current_hours: train.current_hours,
        required_rate,
        behind_schedule: required_rate > DAILY_HOURS_PER_TRAIN,
    })
}
