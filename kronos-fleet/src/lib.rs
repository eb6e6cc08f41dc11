//! KRONOS Fleet Core
//!
//! Platform-agnostic derivation and navigation logic for the KRONOS trainset
//! operations dashboard. This crate indexes a precomputed, day-keyed simulation
//! log and answers the queries the dashboard and analyzer ask of it, without any
//! UI or platform-specific dependencies.

pub mod assist;
pub mod calendar;
pub mod constants;
pub mod data;
pub mod index;
pub mod status;

// Re-export commonly used types
pub use assist::{AssistContext, SlaPace, TrainContext, context_for_question, mentioned_train_ids};
pub use calendar::{CalendarRange, PlainDate};
pub use constants::{CALENDAR_GRID_CELLS, DAILY_HOURS_PER_TRAIN, PREDICTION_WINDOW_DAYS};
pub use data::{DayPlan, DayRecord, TrainRecord, parse_log};
pub use index::{DaySummary, JourneyDay, LogError, LogIndex, display_order};
pub use status::OperationalStatus;
