//! Fleet-wide operating parameters shared by the core queries.

/// Hours a trainset accumulates per full service day. Used by the branding
/// SLA pace check when deciding whether a train can still meet its target.
pub const DAILY_HOURS_PER_TRAIN: f64 = 16.0;

/// Length of the forward prediction window offered by the date picker,
/// counted in days from the reference date (inclusive on both ends).
pub const PREDICTION_WINDOW_DAYS: i64 = 30;

/// Number of cells in the fixed 6-row, 7-column picker grid.
pub const CALENDAR_GRID_CELLS: usize = 42;
