pub mod all_trainsets;
pub mod chat_panel;
pub mod date_picker;
pub mod day_selector;
pub mod load_screen;
pub mod train_card;
pub mod train_detail;

use kronos_fleet::{OperationalStatus, TrainRecord};

/// One train plus its derived status for the selected day.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainRow {
    pub train: TrainRecord,
    pub status: OperationalStatus,
}

/// CSS modifier for a status badge.
#[must_use]
pub fn status_class(status: OperationalStatus) -> String {
    format!(
        "status-badge status-badge--{}",
        status.as_str().to_lowercase()
    )
}
