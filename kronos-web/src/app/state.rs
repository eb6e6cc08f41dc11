use crate::loader::LoadError;
use kronos_fleet::{CalendarRange, DayRecord, LogIndex};
use std::rc::Rc;
use yew::prelude::*;

/// Shared handles for everything the dashboard renders from.
///
/// The log index is set exactly once by the bootstrap load and never replaced;
/// all remaining handles are presentation state the user drives.
#[derive(Clone)]
pub struct AppState {
    pub index: UseStateHandle<Option<Rc<LogIndex>>>,
    pub load_error: UseStateHandle<Option<LoadError>>,
    pub boot_ready: UseStateHandle<bool>,
    /// 1-based slider position over the log's record sequence.
    pub selected_position: UseStateHandle<usize>,
    pub selected_train: UseStateHandle<Option<String>>,
    pub sidebar_open: UseStateHandle<bool>,
    pub show_all_trainsets: UseStateHandle<bool>,
    pub show_chat: UseStateHandle<bool>,
    /// `Some` while the prediction picker is open; closing drops the value so
    /// each open starts from a fresh reference date.
    pub picker: UseStateHandle<Option<CalendarRange>>,
}

#[hook]
pub fn use_app_state() -> AppState {
    AppState {
        index: use_state(|| None::<Rc<LogIndex>>),
        load_error: use_state(|| None::<LoadError>),
        boot_ready: use_state(|| false),
        selected_position: use_state(|| 1_usize),
        selected_train: use_state(|| None::<String>),
        sidebar_open: use_state(|| false),
        show_all_trainsets: use_state(|| false),
        show_chat: use_state(|| false),
        picker: use_state(|| None::<CalendarRange>),
    }
}

impl AppState {
    #[must_use]
    pub fn data_ready(&self) -> bool {
        self.index.is_some()
    }

    /// The day record at the current slider position, if any.
    #[must_use]
    pub fn current_record(&self) -> Option<DayRecord> {
        let index = self.index.as_ref()?;
        index.record_at(*self.selected_position).cloned()
    }
}
