pub mod dashboard;

use crate::app::state::AppState;
use crate::components::header::Header;
use crate::components::sidebar::Sidebar;
use crate::components::ui::all_trainsets::AllTrainsetsPage;
use crate::components::ui::chat_panel::ChatPanel;
use crate::components::ui::date_picker::DatePickerModal;
use crate::components::ui::load_screen::LoadScreen;
use crate::components::ui::train_detail::TrainDetailModal;
use crate::components::ui::TrainRow;
use kronos_fleet::{CalendarRange, PlainDate, display_order};
use yew::prelude::*;

pub fn render_app(state: &AppState) -> Html {
    if !*state.boot_ready || state.load_error.is_some() {
        return html! { <LoadScreen error={(*state.load_error).clone()} /> };
    }
    let Some(index) = (*state.index).clone() else {
        return html! { <LoadScreen /> };
    };

    let record = state.current_record();
    let current_day = record.as_ref().map(|r| r.day);

    let open_sidebar = {
        let sidebar = state.sidebar_open.clone();
        Callback::from(move |()| sidebar.set(true))
    };
    let close_sidebar = {
        let sidebar = state.sidebar_open.clone();
        Callback::from(move |()| sidebar.set(false))
    };
    let close_sidebar_backdrop = {
        let sidebar = state.sidebar_open.clone();
        Callback::from(move |_| sidebar.set(false))
    };

    let open_picker = {
        let sidebar = state.sidebar_open.clone();
        let picker = state.picker.clone();
        Callback::from(move |()| {
            sidebar.set(false);
            picker.set(Some(CalendarRange::open(crate::dom::local_today())));
        })
    };
    let open_chat = {
        let sidebar = state.sidebar_open.clone();
        let show_chat = state.show_chat.clone();
        Callback::from(move |()| {
            sidebar.set(false);
            show_chat.set(true);
        })
    };
    let open_all_trainsets = {
        let sidebar = state.sidebar_open.clone();
        let show_all = state.show_all_trainsets.clone();
        Callback::from(move |()| {
            sidebar.set(false);
            show_all.set(true);
        })
    };
    let close_all_trainsets = {
        let show_all = state.show_all_trainsets.clone();
        Callback::from(move |()| show_all.set(false))
    };

    let on_day_change = {
        let position = state.selected_position.clone();
        Callback::from(move |next: usize| position.set(next))
    };
    let on_select_train = {
        let selected = state.selected_train.clone();
        Callback::from(move |id: String| {
            crate::a11y::set_status(&format!("Showing details for {id}"));
            selected.set(Some(id));
        })
    };
    let close_detail = {
        let selected = state.selected_train.clone();
        Callback::from(move |()| selected.set(None))
    };

    let picker_select = {
        let picker = state.picker.clone();
        Callback::from(move |date: PlainDate| {
            if let Some(mut next) = (*picker).clone() {
                next.select(date);
                picker.set(Some(next));
            }
        })
    };
    let picker_previous = {
        let picker = state.picker.clone();
        Callback::from(move |()| {
            if let Some(mut next) = (*picker).clone() {
                next.previous_month();
                picker.set(Some(next));
            }
        })
    };
    let picker_next = {
        let picker = state.picker.clone();
        Callback::from(move |()| {
            if let Some(mut next) = (*picker).clone() {
                next.next_month();
                picker.set(Some(next));
            }
        })
    };
    let picker_close = {
        let picker = state.picker.clone();
        Callback::from(move |()| picker.set(None))
    };
    let close_chat = {
        let show_chat = state.show_chat.clone();
        Callback::from(move |()| show_chat.set(false))
    };

    let detail_modal = state.selected_train.as_ref().and_then(|id| {
        let record = record.as_ref()?;
        let train = record
            .fleet_status_today
            .iter()
            .find(|t| &t.train_id == id)?
            .clone();
        let status = index.status_of(record, id);
        Some(html! {
            <TrainDetailModal {train} {status} on_close={close_detail.clone()} />
        })
    });

    let all_rows: Vec<TrainRow> = record.as_ref().map_or_else(Vec::new, |rec| {
        display_order(&rec.fleet_status_today)
            .into_iter()
            .map(|train| TrainRow {
                train: train.clone(),
                status: index.status_of(rec, &train.train_id),
            })
            .collect()
    });

    html! {
        <div class="app-shell">
            <Header on_menu_toggle={open_sidebar} />
            <Sidebar
                open={*state.sidebar_open}
                on_close={close_sidebar}
                on_date_prediction={open_picker}
                on_chatbot={open_chat}
                on_all_trainsets={open_all_trainsets}
            />
            { if *state.sidebar_open {
                html! { <div class="backdrop" onclick={close_sidebar_backdrop}></div> }
            } else {
                Html::default()
            } }
            <main id="main" class="app-main">
                { if *state.show_all_trainsets {
                    html! {
                        <AllTrainsetsPage
                            rows={all_rows}
                            day={current_day}
                            on_close={close_all_trainsets}
                        />
                    }
                } else {
                    dashboard::render_dashboard(
                        &index,
                        *state.selected_position,
                        record.as_ref(),
                        &on_day_change,
                        &on_select_train,
                    )
                } }
            </main>
            { detail_modal.unwrap_or_default() }
            { (*state.picker).clone().map(|calendar| html! {
                <DatePickerModal
                    {calendar}
                    on_select={picker_select}
                    on_previous_month={picker_previous}
                    on_next_month={picker_next}
                    on_close={picker_close}
                />
            }).unwrap_or_default() }
            { if *state.show_chat {
                let day = current_day.unwrap_or_else(|| {
                    u32::try_from(*state.selected_position).unwrap_or(1)
                });
                html! { <ChatPanel index={index.clone()} {day} on_close={close_chat} /> }
            } else {
                Html::default()
            } }
            <div id="status-helper" class="sr-only" aria-live="polite"></div>
        </div>
    }
}
