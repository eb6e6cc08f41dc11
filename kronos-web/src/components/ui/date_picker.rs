use crate::components::modal::Modal;
use kronos_fleet::{CalendarRange, PlainDate};
use yew::prelude::*;

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const DAY_NAMES: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

const WEEKDAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

fn month_name(month: u32) -> &'static str {
    let index = usize::try_from(month.saturating_sub(1)).unwrap_or(0);
    MONTH_NAMES.get(index).copied().unwrap_or("")
}

/// "Wednesday, January 15, 2025" for the selected-date readout.
fn long_date(date: PlainDate) -> String {
    let weekday = WEEKDAY_NAMES
        .get(usize::try_from(date.weekday_from_sunday()).unwrap_or(0))
        .copied()
        .unwrap_or("");
    format!(
        "{weekday}, {} {}, {}",
        month_name(date.month),
        date.day,
        date.year
    )
}

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub calendar: CalendarRange,
    pub on_select: Callback<PlainDate>,
    pub on_previous_month: Callback<()>,
    pub on_next_month: Callback<()>,
    pub on_close: Callback<()>,
}

#[function_component(DatePickerModal)]
pub fn date_picker_modal(p: &Props) -> Html {
    let (year, month) = p.calendar.viewing();
    let previous = {
        let cb = p.on_previous_month.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let next = {
        let cb = p.on_next_month.clone();
        Callback::from(move |_| cb.emit(()))
    };

    let cells = p.calendar.grid().map(|date| {
        let selectable = p.calendar.is_selectable(date);
        let mut classes = classes!("picker-cell");
        if p.calendar.is_selected(date) {
            classes.push("picker-cell--selected");
        } else if selectable {
            classes.push("picker-cell--open");
        }
        if !p.calendar.in_viewing_month(date) {
            classes.push("picker-cell--outside");
        }
        if date.same_day(p.calendar.today()) {
            classes.push("picker-cell--today");
        }
        let onclick = {
            let cb = p.on_select.clone();
            Callback::from(move |_| {
                if selectable {
                    cb.emit(date);
                }
            })
        };
        html! {
            <button
                type="button"
                class={classes}
                disabled={!selectable}
                aria-pressed={p.calendar.is_selected(date).to_string()}
                {onclick}
            >
                { date.day }
            </button>
        }
    });

    html! {
        <Modal
            open=true
            title="Select Prediction Date"
            on_close={p.on_close.clone()}
            return_focus_id={Some(AttrValue::from("menu-toggle-btn"))}
        >
            <div class="picker-nav">
                <button
                    type="button"
                    class="icon-button"
                    aria-label="Previous month"
                    disabled={!p.calendar.can_go_previous()}
                    onclick={previous}
                >
                    {"\u{2039}"}
                </button>
                <h3>{ format!("{} {year}", month_name(month)) }</h3>
                <button
                    type="button"
                    class="icon-button"
                    aria-label="Next month"
                    disabled={!p.calendar.can_go_next()}
                    onclick={next}
                >
                    {"\u{203a}"}
                </button>
            </div>
            <div class="picker-grid" role="grid" aria-label="Calendar">
                { for DAY_NAMES.iter().map(|day| html! {
                    <div class="picker-grid__weekday" role="columnheader">{ *day }</div>
                }) }
                { for cells }
            </div>
            <div class="picker-selected">
                <p class="picker-selected__label">{"Selected Date:"}</p>
                <p class="picker-selected__value">{ long_date(p.calendar.selected()) }</p>
            </div>
            <div class="picker-footnote">
                <p>{"Select any date within the next 30 days"}</p>
                <p class="picker-footnote__dim">{"Prediction functionality coming soon..."}</p>
            </div>
        </Modal>
    }
}
