use crate::components::ui::day_selector::DaySelector;
use crate::components::ui::train_card::TrainCard;
use kronos_fleet::{DayRecord, LogIndex, OperationalStatus, display_order};
use std::rc::Rc;
use yew::prelude::*;

/// The main dashboard body: day selector, headline figures and the cards for
/// the trainsets recommended into service.
pub fn render_dashboard(
    index: &Rc<LogIndex>,
    position: usize,
    record: Option<&DayRecord>,
    on_day_change: &Callback<usize>,
    on_select_train: &Callback<String>,
) -> Html {
    let selector = html! {
        <DaySelector
            day_count={index.day_count()}
            {position}
            day={record.map(|r| r.day)}
            scenario={record.map(|r| AttrValue::from(r.scenario.clone()))}
            on_change={on_day_change.clone()}
        />
    };

    let Some(record) = record else {
        // A miss is an expected empty state, rendered nothing like a load failure.
        return html! {
            <>
                { selector }
                <div class="empty-state">
                    <h3>{"No data for this day"}</h3>
                    <p>{"The simulation log has no record at this position."}</p>
                </div>
            </>
        };
    };

    let summary = index.day_summary(record);
    let service_cards: Vec<Html> = display_order(index.fleet_for_day(record))
        .into_iter()
        .filter(|train| {
            index.status_of(record, &train.train_id) == OperationalStatus::Service
        })
        .map(|train| {
            html! {
                <TrainCard
                    train={train.clone()}
                    status={OperationalStatus::Service}
                    on_select={on_select_train.clone()}
                />
            }
        })
        .collect();

    html! {
        <>
            { selector }
            <div class="dashboard-intro">
                <h2>{"Recommended Trainsets for Service"}</h2>
                <p>
                    {"Derived from the induction plan's health score analysis \
                      and operational constraints."}
                </p>
            </div>
            <div class="summary-chips">
                <span class="summary-chip summary-chip--service">
                    { format!("{} in service", summary.service) }
                </span>
                <span class="summary-chip summary-chip--maintenance">
                    { format!("{} in maintenance", summary.maintenance) }
                </span>
                <span class="summary-chip summary-chip--standby">
                    { format!("{} on standby", summary.standby) }
                </span>
                <span class="summary-chip">
                    { format!("mean health {:.1}", summary.mean_health) }
                </span>
            </div>
            { if service_cards.is_empty() {
                html! {
                    <div class="empty-state">
                        <h3>{"No trainsets in service"}</h3>
                        <p>{"The plan holds the whole fleet out of service today."}</p>
                    </div>
                }
            } else {
                html! { <div class="fleet-grid">{ for service_cards }</div> }
            } }
        </>
    }
}
