use crate::components::health_bar::HealthBar;
use crate::components::ui::{TrainRow, status_class};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub rows: Vec<TrainRow>,
    pub day: Option<u32>,
    pub on_close: Callback<()>,
}

#[function_component(AllTrainsetsPage)]
pub fn all_trainsets_page(p: &Props) -> Html {
    let close = {
        let cb = p.on_close.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let updated = p
        .day
        .map_or_else(|| "Last updated: -".to_string(), |day| format!("Last updated: Day {day}"));
    html! {
        <section class="all-trainsets">
            <div class="all-trainsets__header">
                <h1>{"All Trainsets Health Status"}</h1>
                <button type="button" onclick={close}>{"Back to Dashboard"}</button>
            </div>
            { if p.rows.is_empty() {
                html! {
                    <div class="empty-state">
                        <h3>{"No data for this day"}</h3>
                        <p>{"The simulation log has no fleet snapshot at this position."}</p>
                    </div>
                }
            } else {
                html! {
                    <div class="all-trainsets__grid">
                        { for p.rows.iter().map(|row| html! {
                            <div class="train-card train-card--static">
                                <div class="train-card__top">
                                    <h3>{ row.train.train_id.clone() }</h3>
                                    <p class="train-card__score">
                                        { format!("{:.0}", row.train.health_score) }
                                        <span>{"/100"}</span>
                                    </p>
                                </div>
                                <HealthBar score={row.train.health_score} />
                                <div class="train-card__bottom">
                                    <span class={status_class(row.status)}>
                                        { row.status.to_string() }
                                    </span>
                                    <span class="train-card__label">{ updated.clone() }</span>
                                </div>
                            </div>
                        }) }
                    </div>
                }
            } }
        </section>
    }
}
