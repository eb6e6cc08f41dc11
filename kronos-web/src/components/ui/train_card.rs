use crate::components::health_bar::HealthBar;
use crate::components::ui::status_class;
use kronos_fleet::{OperationalStatus, TrainRecord};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub train: TrainRecord,
    pub status: OperationalStatus,
    pub on_select: Callback<String>,
}

#[function_component(TrainCard)]
pub fn train_card(p: &Props) -> Html {
    let select = {
        let cb = p.on_select.clone();
        let id = p.train.train_id.clone();
        Callback::from(move |_| cb.emit(id.clone()))
    };
    html! {
        <button type="button" class="train-card" onclick={select}>
            <div class="train-card__top">
                <h3>{ p.train.train_id.clone() }</h3>
                <p class="train-card__score">
                    { format!("{:.0}", p.train.health_score) }
                    <span>{"/100"}</span>
                </p>
            </div>
            <HealthBar score={p.train.health_score} />
            <div class="train-card__bottom">
                <span class="train-card__label">{"Health Score"}</span>
                <span class={status_class(p.status)}>{ p.status.to_string() }</span>
            </div>
            <span class="train-card__cta">{"Click for details"}</span>
        </button>
    }
}
