use crate::components::modal::Modal;
use crate::components::ui::status_class;
use kronos_fleet::{OperationalStatus, TrainRecord};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub train: TrainRecord,
    pub status: OperationalStatus,
    pub on_close: Callback<()>,
}

fn detail_item(label: &str, value: String, tone: &str) -> Html {
    html! {
        <div class="detail-item">
            <p class="detail-item__label">{ label }</p>
            <p class={format!("detail-item__value detail-item__value--{tone}")}>{ value }</p>
        </div>
    }
}

fn health_tone(score: f64) -> &'static str {
    if score > 80.0 {
        "good"
    } else if score > 60.0 {
        "warn"
    } else {
        "bad"
    }
}

#[function_component(TrainDetailModal)]
pub fn train_detail_modal(p: &Props) -> Html {
    let train = &p.train;
    let job_card = if train.has_open_job() {
        (format!("Open ({})", train.job_card_priority), "bad")
    } else {
        ("Closed".to_string(), "good")
    };
    let cert = if train.is_cert_expired {
        ("Expired".to_string(), "bad")
    } else {
        ("Valid".to_string(), "good")
    };
    let branding = if train.branding_sla_active {
        (
            format!("{:.0} of {:.0} hrs", train.current_hours, train.target_hours),
            "warn",
        )
    } else {
        ("No active SLA".to_string(), "plain")
    };

    html! {
        <Modal
            open=true
            title={AttrValue::from(train.train_id.clone())}
            description={Some(AttrValue::from("Detailed Status Report"))}
            on_close={p.on_close.clone()}
            return_focus_id={Some(AttrValue::from("menu-toggle-btn"))}
        >
            <div class="detail-grid">
                { detail_item(
                    "Health Score",
                    format!("{:.0}/100", train.health_score),
                    health_tone(train.health_score),
                ) }
                <div class="detail-item">
                    <p class="detail-item__label">{"Today's Assignment"}</p>
                    <p class="detail-item__value">
                        <span class={status_class(p.status)}>{ p.status.to_string() }</span>
                    </p>
                </div>
                { detail_item("Job Card", job_card.0, job_card.1) }
                { detail_item("Fitness Certificate", cert.0, cert.1) }
                { detail_item("Branding Exposure", branding.0, branding.1) }
                { detail_item(
                    "Consecutive Service Days",
                    train.consecutive_service_days.to_string(),
                    "plain",
                ) }
            </div>
            <div class="detail-constraints">
                <h4>{"Constraint Details"}</h4>
                <ul>
                    <li>
                        <span class="detail-constraints__key">{"Monthly odometer:"}</span>
                        { format!(" {:.0} km", train.current_km) }
                    </li>
                    <li>
                        <span class="detail-constraints__key">{"Exposure hours:"}</span>
                        { format!(" {:.1} h", train.current_hours) }
                    </li>
                    <li>
                        <span class="detail-constraints__key">{"Job card priority:"}</span>
                        { format!(" {}", train.job_card_priority) }
                    </li>
                </ul>
            </div>
        </Modal>
    }
}
