use futures::executor::block_on;
use kronos_fleet::{CalendarRange, OperationalStatus, PlainDate, TrainRecord};
use kronos_web::components::header::Header;
use kronos_web::components::modal::Modal;
use kronos_web::components::ui::TrainRow;
use kronos_web::components::ui::all_trainsets::AllTrainsetsPage;
use kronos_web::components::ui::chat_panel::ChatPanel;
use kronos_web::components::ui::date_picker::DatePickerModal;
use kronos_web::components::ui::day_selector::DaySelector;
use kronos_web::components::ui::load_screen::LoadScreen;
use kronos_web::components::ui::train_card::TrainCard;
use kronos_web::components::ui::train_detail::TrainDetailModal;
use kronos_web::loader::{LoadError, index_from_json};
use std::rc::Rc;
use yew::html::ChildrenRenderer;
use yew::{AttrValue, Callback, LocalServerRenderer};

fn sample_train() -> TrainRecord {
    TrainRecord {
        train_id: "TS-01".to_string(),
        health_score: 95.0,
        current_km: 400.0,
        current_hours: 32.0,
        consecutive_service_days: 2,
        job_card_priority: "NONE".to_string(),
        is_cert_expired: false,
        branding_sla_active: true,
        target_hours: 120.0,
    }
}

#[test]
fn header_renders_brand_and_menu_toggle() {
    let props = kronos_web::components::header::Props {
        on_menu_toggle: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<Header>::with_props(props).render());
    assert!(html.contains("KRONOS"));
    assert!(html.contains("menu-toggle-btn"));
}

#[test]
fn modal_renders_when_open_and_skips_when_closed() {
    let open_props = kronos_web::components::modal::Props {
        open: true,
        title: AttrValue::from("Title"),
        description: Some(AttrValue::from("Desc")),
        on_close: Callback::noop(),
        return_focus_id: None,
        children: ChildrenRenderer::default(),
    };
    let html = block_on(LocalServerRenderer::<Modal>::with_props(open_props).render());
    assert!(html.contains("modal__header"));
    assert!(html.contains("Desc"));

    let closed_props = kronos_web::components::modal::Props {
        open: false,
        title: AttrValue::from("Title"),
        description: None,
        on_close: Callback::noop(),
        return_focus_id: None,
        children: ChildrenRenderer::default(),
    };
    let html = block_on(LocalServerRenderer::<Modal>::with_props(closed_props).render());
    assert!(!html.contains("modal-backdrop"));
}

#[test]
fn load_screen_states_stay_distinct() {
    let loading_props = kronos_web::components::ui::load_screen::Props { error: None };
    let loading =
        block_on(LocalServerRenderer::<LoadScreen>::with_props(loading_props).render());
    assert!(loading.contains("Contacting depot systems"));

    let transport_props = kronos_web::components::ui::load_screen::Props {
        error: Some(LoadError::Transport("HTTP 503 Service Unavailable".into())),
    };
    let transport =
        block_on(LocalServerRenderer::<LoadScreen>::with_props(transport_props).render());
    assert!(transport.contains("load-screen--transport"));
    assert!(transport.contains("Fleet data unreachable"));
    assert!(transport.contains("could not reach"));

    let integrity_props = kronos_web::components::ui::load_screen::Props {
        error: Some(LoadError::Invalid("expected an array".into())),
    };
    let integrity =
        block_on(LocalServerRenderer::<LoadScreen>::with_props(integrity_props).render());
    assert!(integrity.contains("load-screen--integrity"));
    assert!(integrity.contains("Fleet data unusable"));
    assert!(!integrity.contains("unreachable"));
}

#[test]
fn train_card_shows_score_and_status() {
    let props = kronos_web::components::ui::train_card::Props {
        train: sample_train(),
        status: OperationalStatus::Service,
        on_select: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<TrainCard>::with_props(props).render());
    assert!(html.contains("TS-01"));
    assert!(html.contains("95"));
    assert!(html.contains("status-badge--service"));
    assert!(html.contains("SERVICE"));
}

#[test]
fn train_detail_lists_constraints() {
    let props = kronos_web::components::ui::train_detail::Props {
        train: sample_train(),
        status: OperationalStatus::Service,
        on_close: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<TrainDetailModal>::with_props(props).render());
    assert!(html.contains("Detailed Status Report"));
    assert!(html.contains("Constraint Details"));
    assert!(html.contains("32 of 120 hrs"));
    assert!(html.contains("Closed"));
}

#[test]
fn day_selector_reports_day_and_scenario() {
    let props = kronos_web::components::ui::day_selector::Props {
        day_count: 5,
        position: 3,
        day: Some(3),
        scenario: Some(AttrValue::from("HEAVY_MONSOON")),
        on_change: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<DaySelector>::with_props(props).render());
    assert!(html.contains("Day 3 of 5"));
    assert!(html.contains("HEAVY MONSOON"));
    assert!(html.contains("day-slider"));
}

#[test]
fn date_picker_renders_the_full_grid() {
    let props = kronos_web::components::ui::date_picker::Props {
        calendar: CalendarRange::open(PlainDate::new(2025, 1, 15)),
        on_select: Callback::noop(),
        on_previous_month: Callback::noop(),
        on_next_month: Callback::noop(),
        on_close: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<DatePickerModal>::with_props(props).render());
    assert!(html.contains("January 2025"));
    assert!(html.contains("Wednesday, January 15, 2025"));
    assert!(html.contains("Prediction functionality coming soon"));
    assert_eq!(html.matches("picker-cell--today").count(), 1);
    // every one of the 42 day cells carries an aria-pressed marker
    assert_eq!(html.matches("aria-pressed").count(), 42);
}

#[test]
fn all_trainsets_page_handles_data_and_empty_states() {
    let rows = vec![TrainRow {
        train: sample_train(),
        status: OperationalStatus::Service,
    }];
    let props = kronos_web::components::ui::all_trainsets::Props {
        rows,
        day: Some(2),
        on_close: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<AllTrainsetsPage>::with_props(props).render());
    assert!(html.contains("All Trainsets Health Status"));
    assert!(html.contains("Last updated: Day 2"));

    let empty_props = kronos_web::components::ui::all_trainsets::Props {
        rows: Vec::new(),
        day: None,
        on_close: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<AllTrainsetsPage>::with_props(empty_props).render());
    assert!(html.contains("No data for this day"));
}

#[test]
fn chat_panel_opens_with_the_greeting() {
    let index = index_from_json(include_str!("../static/assets/data/simulation_log.json"))
        .expect("shipped sample log loads");
    let props = kronos_web::components::ui::chat_panel::Props {
        index: Rc::new(index),
        day: 3,
        on_close: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<ChatPanel>::with_props(props).render());
    assert!(html.contains("RakeAssist"));
    assert!(html.contains("Ask me about the fleet plan"));
    assert!(html.contains("Day 3"));
}
