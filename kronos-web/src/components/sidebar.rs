use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub open: bool,
    pub on_close: Callback<()>,
    pub on_date_prediction: Callback<()>,
    pub on_chatbot: Callback<()>,
    pub on_all_trainsets: Callback<()>,
}

fn menu_entry(label: &str, hint: &str, action: &Callback<()>) -> Html {
    let onclick = {
        let cb = action.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {
        <button type="button" class="menu-entry" {onclick}>
            <span class="menu-entry__label">{ label }</span>
            <span class="menu-entry__hint">{ hint }</span>
        </button>
    }
}

#[function_component(Sidebar)]
pub fn sidebar(p: &Props) -> Html {
    if !p.open {
        return Html::default();
    }
    let close = {
        let cb = p.on_close.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {
        <nav class="sidebar" aria-label="Dashboard menu">
            <div class="sidebar__header">
                <h2>{"Menu"}</h2>
                <button type="button" class="icon-button" aria-label="Close menu" onclick={close}>
                    {"X"}
                </button>
            </div>
            <div class="sidebar__entries">
                { menu_entry(
                    "Date Predictions",
                    "View predictions for any date",
                    &p.on_date_prediction,
                ) }
                { menu_entry("RakeAssist", "Ask about the fleet plan", &p.on_chatbot) }
                { menu_entry(
                    "All Trainsets",
                    "View all trainset health status",
                    &p.on_all_trainsets,
                ) }
            </div>
        </nav>
    }
}
