use wasm_bindgen::JsCast;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub day_count: usize,
    /// 1-based position on the record sequence, not the logical day value.
    pub position: usize,
    pub day: Option<u32>,
    #[prop_or_default]
    pub scenario: Option<AttrValue>,
    pub on_change: Callback<usize>,
}

#[function_component(DaySelector)]
pub fn day_selector(p: &Props) -> Html {
    let on_input = {
        let cb = p.on_change.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e
                .target()
                .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
                && let Ok(position) = input.value().parse::<usize>()
            {
                cb.emit(position);
            }
        })
    };
    let heading = p.day.map_or_else(
        || format!("Position {} of {}", p.position, p.day_count),
        |day| format!("Day {} of {}", day, p.day_count),
    );
    html! {
        <section class="day-selector" aria-label="Simulation day">
            <div class="day-selector__heading">
                <h2>{ heading }</h2>
                { p.scenario.as_ref().map(|scenario| {
                    let label = scenario.replace('_', " ");
                    html! { <span class="scenario-badge">{ label }</span> }
                }).unwrap_or_default() }
            </div>
            <label for="day-slider" class="sr-only">{"Select simulation day"}</label>
            <input
                id="day-slider"
                type="range"
                min="1"
                max={p.day_count.to_string()}
                value={p.position.to_string()}
                oninput={on_input}
            />
        </section>
    }
}
