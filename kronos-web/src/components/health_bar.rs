use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub score: f64,
}

/// Horizontal health gauge. Scores are clamped into 0-100 for the fill width
/// since degenerate input may exceed the expected range.
#[function_component(HealthBar)]
pub fn health_bar(p: &Props) -> Html {
    let width = p.score.clamp(0.0, 100.0);
    html! {
        <div
            class="health-bar"
            role="progressbar"
            aria-valuemin="0"
            aria-valuemax="100"
            aria-valuenow={format!("{width:.0}")}
        >
            <div class="health-bar__fill" style={format!("width: {width:.1}%")}></div>
        </div>
    }
}
