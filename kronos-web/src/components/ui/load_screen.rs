use crate::loader::LoadError;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    /// `None` while the one-time load is still in flight.
    #[prop_or_default]
    pub error: Option<LoadError>,
}

/// Gate shown before any fleet data exists: either the in-flight loading
/// notice or one of the two terminal failure states. Transport and integrity
/// failures stay visually and textually distinct.
#[function_component(LoadScreen)]
pub fn load_screen(p: &Props) -> Html {
    match &p.error {
        None => html! {
            <div class="load-screen" role="status">
                <div class="load-screen__spinner" aria-hidden="true"></div>
                <p>{"Contacting depot systems..."}</p>
            </div>
        },
        Some(err @ LoadError::Transport(_)) => html! {
            <div class="load-screen load-screen--transport" role="alert">
                <h2>{"Fleet data unreachable"}</h2>
                <p>{ err.to_string() }</p>
                <p class="load-screen__hint">{"Check the connection and reload the dashboard."}</p>
            </div>
        },
        Some(err @ LoadError::Invalid(_)) => html! {
            <div class="load-screen load-screen--integrity" role="alert">
                <h2>{"Fleet data unusable"}</h2>
                <p>{ err.to_string() }</p>
                <p class="load-screen__hint">
                    {"The simulation log must be regenerated before the dashboard can render."}
                </p>
            </div>
        },
    }
}
