use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub on_menu_toggle: Callback<()>,
}

#[function_component(Header)]
pub fn header(p: &Props) -> Html {
    let open_menu = {
        let cb = p.on_menu_toggle.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {
        <header role="banner" class="app-header">
            <a href="#main" class="sr-only">{"Skip to content"}</a>
            <div class="header-left">
                <button
                    id="menu-toggle-btn"
                    type="button"
                    class="icon-button"
                    aria-label="Open menu"
                    onclick={open_menu}
                >
                    {"\u{2630}"}
                </button>
                <div class="operator-chip">
                    <span class="operator-name">{"System Admin"}</span>
                    <span class="operator-role">{"Operations Dashboard"}</span>
                </div>
            </div>
            <div class="header-title">
                <h1>{"KRONOS"}</h1>
                <p>{"TRAINSET OPTIMIZATION"}</p>
            </div>
        </header>
    }
}
