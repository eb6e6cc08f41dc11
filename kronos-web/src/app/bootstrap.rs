#[cfg(any(target_arch = "wasm32", test))]
use crate::app::state::AppState;
#[cfg(any(target_arch = "wasm32", test))]
use crate::loader::LoadError;
#[cfg(any(target_arch = "wasm32", test))]
use kronos_fleet::LogIndex;
#[cfg(any(target_arch = "wasm32", test))]
use std::rc::Rc;
#[cfg(any(target_arch = "wasm32", test))]
use yew::prelude::*;

#[cfg(any(target_arch = "wasm32", test))]
#[derive(Clone)]
struct BootstrapHandles {
    index: UseStateHandle<Option<Rc<LogIndex>>>,
    load_error: UseStateHandle<Option<LoadError>>,
    boot_ready: UseStateHandle<bool>,
}

#[cfg(any(target_arch = "wasm32", test))]
fn handles_from_state(app_state: &AppState) -> BootstrapHandles {
    BootstrapHandles {
        index: app_state.index.clone(),
        load_error: app_state.load_error.clone(),
        boot_ready: app_state.boot_ready.clone(),
    }
}

#[cfg(any(target_arch = "wasm32", test))]
fn apply_load_result(handles: &BootstrapHandles, result: Result<LogIndex, LoadError>) {
    match result {
        Ok(index) => handles.index.set(Some(Rc::new(index))),
        Err(err) => {
            log::error!("simulation log load failed: {err}");
            handles.load_error.set(Some(err));
        }
    }
    handles.boot_ready.set(true);
}

/// Fetch the simulation log exactly once when the app mounts.
///
/// The effect's cleanup flips an alive flag so a response that lands after the
/// component tree is torn down is dropped instead of applied to stale state.
#[cfg(target_arch = "wasm32")]
#[hook]
pub fn use_bootstrap(app_state: &AppState) {
    let handles = handles_from_state(app_state);

    use_effect_with((), move |()| {
        let alive = Rc::new(std::cell::Cell::new(true));
        let guard = alive.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let url = crate::paths::asset_path(crate::loader::SIMULATION_LOG_ASSET);
            let result = crate::loader::fetch_simulation_log(&url).await;
            if let Err(err) = &result {
                crate::dom::console_error(&format!("simulation log load failed: {err}"));
            }
            if alive.get() {
                apply_load_result(&handles, result);
            } else {
                log::warn!("simulation log response arrived after teardown; discarded");
            }
        });
        move || guard.set(false)
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[function_component(LoadedHarness)]
    fn loaded_harness() -> Html {
        let app_state = crate::app::state::use_app_state();
        let handles = handles_from_state(&app_state);
        let initialized = use_state(|| false);
        if !*initialized {
            initialized.set(true);
            let result = crate::loader::index_from_json(include_str!(
                "../../static/assets/data/simulation_log.json"
            ));
            apply_load_result(&handles, result);
        }
        Html::default()
    }

    #[function_component(FailedHarness)]
    fn failed_harness() -> Html {
        let app_state = crate::app::state::use_app_state();
        let handles = handles_from_state(&app_state);
        let initialized = use_state(|| false);
        if !*initialized {
            initialized.set(true);
            apply_load_result(
                &handles,
                Err(LoadError::Transport("HTTP 503 Service Unavailable".into())),
            );
        }
        Html::default()
    }

    #[test]
    fn bootstrap_applies_the_shipped_log() {
        let _ = block_on(LocalServerRenderer::<LoadedHarness>::new().render());
    }

    #[test]
    fn bootstrap_applies_a_transport_failure() {
        let _ = block_on(LocalServerRenderer::<FailedHarness>::new().render());
    }
}
