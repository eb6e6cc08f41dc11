//! One-time startup load of the simulation log.
//!
//! The dashboard has no data source other than this single fetch: any failure
//! here is terminal until the application is reloaded, and the two failure
//! classes are kept apart so the user can tell "the file never arrived" from
//! "the file arrived and is unusable".

use kronos_fleet::{LogIndex, parse_log};
use thiserror::Error;

/// Location of the simulation log, relative to the deployment base.
pub const SIMULATION_LOG_ASSET: &str = "static/assets/data/simulation_log.json";

/// Why the dashboard has no fleet data to show.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    /// The document never arrived: network failure or a non-success response.
    #[error("could not reach the simulation log: {0}")]
    Transport(String),
    /// The document arrived but is empty or structurally invalid.
    #[error("simulation log is unusable: {0}")]
    Invalid(String),
}

/// Build the day index from a raw response body.
///
/// # Errors
///
/// Returns [`LoadError::Invalid`] when the body is not a JSON array of day
/// records, or parses to an empty one.
pub fn index_from_json(json: &str) -> Result<LogIndex, LoadError> {
    let days = parse_log(json).map_err(|err| LoadError::Invalid(err.to_string()))?;
    LogIndex::load(days).map_err(|err| LoadError::Invalid(err.to_string()))
}

/// Fetch the log once and index it.
#[cfg(target_arch = "wasm32")]
#[allow(clippy::future_not_send)] // Wasm futures rely on browser types that are not `Send`.
pub async fn fetch_simulation_log(url: &str) -> Result<LogIndex, LoadError> {
    let response = gloo_net::http::Request::get(url)
        .send()
        .await
        .map_err(|err| LoadError::Transport(err.to_string()))?;
    if !response.ok() {
        return Err(LoadError::Transport(format!(
            "HTTP {} {}",
            response.status(),
            response.status_text()
        )));
    }
    let body = response
        .text()
        .await
        .map_err(|err| LoadError::Transport(err.to_string()))?;
    index_from_json(&body)
}
