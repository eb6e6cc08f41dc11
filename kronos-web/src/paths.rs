//! Helpers for constructing URLs that respect the deployment base path.

/// When `PUBLIC_URL` is set at compile time (e.g., `/kronos` for a hosted
/// subdirectory), generated asset URLs are prefixed accordingly. Local builds
/// without `PUBLIC_URL` fall back to root-anchored paths.
#[must_use]
pub fn asset_path(relative: &str) -> String {
    asset_path_with_base(relative, option_env!("PUBLIC_URL").unwrap_or(""))
}

/// Endpoint of the RakeAssist relay, overridable at compile time via
/// `KRONOS_ASSIST_URL`. The default matches the development relay.
#[must_use]
pub fn assist_endpoint() -> &'static str {
    option_env!("KRONOS_ASSIST_URL").unwrap_or("http://localhost:5001/ask")
}

fn asset_path_with_base(relative: &str, base: &str) -> String {
    let base = base.trim_end_matches('/');
    let rel = relative.trim_start_matches('/');

    if base.is_empty() {
        format!("/{rel}")
    } else {
        format!("{base}/{rel}")
    }
}
