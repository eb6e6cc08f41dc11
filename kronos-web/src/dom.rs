use kronos_fleet::PlainDate;

/// Log an error message to the browser console.
pub fn console_error(message: &str) {
    web_sys::console::error_1(&wasm_bindgen::JsValue::from(message));
}

/// Today's date as plain calendar components, from the browser clock.
#[cfg(target_arch = "wasm32")]
#[must_use]
pub fn local_today() -> PlainDate {
    let now = js_sys::Date::new_0();
    let year = i32::try_from(now.get_full_year()).unwrap_or(1970);
    PlainDate::new(year, now.get_month() + 1, now.get_date())
}

/// Server-side fallback used by the render tests: UTC, derived from the
/// system clock without a timezone database.
#[cfg(not(target_arch = "wasm32"))]
#[must_use]
pub fn local_today() -> PlainDate {
    let secs = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or(0);
    PlainDate::new(1970, 1, 1).add_days(i64::try_from(secs / 86_400).unwrap_or(0))
}
