//! WebAssembly bindings for the extension popup

use crate::aggregator::{crop_panels, group_crops_by_type};
use crate::models::{DurationTables, Snapshot};
use crate::parser::parse_snapshot;
use crate::{calculate_timers, derive_timers, now_millis, TimerOptions};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

macro_rules! console_log {
    ($($t:tt)*) => (log(&format_args!($($t)*).to_string()))
}

/// Initialize panic hook for better error messages in browser console
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Compute the full timer report for a snapshot.
///
/// `snapshot_json` may be a bare farm object or any stored session shape.
/// `now_ms` defaults to the wall clock. Returns the report as JSON.
#[wasm_bindgen]
pub fn calculate_timers_json(snapshot_json: &str, now_ms: Option<f64>) -> Result<String, JsValue> {
    let snapshot = load_snapshot(snapshot_json)?;
    let now = now_ms.map(|ms| ms as i64).unwrap_or_else(now_millis);

    let report = calculate_timers(Some(&snapshot), now, &TimerOptions::default());

    console_log!(
        "Derived {} timers ({} ready), {} suggestions",
        report.timers.len(),
        report.ready_count(),
        report.suggestions.len()
    );

    serde_json::to_string(&report)
        .map_err(|e| JsValue::from_str(&format!("Failed to serialize report: {}", e)))
}

/// Crop tab panels for the popup's crop view, as JSON
#[wasm_bindgen]
pub fn crop_panels_json(snapshot_json: &str, now_ms: Option<f64>) -> Result<String, JsValue> {
    let snapshot = load_snapshot(snapshot_json)?;
    let now = now_ms.map(|ms| ms as i64).unwrap_or_else(now_millis);

    let timers = derive_timers(&snapshot, now, DurationTables::builtin());
    let panels = crop_panels(group_crops_by_type(&timers, now));

    serde_json::to_string(&panels)
        .map_err(|e| JsValue::from_str(&format!("Failed to serialize crop panels: {}", e)))
}

/// Compact duration string, e.g. "1h 30m"
#[wasm_bindgen]
pub fn format_duration_ms(ms: f64) -> String {
    crate::format_duration(ms as i64)
}

fn load_snapshot(snapshot_json: &str) -> Result<Snapshot, JsValue> {
    parse_snapshot(snapshot_json).map_err(|e| JsValue::from_str(&format!("Failed to load snapshot: {}", e)))
}
