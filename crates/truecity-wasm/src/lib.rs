//! truecity-wasm — WebAssembly bindings for truecity-core
//!
//! The browser host owns the DOM (the three `<select>` elements, the modal,
//! the hidden input) and fetches the location files. This crate supplies the
//! logic in between:
//!
//! - `prepare_options("region", body)`: validate a fetched file and return
//!   the sorted, labelled options to render
//! - `parse_stored_value(json)`: the seed to restore, or nulls
//! - `commit_location(selection)`: the value for the hidden input plus the
//!   location text, or the "select a city" error
//! - `host_fields(json)`: country code and city name the host persists
//!
//! Quick start (browser)
//! ---------------------
//! ```javascript
//! import init, { prepare_options, commit_location } from 'truecity-wasm';
//!
//! await init();
//! const body = await (await fetch(`${base}/countries/CO.json`)).text();
//! const regions = prepare_options('region', body);
//! // [{code: 'ANT', displayName: 'Antioquia'}, ...]
//! ```
use std::sync::OnceLock;
use wasm_bindgen::prelude::*;

use serde::{Deserialize, Serialize};
use serde_wasm_bindgen::{from_value, to_value};
use truecity_core::options;
use truecity_core::profile::persisted_fields;
use truecity_core::serializer::{commit, parse_seed};
use truecity_core::source::parse_entries;
use truecity_core::{Level, LocationOption, MessageKey, Messages, Selection};

// Localized strings, set once by the host before first use.
static MESSAGES: OnceLock<Messages> = OnceLock::new();

fn messages() -> &'static Messages {
    MESSAGES.get_or_init(Messages::default)
}

fn js_err(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    web_sys::console::log_1(&"Initializing truecity WASM module...".into());
}

/* --------------------------------------------------------------------------
   Strings
-------------------------------------------------------------------------- */

/// Install localized strings (JSON object keyed like `unknownregion`).
/// Returns `false` if strings were already installed or the JSON is invalid;
/// the English defaults stay in effect then.
#[wasm_bindgen]
pub fn set_messages(json: &str) -> bool {
    match Messages::from_json(json) {
        Ok(m) => MESSAGES.set(m).is_ok(),
        Err(e) => {
            web_sys::console::log_1(&format!("Error loading strings: {e}").into());
            false
        }
    }
}

#[wasm_bindgen]
pub fn message(key: &str) -> Option<String> {
    let key: MessageKey = serde_json::from_value(serde_json::Value::String(key.to_owned())).ok()?;
    Some(messages().get(key).to_owned())
}

#[wasm_bindgen]
pub fn location_text(city: &str, country: &str) -> String {
    messages().location_text(city, country)
}

/* --------------------------------------------------------------------------
   Options
-------------------------------------------------------------------------- */

/// Turn a fetched location file into options for `level` (`"region"` or
/// `"city"`). Throws the localized message when the body is unusable.
#[wasm_bindgen]
pub fn prepare_options(level: &str, body: &str) -> Result<JsValue, JsValue> {
    let level = match level {
        "region" => Level::Region,
        "city" => Level::City,
        other => return Err(js_err(format!("unsupported level: {other}"))),
    };
    let file = level.parent().unwrap_or(Level::Country);
    let entries = parse_entries(file, level.as_str(), body.as_bytes())
        .map_err(|e| js_err(messages().get(e.message_key())))?;
    let opts = options::prepare_options(level, entries, messages());
    to_value(&opts).map_err(js_err)
}

/* --------------------------------------------------------------------------
   Stored values
-------------------------------------------------------------------------- */

#[derive(Serialize)]
struct SeedView {
    country: Option<String>,
    region: Option<String>,
    city: Option<String>,
}

/// Codes to restore from the hidden input. Invalid input gives all nulls.
#[wasm_bindgen]
pub fn parse_stored_value(json: &str) -> Result<JsValue, JsValue> {
    let seed = parse_seed(Some(json)).unwrap_or_default();
    let view = SeedView {
        country: seed.country.map(|p| p.value),
        region: seed.region.map(|p| p.value),
        city: seed.city.map(|p| p.value),
    };
    to_value(&view).map_err(js_err)
}

#[derive(Deserialize)]
struct SelectionInput {
    country: Option<LocationOption>,
    region: Option<LocationOption>,
    city: Option<LocationOption>,
}

#[derive(Serialize)]
struct CommitView {
    value: String,
    summary: String,
}

/// Validate `{country, region, city}` (each `{code, displayName}` or null).
/// Throws the "select a city" text when a level is missing.
#[wasm_bindgen]
pub fn commit_location(selection: JsValue) -> Result<JsValue, JsValue> {
    let input: SelectionInput = from_value(selection).map_err(js_err)?;
    let selection = Selection {
        country: input.country,
        region: input.region,
        city: input.city,
    };
    let committed = commit(&selection, messages())
        .map_err(|_| js_err(messages().get(MessageKey::SelectACity)))?;
    to_value(&CommitView {
        value: committed.json(),
        summary: committed.summary,
    })
    .map_err(js_err)
}

#[derive(Serialize)]
struct HostView {
    country: Option<String>,
    city: Option<String>,
}

/// Fields the host writes on save, or `null` for unusable values.
#[wasm_bindgen]
pub fn host_fields(json: &str) -> Result<JsValue, JsValue> {
    match persisted_fields(json) {
        Some(r) => to_value(&HostView {
            country: r.country,
            city: r.city,
        })
        .map_err(js_err),
        None => Ok(JsValue::NULL),
    }
}

/// Number of options a file would produce; handy for quick checks from JS.
#[wasm_bindgen]
pub fn count_options(level: &str, body: &str) -> Result<u32, JsValue> {
    let arr = js_sys::Array::from(&prepare_options(level, body)?);
    Ok(arr.length())
}
