use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

use truecity_wasm::{commit_location, count_options, host_fields, location_text, prepare_options};

#[wasm_bindgen_test]
fn regions_are_counted_after_dedup() {
    #[cfg(target_arch = "wasm32")]
    truecity_wasm::start();

    let body = r#"[{"i":"a","n":"Zeta"},{"i":"b","n":"Alpha"},{"i":"a","n":"Dup"}]"#;
    assert_eq!(count_options("region", body).unwrap(), 2);
}

#[wasm_bindgen_test]
fn non_array_body_throws_localized_message() {
    let err = prepare_options("region", r#"{"i":"a"}"#).unwrap_err();
    assert_eq!(err.as_string().as_deref(), Some("Invalid regions data format"));
}

#[wasm_bindgen_test]
fn location_text_uses_template() {
    assert_eq!(location_text("Medellín", "Colombia"), "Medellín, Colombia");
}

#[wasm_bindgen_test]
fn incomplete_commit_throws() {
    let err = commit_location(JsValue::from(js_sys::Object::new())).unwrap_err();
    assert_eq!(err.as_string().as_deref(), Some("Select a city"));
}

#[wasm_bindgen_test]
fn garbage_has_no_host_fields() {
    assert!(host_fields("nope").unwrap().is_null());
}
