//! Binding to the page's global `confetti()` (canvas-confetti)

use wasm_bindgen::prelude::*;

use crate::settings::BurstParams;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_name = confetti)]
    fn confetti_js(options: &JsValue) -> Result<JsValue, JsValue>;
}

/// Fire one burst; a missing library is logged and otherwise ignored
pub fn fire(params: &BurstParams) {
    let options = serde_json::to_string(params)
        .map_err(|e| JsValue::from_str(&e.to_string()))
        .and_then(|json| js_sys::JSON::parse(&json));

    let result = options.and_then(|options| confetti_js(&options));
    if let Err(e) = result {
        log::warn!("Confetti burst failed: {:?}", e);
    }
}
