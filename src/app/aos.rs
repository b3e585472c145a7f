use wasm_bindgen::prelude::*;

use crate::config::AosOptions;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = AOS, js_name = init, catch)]
    fn aos_init(options: &JsValue) -> Result<(), JsValue>;
}

/// Start the animate-on-scroll library. If the script didn't load, the page
/// just goes without it.
pub fn init_aos(options: &AosOptions) {
    let options = match serde_json::to_string(options) {
        Ok(json) => json,
        Err(e) => {
            log::warn!("couldn't serialize AOS options: {e}");
            return;
        }
    };
    let options = match js_sys::JSON::parse(&options) {
        Ok(v) => v,
        Err(e) => {
            log::warn!("couldn't build AOS options: {e:?}");
            return;
        }
    };
    match aos_init(&options) {
        Ok(()) => log::debug!("AOS initialized"),
        Err(e) => log::warn!("AOS unavailable, skipping: {e:?}"),
    }
}
