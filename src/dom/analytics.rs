use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::js_sys;

use crate::analytics::{Analytics, SignUpEvent, SIGN_UP_EVENT};
use crate::error::{Error, Result};

/// Reports conversions through the page's global `gtag`, when one is loaded.
pub struct GtagAnalytics;

fn event_params(event: &SignUpEvent) -> Result<JsValue> {
    let json = serde_json::to_string(event)?;
    js_sys::JSON::parse(&json).map_err(Error::from)
}

impl Analytics for GtagAnalytics {
    fn track_sign_up(&self, event: &SignUpEvent) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let gtag = js_sys::Reflect::get(&window, &JsValue::from_str("gtag")).unwrap_or(JsValue::UNDEFINED);
        let Some(gtag) = gtag.dyn_ref::<js_sys::Function>() else {
            log::debug!("gtag not loaded, skipping {} event", SIGN_UP_EVENT);
            return;
        };

        let params = match event_params(event) {
            Ok(params) => params,
            Err(e) => {
                log::warn!("Could not build analytics params: {}", e);
                return;
            }
        };
        if let Err(e) = gtag.call3(
            &JsValue::NULL,
            &JsValue::from_str("event"),
            &JsValue::from_str(SIGN_UP_EVENT),
            &params,
        ) {
            log::warn!("gtag call failed: {:?}", e);
        }
    }
}
