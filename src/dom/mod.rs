//! Browser bindings. Everything here is glue between `web-sys` events and
//! the handlers in the rest of the crate.

mod analytics;
mod backend;
mod consent;
mod counters;
mod effects;
mod nav;
mod reveal;
mod util;
mod waitlist;

use std::cell::RefCell;
use std::rc::Rc;

use gloo_events::EventListener;
use wasm_bindgen::prelude::*;

use crate::config::{self, PageConfig};
use crate::error::{Error, Result};
use crate::waitlist::{CounterBoard, WaitlistBackend, WaitlistSubmitter};

const CONFIG_ELEMENT_ID: &str = "page-config";

fn read_config() -> (PageConfig, Option<Error>) {
    let raw = util::document()
        .ok()
        .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|el| el.text_content())
        .unwrap_or_default();
    match PageConfig::from_json(&raw) {
        Ok(config) => (config, None),
        Err(e) => (PageConfig::default(), Some(e)),
    }
}

fn waitlist_backend(config: &PageConfig) -> Rc<dyn WaitlistBackend> {
    match &config.waitlist_endpoint {
        Some(endpoint) => {
            log::info!("Waitlist signups go to {}", endpoint);
            Rc::new(backend::HttpBackend {
                endpoint: endpoint.clone(),
            })
        }
        None => Rc::new(backend::SimulatedBackend {
            delay_ms: config.submit_delay_ms,
        }),
    }
}

fn enable(feature: &str, result: Result<()>) {
    if let Err(e) = result {
        log::warn!("{} disabled: {}", feature, e);
    }
}

fn init(config: &'static PageConfig) {
    enable("js class", effects::mark_js_enabled());
    enable("shake keyframes", effects::inject_shake_keyframes());
    enable("scroll watcher", nav::init_scroll_watcher(config));
    enable("anchor links", nav::init_anchor_links());

    let board = Rc::new(RefCell::new(CounterBoard::new()));
    let dom_counters = counters::DomCounters::collect(&mut board.borrow_mut());
    match dom_counters {
        Ok(dom_counters) => {
            let submitter = Rc::new(WaitlistSubmitter::new(
                waitlist_backend(config),
                Rc::new(analytics::GtagAnalytics),
                board.clone(),
                Rc::new(dom_counters),
            ));
            enable("waitlist forms", waitlist::init_waitlist_forms(config, submitter));
        }
        Err(e) => log::warn!("waitlist forms disabled: {}", e),
    }
    enable("reveal observer", reveal::init_reveal(config, board));

    enable("cookie consent", consent::init_consent(config));
    enable("tag hover", effects::init_hover());
    enable("parallax", effects::init_parallax(config));
    enable("focus styles", effects::init_focus_styles());
    enable("lazy images", effects::init_lazy_images());
    if config.scroll_progress {
        enable("scroll progress", nav::init_scroll_progress());
    }
    log::info!("Landing page ready");
}

#[wasm_bindgen(start)]
pub fn start() -> std::result::Result<(), JsValue> {
    let (page_config, config_error) = read_config();
    wasm_logger::init(wasm_logger::Config::new(page_config.log_level()));
    if let Some(e) = config_error {
        log::warn!("Invalid #{} block, using defaults: {}", CONFIG_ELEMENT_ID, e);
    }
    config::init(page_config);
    let config = config::get();

    let document = util::document().map_err(|e| JsValue::from_str(&e.to_string()))?;
    if document.ready_state() == "loading" {
        EventListener::once(&document, "DOMContentLoaded", move |_| init(config)).forget();
    } else {
        init(config);
    }
    Ok(())
}
