use std::rc::Rc;

use gloo_events::{EventListener, EventListenerOptions};
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, ScrollBehavior, ScrollToOptions};

use super::util::{document, next_frame, select_all, window};
use crate::config::PageConfig;
use crate::effects::StyleTarget;
use crate::error::Result;
use crate::nav::anchors::{fragment_id, scroll_destination};
use crate::nav::scroll::{nav_scrolled, progress_percent, ScrollThrottle};
use crate::nav::{NAV_ID, NAV_SCROLLED_CLASS};

const PROGRESS_BAR_CSS: &str = "position: fixed; top: 0; left: 0; height: 3px; \
    background: var(--gradient-main); z-index: 1001; transition: width 0.1s; width: 0%;";

pub fn init_scroll_watcher(config: &PageConfig) -> Result<()> {
    let Some(nav) = document()?.get_element_by_id(NAV_ID) else {
        log::debug!("No #{} element, scroll watcher off", NAV_ID);
        return Ok(());
    };
    let window = window()?;
    let throttle = Rc::new(ScrollThrottle::new());
    let threshold = config.nav_scroll_threshold;

    EventListener::new(&window, "scroll", move |_| {
        if !throttle.request() {
            return;
        }
        let nav = nav.clone();
        let pending = throttle.clone();
        let scheduled = next_frame(move |_| {
            let offset = web_sys::window()
                .and_then(|w| w.scroll_y().ok())
                .unwrap_or(0.0);
            if let Err(e) = nav
                .class_list()
                .toggle_with_force(NAV_SCROLLED_CLASS, nav_scrolled(offset, threshold))
            {
                log::warn!("Failed to update nav style: {:?}", e);
            }
            pending.release();
        });
        if let Err(e) = scheduled {
            log::warn!("Could not schedule nav update: {}", e);
            throttle.release();
        }
    })
    .forget();
    Ok(())
}

pub fn init_anchor_links() -> Result<()> {
    for anchor in select_all("a[href^=\"#\"]")? {
        let Some(id) = anchor
            .get_attribute("href")
            .as_deref()
            .and_then(fragment_id)
            .map(str::to_string)
        else {
            continue;
        };

        EventListener::new_with_options(
            &anchor,
            "click",
            EventListenerOptions::enable_prevent_default(),
            move |event| {
                let (Ok(document), Ok(window)) = (document(), window()) else {
                    return;
                };
                let Some(target) = document.get_element_by_id(&id) else {
                    return;
                };
                event.prevent_default();

                let nav_height = document
                    .get_element_by_id(NAV_ID)
                    .and_then(|nav| nav.dyn_into::<HtmlElement>().ok())
                    .map(|nav| f64::from(nav.offset_height()))
                    .unwrap_or(0.0);
                let top = scroll_destination(
                    target.get_bounding_client_rect().top(),
                    window.scroll_y().unwrap_or(0.0),
                    nav_height,
                );

                let options = ScrollToOptions::new();
                options.set_top(top);
                options.set_behavior(ScrollBehavior::Smooth);
                window.scroll_to_with_scroll_to_options(&options);
            },
        )
        .forget();
    }
    Ok(())
}

pub fn init_scroll_progress() -> Result<()> {
    let document = document()?;
    let Some(body) = document.body() else {
        return Ok(());
    };
    let bar: HtmlElement = document.create_element("div")?.unchecked_into();
    bar.set_class_name("scroll-progress");
    bar.style().set_css_text(PROGRESS_BAR_CSS);
    body.append_child(&bar)?;

    let window = window()?;
    EventListener::new(&window, "scroll", move |_| {
        let (Ok(window), Ok(document)) = (super::util::window(), super::util::document()) else {
            return;
        };
        let scroll_height = document
            .document_element()
            .map(|root| f64::from(root.scroll_height()))
            .unwrap_or(0.0);
        let viewport = window
            .inner_height()
            .ok()
            .and_then(|h| h.as_f64())
            .unwrap_or(0.0);
        let percent = progress_percent(window.scroll_y().unwrap_or(0.0), scroll_height, viewport);
        bar.set_style("width", &format!("{}%", percent));
    })
    .forget();
    Ok(())
}
