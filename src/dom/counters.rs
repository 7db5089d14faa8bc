use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::js_sys;
use web_sys::Element;

use super::util::{request_frame, select_all};
use crate::animation::CounterAnimation;
use crate::error::Result;
use crate::utils::format::parse_count;
use crate::waitlist::{CounterBoard, CounterSink, COUNTER_CLASS};

pub const COUNTER_INDEX_ATTR: &str = "data-counter-index";
const TARGET_ATTR: &str = "data-target";

/// A count in the visitor's locale, e.g. `12,480` or `12.480`.
fn display_count(value: u64) -> String {
    js_sys::Number::from(value as f64)
        .to_locale_string("default")
        .into()
}

/// The page's `.counter` elements, in [`CounterBoard`] order.
pub struct DomCounters {
    elements: Vec<Element>,
}

impl DomCounters {
    /// Seed a board from every counter's `data-target`.
    pub fn collect(board: &mut CounterBoard) -> Result<Self> {
        let mut elements = Vec::new();
        for element in select_all(&format!(".{}", COUNTER_CLASS))? {
            let Some(target) = element.get_attribute(TARGET_ATTR).as_deref().and_then(parse_count)
            else {
                log::warn!("Counter without a usable {}, skipping", TARGET_ATTR);
                continue;
            };
            let index = board.register(target);
            element.set_attribute(COUNTER_INDEX_ATTR, &index.to_string())?;
            elements.push(element);
        }
        log::debug!("Registered {} waitlist counters", elements.len());
        Ok(Self { elements })
    }
}

impl CounterSink for DomCounters {
    fn render_counts(&self, values: &[u64]) {
        for (element, value) in self.elements.iter().zip(values) {
            if let Err(e) = element.set_attribute(TARGET_ATTR, &value.to_string()) {
                log::warn!("Failed to store counter target: {:?}", e);
            }
            element.set_text_content(Some(&display_count(*value)));
        }
    }
}

/// Count `element` up from 0 to `target`, one step per animation frame.
/// Each frame follows the board's current target for `index`, so a signup
/// mid-animation still ends on the incremented value.
pub fn animate_counter(
    element: Element,
    counters: Rc<RefCell<CounterBoard>>,
    index: usize,
    target: u64,
    duration_ms: u32,
) -> Result<()> {
    let mut animation = CounterAnimation::new(target, duration_ms);
    let frame: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let next = frame.clone();

    *frame.borrow_mut() = Some(Closure::new(move |timestamp: f64| {
        let latest = counters.borrow().target(index);
        if let Some(latest) = latest {
            animation.retarget(latest);
        }
        let step = animation.step(timestamp);
        element.set_text_content(Some(&display_count(step.value)));
        if step.done {
            // drop the closure, ending the loop
            let _ = next.borrow_mut().take();
            return;
        }
        if let Some(callback) = next.borrow().as_ref() {
            if let Err(e) = request_frame(callback) {
                log::warn!("Counter animation stopped: {}", e);
            }
        }
    }));

    if let Some(callback) = frame.borrow().as_ref() {
        request_frame(callback)?;
    }
    Ok(())
}
