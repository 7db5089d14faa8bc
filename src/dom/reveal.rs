use std::cell::RefCell;
use std::rc::Rc;

use web_sys::Element;

use super::counters::{animate_counter, COUNTER_INDEX_ATTR};
use super::util::{observer, select_all, select_in};
use crate::config::PageConfig;
use crate::effects::ClassTarget;
use crate::error::Result;
use crate::reveal::{ObserverOptions, RevealTracker, REVEAL_ID_ATTR, VISIBLE_CLASS, WATCH_SELECTOR};
use crate::waitlist::{CounterBoard, COUNTER_CLASS};

fn counter_within(element: &Element) -> Option<Element> {
    if element.class_list().contains(COUNTER_CLASS) {
        Some(element.clone())
    } else {
        select_in(element, &format!(".{}", COUNTER_CLASS))
    }
}

fn counter_index(element: &Element) -> Option<usize> {
    element.get_attribute(COUNTER_INDEX_ATTR)?.parse().ok()
}

pub fn init_reveal(config: &PageConfig, counters: Rc<RefCell<CounterBoard>>) -> Result<()> {
    let watched = select_all(WATCH_SELECTOR)?;
    if watched.is_empty() {
        return Ok(());
    }

    let tracker = Rc::new(RefCell::new(RevealTracker::new()));
    let duration_ms = config.counter_duration_ms;

    let reveal_observer = {
        let tracker = tracker.clone();
        observer(
            Some(&ObserverOptions::from_config(config)),
            move |element, intersecting, observer| {
                let Some(id) = element
                    .get_attribute(REVEAL_ID_ATTR)
                    .and_then(|v| v.parse().ok())
                else {
                    return;
                };
                let Some(reveal) = tracker.borrow_mut().on_intersection(id, intersecting) else {
                    return;
                };

                element.add_class(VISIBLE_CLASS);
                if let Some(index) = reveal.counter {
                    let target = counters.borrow_mut().claim_animation(index);
                    if let (Some(target), Some(counter)) = (target, counter_within(element)) {
                        let board = counters.clone();
                        if let Err(e) = animate_counter(counter, board, index, target, duration_ms) {
                            log::warn!("Counter animation failed: {}", e);
                        }
                    }
                }
                observer.unobserve(element);
            },
        )?
    };

    for element in watched {
        let counter = counter_within(&element).and_then(|c| counter_index(&c));
        let id = tracker.borrow_mut().watch(counter);
        element.set_attribute(REVEAL_ID_ATTR, &id.to_string())?;
        reveal_observer.observe(&element);
    }
    log::debug!("Watching {} elements for reveal", tracker.borrow().len());
    Ok(())
}
