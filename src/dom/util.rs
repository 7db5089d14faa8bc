use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::js_sys;
use web_sys::{
    Document, Element, HtmlElement, HtmlImageElement, IntersectionObserver,
    IntersectionObserverEntry, IntersectionObserverInit, NodeList, Window,
};

use crate::effects::lazy_images::LazyImage;
use crate::effects::{ClassTarget, StyleTarget};
use crate::error::{Error, Result};
use crate::reveal::ObserverOptions;

impl From<JsValue> for Error {
    fn from(value: JsValue) -> Self {
        Error::Dom(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

pub fn window() -> Result<Window> {
    web_sys::window().ok_or_else(|| Error::Dom("no window".to_string()))
}

pub fn document() -> Result<Document> {
    window()?
        .document()
        .ok_or_else(|| Error::Dom("no document".to_string()))
}

pub fn elements(list: NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub fn select_all(selector: &str) -> Result<Vec<Element>> {
    Ok(elements(document()?.query_selector_all(selector)?))
}

pub fn select_in(root: &Element, selector: &str) -> Option<Element> {
    root.query_selector(selector).ok().flatten()
}

/// Run `f` once after `ms` milliseconds.
pub fn after(ms: u32, f: impl FnOnce() + 'static) {
    Timeout::new(ms, f).forget();
}

/// Run `f` on the next animation frame with the frame timestamp.
pub fn next_frame(f: impl FnOnce(f64) + 'static) -> Result<()> {
    let callback = Closure::once_into_js(f);
    window()?.request_animation_frame(callback.unchecked_ref())?;
    Ok(())
}

pub fn request_frame(callback: &Closure<dyn FnMut(f64)>) -> Result<()> {
    window()?.request_animation_frame(callback.as_ref().unchecked_ref())?;
    Ok(())
}

/// Build an IntersectionObserver whose callback lives as long as the page.
pub fn observer(
    options: Option<&ObserverOptions>,
    mut on_change: impl FnMut(&Element, bool, &IntersectionObserver) + 'static,
) -> Result<IntersectionObserver> {
    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                on_change(&entry.target(), entry.is_intersecting(), &observer);
            }
        },
    );

    let observer = match options {
        Some(options) => {
            let init = IntersectionObserverInit::new();
            init.set_threshold(&JsValue::from_f64(options.threshold));
            init.set_root_margin(&options.root_margin);
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?
        }
        None => IntersectionObserver::new(callback.as_ref().unchecked_ref())?,
    };
    callback.forget();
    Ok(observer)
}

impl StyleTarget for HtmlElement {
    fn set_style(&self, property: &str, value: &str) {
        if let Err(e) = self.style().set_property(property, value) {
            log::warn!("Failed to set {}: {:?}", property, e);
        }
    }

    fn remove_style(&self, property: &str) {
        if let Err(e) = self.style().remove_property(property) {
            log::warn!("Failed to clear {}: {:?}", property, e);
        }
    }
}

impl ClassTarget for Element {
    fn add_class(&self, class: &str) {
        if let Err(e) = self.class_list().add_1(class) {
            log::warn!("Failed to add class {}: {:?}", class, e);
        }
    }

    fn remove_class(&self, class: &str) {
        if let Err(e) = self.class_list().remove_1(class) {
            log::warn!("Failed to remove class {}: {:?}", class, e);
        }
    }
}

impl LazyImage for HtmlImageElement {
    fn data_src(&self) -> Option<String> {
        self.get_attribute("data-src")
    }

    fn set_src(&self, src: &str) {
        HtmlImageElement::set_src(self, src);
    }
}
