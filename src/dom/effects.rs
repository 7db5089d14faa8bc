use gloo_events::EventListener;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::js_sys;
use web_sys::{HtmlElement, HtmlImageElement, HtmlInputElement, MouseEvent};

use super::util::{document, observer, select_all, window};
use crate::config::PageConfig;
use crate::effects::lazy_images::{load_image, LazyStrategy, LAZY_IMAGE_SELECTOR};
use crate::effects::parallax::{Parallax, ORB_SELECTOR, REDUCED_MOTION_QUERY};
use crate::effects::{focus, hover};
use crate::error::Result;

const SHAKE_KEYFRAMES: &str = "
    @keyframes shake {
        0%, 100% { transform: translateX(0); }
        10%, 30%, 50%, 70%, 90% { transform: translateX(-5px); }
        20%, 40%, 60%, 80% { transform: translateX(5px); }
    }
";

fn html_elements(selector: &str) -> Result<Vec<HtmlElement>> {
    Ok(select_all(selector)?
        .into_iter()
        .filter_map(|el| el.dyn_into::<HtmlElement>().ok())
        .collect())
}

/// Swap `no-js` for `js` on the root element.
pub fn mark_js_enabled() -> Result<()> {
    if let Some(root) = document()?.document_element() {
        root.class_list().remove_1("no-js")?;
        root.class_list().add_1("js")?;
    }
    Ok(())
}

pub fn inject_shake_keyframes() -> Result<()> {
    let document = document()?;
    let Some(head) = document.head() else {
        return Ok(());
    };
    let style = document.create_element("style")?;
    style.set_text_content(Some(SHAKE_KEYFRAMES));
    head.append_child(&style)?;
    Ok(())
}

pub fn init_hover() -> Result<()> {
    for tag in html_elements(hover::TAG_SELECTOR)? {
        let entered = tag.clone();
        EventListener::new(&tag, "mouseenter", move |_| hover::hover_enter(&entered)).forget();
        let left = tag.clone();
        EventListener::new(&tag, "mouseleave", move |_| hover::hover_leave(&left)).forget();
    }
    Ok(())
}

pub fn init_parallax(config: &PageConfig) -> Result<()> {
    let window = window()?;
    let reduced_motion = window
        .match_media(REDUCED_MOTION_QUERY)
        .ok()
        .flatten()
        .map(|query| query.matches())
        .unwrap_or(false);
    let parallax = Parallax::new(
        html_elements(ORB_SELECTOR)?,
        reduced_motion,
        config.parallax_speed_step,
    );
    if !parallax.is_enabled() {
        log::debug!("Parallax off (no orbs or reduced motion)");
        return Ok(());
    }

    EventListener::new(&window, "mousemove", move |event| {
        let Some(event) = event.dyn_ref::<MouseEvent>() else {
            return;
        };
        let Some(window) = web_sys::window() else {
            return;
        };
        let width = window.inner_width().ok().and_then(|w| w.as_f64()).unwrap_or(0.0);
        let height = window.inner_height().ok().and_then(|h| h.as_f64()).unwrap_or(0.0);
        parallax.on_mouse_move(
            f64::from(event.client_x()),
            f64::from(event.client_y()),
            width,
            height,
        );
    })
    .forget();
    Ok(())
}

pub fn init_focus_styles() -> Result<()> {
    for element in select_all(focus::INPUT_SELECTOR)? {
        let Ok(input) = element.dyn_into::<HtmlInputElement>() else {
            continue;
        };
        let Some(container) = input.parent_element() else {
            continue;
        };

        let focused = container.clone();
        EventListener::new(&input, "focus", move |_| focus::on_focus(&focused)).forget();
        let field = input.clone();
        EventListener::new(&input, "blur", move |_| focus::on_blur(&container, &field.value()))
            .forget();
    }
    Ok(())
}

fn native_lazy_loading() -> bool {
    js_sys::Reflect::get(&js_sys::global(), &JsValue::from_str("HTMLImageElement"))
        .and_then(|ctor| js_sys::Reflect::get(&ctor, &JsValue::from_str("prototype")))
        .and_then(|proto| js_sys::Reflect::has(&proto, &JsValue::from_str("loading")))
        .unwrap_or(false)
}

pub fn init_lazy_images() -> Result<()> {
    let images: Vec<HtmlImageElement> = select_all(LAZY_IMAGE_SELECTOR)?
        .into_iter()
        .filter_map(|el| el.dyn_into().ok())
        .collect();
    if images.is_empty() {
        return Ok(());
    }

    match LazyStrategy::detect(native_lazy_loading()) {
        LazyStrategy::Native => {
            for image in &images {
                load_image(image);
            }
        }
        LazyStrategy::Observer => {
            let image_observer = observer(None, |element, intersecting, observer| {
                if !intersecting {
                    return;
                }
                if let Some(image) = element.dyn_ref::<HtmlImageElement>() {
                    load_image(image);
                }
                observer.unobserve(element);
            })?;
            for image in &images {
                image_observer.observe(image);
            }
        }
    }
    log::debug!("Lazy loading {} images", images.len());
    Ok(())
}
