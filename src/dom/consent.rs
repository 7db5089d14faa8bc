use std::cell::RefCell;
use std::rc::Rc;

use gloo_events::EventListener;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::js_sys;
use web_sys::{Element, KeyboardEvent, Storage};

use super::util::{after, document, elements, window};
use crate::config::PageConfig;
use crate::consent::{
    ConsentBanner, ConsentChoice, ConsentStore, MemoryStore, BANNER_CLASS, BANNER_SHOWN_CLASS,
};
use crate::effects::ClassTarget;
use crate::error::Result;

const BANNER_HTML: &str = r#"<div class="cookie-content">
    <p>We use cookies to improve your experience. By continuing, you agree to our <a href="/cookies.html">Cookie Policy</a>.</p>
    <div class="cookie-actions">
        <button class="btn btn-secondary" data-consent="declined">Decline</button>
        <button class="btn btn-primary" data-consent="accepted">Accept</button>
    </div>
</div>"#;

type Banner = Rc<RefCell<ConsentBanner<Rc<dyn ConsentStore>>>>;

/// `localStorage`-backed consent persistence.
pub struct LocalStore {
    storage: Storage,
}

impl ConsentStore for LocalStore {
    fn load(&self, key: &str) -> Result<Option<String>> {
        Ok(self.storage.get_item(key)?)
    }

    fn save(&self, key: &str, value: &str) -> Result<()> {
        Ok(self.storage.set_item(key, value)?)
    }
}

fn consent_store() -> Rc<dyn ConsentStore> {
    match window().ok().and_then(|w| w.local_storage().ok().flatten()) {
        Some(storage) => Rc::new(LocalStore { storage }),
        None => {
            log::warn!("localStorage unavailable, consent will not persist");
            Rc::new(MemoryStore::default())
        }
    }
}

fn banner_element() -> Option<Element> {
    document()
        .ok()?
        .query_selector(&format!(".{}", BANNER_CLASS))
        .ok()
        .flatten()
}

fn dismiss(banner: &Banner, fade_ms: u32) {
    let Some(element) = banner_element() else {
        banner.borrow_mut().removed();
        return;
    };
    element.remove_class(BANNER_SHOWN_CLASS);
    let banner = banner.clone();
    after(fade_ms, move || {
        element.remove();
        banner.borrow_mut().removed();
    });
}

fn choose(banner: &Banner, choice: ConsentChoice) {
    let fade = banner.borrow_mut().choose(choice);
    if let Some(fade_ms) = fade {
        dismiss(banner, fade_ms);
    }
}

/// Build and append the banner. `Ok(false)` when there is no `<body>`.
fn insert_banner(banner: &Banner, show_delay_ms: u32) -> Result<bool> {
    let document = document()?;
    let Some(body) = document.body() else {
        return Ok(false);
    };
    let element = document.create_element("div")?;
    element.set_class_name(BANNER_CLASS);
    element.set_inner_html(BANNER_HTML);

    for button in elements(element.query_selector_all("[data-consent]")?) {
        let Some(choice) = button
            .get_attribute("data-consent")
            .and_then(|v| v.parse::<ConsentChoice>().ok())
        else {
            continue;
        };
        let banner = banner.clone();
        EventListener::new(&button, "click", move |_| choose(&banner, choice)).forget();
    }

    body.append_child(&element)?;
    let banner = banner.clone();
    after(show_delay_ms, move || {
        let reveal = banner.borrow_mut().revealed();
        if reveal {
            element.add_class(BANNER_SHOWN_CLASS);
        }
    });
    Ok(true)
}

/// `window.acceptCookies()` / `window.declineCookies()` for markup that
/// calls them directly.
fn install_globals(banner: &Banner) -> Result<()> {
    let window = window()?;
    for (name, choice) in [
        ("acceptCookies", ConsentChoice::Accepted),
        ("declineCookies", ConsentChoice::Declined),
    ] {
        let banner = banner.clone();
        let action = Closure::<dyn Fn()>::new(move || choose(&banner, choice));
        js_sys::Reflect::set(&window, &JsValue::from_str(name), action.as_ref())?;
        action.forget();
    }
    Ok(())
}

fn install_escape(banner: &Banner) -> Result<()> {
    let banner = banner.clone();
    EventListener::new(&document()?, "keydown", move |event| {
        let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
            return;
        };
        if event.key() != "Escape" {
            return;
        }
        let fade = banner.borrow_mut().on_escape();
        if let Some(fade_ms) = fade {
            dismiss(&banner, fade_ms);
        }
    })
    .forget();
    Ok(())
}

pub fn init_consent(config: &PageConfig) -> Result<()> {
    let banner: Banner = Rc::new(RefCell::new(ConsentBanner::new(consent_store(), config)));
    install_globals(&banner)?;
    install_escape(&banner)?;

    let delay = banner.borrow_mut().on_load();
    if let Some(delay_ms) = delay {
        let show_delay_ms = config.banner_show_delay_ms;
        let banner = banner.clone();
        after(delay_ms, move || {
            let show = banner.borrow_mut().show();
            if show {
                let inserted = match insert_banner(&banner, show_delay_ms) {
                    Ok(inserted) => inserted,
                    Err(e) => {
                        log::warn!("Could not show cookie banner: {}", e);
                        false
                    }
                };
                banner.borrow_mut().inserted(inserted);
            }
        });
    }
    Ok(())
}
