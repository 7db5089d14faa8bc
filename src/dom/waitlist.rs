use std::cell::RefCell;
use std::rc::Rc;

use gloo_events::{EventListener, EventListenerOptions};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, HtmlButtonElement, HtmlElement, HtmlInputElement};

use super::util::{after, document, select_all, select_in};
use crate::config::PageConfig;
use crate::effects::StyleTarget;
use crate::error::Result;
use crate::waitlist::form::ErrorTicket;
use crate::waitlist::{FormLocation, FormView, WaitlistForm, WaitlistSubmitter, FORM_SELECTOR};

const ERROR_CLASS: &str = "error-message";

const CHECK_ICON: &str = r#"<svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
    <path d="M22 11.08V12a10 10 0 1 1-5.93-9.14"/>
    <polyline points="22 4 12 14.01 9 11.01"/>
</svg>"#;

/// One `.waitlist-form` as seen by the submit flow.
struct DomFormView {
    form: Element,
    form_group: Option<HtmlElement>,
    button: Option<HtmlButtonElement>,
    button_label: String,
    state: Rc<RefCell<WaitlistForm>>,
    error_display_ms: u32,
    shake_ms: u32,
}

impl FormView for DomFormView {
    fn show_submitting(&self, label: &str) {
        if let Some(button) = &self.button {
            button.set_text_content(Some(label));
            button.set_disabled(true);
        }
    }

    fn restore_submit(&self) {
        if let Some(button) = &self.button {
            button.set_text_content(Some(&self.button_label));
            button.set_disabled(false);
        }
    }

    fn hide_error(&self) {
        if let Some(existing) = select_in(&self.form, &format!(".{}", ERROR_CLASS)) {
            existing.remove();
        }
    }

    fn show_error(&self, message: &str, ticket: ErrorTicket) {
        let error_el = match document().and_then(|d| Ok(d.create_element("div")?)) {
            Ok(el) => el,
            Err(e) => {
                log::warn!("Could not render form error: {}", e);
                return;
            }
        };
        error_el.set_class_name(ERROR_CLASS);
        error_el.set_text_content(Some(message));
        if let Err(e) = self.form.append_child(&error_el) {
            log::warn!("Could not render form error: {:?}", e);
            return;
        }

        if let Some(group) = &self.form_group {
            let shake = format!("shake {}s ease", f64::from(self.shake_ms) / 1000.0);
            group.set_style("animation", &shake);
            let group = group.clone();
            after(self.shake_ms, move || group.remove_style("animation"));
        }

        let state = self.state.clone();
        after(self.error_display_ms, move || {
            let current = state.borrow_mut().clear_error(ticket);
            if current {
                error_el.remove();
            }
        });
    }

    fn show_success(&self, message: &str) {
        if let Some(group) = &self.form_group {
            group.set_inner_html(&format!(
                r#"<div class="success-message">{}<span>{}</span></div>"#,
                CHECK_ICON, message
            ));
        }
    }
}

pub fn init_waitlist_forms(config: &PageConfig, submitter: Rc<WaitlistSubmitter>) -> Result<()> {
    for form in select_all(FORM_SELECTOR)? {
        let location = FormLocation::from_form_id(&form.id());
        let state = Rc::new(RefCell::new(WaitlistForm::new(location)));

        let button = select_in(&form, "button[type=\"submit\"]")
            .and_then(|el| el.dyn_into::<HtmlButtonElement>().ok());
        let button_label = button
            .as_ref()
            .and_then(|b| b.text_content())
            .unwrap_or_default();
        let input = select_in(&form, "input[type=\"email\"]")
            .and_then(|el| el.dyn_into::<HtmlInputElement>().ok());

        let view = Rc::new(DomFormView {
            form_group: select_in(&form, ".form-group").and_then(|el| el.dyn_into().ok()),
            form: form.clone(),
            button,
            button_label,
            state: state.clone(),
            error_display_ms: config.error_display_ms,
            shake_ms: config.shake_ms,
        });

        let submitter = submitter.clone();
        EventListener::new_with_options(
            &form,
            "submit",
            EventListenerOptions::enable_prevent_default(),
            move |event| {
                event.prevent_default();
                let email = input.as_ref().map(|i| i.value()).unwrap_or_default();
                let submitter = submitter.clone();
                let state = state.clone();
                let view = view.clone();
                spawn_local(async move {
                    let outcome = submitter.submit(&state, view.as_ref(), &email).await;
                    log::debug!("Waitlist submit finished: {:?}", outcome);
                });
            },
        )
        .forget();
        log::debug!("Waitlist form ready ({})", location.as_str());
    }
    Ok(())
}
