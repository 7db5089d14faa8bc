use std::cell::RefCell;
use std::rc::Rc;

use super::backend::WaitlistBackend;
use super::counters::CounterBoard;
use super::form::{ErrorTicket, WaitlistForm};
use super::{SUBMITTING_LABEL, SUCCESS_MESSAGE};
use crate::analytics::{Analytics, SignUpEvent};
use crate::error::Error;

/// What the submit flow needs from a rendered form.
#[cfg_attr(test, mockall::automock)]
pub trait FormView {
    /// Disable the submit button and swap its label.
    fn show_submitting(&self, label: &str);
    /// Re-enable the submit button with its original label.
    fn restore_submit(&self);
    /// Take the current error message off the form.
    fn hide_error(&self);
    /// Show `message` under the form. The view expires it later through
    /// [`WaitlistForm::clear_error`] with `ticket`.
    fn show_error(&self, message: &str, ticket: ErrorTicket);
    fn show_success(&self, message: &str);
}

/// Renders counter values, in [`CounterBoard`] order.
#[cfg_attr(test, mockall::automock)]
pub trait CounterSink {
    fn render_counts(&self, values: &[u64]);
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    Joined { counts: Vec<u64> },
    Rejected { error: Error, ticket: ErrorTicket },
    /// Submit while already submitting or after success.
    Ignored,
}

/// Runs one form submission end to end against injected collaborators.
pub struct WaitlistSubmitter {
    backend: Rc<dyn WaitlistBackend>,
    analytics: Rc<dyn Analytics>,
    counters: Rc<RefCell<CounterBoard>>,
    counter_sink: Rc<dyn CounterSink>,
}

impl WaitlistSubmitter {
    pub fn new(
        backend: Rc<dyn WaitlistBackend>,
        analytics: Rc<dyn Analytics>,
        counters: Rc<RefCell<CounterBoard>>,
        counter_sink: Rc<dyn CounterSink>,
    ) -> Self {
        Self {
            backend,
            analytics,
            counters,
            counter_sink,
        }
    }

    pub async fn submit(
        &self,
        form: &RefCell<WaitlistForm>,
        view: &dyn FormView,
        email: &str,
    ) -> SubmitOutcome {
        let begin = form.borrow_mut().begin_submit(email);
        let request = match begin {
            Ok(request) => request,
            Err(Error::FormBusy(state)) => {
                log::debug!("Ignoring submit, form is {}", state);
                return SubmitOutcome::Ignored;
            }
            Err(error) => {
                let ticket = report_error(form, view, &error);
                return SubmitOutcome::Rejected { error, ticket };
            }
        };

        view.show_submitting(SUBMITTING_LABEL);

        match self.backend.join(&request).await {
            Ok(()) => {
                if let Err(e) = form.borrow_mut().succeed() {
                    log::warn!("Form changed state during submission: {}", e);
                }
                view.show_success(SUCCESS_MESSAGE);

                let counts = self.counters.borrow_mut().increment_all();
                self.counter_sink.render_counts(&counts);

                self.analytics
                    .track_sign_up(&SignUpEvent::waitlist(request.location));
                log::info!("Waitlist signup from {} form", request.location.as_str());
                SubmitOutcome::Joined { counts }
            }
            Err(error) => {
                log::warn!("Waitlist submission failed: {}", error);
                view.restore_submit();
                let ticket = report_error(form, view, &error);
                SubmitOutcome::Rejected { error, ticket }
            }
        }
    }
}

fn report_error(form: &RefCell<WaitlistForm>, view: &dyn FormView, error: &Error) -> ErrorTicket {
    let shown = form.borrow_mut().fail(error);
    if shown.replaces.is_some() {
        view.hide_error();
    }
    view.show_error(error.user_message(), shown.ticket);
    shown.ticket
}
