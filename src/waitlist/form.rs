use serde::Serialize;

use super::backend::JoinRequest;
use crate::error::{Error, Result};
use crate::utils::validation::validate_email;

pub const HERO_FORM_ID: &str = "hero-waitlist-form";

/// Which of the page's waitlist forms a signup came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FormLocation {
    Hero,
    Footer,
}

impl FormLocation {
    pub fn from_form_id(id: &str) -> Self {
        if id == HERO_FORM_ID {
            FormLocation::Hero
        } else {
            FormLocation::Footer
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FormLocation::Hero => "hero",
            FormLocation::Footer => "footer",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FormState {
    Idle,
    Submitting,
    Success,
    Error { message: String, generation: u64 },
}

/// Handle to one shown error message; clearing with a stale handle is a
/// no-op so an older timer never removes a newer message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ErrorTicket {
    pub generation: u64,
}

/// A newly shown error and the one it pushes off the form, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShownError {
    pub ticket: ErrorTicket,
    pub replaces: Option<ErrorTicket>,
}

#[derive(Debug, Clone)]
pub struct WaitlistForm {
    location: FormLocation,
    state: FormState,
    error_generation: u64,
    visible_error: Option<ErrorTicket>,
}

impl WaitlistForm {
    pub fn new(location: FormLocation) -> Self {
        Self {
            location,
            state: FormState::Idle,
            error_generation: 0,
            visible_error: None,
        }
    }

    pub fn location(&self) -> FormLocation {
        self.location
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    /// The error message currently on the form. At most one is shown.
    pub fn visible_error(&self) -> Option<ErrorTicket> {
        self.visible_error
    }

    /// Idle/Error → Submitting for a valid address.
    ///
    /// Invalid addresses leave the state untouched and return
    /// [`Error::InvalidEmail`]; the caller reports it through [`Self::fail`].
    pub fn begin_submit(&mut self, email: &str) -> Result<JoinRequest> {
        match self.state {
            FormState::Submitting => return Err(Error::FormBusy("submitting")),
            FormState::Success => return Err(Error::FormBusy("complete")),
            FormState::Idle | FormState::Error { .. } => {}
        }
        let email = validate_email(email)?;
        self.state = FormState::Submitting;
        Ok(JoinRequest::new(email, self.location))
    }

    /// Move to the Error state showing `error`'s message. A message still
    /// on the form is replaced, never stacked.
    pub fn fail(&mut self, error: &Error) -> ShownError {
        self.error_generation += 1;
        self.state = FormState::Error {
            message: error.user_message().to_string(),
            generation: self.error_generation,
        };
        let ticket = ErrorTicket {
            generation: self.error_generation,
        };
        ShownError {
            ticket,
            replaces: self.visible_error.replace(ticket),
        }
    }

    /// Submitting → Success. Success is terminal.
    pub fn succeed(&mut self) -> Result<()> {
        if self.state != FormState::Submitting {
            return Err(Error::Submission(format!(
                "cannot complete a form in state {:?}",
                self.state
            )));
        }
        self.state = FormState::Success;
        Ok(())
    }

    /// The message behind `ticket` expired. Returns whether it was still
    /// the one on the form; Error → Idle when it was the current error.
    pub fn clear_error(&mut self, ticket: ErrorTicket) -> bool {
        if self.visible_error != Some(ticket) {
            return false;
        }
        self.visible_error = None;
        if matches!(self.state, FormState::Error { generation, .. } if generation == ticket.generation)
        {
            self.state = FormState::Idle;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_from_form_id() {
        assert_eq!(FormLocation::from_form_id("hero-waitlist-form"), FormLocation::Hero);
        assert_eq!(FormLocation::from_form_id("footer-waitlist-form"), FormLocation::Footer);
        assert_eq!(FormLocation::from_form_id(""), FormLocation::Footer);
    }

    #[test]
    fn test_valid_submit_goes_to_submitting() {
        let mut form = WaitlistForm::new(FormLocation::Hero);
        let request = form.begin_submit("user@example.com").unwrap();
        assert_eq!(request.email, "user@example.com");
        assert_eq!(request.location, FormLocation::Hero);
        assert_eq!(form.state(), &FormState::Submitting);
    }

    #[test]
    fn test_invalid_submit_keeps_state() {
        let mut form = WaitlistForm::new(FormLocation::Footer);
        assert_eq!(form.begin_submit("user@"), Err(Error::InvalidEmail));
        assert_eq!(form.state(), &FormState::Idle);
    }

    #[test]
    fn test_busy_and_terminal_states_reject_submit() {
        let mut form = WaitlistForm::new(FormLocation::Hero);
        form.begin_submit("user@example.com").unwrap();
        assert_eq!(
            form.begin_submit("user@example.com"),
            Err(Error::FormBusy("submitting"))
        );
        form.succeed().unwrap();
        assert_eq!(form.state(), &FormState::Success);
        assert_eq!(
            form.begin_submit("other@example.com"),
            Err(Error::FormBusy("complete"))
        );
    }

    #[test]
    fn test_succeed_requires_submitting() {
        let mut form = WaitlistForm::new(FormLocation::Hero);
        assert!(form.succeed().is_err());
    }

    #[test]
    fn test_error_retry_allowed() {
        let mut form = WaitlistForm::new(FormLocation::Hero);
        form.fail(&Error::InvalidEmail);
        assert!(form.begin_submit("user@example.com").is_ok());
    }

    #[test]
    fn test_stale_ticket_does_not_clear_newer_error() {
        let mut form = WaitlistForm::new(FormLocation::Hero);
        let first = form.fail(&Error::InvalidEmail).ticket;
        let second = form.fail(&Error::InvalidEmail).ticket;
        assert_ne!(first, second);

        assert!(!form.clear_error(first));
        assert!(matches!(form.state(), FormState::Error { .. }));
        assert!(form.clear_error(second));
        assert_eq!(form.state(), &FormState::Idle);
    }

    #[test]
    fn test_error_message_text() {
        let mut form = WaitlistForm::new(FormLocation::Hero);
        form.fail(&Error::InvalidEmail);
        match form.state() {
            FormState::Error { message, .. } => {
                assert_eq!(message, "Please enter a valid email address")
            }
            other => panic!("unexpected state {other:?}"),
        }
    }

    #[test]
    fn test_new_error_replaces_visible_one() {
        let mut form = WaitlistForm::new(FormLocation::Hero);
        let first = form.fail(&Error::InvalidEmail);
        assert_eq!(first.replaces, None);
        assert_eq!(form.visible_error(), Some(first.ticket));

        let second = form.fail(&Error::InvalidEmail);
        assert_eq!(second.replaces, Some(first.ticket));
        assert_eq!(form.visible_error(), Some(second.ticket));
    }

    #[test]
    fn test_expired_error_leaves_nothing_visible() {
        let mut form = WaitlistForm::new(FormLocation::Footer);
        let shown = form.fail(&Error::InvalidEmail);
        assert!(form.clear_error(shown.ticket));
        assert_eq!(form.visible_error(), None);
        assert!(!form.clear_error(shown.ticket));

        let next = form.fail(&Error::InvalidEmail);
        assert_eq!(next.replaces, None);
    }

    #[test]
    fn test_error_outlives_retry_until_expiry() {
        let mut form = WaitlistForm::new(FormLocation::Hero);
        let shown = form.fail(&Error::InvalidEmail);
        form.begin_submit("user@example.com").unwrap();
        assert!(form.clear_error(shown.ticket));
        assert_eq!(form.state(), &FormState::Submitting);
    }

    #[test]
    fn test_surrounding_whitespace_is_rejected() {
        let mut form = WaitlistForm::new(FormLocation::Hero);
        assert_eq!(form.begin_submit(" user@example.com "), Err(Error::InvalidEmail));
        assert_eq!(form.state(), &FormState::Idle);
    }
}
