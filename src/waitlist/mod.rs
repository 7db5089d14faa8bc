//! The waitlist signup flow: per-form state, the submission backend seam,
//! and the shared counter board the success path bumps.

pub mod backend;
pub mod counters;
pub mod form;
pub mod submit;

pub use backend::{JoinRequest, WaitlistBackend};
pub use counters::CounterBoard;
pub use form::{FormLocation, FormState, WaitlistForm};
pub use submit::{CounterSink, FormView, SubmitOutcome, WaitlistSubmitter};

pub const FORM_SELECTOR: &str = ".waitlist-form";
pub const COUNTER_CLASS: &str = "counter";
pub const SUBMITTING_LABEL: &str = "Joining...";
pub const SUCCESS_MESSAGE: &str = "You're on the list! We'll be in touch soon.";
