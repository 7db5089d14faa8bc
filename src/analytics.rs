use serde::Serialize;

use crate::waitlist::FormLocation;

pub const SIGN_UP_EVENT: &str = "sign_up";

/// Parameters of the conversion event sent when someone joins the waitlist.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SignUpEvent {
    pub method: &'static str,
    pub location: FormLocation,
}

impl SignUpEvent {
    pub fn waitlist(location: FormLocation) -> Self {
        Self {
            method: "waitlist",
            location,
        }
    }
}

/// Conversion tracking. Implementations must tolerate the tracker being
/// absent from the page.
#[cfg_attr(test, mockall::automock)]
pub trait Analytics {
    fn track_sign_up(&self, event: &SignUpEvent);
}
