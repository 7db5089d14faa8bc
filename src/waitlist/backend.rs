use async_trait::async_trait;
use serde::Serialize;

use super::form::FormLocation;
use crate::error::Result;

/// Body of a waitlist signup.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JoinRequest {
    pub email: String,
    #[serde(skip)]
    pub location: FormLocation,
}

impl JoinRequest {
    pub fn new(email: impl Into<String>, location: FormLocation) -> Self {
        Self {
            email: email.into(),
            location,
        }
    }
}

/// Where signups go. The page ships with a simulated backend; pointing
/// `waitlist_endpoint` at a collection service swaps in an HTTP one.
#[async_trait(?Send)]
pub trait WaitlistBackend {
    async fn join(&self, request: &JoinRequest) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_body_is_email_only() {
        let request = JoinRequest::new("user@example.com", FormLocation::Hero);
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            serde_json::json!({ "email": "user@example.com" })
        );
    }
}
