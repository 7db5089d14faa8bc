use async_trait::async_trait;
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;

use crate::error::{Error, Result};
use crate::waitlist::{JoinRequest, WaitlistBackend};

/// Stand-in for a collection endpoint: waits, then reports success.
pub struct SimulatedBackend {
    pub delay_ms: u32,
}

#[async_trait(?Send)]
impl WaitlistBackend for SimulatedBackend {
    async fn join(&self, request: &JoinRequest) -> Result<()> {
        log::info!(
            "No waitlist endpoint configured, simulating signup from {} form",
            request.location.as_str()
        );
        TimeoutFuture::new(self.delay_ms).await;
        Ok(())
    }
}

/// POSTs `{"email": ...}` as JSON to a form collection service.
pub struct HttpBackend {
    pub endpoint: String,
}

#[async_trait(?Send)]
impl WaitlistBackend for HttpBackend {
    async fn join(&self, request: &JoinRequest) -> Result<()> {
        let response = Request::post(&self.endpoint)
            .header("Accept", "application/json")
            .json(request)
            .map_err(|e| Error::Submission(e.to_string()))?
            .send()
            .await
            .map_err(|e| Error::Submission(e.to_string()))?;

        if response.ok() {
            return Ok(());
        }
        match response.status() {
            429 => Err(Error::RateLimited),
            status => Err(Error::Submission(format!(
                "{} answered {}",
                self.endpoint, status
            ))),
        }
    }
}
