//! The transport towards the remote compile-and-run service

use std::time::Duration;

use color_eyre::{eyre::Context, Result};
use serde::{Deserialize, Serialize};

use crate::utils::constants::error_messages;

/// The body sent to the service: the command line to execute and the source
/// file that it will find as [`crate::utils::constants::SOURCE_FILE`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionRequest {
    pub cmd: String,
    pub src: String,
}

impl ExecutionRequest {
    pub fn new(cmd: String, source_code: &str) -> Self {
        Self {
            cmd,
            src: format!("{source_code}\n"),
        }
    }
}

/// Anything able to execute an [`ExecutionRequest`] and hand back its textual output,
/// diagnostics and program output combined
pub trait ExecutionService {
    fn submit(&self, request: &ExecutionRequest) -> Result<String>;
}

impl<T: ExecutionService + ?Sized> ExecutionService for &T {
    fn submit(&self, request: &ExecutionRequest) -> Result<String> {
        (**self).submit(request)
    }
}

/// [`ExecutionService`] that POSTs the request as JSON to an HTTP endpoint.
///
/// A single attempt is made per request, and any non successful status is reported as an error.
#[derive(Debug)]
pub struct HttpExecutionService {
    agent: ureq::Agent,
    url: String,
}

impl HttpExecutionService {
    pub fn new<U: Into<String>>(url: U) -> Self {
        Self::with_timeout(url, None)
    }

    /// Without timeout, a request waits for the service for as long as it takes
    pub fn with_timeout<U: Into<String>>(url: U, timeout: Option<Duration>) -> Self {
        let mut builder = ureq::AgentBuilder::new();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Self {
            agent: builder.build(),
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl ExecutionService for HttpExecutionService {
    fn submit(&self, request: &ExecutionRequest) -> Result<String> {
        log::debug!("Submitting the command line to: {}", self.url);
        let response = self
            .agent
            .post(&self.url)
            .send_json(request)
            .with_context(|| error_messages::SERVICE_REQUEST)?;

        response
            .into_string()
            .with_context(|| error_messages::SERVICE_RESPONSE_BODY)
    }
}
