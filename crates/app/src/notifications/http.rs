//! HTTP inquiry relay.

use async_trait::async_trait;
use atelier::catalog::NewInquiry;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::{
    hosted::HostedProject,
    notifications::{InquiryRelay, RelayError, RelayReceipt},
};

const FUNCTIONS_PATH: &str = "functions/v1";

/// Default name of the hosted inquiry function.
pub const DEFAULT_INQUIRY_FUNCTION: &str = "send-inquiry-email";

#[derive(Debug, Default, Deserialize)]
struct RelayResponse {
    #[serde(default)]
    success: bool,

    #[serde(default)]
    message: Option<String>,

    #[serde(default)]
    error: Option<String>,

    #[serde(default)]
    warning: Option<String>,
}

impl RelayResponse {
    fn into_receipt(self) -> Result<RelayReceipt, RelayError> {
        if !self.success {
            return Err(RelayError::Declined(
                self.error
                    .unwrap_or_else(|| "no reason given".to_string()),
            ));
        }

        Ok(RelayReceipt {
            message: self.message,
            warning: self.warning,
        })
    }
}

/// [`InquiryRelay`] calling a hosted function over HTTP.
#[derive(Debug, Clone)]
pub struct HttpInquiryRelay {
    project: HostedProject,
    http: Client,
    function: String,
}

impl HttpInquiryRelay {
    #[must_use]
    pub fn new(project: HostedProject, http: Client, function: impl Into<String>) -> Self {
        Self {
            project,
            http,
            function: function.into(),
        }
    }

    fn function_url(&self) -> String {
        self.project
            .endpoint(&format!("{FUNCTIONS_PATH}/{}", self.function))
    }
}

#[async_trait]
impl InquiryRelay for HttpInquiryRelay {
    async fn relay(&self, inquiry: NewInquiry) -> Result<RelayReceipt, RelayError> {
        debug!(section = %inquiry.section, function = %self.function, "relaying inquiry");

        let response = self
            .project
            .authorize(self.http.post(self.function_url()))
            .json(&inquiry)
            .send()
            .await
            .map_err(RelayError::Transport)?;

        let status = response.status();

        if !status.is_success() {
            return Err(RelayError::Status {
                status: status.as_u16(),
                body: response.text().await.unwrap_or_default(),
            });
        }

        response
            .json::<RelayResponse>()
            .await
            .map_err(RelayError::Transport)?
            .into_receipt()
    }
}
