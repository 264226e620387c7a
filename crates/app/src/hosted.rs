//! Hosted project connection settings shared by the REST clients.

use std::{fmt, time::Duration};

use reqwest::{Client, RequestBuilder};
use zeroize::Zeroizing;

/// Base URL and anonymous key of the hosted project.
#[derive(Clone)]
pub struct HostedProject {
    url: String,
    anon_key: Zeroizing<String>,
}

impl fmt::Debug for HostedProject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HostedProject")
            .field("url", &self.url)
            .field("anon_key", &"<redacted>")
            .finish()
    }
}

impl HostedProject {
    /// Create a project handle. Trailing slashes on `url` are dropped.
    pub fn new(url: impl Into<String>, anon_key: Zeroizing<String>) -> Self {
        let url: String = url.into();

        Self {
            url: url.trim_end_matches('/').to_string(),
            anon_key,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Join `path` onto the project URL.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.url, path.trim_start_matches('/'))
    }

    /// Attach the key headers every hosted endpoint expects.
    pub fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .header("apikey", self.anon_key.as_str())
            .bearer_auth(self.anon_key.as_str())
    }
}

/// Build the HTTP client shared by every hosted client.
///
/// # Errors
///
/// Returns an error when the TLS backend cannot be initialised.
pub fn http_client(timeout: Duration) -> Result<Client, reqwest::Error> {
    Client::builder().timeout(timeout).build()
}
