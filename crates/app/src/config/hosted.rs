//! Hosted Project Config

use clap::Args;
use zeroize::Zeroizing;

use crate::notifications::DEFAULT_INQUIRY_FUNCTION;

/// Hosted project connection settings.
#[derive(Debug, Args)]
pub struct HostedConfig {
    /// Hosted project base URL
    #[arg(long, env = "SUPABASE_URL")]
    pub supabase_url: String,

    /// Hosted project anonymous key
    #[arg(long, env = "SUPABASE_ANON_KEY", hide_env_values = true)]
    pub supabase_anon_key: String,

    /// Name of the function that emails inquiries
    #[arg(long, env = "INQUIRY_FUNCTION", default_value = DEFAULT_INQUIRY_FUNCTION)]
    pub inquiry_function: String,

    /// Timeout for hosted requests, in seconds
    #[arg(long, env = "HTTP_TIMEOUT_SECONDS", default_value_t = 30u64)]
    pub http_timeout_seconds: u64,
}

impl HostedConfig {
    /// Copy of the anonymous key that is wiped when dropped.
    #[must_use]
    pub fn anon_key(&self) -> Zeroizing<String> {
        Zeroizing::new(self.supabase_anon_key.clone())
    }
}
