//! Admin login.

use atelier::catalog::SettingKey;
use tracing::warn;
use zeroize::Zeroizing;

use crate::{
    admin::{AdminConsole, AdminError},
    context::AppContext,
};

/// Guards the admin console behind the `admin_password` setting.
#[derive(Clone)]
pub struct AdminGate {
    ctx: AppContext,
}

impl AdminGate {
    #[must_use]
    pub fn new(ctx: AppContext) -> Self {
        Self { ctx }
    }

    /// Check `password` against the stored admin password and open a console.
    ///
    /// # Errors
    ///
    /// - [`AdminError::IncorrectPassword`]: the password is wrong or none is configured.
    /// - [`AdminError::Settings`]: the setting could not be read.
    pub async fn login(&self, password: &str) -> Result<AdminConsole, AdminError> {
        let stored = self
            .ctx
            .settings
            .get_setting(SettingKey::AdminPassword.as_str().to_string())
            .await?
            .map(|setting| Zeroizing::new(setting.value));

        match stored {
            Some(expected) if !expected.is_empty() && expected.as_str() == password => {
                Ok(AdminConsole::new(self.ctx.clone()))
            }
            Some(_) => {
                warn!("admin login rejected");

                Err(AdminError::IncorrectPassword)
            }
            None => {
                warn!("admin login attempted but no admin password is configured");

                Err(AdminError::IncorrectPassword)
            }
        }
    }
}
