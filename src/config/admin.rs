//! Admin configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Admin configuration
///
/// Holds the management password that gates catalog mutations. There is a
/// single shared admin credential, not per-user accounts.
#[derive(Clone, Deserialize)]
pub struct AdminConfig {
    /// Password for the admin screen
    pub password: String,
}

impl AdminConfig {
    /// Validate admin configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.password.is_empty() {
            return Err(ValidationError::MissingRequired("ADMIN_PASSWORD"));
        }
        if self.password.len() < 4 {
            return Err(ValidationError::AdminPasswordTooShort);
        }
        Ok(())
    }
}

// Keeps the password out of debug logs.
impl std::fmt::Debug for AdminConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminConfig")
            .field("password", &"<redacted>")
            .finish()
    }
}
