//! AuthenticateAdminHandler - password gate for the admin surface.

use std::sync::Arc;

use subtle::ConstantTimeEq;

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::ports::{PreferenceStore, StorageScope, ADMIN_AUTHENTICATED_KEY};

/// Command carrying the submitted password.
#[derive(Clone)]
pub struct AuthenticateAdminCommand {
    pub password: String,
}

impl std::fmt::Debug for AuthenticateAdminCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthenticateAdminCommand")
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Handler for the admin password check.
///
/// A plain shared-password gate, not real authentication: no hashing, no
/// rate limiting, no server-side account model. On success it sets the
/// session-scoped admin flag that the other admin handlers require.
pub struct AuthenticateAdminHandler {
    store: Arc<dyn PreferenceStore>,
    admin_password: String,
}

impl AuthenticateAdminHandler {
    pub fn new(store: Arc<dyn PreferenceStore>, admin_password: String) -> Self {
        Self {
            store,
            admin_password,
        }
    }

    pub async fn handle(&self, cmd: AuthenticateAdminCommand) -> Result<(), DomainError> {
        if !password_matches(&self.admin_password, &cmd.password) {
            return Err(DomainError::new(
                ErrorCode::Unauthorized,
                "Password does not match",
            ));
        }

        self.store
            .set(StorageScope::Session, ADMIN_AUTHENTICATED_KEY, "true")
            .await?;

        tracing::info!("admin authenticated");

        Ok(())
    }
}

fn password_matches(expected: &str, provided: &str) -> bool {
    expected.len() == provided.len()
        && bool::from(expected.as_bytes().ct_eq(provided.as_bytes()))
}
