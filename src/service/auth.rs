use crate::db::{PublicUser, UserRepository};
use crate::error::CmsError;
use futures::future::BoxFuture;
use subtle::ConstantTimeEq;
use tracing::debug;

/// Credential check used by `POST /api/login`.
///
/// Returns `Ok(None)` for any mismatch; callers must not distinguish an
/// unknown username from a wrong password.
pub trait Authenticator: Send + Sync {
    fn authenticate<'a>(
        &'a self,
        username: &'a str,
        password: &'a str,
    ) -> BoxFuture<'a, Result<Option<PublicUser>, CmsError>>;
}

/// Compares against the password column as stored, byte for byte.
///
/// SECURITY: passwords are kept in plaintext. Swapping in a hashing
/// implementation only requires a new `Authenticator`.
#[derive(Clone)]
pub struct PlaintextAuthenticator {
    users: UserRepository,
}

impl PlaintextAuthenticator {
    pub fn new(users: UserRepository) -> Self {
        Self { users }
    }
}

impl Authenticator for PlaintextAuthenticator {
    fn authenticate<'a>(
        &'a self,
        username: &'a str,
        password: &'a str,
    ) -> BoxFuture<'a, Result<Option<PublicUser>, CmsError>> {
        Box::pin(async move {
            let Some(user) = self.users.find_with_password(username).await? else {
                debug!("login for unknown username");
                return Ok(None);
            };
            if !bool::from(user.password.as_bytes().ct_eq(password.as_bytes())) {
                debug!(user_id = user.id, "login with wrong password");
                return Ok(None);
            }
            Ok(Some(user.into()))
        })
    }
}
