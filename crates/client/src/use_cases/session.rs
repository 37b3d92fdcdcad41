//! Session use cases.
//!
//! Keep the auth store in step with the platform session: every flow ends
//! with a current-user lookup, and only that lookup moves the store.

use std::sync::Arc;

use url::Url;

use quillpost_domain::{OAuthProvider, UserAccount};

use crate::entities::Identity;
use crate::infrastructure::ports::PlatformError;
use crate::stores::AuthStore;

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("No active session")]
    NoActiveSession,

    #[error(transparent)]
    Platform(#[from] PlatformError),
}

pub struct SessionUseCases {
    identity: Arc<Identity>,
    auth: Arc<AuthStore>,
}

impl SessionUseCases {
    pub fn new(identity: Arc<Identity>, auth: Arc<AuthStore>) -> Self {
        Self { identity, auth }
    }

    /// Start-up check for an existing session.
    pub async fn restore(&self) -> Result<Option<UserAccount>, SessionError> {
        match self.identity.get_current_user().await {
            Ok(Some(user)) => {
                self.auth.login(user.clone());
                Ok(Some(user))
            }
            Ok(None) => {
                self.auth.logout();
                Ok(None)
            }
            Err(e) => {
                self.auth.logout();
                Err(e.into())
            }
        }
    }

    pub async fn sign_in(&self, email: &str, password: &str) -> Result<UserAccount, SessionError> {
        self.identity.login(email, password).await?;
        self.adopt_current_user().await
    }

    pub async fn sign_up(
        &self,
        email: &str,
        password: &str,
        name: &str,
    ) -> Result<UserAccount, SessionError> {
        self.identity.create_account(email, password, name).await?;
        self.adopt_current_user().await
    }

    /// URL to send the user to for a provider login.
    pub fn begin_oauth(&self, provider: &OAuthProvider) -> Result<Url, SessionError> {
        Ok(self.identity.login_with_provider(provider)?)
    }

    /// Pick up the session after the provider redirected to the success URL.
    pub async fn complete_oauth(&self) -> Result<UserAccount, SessionError> {
        self.adopt_current_user().await
    }

    /// Remote logout; the store is cleared only when it succeeds.
    pub async fn sign_out(&self) -> Result<(), SessionError> {
        self.identity.logout().await?;
        self.auth.logout();
        Ok(())
    }

    async fn adopt_current_user(&self) -> Result<UserAccount, SessionError> {
        match self.identity.get_current_user().await? {
            Some(user) => {
                self.auth.login(user.clone());
                Ok(user)
            }
            None => {
                self.auth.logout();
                Err(SessionError::NoActiveSession)
            }
        }
    }
}
