//! Identity operations - accounts, sessions and the current user.

use std::sync::Arc;

use url::Url;

use quillpost_domain::{OAuthProvider, Session, UserAccount, UserId};

use crate::infrastructure::ports::{AccountPort, PlatformError, RandomPort};

/// Identity adapter over the platform's account service.
///
/// Failures are logged and returned unchanged. The only failure that is
/// turned into a value is the "no session" signal of
/// [`get_current_user`](Self::get_current_user).
pub struct Identity {
    account: Arc<dyn AccountPort>,
    random: Arc<dyn RandomPort>,
    oauth_success_url: Url,
    oauth_failure_url: Url,
}

impl Identity {
    pub fn new(
        account: Arc<dyn AccountPort>,
        random: Arc<dyn RandomPort>,
        oauth_success_url: Url,
        oauth_failure_url: Url,
    ) -> Self {
        Self {
            account,
            random,
            oauth_success_url,
            oauth_failure_url,
        }
    }

    /// Register a new account under a fresh id, then sign it in.
    pub async fn create_account(
        &self,
        email: &str,
        password: &str,
        name: &str,
    ) -> Result<Session, PlatformError> {
        let user_id = UserId::from_uuid(self.random.gen_uuid());
        let account = self
            .account
            .create_account(&user_id, email, password, name)
            .await
            .inspect_err(|e| {
                tracing::error!(
                    error = %e,
                    operation = "create_account",
                    email = %email,
                    "Failed to create account"
                )
            })?;
        tracing::info!(user_id = %account.id, "Account created");

        self.login(email, password).await
    }

    /// Password login.
    pub async fn login(&self, email: &str, password: &str) -> Result<Session, PlatformError> {
        let session = self
            .account
            .create_email_session(email, password)
            .await
            .inspect_err(|e| {
                tracing::error!(
                    error = %e,
                    operation = "login",
                    email = %email,
                    "Failed to create session"
                )
            })?;
        tracing::info!(user_id = %session.user_id, session_id = %session.id, "Signed in");
        Ok(session)
    }

    /// Authorization URL for a provider login.
    ///
    /// The caller navigates to it; the outcome arrives on the success or
    /// failure return URL.
    pub fn login_with_provider(&self, provider: &OAuthProvider) -> Result<Url, PlatformError> {
        self.account
            .oauth2_session_url(provider, &self.oauth_success_url, &self.oauth_failure_url)
            .inspect_err(|e| {
                tracing::error!(
                    error = %e,
                    operation = "login_with_provider",
                    provider = %provider,
                    "Failed to build provider login URL"
                )
            })
    }

    /// The signed-in user, or `None` when there is no session.
    pub async fn get_current_user(&self) -> Result<Option<UserAccount>, PlatformError> {
        match self.account.get_account().await {
            Ok(account) => Ok(Some(account)),
            Err(e) if e.is_unauthorized() => Ok(None),
            Err(e) => {
                tracing::error!(
                    error = %e,
                    operation = "get_current_user",
                    "Failed to look up current user"
                );
                Err(e)
            }
        }
    }

    /// End every session of the current user.
    pub async fn logout(&self) -> Result<(), PlatformError> {
        self.account.delete_sessions().await.inspect_err(|e| {
            tracing::error!(error = %e, operation = "logout", "Failed to delete sessions")
        })?;
        tracing::info!("Signed out");
        Ok(())
    }
}
