//! Account service adapter.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Method;
use url::Url;

use quillpost_domain::{OAuthProvider, Session, SessionId, UserAccount, UserId};
use quillpost_shared::{
    AccountResponse, CreateAccountRequest, CreateEmailSessionRequest, SessionResponse,
};

use super::http::PlatformHttp;
use crate::infrastructure::ports::{AccountPort, PlatformError};

pub struct AppwriteAccount {
    http: Arc<PlatformHttp>,
}

impl AppwriteAccount {
    pub fn new(http: Arc<PlatformHttp>) -> Self {
        Self { http }
    }
}

#[async_trait]
impl AccountPort for AppwriteAccount {
    async fn create_account(
        &self,
        user_id: &UserId,
        email: &str,
        password: &str,
        name: &str,
    ) -> Result<UserAccount, PlatformError> {
        let body = CreateAccountRequest {
            user_id: user_id.to_string(),
            email: email.to_string(),
            password: password.to_string(),
            name: name.to_string(),
        };
        let url = self.http.url(&["account"])?;
        let request = self.http.request(Method::POST, url).await.json(&body);
        let account: AccountResponse = self.http.send("create_account", request).await?;
        to_account("create_account", account)
    }

    async fn create_email_session(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Session, PlatformError> {
        let body = CreateEmailSessionRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let url = self.http.url(&["account", "sessions", "email"])?;
        let request = self.http.request(Method::POST, url).await.json(&body);
        let session: SessionResponse = self.http.send("create_email_session", request).await?;
        to_session("create_email_session", session)
    }

    fn oauth2_session_url(
        &self,
        provider: &OAuthProvider,
        success: &Url,
        failure: &Url,
    ) -> Result<Url, PlatformError> {
        let mut url = self
            .http
            .url(&["account", "sessions", "oauth2", provider.as_str()])?;
        url.query_pairs_mut()
            .append_pair("project", self.http.project_id())
            .append_pair("success", success.as_str())
            .append_pair("failure", failure.as_str());
        Ok(url)
    }

    async fn get_account(&self) -> Result<UserAccount, PlatformError> {
        let url = self.http.url(&["account"])?;
        let request = self.http.request(Method::GET, url).await;
        let account: AccountResponse = self.http.send("get_account", request).await?;
        to_account("get_account", account)
    }

    async fn delete_sessions(&self) -> Result<(), PlatformError> {
        let url = self.http.url(&["account", "sessions"])?;
        let request = self.http.request(Method::DELETE, url).await;
        self.http.send_empty("delete_sessions", request).await?;
        self.http.clear_session().await;
        Ok(())
    }
}

fn to_account(
    operation: &'static str,
    account: AccountResponse,
) -> Result<UserAccount, PlatformError> {
    Ok(UserAccount {
        id: UserId::new(account.id).map_err(|e| PlatformError::invalid_payload(operation, e))?,
        email: account.email,
        name: account.name,
        registration: account.registration,
        email_verified: account.email_verification,
    })
}

fn to_session(
    operation: &'static str,
    session: SessionResponse,
) -> Result<Session, PlatformError> {
    Ok(Session {
        id: SessionId::new(session.id).map_err(|e| PlatformError::invalid_payload(operation, e))?,
        user_id: UserId::new(session.user_id)
            .map_err(|e| PlatformError::invalid_payload(operation, e))?,
        provider: session.provider,
        expires_at: session.expire,
        current: session.current,
    })
}
