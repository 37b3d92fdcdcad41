//! Authenticated identity held by the client.

use tokio::sync::watch;

use quillpost_domain::{UserAccount, UserId};

/// Whether someone is signed in, and who.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum AuthState {
    #[default]
    SignedOut,
    SignedIn(UserAccount),
}

impl AuthState {
    pub fn user(&self) -> Option<&UserAccount> {
        match self {
            AuthState::SignedIn(user) => Some(user),
            AuthState::SignedOut => None,
        }
    }
}

/// Auth state storage for use cases and the view layer.
///
/// `login` and `logout` are the only mutators; they are driven by the
/// outcomes of identity calls. Observers follow changes through
/// [`subscribe`](Self::subscribe).
pub struct AuthStore {
    state: watch::Sender<AuthState>,
}

impl AuthStore {
    pub fn new() -> Self {
        let (state, _) = watch::channel(AuthState::SignedOut);
        Self { state }
    }

    pub fn login(&self, user: UserAccount) {
        tracing::info!(user_id = %user.id, "Auth state: signed in");
        self.state.send_replace(AuthState::SignedIn(user));
    }

    pub fn logout(&self) {
        let previous = self.state.send_replace(AuthState::SignedOut);
        if let AuthState::SignedIn(user) = previous {
            tracing::info!(user_id = %user.id, "Auth state: signed out");
        }
    }

    pub fn state(&self) -> AuthState {
        self.state.borrow().clone()
    }

    pub fn is_signed_in(&self) -> bool {
        matches!(*self.state.borrow(), AuthState::SignedIn(_))
    }

    pub fn user(&self) -> Option<UserAccount> {
        self.state.borrow().user().cloned()
    }

    pub fn user_id(&self) -> Option<UserId> {
        self.state.borrow().user().map(|user| user.id.clone())
    }

    /// Receiver that is notified on every login and logout.
    pub fn subscribe(&self) -> watch::Receiver<AuthState> {
        self.state.subscribe()
    }
}

impl Default for AuthStore {
    fn default() -> Self {
        Self::new()
    }
}
