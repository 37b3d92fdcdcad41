//! Application state and composition.

use std::sync::Arc;

use url::Url;

use crate::entities::{Comments, Files, Identity, Likes, Posts, Profiles};
use crate::infrastructure::{
    appwrite::{AppwriteAccount, AppwriteDatabases, AppwriteStorage, PlatformHttp},
    config::PlatformConfig,
    ports::{AccountPort, DocumentPort, FilePort, RandomPort},
    random::SystemRandom,
};
use crate::stores::AuthStore;
use crate::use_cases;

/// Main application state.
///
/// Holds the adapters, the auth store and the use cases built on them.
/// The view layer (or the CLI) reaches everything through this struct.
pub struct App {
    pub entities: Entities,
    pub use_cases: UseCases,
    pub auth: Arc<AuthStore>,
}

/// Identity adapter plus the content adapter's entity modules.
pub struct Entities {
    pub identity: Arc<Identity>,
    pub posts: Arc<Posts>,
    pub files: Arc<Files>,
    pub likes: Arc<Likes>,
    pub comments: Arc<Comments>,
    pub profiles: Arc<Profiles>,
}

/// Container for all use cases.
pub struct UseCases {
    pub session: use_cases::SessionUseCases,
    pub posts: use_cases::PostUseCases,
    pub engagement: use_cases::EngagementUseCases,
    pub save_profile: Arc<use_cases::SaveProfile>,
}

impl App {
    /// Wire the HTTP adapters for `config`.
    pub fn from_config(config: &PlatformConfig) -> Self {
        let http = Arc::new(PlatformHttp::new(
            config.endpoint.clone(),
            config.project_id.clone(),
            config.timeout,
        ));
        let account: Arc<dyn AccountPort> = Arc::new(AppwriteAccount::new(http.clone()));
        let documents: Arc<dyn DocumentPort> = Arc::new(AppwriteDatabases::new(
            http.clone(),
            config.database_id.clone(),
            config.collections.clone(),
        ));
        let storage: Arc<dyn FilePort> =
            Arc::new(AppwriteStorage::new(http, config.bucket_id.clone()));

        Self::new(
            account,
            documents,
            storage,
            Arc::new(SystemRandom::new()),
            config.oauth_success_url.clone(),
            config.oauth_failure_url.clone(),
        )
    }

    /// Create a new App with all dependencies wired up.
    pub fn new(
        account: Arc<dyn AccountPort>,
        documents: Arc<dyn DocumentPort>,
        storage: Arc<dyn FilePort>,
        random: Arc<dyn RandomPort>,
        oauth_success_url: Url,
        oauth_failure_url: Url,
    ) -> Self {
        let auth = Arc::new(AuthStore::new());

        let identity = Arc::new(Identity::new(
            account,
            random.clone(),
            oauth_success_url,
            oauth_failure_url,
        ));
        let posts = Arc::new(Posts::new(documents.clone()));
        let files = Arc::new(Files::new(storage, random.clone()));
        let likes = Arc::new(Likes::new(documents.clone()));
        let comments = Arc::new(Comments::new(documents.clone(), random));
        let profiles = Arc::new(Profiles::new(documents));

        let session = use_cases::SessionUseCases::new(identity.clone(), auth.clone());

        let post_use_cases = use_cases::PostUseCases::new(
            Arc::new(use_cases::PublishPost::new(
                posts.clone(),
                files.clone(),
                auth.clone(),
            )),
            Arc::new(use_cases::RemovePost::new(
                posts.clone(),
                files.clone(),
                auth.clone(),
            )),
            Arc::new(use_cases::LoadPost::new(
                posts.clone(),
                files.clone(),
                likes.clone(),
                comments.clone(),
                auth.clone(),
            )),
            Arc::new(use_cases::LoadFeed::new(posts.clone(), files.clone())),
        );

        let engagement = use_cases::EngagementUseCases::new(
            Arc::new(use_cases::ToggleLike::new(likes.clone(), auth.clone())),
            Arc::new(use_cases::PostComment::new(comments.clone(), auth.clone())),
            Arc::new(use_cases::RemoveComment::new(comments.clone(), auth.clone())),
        );

        let save_profile = Arc::new(use_cases::SaveProfile::new(
            profiles.clone(),
            files.clone(),
            auth.clone(),
        ));

        Self {
            entities: Entities {
                identity,
                posts,
                files,
                likes,
                comments,
                profiles,
            },
            use_cases: UseCases {
                session,
                posts: post_use_cases,
                engagement,
                save_profile,
            },
            auth,
        }
    }
}
