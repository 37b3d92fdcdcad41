//! Header and cookie names used by the platform.

/// Selects the project every request belongs to.
pub const PROJECT_HEADER: &str = "x-appwrite-project";

/// Carries session cookies when the cookie jar cannot (cross-site use).
pub const FALLBACK_COOKIES_HEADER: &str = "x-fallback-cookies";

/// Name of the session cookie for a project.
pub fn session_cookie_name(project_id: &str) -> String {
    format!("a_session_{}", project_id)
}
