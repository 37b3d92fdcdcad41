//! In-process fake of the platform REST API.
//!
//! Implements just enough of the account, databases and storage services
//! for the client adapters: sessions travel in the fallback cookie header,
//! documents live in memory and every write gets a strictly increasing
//! `$createdAt`.

#![allow(dead_code)]

use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex, MutexGuard};

use axum::extract::{Multipart, Path, RawQuery, State};
use axum::http::{HeaderMap, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use chrono::{DateTime, Duration, TimeZone, Utc};
use serde_json::{json, Map, Value};
use url::Url;

use quillpost_client::infrastructure::config::PlatformConfig;
use quillpost_client::App;
use quillpost_shared::headers::{session_cookie_name, FALLBACK_COOKIES_HEADER, PROJECT_HEADER};
use quillpost_shared::{error_types, ErrorBody, Query, QueryMethod};

pub const PROJECT_ID: &str = "blog";
pub const DATABASE_ID: &str = "main";
pub const BUCKET_ID: &str = "images";

struct Account {
    id: String,
    email: String,
    password: String,
    name: String,
    registration: DateTime<Utc>,
}

#[derive(Default)]
struct Store {
    accounts: Vec<Account>,
    /// session secret -> (session id, user id)
    sessions: HashMap<String, (String, String)>,
    /// collection id -> document id -> document
    collections: HashMap<String, BTreeMap<String, Value>>,
    files: HashMap<String, Value>,
    ticks: i64,
    next_id: u64,
}

impl Store {
    fn now(&mut self) -> DateTime<Utc> {
        self.ticks += 1;
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).single().unwrap_or_default()
            + Duration::seconds(self.ticks)
    }

    fn unique(&mut self, prefix: &str) -> String {
        self.next_id += 1;
        format!("{}{}", prefix, self.next_id)
    }
}

#[derive(Default)]
pub struct Platform {
    store: Mutex<Store>,
}

impl Platform {
    fn store(&self) -> MutexGuard<'_, Store> {
        self.store.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn document_count(&self, collection: &str) -> usize {
        self.store()
            .collections
            .get(collection)
            .map_or(0, BTreeMap::len)
    }

    pub fn file_count(&self) -> usize {
        self.store().files.len()
    }

    pub fn session_count(&self) -> usize {
        self.store().sessions.len()
    }
}

/// A running fake platform.
pub struct FakePlatform {
    pub endpoint: Url,
    pub platform: Arc<Platform>,
}

impl FakePlatform {
    pub async fn start() -> Self {
        let platform = Arc::new(Platform::default());
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind listener");
        let addr = listener.local_addr().expect("addr");

        let app = Router::new()
            .nest("/v1", routes())
            .with_state(platform.clone());
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("serve fake platform");
        });

        Self {
            endpoint: Url::parse(&format!("http://{}/v1", addr)).expect("endpoint"),
            platform,
        }
    }

    pub fn config(&self) -> PlatformConfig {
        let env = HashMap::from([
            ("APPWRITE_URL", self.endpoint.to_string()),
            ("APPWRITE_PROJECT_ID", PROJECT_ID.to_string()),
            ("APPWRITE_DATABASE_ID", DATABASE_ID.to_string()),
            ("APPWRITE_COLLECTION_ID", "posts".to_string()),
            ("APPWRITE_LIKES_ID", "likes".to_string()),
            ("APPWRITE_COMMENTS_ID", "comments".to_string()),
            ("APPWRITE_PROFILES_ID", "profiles".to_string()),
            ("APPWRITE_BUCKET_ID", BUCKET_ID.to_string()),
            ("APPWRITE_TIMEOUT_SECS", "5".to_string()),
        ]);
        PlatformConfig::from_lookup(|key| env.get(key).cloned()).expect("fake platform config")
    }

    /// A fresh client with its own session.
    pub fn app(&self) -> App {
        App::from_config(&self.config())
    }
}

fn routes() -> Router<Arc<Platform>> {
    Router::new()
        .route("/account", post(create_account).get(get_account))
        .route("/account/sessions/email", post(create_email_session))
        .route("/account/sessions", delete(delete_sessions))
        .route(
            "/databases/{database}/collections/{collection}/documents",
            post(create_document).get(list_documents),
        )
        .route(
            "/databases/{database}/collections/{collection}/documents/{document}",
            get(get_document)
                .patch(update_document)
                .delete(delete_document),
        )
        .route("/storage/buckets/{bucket}/files", post(create_file))
        .route("/storage/buckets/{bucket}/files/{file}", delete(delete_file))
}

// =============================================================================
// Helpers
// =============================================================================

fn error(status: StatusCode, kind: &str, message: &str) -> Response {
    (
        status,
        Json(ErrorBody::new(status.as_u16(), kind, message)),
    )
        .into_response()
}

fn check_project(headers: &HeaderMap) -> Result<(), Response> {
    match headers.get(PROJECT_HEADER).and_then(|v| v.to_str().ok()) {
        Some(PROJECT_ID) => Ok(()),
        _ => Err(error(
            StatusCode::NOT_FOUND,
            "project_not_found",
            "Project with the requested ID could not be found.",
        )),
    }
}

fn session_secret(headers: &HeaderMap) -> Option<String> {
    let raw = headers.get(FALLBACK_COOKIES_HEADER)?.to_str().ok()?;
    let cookies: HashMap<String, String> = serde_json::from_str(raw).ok()?;
    cookies.get(&session_cookie_name(PROJECT_ID)).cloned()
}

fn current_user(store: &Store, headers: &HeaderMap) -> Option<String> {
    let secret = session_secret(headers)?;
    store.sessions.get(&secret).map(|(_, user)| user.clone())
}

fn guest_error() -> Response {
    error(
        StatusCode::UNAUTHORIZED,
        error_types::GENERAL_UNAUTHORIZED_SCOPE,
        "User (role: guests) missing scope (account)",
    )
}

fn timestamp(at: DateTime<Utc>) -> String {
    at.format("%Y-%m-%dT%H:%M:%S%.3f+00:00").to_string()
}

fn account_json(account: &Account) -> Value {
    json!({
        "$id": account.id,
        "$createdAt": timestamp(account.registration),
        "$updatedAt": timestamp(account.registration),
        "name": account.name,
        "email": account.email,
        "registration": timestamp(account.registration),
        "status": true,
        "emailVerification": false,
        "prefs": {}
    })
}

fn not_found_document() -> Response {
    error(
        StatusCode::NOT_FOUND,
        error_types::DOCUMENT_NOT_FOUND,
        "Document with the requested ID could not be found.",
    )
}

// =============================================================================
// Account
// =============================================================================

async fn create_account(
    State(platform): State<Arc<Platform>>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    if let Err(response) = check_project(&headers) {
        return response;
    }
    let field = |key: &str| body.get(key).and_then(Value::as_str).unwrap_or_default().to_string();
    let (id, email, password, name) = (
        field("userId"),
        field("email"),
        field("password"),
        field("name"),
    );
    if password.len() < 8 {
        return error(
            StatusCode::BAD_REQUEST,
            error_types::GENERAL_ARGUMENT_INVALID,
            "Password must be at least 8 characters",
        );
    }

    let mut store = platform.store();
    if store
        .accounts
        .iter()
        .any(|account| account.id == id || account.email == email)
    {
        return error(
            StatusCode::CONFLICT,
            error_types::USER_ALREADY_EXISTS,
            "A user with the same id, email, or phone already exists in this project.",
        );
    }
    let registration = store.now();
    let account = Account {
        id,
        email,
        password,
        name,
        registration,
    };
    let response = account_json(&account);
    store.accounts.push(account);
    (StatusCode::CREATED, Json(response)).into_response()
}

async fn create_email_session(
    State(platform): State<Arc<Platform>>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    if let Err(response) = check_project(&headers) {
        return response;
    }
    let email = body.get("email").and_then(Value::as_str).unwrap_or_default();
    let password = body.get("password").and_then(Value::as_str).unwrap_or_default();

    let mut store = platform.store();
    let Some(user_id) = store
        .accounts
        .iter()
        .find(|account| account.email == email && account.password == password)
        .map(|account| account.id.clone())
    else {
        return error(
            StatusCode::UNAUTHORIZED,
            error_types::USER_INVALID_CREDENTIALS,
            "Invalid credentials. Please check the email and password.",
        );
    };

    let session_id = store.unique("session");
    let secret = store.unique("secret");
    let created = store.now();
    store
        .sessions
        .insert(secret.clone(), (session_id.clone(), user_id.clone()));

    let mut cookies = Map::new();
    cookies.insert(session_cookie_name(PROJECT_ID), json!(secret));
    let cookies = Value::Object(cookies).to_string();
    let mut response = (
        StatusCode::CREATED,
        Json(json!({
            "$id": session_id,
            "$createdAt": timestamp(created),
            "userId": user_id,
            "expire": timestamp(created + Duration::days(365)),
            "provider": "email",
            "current": true
        })),
    )
        .into_response();
    if let Ok(value) = HeaderValue::from_str(&cookies) {
        response.headers_mut().insert(FALLBACK_COOKIES_HEADER, value);
    }
    response
}

async fn get_account(State(platform): State<Arc<Platform>>, headers: HeaderMap) -> Response {
    if let Err(response) = check_project(&headers) {
        return response;
    }
    let store = platform.store();
    let Some(user_id) = current_user(&store, &headers) else {
        return guest_error();
    };
    match store.accounts.iter().find(|account| account.id == user_id) {
        Some(account) => Json(account_json(account)).into_response(),
        None => guest_error(),
    }
}

async fn delete_sessions(State(platform): State<Arc<Platform>>, headers: HeaderMap) -> Response {
    if let Err(response) = check_project(&headers) {
        return response;
    }
    let mut store = platform.store();
    let Some(user_id) = current_user(&store, &headers) else {
        return guest_error();
    };
    store.sessions.retain(|_, (_, owner)| *owner != user_id);
    StatusCode::NO_CONTENT.into_response()
}

// =============================================================================
// Databases
// =============================================================================

async fn create_document(
    State(platform): State<Arc<Platform>>,
    Path((database, collection)): Path<(String, String)>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    if let Err(response) = check_project(&headers) {
        return response;
    }
    let Some(document_id) = body.get("documentId").and_then(Value::as_str) else {
        return error(
            StatusCode::BAD_REQUEST,
            error_types::GENERAL_ARGUMENT_INVALID,
            "Param \"documentId\" is not optional.",
        );
    };
    let Some(data) = body.get("data").and_then(Value::as_object) else {
        return error(
            StatusCode::BAD_REQUEST,
            error_types::DOCUMENT_INVALID_STRUCTURE,
            "Invalid document structure",
        );
    };

    let mut store = platform.store();
    let exists = store
        .collections
        .get(&collection)
        .is_some_and(|documents| documents.contains_key(document_id));
    if exists {
        return error(
            StatusCode::CONFLICT,
            error_types::DOCUMENT_ALREADY_EXISTS,
            "Document with the requested ID already exists.",
        );
    }

    let now = timestamp(store.now());
    let mut document = Map::new();
    document.insert("$id".to_string(), json!(document_id));
    document.insert("$collectionId".to_string(), json!(collection));
    document.insert("$databaseId".to_string(), json!(database));
    document.insert("$createdAt".to_string(), json!(now));
    document.insert("$updatedAt".to_string(), json!(now));
    document.insert(
        "$permissions".to_string(),
        body.get("permissions").cloned().unwrap_or_else(|| json!([])),
    );
    document.extend(data.clone());
    let document = Value::Object(document);

    store
        .collections
        .entry(collection)
        .or_default()
        .insert(document_id.to_string(), document.clone());
    (StatusCode::CREATED, Json(document)).into_response()
}

async fn get_document(
    State(platform): State<Arc<Platform>>,
    Path((_database, collection, document_id)): Path<(String, String, String)>,
    headers: HeaderMap,
) -> Response {
    if let Err(response) = check_project(&headers) {
        return response;
    }
    let store = platform.store();
    match store
        .collections
        .get(&collection)
        .and_then(|documents| documents.get(&document_id))
    {
        Some(document) => Json(document.clone()).into_response(),
        None => not_found_document(),
    }
}

async fn update_document(
    State(platform): State<Arc<Platform>>,
    Path((_database, collection, document_id)): Path<(String, String, String)>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    if let Err(response) = check_project(&headers) {
        return response;
    }
    let patch = body.get("data").and_then(Value::as_object).cloned().unwrap_or_default();

    let mut store = platform.store();
    let now = timestamp(store.now());
    let Some(Value::Object(document)) = store
        .collections
        .get_mut(&collection)
        .and_then(|documents| documents.get_mut(&document_id))
    else {
        return not_found_document();
    };
    document.extend(patch);
    document.insert("$updatedAt".to_string(), json!(now));
    Json(Value::Object(document.clone())).into_response()
}

async fn delete_document(
    State(platform): State<Arc<Platform>>,
    Path((_database, collection, document_id)): Path<(String, String, String)>,
    headers: HeaderMap,
) -> Response {
    if let Err(response) = check_project(&headers) {
        return response;
    }
    let mut store = platform.store();
    match store
        .collections
        .get_mut(&collection)
        .and_then(|documents| documents.remove(&document_id))
    {
        Some(_) => StatusCode::NO_CONTENT.into_response(),
        None => not_found_document(),
    }
}

async fn list_documents(
    State(platform): State<Arc<Platform>>,
    Path((_database, collection)): Path<(String, String)>,
    headers: HeaderMap,
    RawQuery(raw): RawQuery,
) -> Response {
    if let Err(response) = check_project(&headers) {
        return response;
    }
    let mut queries = Vec::new();
    for (key, value) in url::form_urlencoded::parse(raw.unwrap_or_default().as_bytes()) {
        if key == "queries[]" {
            match Query::parse(&value) {
                Ok(query) => queries.push(query),
                Err(_) => {
                    return error(
                        StatusCode::BAD_REQUEST,
                        "general_query_invalid",
                        "Invalid query",
                    )
                }
            }
        }
    }

    let store = platform.store();
    let mut documents: Vec<Value> = store
        .collections
        .get(&collection)
        .map(|documents| documents.values().cloned().collect())
        .unwrap_or_default();
    drop(store);

    let mut offset = 0usize;
    let mut limit = 25usize;
    for query in &queries {
        let attribute = query.attribute().unwrap_or_default();
        let first_number = query
            .values()
            .first()
            .and_then(Value::as_u64)
            .unwrap_or_default() as usize;
        match query.method() {
            QueryMethod::Equal => documents.retain(|doc| {
                query
                    .values()
                    .iter()
                    .any(|value| doc.get(attribute) == Some(value))
            }),
            QueryMethod::NotEqual => documents.retain(|doc| {
                query
                    .values()
                    .iter()
                    .all(|value| doc.get(attribute) != Some(value))
            }),
            QueryMethod::Search => documents.retain(|doc| {
                let needle = query.values().first().and_then(Value::as_str).unwrap_or_default();
                doc.get(attribute)
                    .and_then(Value::as_str)
                    .is_some_and(|text| text.to_lowercase().contains(&needle.to_lowercase()))
            }),
            QueryMethod::OrderAsc => documents.sort_by(|a, b| compare(a, b, attribute)),
            QueryMethod::OrderDesc => documents.sort_by(|a, b| compare(b, a, attribute)),
            QueryMethod::Limit => limit = first_number,
            QueryMethod::Offset => offset = first_number,
        }
    }

    let total = documents.len();
    let documents: Vec<Value> = documents.into_iter().skip(offset).take(limit).collect();
    Json(json!({ "total": total, "documents": documents })).into_response()
}

fn compare(a: &Value, b: &Value, attribute: &str) -> std::cmp::Ordering {
    let key = |doc: &Value| doc.get(attribute).map(Value::to_string).unwrap_or_default();
    key(a).cmp(&key(b))
}

// =============================================================================
// Storage
// =============================================================================

async fn create_file(
    State(platform): State<Arc<Platform>>,
    Path(bucket): Path<String>,
    headers: HeaderMap,
    mut multipart: Multipart,
) -> Response {
    if let Err(response) = check_project(&headers) {
        return response;
    }

    let mut file_id = None;
    let mut name = String::new();
    let mut mime_type = String::new();
    let mut size = 0usize;
    let mut permissions = Vec::new();
    while let Ok(Some(field)) = multipart.next_field().await {
        let field_name = field.name().unwrap_or_default().to_string();
        match field_name.as_str() {
            "fileId" => file_id = field.text().await.ok(),
            "permissions[]" => permissions.extend(field.text().await.ok()),
            "file" => {
                name = field.file_name().unwrap_or_default().to_string();
                mime_type = field.content_type().unwrap_or_default().to_string();
                size = field.bytes().await.map(|bytes| bytes.len()).unwrap_or_default();
            }
            _ => {}
        }
    }

    let Some(file_id) = file_id else {
        return error(
            StatusCode::BAD_REQUEST,
            error_types::GENERAL_ARGUMENT_INVALID,
            "Param \"fileId\" is not optional.",
        );
    };
    if size == 0 {
        return error(
            StatusCode::BAD_REQUEST,
            "storage_file_empty",
            "Empty file passed to the endpoint.",
        );
    }

    let mut store = platform.store();
    if store.files.contains_key(&file_id) {
        return error(
            StatusCode::CONFLICT,
            error_types::STORAGE_FILE_ALREADY_EXISTS,
            "A storage file with the requested ID already exists.",
        );
    }
    let now = timestamp(store.now());
    let file = json!({
        "$id": file_id,
        "bucketId": bucket,
        "$createdAt": now,
        "$updatedAt": now,
        "$permissions": permissions,
        "name": name,
        "mimeType": mime_type,
        "sizeOriginal": size,
    });
    store.files.insert(file_id, file.clone());
    (StatusCode::CREATED, Json(file)).into_response()
}

async fn delete_file(
    State(platform): State<Arc<Platform>>,
    Path((_bucket, file_id)): Path<(String, String)>,
    headers: HeaderMap,
) -> Response {
    if let Err(response) = check_project(&headers) {
        return response;
    }
    match platform.store().files.remove(&file_id) {
        Some(_) => StatusCode::NO_CONTENT.into_response(),
        None => error(
            StatusCode::NOT_FOUND,
            error_types::STORAGE_FILE_NOT_FOUND,
            "The requested file could not be found.",
        ),
    }
}
