//! Adapters for the Appwrite-compatible platform REST API.

mod account;
mod databases;
mod http;
mod storage;

pub use account::AppwriteAccount;
pub use databases::AppwriteDatabases;
pub use http::PlatformHttp;
pub use storage::AppwriteStorage;
