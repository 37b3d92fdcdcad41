//! Databases service adapter.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::{Method, RequestBuilder};
use serde_json::Value;

use quillpost_shared::{
    CreateDocumentRequest, Document, DocumentList, Permission, Query, UpdateDocumentRequest,
};

use super::http::PlatformHttp;
use crate::infrastructure::config::CollectionIds;
use crate::infrastructure::ports::{Collection, DocumentPort, PlatformError};

pub struct AppwriteDatabases {
    http: Arc<PlatformHttp>,
    database_id: String,
    collections: CollectionIds,
}

impl AppwriteDatabases {
    pub fn new(
        http: Arc<PlatformHttp>,
        database_id: impl Into<String>,
        collections: CollectionIds,
    ) -> Self {
        Self {
            http,
            database_id: database_id.into(),
            collections,
        }
    }

    async fn documents(
        &self,
        method: Method,
        collection: Collection,
        document_id: Option<&str>,
    ) -> Result<RequestBuilder, PlatformError> {
        let mut segments = vec![
            "databases",
            self.database_id.as_str(),
            "collections",
            self.collections.get(collection),
            "documents",
        ];
        segments.extend(document_id);
        let url = self.http.url(&segments)?;
        Ok(self.http.request(method, url).await)
    }
}

#[async_trait]
impl DocumentPort for AppwriteDatabases {
    async fn create_document(
        &self,
        collection: Collection,
        document_id: &str,
        data: Value,
        permissions: Vec<Permission>,
    ) -> Result<Document, PlatformError> {
        let body = CreateDocumentRequest {
            document_id: document_id.to_string(),
            data,
            permissions: (!permissions.is_empty())
                .then(|| permissions.iter().map(ToString::to_string).collect()),
        };
        let request = self
            .documents(Method::POST, collection, None)
            .await?
            .json(&body);
        self.http.send("create_document", request).await
    }

    async fn get_document(
        &self,
        collection: Collection,
        document_id: &str,
    ) -> Result<Document, PlatformError> {
        let request = self
            .documents(Method::GET, collection, Some(document_id))
            .await?;
        self.http.send("get_document", request).await
    }

    async fn update_document(
        &self,
        collection: Collection,
        document_id: &str,
        data: Value,
    ) -> Result<Document, PlatformError> {
        let body = UpdateDocumentRequest {
            data,
            permissions: None,
        };
        let request = self
            .documents(Method::PATCH, collection, Some(document_id))
            .await?
            .json(&body);
        self.http.send("update_document", request).await
    }

    async fn delete_document(
        &self,
        collection: Collection,
        document_id: &str,
    ) -> Result<(), PlatformError> {
        let request = self
            .documents(Method::DELETE, collection, Some(document_id))
            .await?;
        self.http.send_empty("delete_document", request).await
    }

    async fn list_documents(
        &self,
        collection: Collection,
        queries: Vec<Query>,
    ) -> Result<DocumentList, PlatformError> {
        let params: Vec<(&str, String)> = queries
            .iter()
            .map(|query| ("queries[]", query.to_string()))
            .collect();
        let request = self
            .documents(Method::GET, collection, None)
            .await?
            .query(&params);
        self.http.send("list_documents", request).await
    }
}
