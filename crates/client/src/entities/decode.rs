//! Helpers for turning platform documents into domain values.

use serde::de::DeserializeOwned;

use quillpost_domain::DomainError;
use quillpost_shared::Document;

use crate::infrastructure::ports::PlatformError;

/// Decode a document's collection attributes.
pub(crate) fn attributes<T: DeserializeOwned>(
    operation: &'static str,
    document: &Document,
) -> Result<T, PlatformError> {
    document.decode().map_err(|e| {
        tracing::error!(
            error = %e,
            operation,
            document_id = %document.id,
            collection_id = %document.collection_id,
            "Malformed document attributes"
        );
        PlatformError::invalid_response(operation, format!("document {}: {}", document.id, e))
    })
}

/// Lift a domain validation failure on stored data into a platform error.
pub(crate) fn valid<T>(
    operation: &'static str,
    document: &Document,
    value: Result<T, DomainError>,
) -> Result<T, PlatformError> {
    value.map_err(|e| {
        tracing::error!(
            error = %e,
            operation,
            document_id = %document.id,
            collection_id = %document.collection_id,
            "Stored document failed validation"
        );
        PlatformError::invalid_payload(operation, e)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use quillpost_domain::UserId;
    use quillpost_shared::LikeAttributes;
    use serde_json::json;

    fn document(data: serde_json::Value) -> Document {
        let mut value = json!({
            "$id": "doc1",
            "$collectionId": "likes",
            "$createdAt": "2024-03-01T09:00:00.000+00:00",
            "$updatedAt": "2024-03-01T09:00:00.000+00:00"
        });
        if let (Some(target), Some(extra)) = (value.as_object_mut(), data.as_object()) {
            target.extend(extra.clone());
        }
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn missing_attribute_names_the_document() {
        let doc = document(json!({"postId": "hello-world"}));
        let err = attributes::<LikeAttributes>("get_likes", &doc).unwrap_err();
        assert!(matches!(
            err,
            PlatformError::InvalidResponse { operation: "get_likes", ref message }
                if message.contains("doc1")
        ));
    }

    #[test]
    fn invalid_stored_id_is_invalid_response() {
        let doc = document(json!({}));
        let err = valid("get_likes", &doc, UserId::new("-bad")).unwrap_err();
        assert!(matches!(err, PlatformError::InvalidResponse { .. }));
    }
}
