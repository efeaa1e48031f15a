//! # Key Annotations
//!
//! Every key written by ksec carries a small provenance record stored in the
//! Secret's annotations:
//!
//! ```text
//! ksec.io/<key> = {"updatedBy":"<kubeconfig user>","lastUpdated":"<RFC3339>"}
//! ```
//!
//! Keys written by other tools have no annotation and decode to an empty
//! record rather than an error.

use crate::error::Result;
use chrono::{SecondsFormat, Utc};
use k8s_openapi::api::core::v1::Secret;
use serde::{Deserialize, Serialize};

/// Prefix of every per-key annotation
pub const ANNOTATION_PREFIX: &str = "ksec.io";

/// Annotation key holding the metadata of `key`
pub fn annotation_key(key: &str) -> String {
    format!("{}/{}", ANNOTATION_PREFIX, key)
}

/// Metadata about an individual Secret key
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct KeyAnnotation {
    pub updated_by: String,
    pub last_updated: String,
}

impl KeyAnnotation {
    /// Fresh record stamped with the current time
    pub fn new(updated_by: impl Into<String>) -> Self {
        Self {
            updated_by: updated_by.into(),
            last_updated: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
        }
    }

    pub fn encode(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Decode a raw annotation value. Empty input yields the empty record.
    pub fn decode(raw: &str) -> Result<Self> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(raw)?)
    }

    /// Look up and decode the annotation of `key` on `secret`
    pub fn for_key(secret: &Secret, key: &str) -> Result<Self> {
        let raw = secret
            .metadata
            .annotations
            .as_ref()
            .and_then(|annotations| annotations.get(&annotation_key(key)))
            .map(String::as_str)
            .unwrap_or_default();
        Self::decode(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::KsecError;
    use std::collections::BTreeMap;

    #[test]
    fn test_annotation_key() {
        assert_eq!(annotation_key("DB_URL"), "ksec.io/DB_URL");
    }

    #[test]
    fn test_new_stamps_user_and_time() {
        let annotation = KeyAnnotation::new("testuser");
        assert_eq!(annotation.updated_by, "testuser");
        assert!(chrono::DateTime::parse_from_rfc3339(&annotation.last_updated).is_ok());
        assert!(annotation.last_updated.ends_with('Z'));
    }

    #[test]
    fn test_encode_uses_camel_case_fields() {
        let annotation = KeyAnnotation {
            updated_by: "alice".into(),
            last_updated: "2024-01-02T03:04:05Z".into(),
        };
        assert_eq!(
            annotation.encode().unwrap(),
            r#"{"updatedBy":"alice","lastUpdated":"2024-01-02T03:04:05Z"}"#
        );
    }

    #[test]
    fn test_decode_roundtrip() {
        let annotation = KeyAnnotation::new("bob");
        let decoded = KeyAnnotation::decode(&annotation.encode().unwrap()).unwrap();
        assert_eq!(annotation, decoded);
    }

    #[test]
    fn test_decode_empty_is_zero_value() {
        assert_eq!(KeyAnnotation::decode("").unwrap(), KeyAnnotation::default());
        assert_eq!(KeyAnnotation::decode("  ").unwrap(), KeyAnnotation::default());
    }

    #[test]
    fn test_decode_missing_fields_default() {
        let decoded = KeyAnnotation::decode(r#"{"updatedBy": "carol"}"#).unwrap();
        assert_eq!(decoded.updated_by, "carol");
        assert_eq!(decoded.last_updated, "");
    }

    #[test]
    fn test_decode_malformed_fails() {
        let result = KeyAnnotation::decode("{not json");
        assert!(matches!(result, Err(KsecError::Json(_))));
    }

    #[test]
    fn test_for_key_without_annotation() {
        let secret = Secret::default();
        assert_eq!(
            KeyAnnotation::for_key(&secret, "missing").unwrap(),
            KeyAnnotation::default()
        );
    }

    #[test]
    fn test_for_key_reads_prefixed_annotation() {
        let mut secret = Secret::default();
        secret.metadata.annotations = Some(BTreeMap::from([(
            "ksec.io/token".to_string(),
            r#"{"updatedBy":"dave","lastUpdated":"2024-05-06T07:08:09Z"}"#.to_string(),
        )]));

        let annotation = KeyAnnotation::for_key(&secret, "token").unwrap();
        assert_eq!(annotation.updated_by, "dave");
        assert_eq!(annotation.last_updated, "2024-05-06T07:08:09Z");
    }
}
