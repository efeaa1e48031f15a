use super::{secret_name, SecretStore};
use crate::error::{KsecError, Result};
use async_trait::async_trait;
use k8s_openapi::api::core::v1::Secret;
use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

const OPAQUE: &str = "Opaque";

/// In-process Secret store.
///
/// Behaves like the API server for the verbs ksec uses: duplicate creates
/// are refused, missing objects are reported as not found, and stored
/// objects get their namespace and default type filled in.
pub struct MemorySecretStore {
    namespace: String,
    secrets: Mutex<BTreeMap<String, Secret>>,
}

impl MemorySecretStore {
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            secrets: Mutex::new(BTreeMap::new()),
        }
    }

    fn secrets(&self) -> Result<MutexGuard<'_, BTreeMap<String, Secret>>> {
        self.secrets
            .lock()
            .map_err(|_| KsecError::Other("secret store lock poisoned".into()))
    }

    fn stored(&self, secret: &Secret) -> Secret {
        let mut stored = secret.clone();
        stored.metadata.namespace = Some(self.namespace.clone());
        if stored.type_.is_none() {
            stored.type_ = Some(OPAQUE.to_string());
        }
        stored
    }
}

#[async_trait]
impl SecretStore for MemorySecretStore {
    async fn list(&self) -> Result<Vec<Secret>> {
        Ok(self.secrets()?.values().cloned().collect())
    }

    async fn create(&self, secret: &Secret) -> Result<Secret> {
        let name = secret_name(secret);
        if name.is_empty() {
            return Err(KsecError::Other("secret name is required".into()));
        }

        let mut secrets = self.secrets()?;
        if secrets.contains_key(name) {
            return Err(KsecError::AlreadyExists(name.to_string()));
        }

        let stored = self.stored(secret);
        secrets.insert(name.to_string(), stored.clone());
        Ok(stored)
    }

    async fn get(&self, name: &str) -> Result<Secret> {
        self.secrets()?
            .get(name)
            .cloned()
            .ok_or_else(|| KsecError::NotFound(name.to_string()))
    }

    async fn replace(&self, secret: &Secret) -> Result<Secret> {
        let name = secret_name(secret);
        let mut secrets = self.secrets()?;
        let existing = secrets
            .get_mut(name)
            .ok_or_else(|| KsecError::NotFound(name.to_string()))?;

        *existing = self.stored(secret);
        Ok(existing.clone())
    }

    async fn delete(&self, name: &str) -> Result<()> {
        self.secrets()?
            .remove(name)
            .map(|_| ())
            .ok_or_else(|| KsecError::NotFound(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(name: &str) -> Secret {
        let mut secret = Secret::default();
        secret.metadata.name = Some(name.to_string());
        secret
    }

    #[tokio::test]
    async fn test_create_fills_namespace_and_type() {
        let store = MemorySecretStore::new("staging");
        let created = store.create(&named("api")).await.unwrap();

        assert_eq!(created.metadata.namespace.as_deref(), Some("staging"));
        assert_eq!(created.type_.as_deref(), Some("Opaque"));
    }

    #[tokio::test]
    async fn test_create_keeps_explicit_type() {
        let store = MemorySecretStore::new("default");
        let mut secret = named("tls");
        secret.type_ = Some("kubernetes.io/tls".into());

        let created = store.create(&secret).await.unwrap();
        assert_eq!(created.type_.as_deref(), Some("kubernetes.io/tls"));
    }

    #[tokio::test]
    async fn test_create_twice_fails() {
        let store = MemorySecretStore::new("default");
        store.create(&named("api")).await.unwrap();

        let result = store.create(&named("api")).await;
        assert!(matches!(result, Err(KsecError::AlreadyExists(_))));
    }

    #[tokio::test]
    async fn test_create_without_name_fails() {
        let store = MemorySecretStore::new("default");
        assert!(store.create(&Secret::default()).await.is_err());
    }

    #[tokio::test]
    async fn test_missing_secret_is_not_found() {
        let store = MemorySecretStore::new("default");

        assert!(matches!(
            store.get("nope").await,
            Err(KsecError::NotFound(_))
        ));
        assert!(matches!(
            store.replace(&named("nope")).await,
            Err(KsecError::NotFound(_))
        ));
        assert!(matches!(
            store.delete("nope").await,
            Err(KsecError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_list_is_name_ordered() {
        let store = MemorySecretStore::new("default");
        for name in ["zeta", "alpha", "mid"] {
            store.create(&named(name)).await.unwrap();
        }

        let names: Vec<_> = store
            .list()
            .await
            .unwrap()
            .into_iter()
            .filter_map(|s| s.metadata.name)
            .collect();
        assert_eq!(names, vec!["alpha", "mid", "zeta"]);
    }
}
