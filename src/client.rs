//! # Secrets Client
//!
//! [`SecretsClient`] wraps one namespace's Secret collection and stamps a
//! [`KeyAnnotation`] on every key it writes.
//!
//! ## Operations
//!
//! - **List / Get / Delete**: pass straight through to the store
//! - **Create**: an empty `Opaque` Secret
//! - **CreateWithData**: a new Secret pre-populated with keys
//! - **Update**: merge keys into an existing Secret (never removes keys)
//! - **Upsert**: create-or-update by name
//! - **Unset**: remove keys together with their annotations
//!
//! ## Consistency
//!
//! Upsert is a `get` followed by a `create` or `replace`. Nothing guards the
//! window in between: a concurrent creator makes the fallback create fail
//! with [`KsecError::AlreadyExists`], which is returned to the caller as is.
//! There are no retries anywhere.

use crate::annotation::{annotation_key, KeyAnnotation};
use crate::error::{KsecError, Result};
use crate::settings::Settings;
use crate::store::{ClusterSecretStore, SecretStore};
use k8s_openapi::api::core::v1::Secret;
use k8s_openapi::ByteString;
use kube::config::{KubeConfigOptions, Kubeconfig};
use std::collections::BTreeMap;
use tracing::{debug, info, warn};

/// Key/value contents of a Secret
pub type SecretData = BTreeMap<String, Vec<u8>>;

/// The generic Secret type
pub const SECRET_TYPE_OPAQUE: &str = "Opaque";

pub struct SecretsClient {
    store: Box<dyn SecretStore>,
    namespace: String,
    auth_info: String,
}

impl SecretsClient {
    /// Wrap `store`, recording writes as made by `auth_info`
    pub fn new(
        store: impl SecretStore + 'static,
        namespace: impl Into<String>,
        auth_info: impl Into<String>,
    ) -> Self {
        Self {
            store: Box::new(store),
            namespace: namespace.into(),
            auth_info: auth_info.into(),
        }
    }

    /// Connect to the cluster described by the kubeconfig.
    ///
    /// The context is `settings.context` or the kubeconfig's current one. Its
    /// user becomes the `updatedBy` of every write, and its namespace is used
    /// unless `settings.namespace` is set.
    pub async fn connect(settings: &Settings) -> Result<Self> {
        let kubeconfig = match &settings.kubeconfig {
            Some(path) => Kubeconfig::read_from(path),
            None => Kubeconfig::read(),
        }
        .map_err(|err| KsecError::Config(format!("failed to load kubeconfig: {}", err)))?;

        let context = settings
            .context
            .clone()
            .or_else(|| kubeconfig.current_context.clone())
            .ok_or_else(|| KsecError::Config("kubeconfig has no current context".into()))?;
        let auth_info = context_user(&kubeconfig, &context)?;

        let options = KubeConfigOptions {
            context: Some(context.clone()),
            ..Default::default()
        };
        let config = kube::Config::from_custom_kubeconfig(kubeconfig, &options)
            .await
            .map_err(|err| KsecError::Config(format!("invalid kubeconfig context: {}", err)))?;

        let namespace = settings
            .namespace
            .clone()
            .unwrap_or_else(|| config.default_namespace.clone());
        let client = kube::Client::try_from(config)?;

        info!(%context, %namespace, user = %auth_info, "connected to cluster");
        Ok(Self::new(
            ClusterSecretStore::new(client, &namespace),
            namespace,
            auth_info,
        ))
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Identity recorded in key annotations
    pub fn auth_info(&self) -> &str {
        &self.auth_info
    }

    /// List all Secrets
    pub async fn list(&self) -> Result<Vec<Secret>> {
        self.store.list().await
    }

    /// Create a new empty Secret
    pub async fn create(&self, name: &str) -> Result<Secret> {
        self.store.create(&new_secret(name)).await
    }

    /// Create a new Secret holding `data`
    pub async fn create_with_data(&self, name: &str, data: SecretData) -> Result<Secret> {
        let annotation = KeyAnnotation::new(self.auth_info.as_str()).encode()?;

        let mut secret = new_secret(name);
        secret.metadata.annotations = Some(
            data.keys()
                .map(|key| (annotation_key(key), annotation.clone()))
                .collect(),
        );
        secret.data = Some(to_api_data(data));

        self.store.create(&secret).await
    }

    pub async fn get(&self, name: &str) -> Result<Secret> {
        self.store.get(name).await
    }

    /// Value of a single key
    pub async fn get_key(&self, name: &str, key: &str) -> Result<Vec<u8>> {
        let secret = self.get(name).await?;

        secret
            .data
            .and_then(|mut data| data.remove(key))
            .map(|value| value.0)
            .ok_or_else(|| KsecError::KeyNotFound {
                secret: name.to_string(),
                key: key.to_string(),
            })
    }

    pub async fn delete(&self, name: &str) -> Result<()> {
        self.store.delete(name).await
    }

    /// Merge `data` into `secret` and persist it.
    ///
    /// Keys in `data` are added or overwritten and get a fresh annotation;
    /// every other key is left as it was.
    pub async fn update(&self, mut secret: Secret, data: SecretData) -> Result<Secret> {
        let annotation = KeyAnnotation::new(self.auth_info.as_str()).encode()?;

        let annotations = secret.metadata.annotations.get_or_insert_with(BTreeMap::new);
        for key in data.keys() {
            annotations.insert(annotation_key(key), annotation.clone());
        }
        secret
            .data
            .get_or_insert_with(BTreeMap::new)
            .extend(to_api_data(data));

        self.store.replace(&secret).await
    }

    /// Create the Secret with `data` if it does not exist, otherwise update it
    pub async fn upsert(&self, name: &str, data: SecretData) -> Result<Secret> {
        match self.get(name).await {
            Ok(secret) => self.update(secret, data).await,
            Err(KsecError::NotFound(_)) => {
                debug!(secret = name, "secret does not exist, creating it");
                self.create_with_data(name, data).await
            }
            Err(err) => Err(err),
        }
    }

    /// Remove `keys` and their annotations from a Secret.
    ///
    /// Keys the Secret does not hold are skipped. Remaining keys keep their
    /// existing annotations.
    pub async fn unset(&self, name: &str, keys: &[String]) -> Result<Secret> {
        let mut secret = self.get(name).await?;

        let data = secret.data.get_or_insert_with(BTreeMap::new);
        let annotations = secret.metadata.annotations.get_or_insert_with(BTreeMap::new);
        for key in keys {
            if data.remove(key).is_none() {
                warn!(secret = name, key = %key, "key not present, skipping");
            }
            annotations.remove(&annotation_key(key));
        }

        self.update(secret, SecretData::new()).await
    }
}

/// Key/value contents of a fetched Secret
pub fn secret_data(secret: &Secret) -> SecretData {
    secret
        .data
        .iter()
        .flatten()
        .map(|(key, value)| (key.clone(), value.0.clone()))
        .collect()
}

/// Type of a fetched Secret, `Opaque` when unset
pub fn secret_type(secret: &Secret) -> &str {
    secret.type_.as_deref().unwrap_or(SECRET_TYPE_OPAQUE)
}

fn new_secret(name: &str) -> Secret {
    let mut secret = Secret {
        type_: Some(SECRET_TYPE_OPAQUE.to_string()),
        ..Default::default()
    };
    secret.metadata.name = Some(name.to_string());
    secret
}

fn to_api_data(data: SecretData) -> BTreeMap<String, ByteString> {
    data.into_iter()
        .map(|(key, value)| (key, ByteString(value)))
        .collect()
}

/// User of the named kubeconfig context
fn context_user(kubeconfig: &Kubeconfig, context: &str) -> Result<String> {
    let named = kubeconfig
        .contexts
        .iter()
        .find(|named| named.name == context)
        .ok_or_else(|| {
            KsecError::Config(format!("context \"{}\" not found in kubeconfig", context))
        })?;

    Ok(named
        .context
        .as_ref()
        .and_then(|context| context.user.clone())
        .unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kubeconfig(yaml: &str) -> Kubeconfig {
        Kubeconfig::from_yaml(yaml).unwrap()
    }

    const KUBECONFIG: &str = r#"
apiVersion: v1
kind: Config
current-context: dev
clusters:
  - name: local
    cluster:
      server: https://127.0.0.1:6443
contexts:
  - name: dev
    context:
      cluster: local
      user: dev-admin
      namespace: payments
users:
  - name: dev-admin
    user:
      token: abc
"#;

    #[test]
    fn test_context_user() {
        let config = kubeconfig(KUBECONFIG);
        assert_eq!(context_user(&config, "dev").unwrap(), "dev-admin");
    }

    #[test]
    fn test_context_without_user() {
        let config = kubeconfig(
            r#"
apiVersion: v1
kind: Config
contexts:
  - name: anonymous
    context:
      cluster: local
"#,
        );
        assert_eq!(context_user(&config, "anonymous").unwrap(), "");
    }

    #[test]
    fn test_unknown_context_fails() {
        let config = kubeconfig(KUBECONFIG);
        assert!(matches!(
            context_user(&config, "prod"),
            Err(KsecError::Config(_))
        ));
    }

    #[test]
    fn test_secret_type_defaults_to_opaque() {
        assert_eq!(secret_type(&Secret::default()), "Opaque");
    }

    #[test]
    fn test_secret_data_of_empty_secret() {
        assert!(secret_data(&Secret::default()).is_empty());
    }
}
