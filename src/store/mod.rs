//! # Secret Stores
//!
//! [`SecretStore`] is the seam between [`SecretsClient`](crate::SecretsClient)
//! and wherever Secrets actually live:
//!
//! - [`ClusterSecretStore`] talks to the Kubernetes API server through `kube`
//! - [`MemorySecretStore`] keeps Secrets in process and mirrors the API
//!   server's error contract, for tests and dry runs
//!
//! Every store is bound to a single namespace at construction.

mod cluster;
mod memory;

pub use cluster::ClusterSecretStore;
pub use memory::MemorySecretStore;

use crate::error::Result;
use async_trait::async_trait;
use k8s_openapi::api::core::v1::Secret;

/// CRUD verbs against one namespaced Secret collection.
///
/// Implementations report a missing object as
/// [`KsecError::NotFound`](crate::KsecError::NotFound) and a name collision on
/// create as [`KsecError::AlreadyExists`](crate::KsecError::AlreadyExists).
#[async_trait]
pub trait SecretStore: Send + Sync {
    /// All Secrets in the namespace
    async fn list(&self) -> Result<Vec<Secret>>;

    /// Create `secret`, named by its metadata
    async fn create(&self, secret: &Secret) -> Result<Secret>;

    async fn get(&self, name: &str) -> Result<Secret>;

    /// Overwrite an existing Secret, named by its metadata
    async fn replace(&self, secret: &Secret) -> Result<Secret>;

    async fn delete(&self, name: &str) -> Result<()>;
}

pub(crate) fn secret_name(secret: &Secret) -> &str {
    secret.metadata.name.as_deref().unwrap_or_default()
}
