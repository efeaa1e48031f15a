use super::{secret_name, SecretStore};
use crate::error::{KsecError, Result};
use async_trait::async_trait;
use k8s_openapi::api::core::v1::Secret;
use kube::api::{DeleteParams, ListParams, PostParams};
use kube::{Api, Client};
use tracing::debug;

/// Secret store backed by the Kubernetes API server
pub struct ClusterSecretStore {
    api: Api<Secret>,
}

impl ClusterSecretStore {
    pub fn new(client: Client, namespace: &str) -> Self {
        Self {
            api: Api::namespaced(client, namespace),
        }
    }
}

/// Translate API server refusals into the crate's not-found/exists errors
fn map_api_error(err: kube::Error, name: &str) -> KsecError {
    match err {
        kube::Error::Api(ref response) if response.code == 404 => {
            KsecError::NotFound(name.to_string())
        }
        kube::Error::Api(ref response)
            if response.code == 409 && response.reason == "AlreadyExists" =>
        {
            KsecError::AlreadyExists(name.to_string())
        }
        other => KsecError::Kube(other),
    }
}

#[async_trait]
impl SecretStore for ClusterSecretStore {
    async fn list(&self) -> Result<Vec<Secret>> {
        debug!("listing secrets");
        let list = self.api.list(&ListParams::default()).await?;
        Ok(list.items)
    }

    async fn create(&self, secret: &Secret) -> Result<Secret> {
        let name = secret_name(secret);
        debug!(secret = name, "creating secret");
        self.api
            .create(&PostParams::default(), secret)
            .await
            .map_err(|err| map_api_error(err, name))
    }

    async fn get(&self, name: &str) -> Result<Secret> {
        debug!(secret = name, "fetching secret");
        self.api
            .get(name)
            .await
            .map_err(|err| map_api_error(err, name))
    }

    async fn replace(&self, secret: &Secret) -> Result<Secret> {
        let name = secret_name(secret);
        debug!(secret = name, "replacing secret");
        self.api
            .replace(name, &PostParams::default(), secret)
            .await
            .map_err(|err| map_api_error(err, name))
    }

    async fn delete(&self, name: &str) -> Result<()> {
        debug!(secret = name, "deleting secret");
        self.api
            .delete(name, &DeleteParams::default())
            .await
            .map_err(|err| map_api_error(err, name))?;
        Ok(())
    }
}
