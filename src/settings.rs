//! # Settings
//!
//! Connection settings are layered, later sources winning:
//!
//! 1. `~/.ksec.toml`, or the file passed with `--config`
//! 2. `KSEC_NAMESPACE`, `KSEC_CONTEXT` and `KSEC_KUBECONFIG`
//! 3. command-line flags
//!
//! ```toml
//! namespace = "payments"
//! context = "staging"
//! kubeconfig = "/home/me/.kube/staging"
//! ```
//!
//! Anything left unset falls back to the kubeconfig's current context and
//! its default namespace.

use crate::error::{KsecError, Result};
use config::{Config, Environment, File, FileFormat};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

const CONFIG_FILE: &str = ".ksec.toml";
const ENV_PREFIX: &str = "KSEC";

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Namespace to operate in
    pub namespace: Option<String>,
    /// Kubeconfig context to use instead of the current one
    pub context: Option<String>,
    /// Kubeconfig file to read instead of `KUBECONFIG`/`~/.kube/config`
    pub kubeconfig: Option<PathBuf>,
}

impl Settings {
    /// Load settings from the config file and environment.
    ///
    /// An explicit `config_path` must exist; the default file is optional.
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let (path, required) = match config_path {
            Some(path) => (Some(path.to_path_buf()), true),
            None => (default_config_path(), false),
        };

        let mut builder = Config::builder();
        if let Some(path) = path {
            let name = path
                .to_str()
                .ok_or_else(|| KsecError::Config("Invalid config path".into()))?;
            debug!(path = name, required, "reading config file");
            builder = builder.add_source(File::new(name, FileFormat::Toml).required(required));
        }

        let settings = builder
            .add_source(Environment::with_prefix(ENV_PREFIX))
            .build()?
            .try_deserialize()?;
        Ok(settings)
    }

    /// Apply command-line overrides on top of loaded settings
    pub fn with_overrides(
        mut self,
        namespace: Option<String>,
        context: Option<String>,
        kubeconfig: Option<PathBuf>,
    ) -> Self {
        if namespace.is_some() {
            self.namespace = namespace;
        }
        if context.is_some() {
            self.context = context;
        }
        if kubeconfig.is_some() {
            self.kubeconfig = kubeconfig;
        }
        self
    }
}

fn default_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(CONFIG_FILE))
}
