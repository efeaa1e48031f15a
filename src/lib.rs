//! # ksec
//!
//! A command-line tool for managing Kubernetes Secret data.
//!
//! ## Features
//!
//! - **Secret lifecycle**: List, create and delete Secrets in a namespace
//! - **Key editing**: Read, set and unset individual keys without hand-editing base64
//! - **Provenance**: Every key records who last wrote it and when
//! - **`.env` sync**: Push a `.env` file into a Secret, or pull a Secret into one
//! - **Kubeconfig aware**: Uses your current context, user and namespace
//!
//! ## Quick Start
//!
//! ```bash
//! # Create a secret and set some keys
//! ksec create app-config
//! ksec set app-config DB_USER=app DB_PASSWORD=hunter2
//!
//! # Read it back
//! ksec get app-config
//! ksec get app-config DB_PASSWORD
//! ksec get app-config --verbose
//!
//! # Sync with a .env file
//! ksec pull app-config .env
//! ksec push .env app-config
//!
//! # Remove keys, then the secret
//! ksec unset app-config DB_PASSWORD
//! ksec delete app-config
//! ```
//!
//! ## Commands
//!
//! - `list` / `ls [--all]` - List Opaque secrets, or every secret with its type
//! - `create NAME...` - Create empty secrets
//! - `delete NAME... [--yes]` - Delete secrets, asking for confirmation
//! - `get NAME [KEY] [--verbose]` - Print a key, or all keys of a secret
//! - `set NAME KEY=VALUE...` - Set keys, creating the secret if needed
//! - `unset NAME KEY...` - Remove keys
//! - `push FILE NAME` - Upsert keys from a `.env` file
//! - `pull NAME FILE` - Write a secret's keys to a `.env` file
//! - `completion SHELL` - Print a shell completion script
//!
//! Global options: `--namespace/-n`, `--context`, `--kubeconfig`, `--config`.
//!
//! ## How It Works
//!
//! ```text
//! command handler → SecretsClient → SecretStore → API server
//! ```
//!
//! [`SecretsClient`] is built once per invocation from the kubeconfig and
//! handed to the command that runs. Writes go through
//! [`SecretsClient::update`] or [`SecretsClient::create_with_data`], which
//! stamp each written key with an annotation:
//!
//! ```text
//! ksec.io/DB_PASSWORD: {"updatedBy":"dev-admin","lastUpdated":"2024-05-06T07:08:09Z"}
//! ```
//!
//! `updatedBy` is the user of the kubeconfig context in use.
//!
//! ## Module Overview
//!
//! - [`client`] - The Secrets client
//! - [`store`] - Cluster and in-memory Secret stores
//! - [`annotation`] - Per-key annotation codec
//! - [`envfile`] - `.env` file parsing and rendering
//! - [`settings`] - Config file and environment settings
//! - [`commands`] - One handler per CLI verb
//! - [`error`] - Error types and unified error handling
//!
//! ## Logging
//!
//! Diagnostics go to stderr. Set `KSEC_LOG` to an `EnvFilter` directive
//! (for example `KSEC_LOG=debug`) to see API calls.
//!
//! ## Testing
//!
//! ```bash
//! # Unit tests
//! cargo test --lib
//!
//! # Client and command workflows against the in-memory store
//! cargo test --test client_test
//! cargo test --test commands_test
//!
//! # CLI tests (no cluster needed)
//! cargo test --test cli_test
//! ```

pub mod annotation;
pub mod client;
pub mod commands;
pub mod envfile;
pub mod error;
pub mod output;
pub mod settings;
pub mod store;

// Re-export commonly used types
pub use annotation::KeyAnnotation;
pub use client::{SecretData, SecretsClient};
pub use error::{KsecError, Result};
pub use settings::Settings;
pub use store::{ClusterSecretStore, MemorySecretStore, SecretStore};
