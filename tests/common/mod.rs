use assert_cmd::{cargo::cargo_bin_cmd, Command};
use ksec::{MemorySecretStore, SecretData, SecretsClient};

/// Namespace every in-memory test client operates in
#[allow(dead_code)]
pub const NAMESPACE: &str = "default";

/// Identity recorded in annotations written by test clients
#[allow(dead_code)]
pub const TEST_USER: &str = "testuser";

/// A client backed by a fresh in-memory store.
#[allow(dead_code)]
pub fn memory_client() -> SecretsClient {
    SecretsClient::new(MemorySecretStore::new(NAMESPACE), NAMESPACE, TEST_USER)
}

/// Build secret data from string pairs.
#[allow(dead_code)]
pub fn data(pairs: &[(&str, &str)]) -> SecretData {
    pairs
        .iter()
        .map(|(key, value)| (key.to_string(), value.as_bytes().to_vec()))
        .collect()
}

/// Turn string slices into owned arguments.
#[allow(dead_code)]
pub fn args(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

/// Convenience helper for spawning the ksec binary via assert_cmd.
///
/// The kubeconfig and config locations point at nothing, so any command that
/// reaches the cluster fails instead of touching a real one.
#[allow(dead_code)]
pub fn ksec_cmd() -> Command {
    let mut cmd = cargo_bin_cmd!("ksec");
    cmd.env("KUBECONFIG", "/nonexistent/kubeconfig")
        .env("HOME", "/nonexistent/home")
        .env_remove("KSEC_NAMESPACE")
        .env_remove("KSEC_CONTEXT")
        .env_remove("KSEC_KUBECONFIG");
    cmd
}
