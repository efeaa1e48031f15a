use crate::client::{secret_type, SecretsClient, SECRET_TYPE_OPAQUE};
use crate::error::Result;
use crate::output::write_table;
use std::io::Write;

/// List Secrets in the namespace.
///
/// Only `Opaque` Secrets are shown unless `all` is set, in which case every
/// Secret is listed together with its type.
pub async fn list<W: Write>(client: &SecretsClient, all: bool, out: &mut W) -> Result<()> {
    let secrets = client.list().await?;

    if all {
        let mut rows = vec![vec!["NAME".to_string(), "TYPE".to_string()]];
        for secret in &secrets {
            rows.push(vec![
                secret.metadata.name.clone().unwrap_or_default(),
                secret_type(secret).to_string(),
            ]);
        }
        write_table(out, &rows)?;
    } else {
        writeln!(out, "NAME")?;
        for secret in &secrets {
            if secret_type(secret) == SECRET_TYPE_OPAQUE {
                writeln!(out, "{}", secret.metadata.name.as_deref().unwrap_or_default())?;
            }
        }
    }

    Ok(())
}
