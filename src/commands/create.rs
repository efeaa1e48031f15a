use crate::client::SecretsClient;
use crate::error::Result;
use std::io::Write;

/// Create one empty Secret per name, stopping at the first failure
pub async fn create<W: Write>(client: &SecretsClient, names: &[String], out: &mut W) -> Result<()> {
    for name in names {
        client.create(name).await?;
        writeln!(out, "Created secret \"{}\"", name)?;
    }

    Ok(())
}
