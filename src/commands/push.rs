use crate::client::{SecretData, SecretsClient};
use crate::error::Result;
use std::io::Write;
use std::path::Path;

/// Upsert the contents of a parsed `.env` file into a Secret
pub async fn push<W: Write>(
    client: &SecretsClient,
    file: &Path,
    name: &str,
    data: SecretData,
    out: &mut W,
) -> Result<()> {
    let count = data.len();
    client.upsert(name, data).await?;
    writeln!(
        out,
        "Pushed {} key(s) from {} into secret \"{}\"",
        count,
        file.display(),
        name
    )?;

    Ok(())
}
