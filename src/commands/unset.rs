use crate::client::SecretsClient;
use crate::error::Result;
use std::io::Write;

/// Remove keys from a Secret
pub async fn unset<W: Write>(
    client: &SecretsClient,
    name: &str,
    keys: &[String],
    out: &mut W,
) -> Result<()> {
    client.unset(name, keys).await?;

    for key in keys {
        writeln!(out, "Removed \"{}\" from secret \"{}\"", key, name)?;
    }

    Ok(())
}
