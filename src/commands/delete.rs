use crate::client::SecretsClient;
use crate::error::Result;
use crate::output::confirm;
use std::io::{BufRead, Write};

/// Delete Secrets, asking for confirmation on `input` unless `skip_confirm`.
///
/// A declined prompt skips that Secret; any error stops the batch.
pub async fn delete<R: BufRead, W: Write>(
    client: &SecretsClient,
    names: &[String],
    skip_confirm: bool,
    input: &mut R,
    out: &mut W,
) -> Result<()> {
    for name in names {
        // Fail on a missing Secret before prompting for it
        client.get(name).await?;

        let message = format!("Delete secret \"{}\"? This action cannot be reversed.", name);
        if !skip_confirm && !confirm(input, out, &message)? {
            writeln!(out, "Delete canceled")?;
            continue;
        }

        client.delete(name).await?;
        writeln!(out, "Deleted secret \"{}\"", name)?;
    }

    Ok(())
}
