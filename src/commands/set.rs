use crate::client::{SecretData, SecretsClient};
use crate::error::{KsecError, Result};
use std::io::Write;

/// Parse `KEY=VALUE` arguments.
///
/// Only the first `=` separates key from value, so values may contain `=`
/// and `,`. Every item needs a non-empty key.
pub fn parse_assignments(items: &[String]) -> Result<SecretData> {
    let mut data = SecretData::new();

    for item in items {
        match item.split_once('=') {
            Some((key, value)) if !key.is_empty() => {
                data.insert(key.to_string(), value.as_bytes().to_vec());
            }
            _ => return Err(KsecError::MalformedData(item.clone())),
        }
    }

    Ok(data)
}

/// Set keys in a Secret, creating it if needed
pub async fn set<W: Write>(
    client: &SecretsClient,
    name: &str,
    data: SecretData,
    out: &mut W,
) -> Result<()> {
    let count = data.len();
    client.upsert(name, data).await?;
    writeln!(out, "Set {} key(s) in secret \"{}\"", count, name)?;

    Ok(())
}
