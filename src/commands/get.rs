use crate::annotation::KeyAnnotation;
use crate::client::{secret_data, SecretsClient};
use crate::error::Result;
use crate::output::write_table;
use std::io::Write;

/// Print a single key's raw value, or every key of the Secret.
///
/// With `verbose`, each key is printed with the user and time of its last
/// update.
pub async fn get<W: Write>(
    client: &SecretsClient,
    name: &str,
    key: Option<&str>,
    verbose: bool,
    out: &mut W,
) -> Result<()> {
    if let Some(key) = key {
        let value = client.get_key(name, key).await?;
        out.write_all(&value)?;
        writeln!(out)?;
        return Ok(());
    }

    let secret = client.get(name).await?;
    let mut rows = Vec::new();

    if verbose {
        for (key, value) in secret_data(&secret) {
            let annotation = KeyAnnotation::for_key(&secret, &key)?;
            rows.push(vec!["Key:".to_string(), key]);
            rows.push(vec![
                "Value:".to_string(),
                String::from_utf8_lossy(&value).into_owned(),
            ]);
            rows.push(vec!["User:".to_string(), annotation.updated_by]);
            rows.push(vec!["Updated:".to_string(), annotation.last_updated]);
            rows.push(Vec::new());
        }
    } else {
        rows.push(vec!["KEY".to_string(), "VALUE".to_string()]);
        for (key, value) in secret_data(&secret) {
            rows.push(vec![key, String::from_utf8_lossy(&value).into_owned()]);
        }
    }

    write_table(out, &rows)
}
