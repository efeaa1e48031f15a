use crate::client::{secret_data, SecretsClient};
use crate::envfile;
use crate::error::Result;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Write every key of a Secret into a `.env` file, replacing its contents
pub async fn pull<W: Write>(
    client: &SecretsClient,
    name: &str,
    file: &Path,
    out: &mut W,
) -> Result<()> {
    let secret = client.get(name).await?;
    let data = secret_data(&secret);

    let mut writer = BufWriter::new(File::create(file)?);
    envfile::write(&mut writer, &data)?;
    writer.flush()?;
    writer.get_ref().sync_all()?;

    writeln!(
        out,
        "Pulled {} key(s) from secret \"{}\" into {}",
        data.len(),
        name,
        file.display()
    )?;

    Ok(())
}
