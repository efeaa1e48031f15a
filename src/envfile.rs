//! `.env`-style files used by `push` and `pull`.
//!
//! One `KEY=VALUE` assignment per line. The first `=` separates key from
//! value; nothing is quoted or escaped.

use crate::client::SecretData;
use crate::error::Result;
use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;
use tracing::warn;

/// Parse `KEY=VALUE` lines into secret data.
///
/// Blank lines and `#` comments are skipped. Lines without a key are
/// ignored. A repeated key keeps its last value.
pub fn parse<R: BufRead>(reader: R) -> Result<SecretData> {
    let mut data = SecretData::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.strip_suffix('\r').unwrap_or(&line);

        if line.trim().is_empty() || line.starts_with('#') {
            continue;
        }

        match line.split_once('=') {
            Some((key, value)) if !key.is_empty() => {
                data.insert(key.to_string(), value.as_bytes().to_vec());
            }
            _ => warn!(line = index + 1, "ignoring line without KEY=VALUE assignment"),
        }
    }

    Ok(data)
}

pub fn read(path: &Path) -> Result<SecretData> {
    let file = File::open(path)?;
    parse(BufReader::new(file))
}

/// Write one `KEY=VALUE` line per key
pub fn write<W: Write>(out: &mut W, data: &SecretData) -> Result<()> {
    for (key, value) in data {
        out.write_all(key.as_bytes())?;
        out.write_all(b"=")?;
        out.write_all(value)?;
        out.write_all(b"\n")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_single_line_without_newline() {
        let data = parse("ENV_VAR=secret".as_bytes()).unwrap();
        assert_eq!(data.get("ENV_VAR").unwrap(), b"secret");
    }

    #[test]
    fn test_parse_splits_on_first_equals() {
        let data = parse("DB_URL=postgres://u:p@h/db?sslmode=require\n".as_bytes()).unwrap();
        assert_eq!(
            data.get("DB_URL").unwrap(),
            b"postgres://u:p@h/db?sslmode=require"
        );
    }

    #[test]
    fn test_parse_skips_blank_comment_and_invalid_lines() {
        let input = "# comment\n\nA=1\nnot an assignment\n=orphan\nB=\n";
        let data = parse(input.as_bytes()).unwrap();

        assert_eq!(data.len(), 2);
        assert_eq!(data.get("A").unwrap(), b"1");
        assert_eq!(data.get("B").unwrap(), b"");
    }

    #[test]
    fn test_parse_strips_crlf() {
        let data = parse("A=1\r\nB=2\r\n".as_bytes()).unwrap();
        assert_eq!(data.get("A").unwrap(), b"1");
        assert_eq!(data.get("B").unwrap(), b"2");
    }

    #[test]
    fn test_parse_last_duplicate_wins() {
        let data = parse("A=1\nA=2\n".as_bytes()).unwrap();
        assert_eq!(data.get("A").unwrap(), b"2");
    }

    #[test]
    fn test_write_sorted_lines() {
        let mut data = SecretData::new();
        data.insert("ZED".into(), b"last".to_vec());
        data.insert("ALPHA".into(), b"a=b".to_vec());

        let mut out = Vec::new();
        write(&mut out, &data).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "ALPHA=a=b\nZED=last\n");
    }

    #[test]
    fn test_read_missing_file_fails() {
        let temp = TempDir::new().unwrap();
        assert!(read(&temp.path().join("missing.env")).is_err());
    }

    #[test]
    fn test_write_then_read() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(".env");

        let mut data = SecretData::new();
        data.insert("ENV_VAR".into(), b"secret".to_vec());
        let mut file = File::create(&path).unwrap();
        write(&mut file, &data).unwrap();
        drop(file);

        assert_eq!(read(&path).unwrap(), data);
    }
}
