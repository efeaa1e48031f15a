use crate::error::Result;
use std::io::{BufRead, Write};

/// Write rows as left-aligned columns separated by a single space.
///
/// The last cell of a row is never padded. An empty row prints a blank line.
pub fn write_table<W: Write>(out: &mut W, rows: &[Vec<String>]) -> Result<()> {
    let columns = rows.iter().map(Vec::len).max().unwrap_or(0);
    let mut widths = vec![0; columns];
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    for row in rows {
        let mut line = String::new();
        for (i, cell) in row.iter().enumerate() {
            if i + 1 == row.len() {
                line.push_str(cell);
            } else {
                line.push_str(&format!("{:<width$} ", cell, width = widths[i]));
            }
        }
        writeln!(out, "{}", line)?;
    }

    Ok(())
}

/// Ask a yes/no question; anything but `y`/`yes` is a no
pub fn confirm<R: BufRead, W: Write>(input: &mut R, out: &mut W, message: &str) -> Result<bool> {
    write!(out, "{} [y/N]: ", message)?;
    out.flush()?;

    let mut response = String::new();
    input.read_line(&mut response)?;
    let response = response.trim();

    Ok(response.eq_ignore_ascii_case("y") || response.eq_ignore_ascii_case("yes"))
}
