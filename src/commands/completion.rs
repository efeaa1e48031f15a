use crate::error::Result;
use clap::Command;
use clap_complete::{generate, Shell};
use std::io::Write;

/// Print a completion script for `shell`.
///
/// To load completions in bash:
///
/// ```bash
/// if command -v ksec >/dev/null; then eval "$(ksec completion bash)"; fi
/// ```
pub fn completion<W: Write>(shell: Shell, command: &mut Command, out: &mut W) -> Result<()> {
    let bin_name = command.get_name().to_string();
    generate(shell, command, bin_name, out);
    Ok(())
}
