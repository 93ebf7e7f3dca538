use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, warning};
use std::io::{self, BufRead, Write};
use std::path::Path;

/// Ask on `output` whether `path` may be replaced and read the answer from
/// `input`. Only `y` / `yes` (any case) count as consent; EOF is a refusal.
pub fn confirm_overwrite<R: BufRead, W: Write>(
    path: &Path,
    input: &mut R,
    output: &mut W,
) -> io::Result<bool> {
    write!(output, "'{}' already exists. Overwrite? [y/N]: ", path.display())?;
    output.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;
    Ok(matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes"))
}

/// Check whether `path` may be created or overwritten.
///
/// Missing files and `force` pass straight through; otherwise the user is
/// asked on the terminal, and a refusal becomes an `Export` error.
pub fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    if !path.exists() || force {
        return Ok(());
    }

    warning(format!("The file '{}' already exists.", path.display()));

    let stdin = io::stdin();
    if confirm_overwrite(path, &mut stdin.lock(), &mut io::stdout())? {
        info("Existing file will be overwritten.");
        return Ok(());
    }

    Err(AppError::Export(format!(
        "cancelled: '{}' not overwritten",
        path.display()
    )))
}
