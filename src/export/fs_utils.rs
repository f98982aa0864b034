// src/export/fs_utils.rs

use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, warning};
use std::io::{self, BufRead, Write};
use std::path::Path;

/// Make sure `target` can be written.
///
/// Missing targets and `force` pass straight through; an existing target
/// needs a `y`/`yes` answer on stdin.
pub fn ensure_writable(target: &Path, force: bool) -> AppResult<()> {
    if force || !target.exists() {
        return Ok(());
    }

    warning(format!("'{}' already exists.", target.display()));
    print!("Replace it? [y/N]: ");
    io::stdout().flush().ok();

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;

    match answer.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" => {
            info(format!("Replacing {}", target.display()));
            Ok(())
        }
        _ => Err(AppError::from(io::Error::new(
            io::ErrorKind::AlreadyExists,
            format!("{} not replaced", target.display()),
        ))),
    }
}
