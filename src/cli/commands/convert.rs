use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::{self, ColumnFormat, ensure_writable};
use crate::ui::messages::info;
use std::path::Path;

/// Handle the `convert` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Convert {
        file,
        format,
        out,
        force,
    } = cmd
    {
        let columns = export::load_columns(Path::new(file))?;
        info(format!("Loaded {} columns from {}", columns.len(), file));

        let out = Path::new(out);
        let format = ColumnFormat::for_output(out, *format, cfg.default_format)?;
        ensure_writable(out, *force)?;

        info(format!("Converting {} to {}", file, format.as_str()));
        export::write_columns(out, &columns, format)?;
    }
    Ok(())
}
