use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::table::{ColumnFilter, Style, Table};
use crate::ui::messages::warning;
use std::path::Path;

/// Handle the `show` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Show {
        file,
        show,
        hide,
        no_borders,
        row_sep,
        col_sep,
        align,
    } = cmd
    {
        let base = cfg.style();
        let style = Style::new(
            base.borders() && !*no_borders,
            base.row_sep() || *row_sep,
            base.col_sep() || *col_sep,
        );

        let mut table = Table::from_file(Path::new(file), Some(style))?;

        // alignment is cosmetic: a bad list keeps the defaults
        if !align.is_empty() {
            if let Err(e) = table.parse_alignments(align.as_slice()) {
                warning(format!("{e}; keeping default alignment"));
            }
        }

        let filter = ColumnFilter {
            show: show.clone(),
            hide: hide.clone(),
        };
        table.render(&filter)?;
    }
    Ok(())
}
