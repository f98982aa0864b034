use crate::export::ColumnFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for tablat
/// Print column files (JSON, YAML, CSV) as aligned text tables
#[derive(Parser)]
#[command(
    name = "tablat",
    version = env!("CARGO_PKG_VERSION"),
    about = "Print column files as aligned, optionally bordered text tables",
    long_about = None
)]
pub struct Cli {
    /// Override the configuration file path
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print a column file as a table
    Show {
        /// Column file (.json, .yaml/.yml, .csv)
        file: String,

        #[arg(
            long = "show",
            value_delimiter = ',',
            help = "Only print these column indexes (takes priority over --hide)"
        )]
        show: Vec<usize>,

        #[arg(long = "hide", value_delimiter = ',', help = "Do not print these column indexes")]
        hide: Vec<usize>,

        #[arg(long = "no-borders", help = "Do not draw the outer frame")]
        no_borders: bool,

        #[arg(long = "row-sep", help = "Draw a line after every row")]
        row_sep: bool,

        #[arg(long = "col-sep", help = "Draw a vertical rule between columns")]
        col_sep: bool,

        #[arg(
            long = "align",
            value_delimiter = ',',
            help = "Column alignments, e.g. l,r,c (left, right, center)"
        )]
        align: Vec<String>,
    },

    /// Convert a column file to another format
    Convert {
        /// Column file (.json, .yaml/.yml, .csv)
        file: String,

        #[arg(
            long,
            value_enum,
            help = "Output format (default: from the --out extension, then from config)"
        )]
        format: Option<ColumnFormat>,

        #[arg(long = "out", value_name = "FILE")]
        out: String,

        #[arg(long, short = 'f', help = "Overwrite the output file without asking")]
        force: bool,
    },

    /// Manage the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "init", help = "Write a default configuration file")]
        init: bool,
    },
}
