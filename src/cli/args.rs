use clap::Parser;
use std::path::PathBuf;

use romanus::OutputFormat;

#[derive(Parser)]
#[command(name = "romanus", version, about = "Roman numeral to integer converter")]
pub struct CliArgs {
    /// Numerals to convert (batch mode). Without them, an interactive prompt starts
    pub numerals: Vec<String>,

    /// File with one numeral per line (batch mode)
    #[arg(short, long)]
    pub input_file: Option<PathBuf>,

    /// Output format (text or json); overrides the config file
    #[arg(short = 'f', long, value_enum)]
    pub format: Option<OutputFormat>,

    /// JSON file with session parameters (prompt, quit_words, format, banner)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Prompt shown before each line in interactive mode
    #[arg(long)]
    pub prompt: Option<String>,

    /// Do not print the title and usage lines
    #[arg(long, default_value_t = false)]
    pub no_banner: bool,

    /// Enable logging (refine with RUST_LOG)
    #[arg(long, default_value_t = false)]
    pub log: bool,
}

impl CliArgs {
    pub fn is_batch(&self) -> bool {
        !self.numerals.is_empty() || self.input_file.is_some()
    }
}
