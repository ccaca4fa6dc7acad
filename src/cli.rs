use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "md-ingest")]
#[command(
    about = "Concatenate a vault of markdown notes into one text file (or size-bounded parts), \
             with a directory tree, per-file headers and optional word redaction."
)]
pub struct Cli {
    /// Config file with defaults (vault_path, output_path, words_to_filter, token_limit).
    /// Defaults to ./md_ingest.toml when present.
    #[arg(short = 'c', long = "config")]
    pub config: Option<PathBuf>,

    /// Absolute path to the vault to ingest.
    #[arg(short = 'v', long = "vault")]
    pub vault: Option<PathBuf>,

    /// Absolute path to the output directory; created if missing.
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,

    /// Word to redact (whole word, case-insensitive). Repeatable.
    #[arg(short = 'w', long = "word")]
    pub words: Vec<String>,

    /// Approximate token budget per output part (4 chars per token). 0 means one file.
    #[arg(short = 't', long = "token-limit")]
    pub token_limit: Option<usize>,

    /// File name suffix of the notes to collect.
    #[arg(short = 'e', long = "extension")]
    pub extension: Option<String>,

    /// Prompt for every setting, using flag/config values as defaults.
    #[arg(short = 'i', long = "interactive")]
    pub interactive: bool,
}
