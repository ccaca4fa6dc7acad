use crate::cli::Cli;
use crate::constants::{CHARS_PER_TOKEN, DEFAULT_CONFIG_FILE, DEFAULT_EXTENSION};
use crate::ui::prompt;
use anyhow::Result;
use serde::Deserialize;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};

/// A configuration problem that stops the run before any output is written.
#[derive(Debug)]
pub enum ConfigError {
    Read { path: PathBuf, cause: String },
    Parse { path: PathBuf, cause: String },
    Missing(&'static str),
    NotAbsolute { what: &'static str, path: PathBuf },
    NotADirectory { what: &'static str, path: PathBuf },
    CreateOutput { path: PathBuf, cause: String },
    Prompt(String),
    InvalidTerm(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        match self {
            ConfigError::Read { path, cause } => {
                write!(f, "could not read config file {}: {cause}", path.display())
            }
            ConfigError::Parse { path, cause } => {
                write!(f, "invalid config file {}: {cause}", path.display())
            }
            ConfigError::Missing(what) => {
                write!(f, "no {what} given; pass it as a flag, set it in the config file, or run interactively")
            }
            ConfigError::NotAbsolute { what, path } => {
                write!(f, "{what} must be an absolute path: {}", path.display())
            }
            ConfigError::NotADirectory { what, path } => {
                write!(f, "{what} is not a directory: {}", path.display())
            }
            ConfigError::CreateOutput { path, cause } => {
                write!(f, "could not create output directory {}: {cause}", path.display())
            }
            ConfigError::Prompt(cause) => write!(f, "failed to read user input: {cause}"),
            ConfigError::InvalidTerm(cause) => write!(f, "unusable redaction term: {cause}"),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Defaults read from `md_ingest.toml`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub vault_path: Option<PathBuf>,
    pub output_path: Option<PathBuf>,
    pub words_to_filter: Vec<String>,
    pub token_limit: Option<usize>,
    pub extension: Option<String>,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.to_path_buf(),
            cause: e.to_string(),
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            cause: e.to_string(),
        })
    }

    /// Loads `explicit` if given (it must exist), else the default file when present.
    pub fn discover(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::load(path),
            None => {
                let default = Path::new(DEFAULT_CONFIG_FILE);
                if default.is_file() {
                    tracing::debug!("loading defaults from {}", default.display());
                    Self::load(default)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }
}

/// Merged, not yet validated settings
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    pub vault_path: Option<PathBuf>,
    pub output_path: Option<PathBuf>,
    pub words_to_filter: Vec<String>,
    pub token_limit: usize,
    pub extension: String,
}

impl Settings {
    /// CLI flags win over file values.
    pub fn merge(
        cli: &Cli,
        file: FileConfig,
    ) -> Self {
        Settings {
            vault_path: cli.vault.clone().or(file.vault_path),
            output_path: cli.output.clone().or(file.output_path),
            words_to_filter: if cli.words.is_empty() {
                file.words_to_filter
            } else {
                cli.words.clone()
            },
            token_limit: cli.token_limit.or(file.token_limit).unwrap_or(0),
            extension: cli
                .extension
                .clone()
                .or(file.extension)
                .unwrap_or_else(|| DEFAULT_EXTENSION.to_string()),
        }
    }
}

/// Resolved run configuration handed to the pipeline
#[derive(Debug, Clone)]
pub struct Config {
    pub source_root: PathBuf,
    pub output_dir: PathBuf,
    pub redaction_terms: Vec<String>,
    /// Max characters per output part; 0 disables splitting
    pub chunk_budget: usize,
    pub extension: String,
}

impl Config {
    /// Parse CLI arguments, config file and (if needed) prompts into a Config
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let file = FileConfig::discover(cli.config.as_deref())?;
        let mut settings = Settings::merge(cli, file);

        let missing = settings.vault_path.is_none() || settings.output_path.is_none();
        if cli.interactive || (missing && std::io::stdin().is_terminal()) {
            prompt::complete_settings(&mut settings, cli.interactive)?;
        }

        Ok(Self::validate(settings)?)
    }

    /// Checks paths, canonicalizes the vault and creates the output directory.
    pub fn validate(settings: Settings) -> Result<Self, ConfigError> {
        let vault = settings.vault_path.ok_or(ConfigError::Missing("vault path"))?;
        let output = settings.output_path.ok_or(ConfigError::Missing("output path"))?;

        if !vault.is_absolute() {
            return Err(ConfigError::NotAbsolute {
                what: "vault path",
                path: vault,
            });
        }
        if !vault.is_dir() {
            return Err(ConfigError::NotADirectory {
                what: "vault path",
                path: vault,
            });
        }
        if !output.is_absolute() {
            return Err(ConfigError::NotAbsolute {
                what: "output path",
                path: output,
            });
        }
        if output.exists() && !output.is_dir() {
            return Err(ConfigError::NotADirectory {
                what: "output path",
                path: output,
            });
        }
        std::fs::create_dir_all(&output).map_err(|e| ConfigError::CreateOutput {
            path: output.clone(),
            cause: e.to_string(),
        })?;

        let source_root = dunce::canonicalize(&vault).unwrap_or(vault);
        Ok(Config {
            source_root,
            output_dir: output,
            redaction_terms: settings.words_to_filter,
            chunk_budget: settings.token_limit.saturating_mul(CHARS_PER_TOKEN),
            extension: settings.extension,
        })
    }
}
