// Centralized magic numbers & default values

/// Marker placed after every file in the aggregate; also the preferred chunk cut point.
pub const FILE_SEPARATOR: &str = "\n\n================================================================================\n\n";
pub const REDACTION_PLACEHOLDER: &str = "REDACTED";
/// Compiled-size cap for one redaction term's pattern; terms are words, not documents.
pub const REDACTION_PATTERN_SIZE_LIMIT: usize = 1 << 20;
pub const DEFAULT_EXTENSION: &str = ".md";
pub const DEFAULT_CONFIG_FILE: &str = "md_ingest.toml";
pub const OUTPUT_BASE_NAME: &str = "md_ingest";
pub const OUTPUT_EXTENSION: &str = ".txt";
/// Rough characters-per-token ratio used to turn a token limit into a chunk budget.
pub const CHARS_PER_TOKEN: usize = 4;
