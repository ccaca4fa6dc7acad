use std::path::PathBuf;

/// Why a discovered file was left out of the aggregate
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// Contents were not valid UTF-8
    Decode(String),
    /// The OS refused the read
    Io(String),
}

impl std::fmt::Display for SkipReason {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        match self {
            SkipReason::Decode(cause) => write!(f, "not valid UTF-8 text ({cause})"),
            SkipReason::Io(cause) => write!(f, "read failed ({cause})"),
        }
    }
}

/// A file the aggregator had to drop, with the cause
#[derive(Debug, Clone)]
pub struct SkippedFile {
    pub path: PathBuf,
    pub reason: SkipReason,
}

/// Concatenated file blocks plus the files that could not be read
#[derive(Debug, Clone, Default)]
pub struct Aggregate {
    pub text: String,
    pub included: usize,
    pub skipped: Vec<SkippedFile>,
}
