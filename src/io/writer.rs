use crate::context::chunker::Chunk;
use crate::output::{part_output_path, single_output_path};
use std::fs;
use std::path::{Path, PathBuf};

/// A successfully written artifact
#[derive(Debug, Clone)]
pub struct WrittenPart {
    pub path: PathBuf,
    pub chars: usize,
    pub tokens: usize,
}

/// An artifact that could not be written
#[derive(Debug)]
pub struct FailedWrite {
    pub path: PathBuf,
    pub error: std::io::Error,
}

/// What happened when writing every part.
#[derive(Debug, Default)]
pub struct WriteReport {
    pub written: Vec<WrittenPart>,
    pub failed: Vec<FailedWrite>,
}

impl WriteReport {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }

    /// Tokens across every written part.
    pub fn total_tokens(&self) -> usize {
        self.written.iter().map(|w| w.tokens).sum()
    }
}

/// Writes one chunk as `md_ingest.txt`, or several as numbered parts.
///
/// Every part is attempted even after a failure; failures are logged and
/// collected in the report.
pub fn write_chunks(
    dir: &Path,
    chunks: &[Chunk],
) -> WriteReport {
    let mut report = WriteReport::default();
    let single = chunks.len() == 1;
    for chunk in chunks {
        let path = if single {
            single_output_path(dir)
        } else {
            part_output_path(dir, chunk.number)
        };
        match fs::write(&path, &chunk.text) {
            Ok(()) => {
                let tokens = crate::tokenizer::count(&chunk.text);
                tracing::info!(
                    "Wrote {} ({} chars, ~{} tokens)",
                    path.display(),
                    chunk.chars,
                    tokens
                );
                report.written.push(WrittenPart {
                    path,
                    chars: chunk.chars,
                    tokens,
                });
            }
            Err(error) => {
                tracing::error!("Could not write {}: {}", path.display(), error);
                report.failed.push(FailedWrite { path, error });
            }
        }
    }
    report
}
