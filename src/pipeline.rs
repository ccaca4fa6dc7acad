use crate::config::Config;
use crate::context::aggregate::{self, Aggregate};
use crate::context::chunker::{self, Chunk};
use crate::context::gather;
use crate::context::redact::RedactionSet;
use crate::context::tree;
use crate::io::writer::{self, WriteReport};
use anyhow::Result;
use std::path::PathBuf;

/// Pipeline for discovering, aggregating and splitting a vault.
#[derive(Debug)]
pub struct Pipeline {
    config: Config,
    redactions: RedactionSet,
    files: Vec<PathBuf>,
    tree: String,
    aggregate: Aggregate,
    chunks: Vec<Chunk>,
}

impl Pipeline {
    pub fn new(config: Config) -> Result<Self> {
        let redactions = RedactionSet::new(&config.redaction_terms)?;
        if redactions.is_empty() {
            tracing::debug!("no redaction terms; note contents pass through unchanged");
        } else {
            tracing::info!("Redacting {} term(s)", redactions.terms().len());
        }
        Ok(Pipeline {
            config,
            redactions,
            files: Vec::new(),
            tree: String::new(),
            aggregate: Aggregate::default(),
            chunks: Vec::new(),
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }

    pub fn tree(&self) -> &str {
        &self.tree
    }

    pub fn aggregate(&self) -> &Aggregate {
        &self.aggregate
    }

    pub fn chunks(&self) -> &[Chunk] {
        &self.chunks
    }

    /// Find every note under the vault root.
    pub fn discover(&mut self) {
        self.files = gather::gather_note_paths(&self.config.source_root, &self.config.extension);
    }

    pub fn render_tree(&mut self) {
        self.tree = tree::render_tree(&self.config.source_root, &self.files);
    }

    /// Read, redact and concatenate the discovered notes.
    pub fn collect(&mut self) {
        self.aggregate =
            aggregate::aggregate_files(&self.config.source_root, &self.files, &self.redactions);
        tracing::info!(
            "Aggregated {} of {} files ({} skipped)",
            self.aggregate.included,
            self.files.len(),
            self.aggregate.skipped.len()
        );
    }

    /// Prefix the tree and split the full blob into output parts.
    pub fn split(&mut self) {
        let blob = aggregate::assemble(&self.tree, &self.aggregate);
        self.chunks = chunker::split_chunks(&blob, self.config.chunk_budget);
    }

    pub fn write(&self) -> WriteReport {
        writer::write_chunks(&self.config.output_dir, &self.chunks)
    }

    /// Runs every stage in order and writes the result.
    pub fn run(&mut self) -> WriteReport {
        self.discover();
        self.render_tree();
        self.collect();
        self.split();
        self.write()
    }
}
