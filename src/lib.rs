pub mod cli;
pub mod config;
pub mod constants;
pub mod context;
pub mod io;
pub mod output;
pub mod pipeline;
pub mod tokenizer;
pub mod ui;

pub use context::aggregate;
pub use context::chunker;
pub use context::gather;
pub use context::redact;
pub use context::tree;
