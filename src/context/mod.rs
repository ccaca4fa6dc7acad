pub mod aggregate;
pub mod chunker;
pub mod gather;
pub mod redact;
pub mod tree;
pub mod types;
