pub mod prompt;

pub use prompt::complete_settings;
