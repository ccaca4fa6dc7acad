use crate::config::{ConfigError, Settings};
use dialoguer::Input;
use std::path::{Path, PathBuf};

/// Fills in missing settings from the terminal.
///
/// With `confirm_all` every value is asked for, pre-filled with what the
/// flags or config file already supplied; otherwise only missing paths are.
pub fn complete_settings(
    settings: &mut Settings,
    confirm_all: bool,
) -> Result<(), ConfigError> {
    println!("Markdown Ingester:");

    if confirm_all || settings.vault_path.is_none() {
        let vault = ask_absolute_path(
            r"Absolute path to your vault (e.g. C:\Users\Name\Documents\Main)",
            settings.vault_path.as_deref(),
        )?;
        settings.vault_path = Some(vault);
    }
    if confirm_all || settings.output_path.is_none() {
        let output = ask_absolute_path(
            r"Absolute path to your output directory (e.g. C:\Users\Name\Documents\Output)",
            settings.output_path.as_deref(),
        )?;
        settings.output_path = Some(output);
    }

    if confirm_all {
        let words: String = Input::new()
            .with_prompt("Words to redact (comma separated, blank for none)")
            .with_initial_text(settings.words_to_filter.join(", "))
            .allow_empty(true)
            .interact_text()
            .map_err(|e| ConfigError::Prompt(e.to_string()))?;
        settings.words_to_filter = words
            .split(',')
            .map(|w| w.trim().to_string())
            .filter(|w| !w.is_empty())
            .collect();

        settings.token_limit = Input::new()
            .with_prompt("Token limit per part (0 for a single file)")
            .default(settings.token_limit)
            .interact_text()
            .map_err(|e| ConfigError::Prompt(e.to_string()))?;
    }

    Ok(())
}

fn ask_absolute_path(
    prompt: &str,
    current: Option<&Path>,
) -> Result<PathBuf, ConfigError> {
    let mut input = Input::<String>::new()
        .with_prompt(prompt)
        .validate_with(|s: &String| -> Result<(), &'static str> {
            if Path::new(s.trim()).is_absolute() {
                Ok(())
            } else {
                Err("ERROR: Invalid path.")
            }
        });
    if let Some(p) = current {
        input = input.default(p.display().to_string());
    }
    let answer = input
        .interact_text()
        .map_err(|e| ConfigError::Prompt(e.to_string()))?;
    Ok(PathBuf::from(answer.trim()))
}
