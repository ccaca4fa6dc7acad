use once_cell::sync::Lazy;
use tiktoken_rs::{CoreBPE, o200k_base};

// Only used for the post-run summary; a missing tokenizer degrades to the chars/4 estimate.
static TOK: Lazy<Option<CoreBPE>> = Lazy::new(|| match o200k_base() {
    Ok(bpe) => Some(bpe),
    Err(e) => {
        tracing::warn!("tokenizer unavailable, falling back to estimate: {e}");
        None
    }
});

/// Count tokens in a string using the shared CoreBPE tokenizer
#[inline]
pub fn count(text: &str) -> usize {
    match TOK.as_ref() {
        Some(bpe) => bpe.encode_with_special_tokens(text).len(),
        None => estimate(text),
    }
}

/// Fallback count when the BPE tokenizer cannot load: one token per four chars, rounded up.
pub fn estimate(text: &str) -> usize {
    text.chars()
        .count()
        .div_ceil(crate::constants::CHARS_PER_TOKEN)
}
