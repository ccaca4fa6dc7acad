// Separator-aware chunk splitter: character-bounded, prefers cuts between files
use crate::constants::FILE_SEPARATOR;

/// One numbered slice of the aggregate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    /// 1-based position in the output sequence
    pub number: usize,
    pub text: String,
    /// Length of `text` in chars
    pub chars: usize,
}

/// Splits `blob` into chunks of at most `max_chars` characters.
///
/// `max_chars == 0` disables splitting. Within each window the last
/// [`FILE_SEPARATOR`] is used as the cut point when it ends within half a
/// budget of the window's end; otherwise the window is cut hard, which may
/// land inside a file's contents.
pub fn split_chunks(
    blob: &str,
    max_chars: usize,
) -> Vec<Chunk> {
    let total = blob.chars().count();
    if max_chars == 0 || total <= max_chars {
        return vec![Chunk {
            number: 1,
            text: blob.to_string(),
            chars: total,
        }];
    }

    let mut chunks = Vec::new();
    // byte offset of the next chunk's first char
    let mut pos = 0usize;
    while pos < blob.len() {
        let end = blob[pos..]
            .char_indices()
            .nth(max_chars)
            .map_or(blob.len(), |(i, _)| pos + i);
        let cut = find_cut(blob, pos, end, max_chars);
        let text = &blob[pos..cut];
        chunks.push(Chunk {
            number: chunks.len() + 1,
            text: text.to_string(),
            chars: text.chars().count(),
        });
        pos = cut;
    }
    tracing::debug!(parts = chunks.len(), max_chars, "split aggregate");
    chunks
}

// Returns the byte offset to cut at for the window [pos, end).
fn find_cut(
    blob: &str,
    pos: usize,
    end: usize,
    max_chars: usize,
) -> usize {
    let Some(found) = blob[pos..end].rfind(FILE_SEPARATOR) else {
        return end;
    };
    let sep_end = pos + found + FILE_SEPARATOR.len();
    let distance = blob[sep_end..end].chars().count();
    if 2 * distance < max_chars {
        sep_end
    } else {
        end
    }
}
