//! Block splitting.

use ringkas_core::markup;

/// Split normalized text into blocks separated by one or more blank lines.
///
/// Blocks that are empty or whitespace-only are dropped; order is kept.
pub fn split_blocks(text: &str) -> Vec<&str> {
    let mut blocks = Vec::new();
    let mut rest = text;

    while let Some(i) = rest.find("\n\n") {
        blocks.push(&rest[..i]);
        rest = rest[i..].trim_start_matches('\n');
    }
    blocks.push(rest);

    blocks.retain(|b| !markup::trim(b).is_empty());
    blocks
}
