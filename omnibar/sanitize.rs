//! Defensive normalization of raw editor text.
//!
//! Rich-text inputs leak artifacts into their plain-text dumps: object
//! replacement characters standing in for embedded nodes, zero-width
//! joiners from mention tokens, stray newlines from paste. A query string
//! must carry none of that, so everything funnels through [`sanitize`]
//! before it reaches the store.

/// Normalize raw input into query-safe text.
///
/// Whitespace of any flavor becomes a single space, runs collapse, leading
/// and trailing whitespace is dropped, and control/invisible characters
/// are stripped outright. Total: garbage in degrades to `""`, never an
/// error.
pub fn sanitize(raw: &str) -> String {
  let mut out = String::with_capacity(raw.len());
  let mut pending_space = false;
  for ch in raw.chars() {
    if ch.is_whitespace() {
      // Collapses runs and trims the front (nothing pends onto empty out).
      pending_space = !out.is_empty();
      continue;
    }
    if is_invisible(ch) {
      continue;
    }
    if pending_space {
      out.push(' ');
      pending_space = false;
    }
    out.push(ch);
  }
  out
}

fn is_invisible(ch: char) -> bool {
  ch.is_control()
    || matches!(
      ch,
      // Zero-width space/non-joiner/joiner, word joiner, BOM, and the
      // object replacement character editors use for inline embeds.
      '\u{200B}'..='\u{200D}' | '\u{2060}' | '\u{FEFF}' | '\u{FFFC}'
    )
}
