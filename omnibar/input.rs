//! The omnibar's single-line input buffer.
//!
//! A deliberately small stand-in for the rich editor surface: plain text,
//! a byte cursor, and one edit per user gesture. What matters for the
//! dispatch layer is the [`EditEvent`] each mutation produces, and in
//! particular its [`EditSource`]: prefill edits are applied as one
//! discrete non-interactive transaction and are tagged so downstream
//! plugins can tell them apart from typing.

use unicode_segmentation::UnicodeSegmentation;

/// Who caused an edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditSource {
  /// Interactive typing, deletion, or clearing by the user.
  User,
  /// A canned-phrase transaction applied on workflow switch.
  Prefill,
}

/// Snapshot of the buffer after a mutation.
#[derive(Debug, Clone)]
pub struct EditEvent {
  pub text:   String,
  pub source: EditSource,
}

#[derive(Debug, Default)]
pub struct InputBuffer {
  text:   String,
  /// Byte offset, always on a char boundary.
  cursor: usize,
}

impl InputBuffer {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn text(&self) -> &str {
    &self.text
  }

  pub fn cursor(&self) -> usize {
    self.cursor
  }

  pub fn is_empty(&self) -> bool {
    self.text.is_empty()
  }

  pub fn insert_char(&mut self, ch: char) -> EditEvent {
    self.text.insert(self.cursor, ch);
    self.cursor += ch.len_utf8();
    self.edit(EditSource::User)
  }

  pub fn insert_str(&mut self, s: &str) -> EditEvent {
    self.text.insert_str(self.cursor, s);
    self.cursor += s.len();
    self.edit(EditSource::User)
  }

  /// Delete the grapheme before the cursor. Returns `None` at the start
  /// of the buffer (nothing changed, so nothing to dispatch).
  pub fn backspace(&mut self) -> Option<EditEvent> {
    let (start, _) = self.text[..self.cursor].grapheme_indices(true).next_back()?;
    self.text.replace_range(start..self.cursor, "");
    self.cursor = start;
    Some(self.edit(EditSource::User))
  }

  pub fn clear(&mut self) -> EditEvent {
    self.text.clear();
    self.cursor = 0;
    self.edit(EditSource::User)
  }

  /// Replace the entire contents in one discrete transaction, cursor at
  /// the end. This is the prefill entry point, but user-driven wholesale
  /// replacement (paste-over) goes through it too.
  pub fn replace_all(&mut self, text: &str, source: EditSource) -> EditEvent {
    self.text.clear();
    self.text.push_str(text);
    self.cursor = self.text.len();
    self.edit(source)
  }

  fn edit(&self, source: EditSource) -> EditEvent {
    EditEvent {
      text: self.text.clone(),
      source,
    }
  }
}
