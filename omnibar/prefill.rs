//! Canned starter phrases.
//!
//! On a workflow switch the input either receives the new workflow's
//! starter phrase or keeps whatever the user was typing. The rules, in
//! order:
//!
//! - empty buffer → insert the new workflow's phrase, cursor at end;
//! - buffer exactly equal to another workflow's phrase (i.e. a prefill
//!   the user never touched) → replace with the new phrase, or remove it
//!   when the new workflow has none;
//! - anything else is user text and stays untouched.
//!
//! The equality check is an exact string match against the phrase table,
//! and that is intentional: text the user happened to type that matches
//! another workflow's phrase is replaced too, rather than tracking
//! whether the buffer was ever touched.
//!
//! All edits are single discrete [`EditSource::Prefill`] transactions, so
//! the query pipeline never mistakes a phrase for typing.

use crate::{
  dispatch::{
    OmniPlugin,
    PluginCx,
  },
  input::EditSource,
  workflow::Workflow,
};

#[derive(Default)]
pub struct PrefillPlugin;

impl PrefillPlugin {
  pub fn new() -> Self {
    Self
  }
}

impl OmniPlugin for PrefillPlugin {
  fn workflow_changed(&mut self, cx: &mut PluginCx<'_>, _old: Workflow, new: Workflow) {
    let phrase = new.prefill_phrase();

    if cx.buffer.is_empty() {
      if let Some(phrase) = phrase {
        let event = cx.buffer.replace_all(phrase, EditSource::Prefill);
        cx.emitted.push(event);
      }
      return;
    }

    let is_foreign_prefill = Workflow::ALL
      .iter()
      .any(|w| *w != new && w.prefill_phrase() == Some(cx.buffer.text()));
    if is_foreign_prefill {
      let event = cx.buffer.replace_all(phrase.unwrap_or(""), EditSource::Prefill);
      cx.emitted.push(event);
    }
  }
}
