//! Sequential plugin dispatch.
//!
//! Editor reactions are a fixed list of [`OmniPlugin`] objects, built once
//! and invoked in order by the facade after every buffer mutation and
//! workflow switch. There is no runtime registration or unregistration;
//! the set is decided at construction.

use crate::{
  input::{
    EditEvent,
    InputBuffer,
  },
  store::WorkflowStore,
  workflow::Workflow,
};

/// What a plugin gets to touch while it runs.
///
/// Plugins that edit the buffer (prefill) push the resulting [`EditEvent`]
/// into `emitted`; the facade dispatches those through the list afterwards
/// so every plugin observes every edit, regardless of who made it.
pub struct PluginCx<'a> {
  pub store:   &'a WorkflowStore,
  pub buffer:  &'a mut InputBuffer,
  pub emitted: &'a mut Vec<EditEvent>,
}

/// An editor-reaction plugin. Both hooks default to no-ops so a plugin
/// implements only the side it cares about.
pub trait OmniPlugin: Send {
  /// The buffer changed. `event.text` is the full contents afterwards.
  fn text_changed(&mut self, _cx: &mut PluginCx<'_>, _event: &EditEvent) {}

  /// The current workflow changed from `old` to `new`. Runs after the
  /// store already reflects the switch.
  fn workflow_changed(&mut self, _cx: &mut PluginCx<'_>, _old: Workflow, _new: Workflow) {}
}

/// The ordered plugin list.
#[derive(Default)]
pub struct PluginSet {
  plugins: Vec<Box<dyn OmniPlugin>>,
}

impl PluginSet {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with(mut self, plugin: Box<dyn OmniPlugin>) -> Self {
    self.plugins.push(plugin);
    self
  }

  pub fn text_changed(&mut self, cx: &mut PluginCx<'_>, event: &EditEvent) {
    for plugin in &mut self.plugins {
      plugin.text_changed(cx, event);
    }
  }

  pub fn workflow_changed(&mut self, cx: &mut PluginCx<'_>, old: Workflow, new: Workflow) {
    for plugin in &mut self.plugins {
      plugin.workflow_changed(cx, old, new);
    }
  }
}

#[cfg(test)]
mod tests {
  use std::sync::{
    Arc,
    Mutex,
  };

  use super::*;

  struct Recorder {
    name: &'static str,
    log:  Arc<Mutex<Vec<String>>>,
  }

  impl OmniPlugin for Recorder {
    fn text_changed(&mut self, _cx: &mut PluginCx<'_>, event: &EditEvent) {
      self
        .log
        .lock()
        .unwrap()
        .push(format!("{}: {}", self.name, event.text));
    }
  }

  #[test]
  fn plugins_run_in_declaration_order() {
    let log = Arc::new(Mutex::new(Vec::new()));
    let mut plugins = PluginSet::new()
      .with(Box::new(Recorder {
        name: "first",
        log:  Arc::clone(&log),
      }))
      .with(Box::new(Recorder {
        name: "second",
        log:  Arc::clone(&log),
      }));

    let store = WorkflowStore::new();
    let mut buffer = InputBuffer::new();
    let event = buffer.insert_char('a');
    let mut emitted = Vec::new();
    let mut cx = PluginCx {
      store:   &store,
      buffer:  &mut buffer,
      emitted: &mut emitted,
    };
    plugins.text_changed(&mut cx, &event);

    assert_eq!(*log.lock().unwrap(), vec!["first: a", "second: a"]);
  }
}
