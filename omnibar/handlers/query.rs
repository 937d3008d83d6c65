//! Debounced query commits.
//!
//! One [`QueryPlugin`] is mounted per workflow. Each ignores edits unless
//! its workflow is current, sanitizes the text, and then either clears the
//! stored query synchronously (empty input commits immediately, no
//! debounce) or forwards through the shared [`QueryHandler`] hook, which
//! waits out the configured quiet period before writing to the store.
//!
//! A workflow switch mid-debounce needs no explicit cancellation: the hook
//! re-checks the current workflow when the deadline fires and drops the
//! commit if it went stale. The switch also already cleared the outgoing
//! query in the store.

use std::{
  sync::Arc,
  time::Duration,
};

use omnibar_event::{
  AsyncHook,
  send_blocking,
};
use tokio::{
  sync::mpsc::Sender,
  time::Instant,
};

use crate::{
  dispatch::{
    OmniPlugin,
    PluginCx,
  },
  input::{
    EditEvent,
    EditSource,
  },
  sanitize::sanitize,
  store::WorkflowStore,
  workflow::Workflow,
};

/// Default trailing debounce for query commits.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

#[derive(Debug)]
pub enum QueryEvent {
  /// Sanitized non-empty input; commit after the quiet period.
  Typed { workflow: Workflow, text: String },
  /// Drop any pending commit (the input emptied or the omnibar closed).
  Cancel,
}

/// The debounce hook. Holds at most one pending commit; every keystroke
/// replaces it and pushes the deadline forward.
pub struct QueryHandler {
  store:    Arc<WorkflowStore>,
  debounce: Duration,
  pending:  Option<(Workflow, String)>,
}

impl QueryHandler {
  pub fn new(store: Arc<WorkflowStore>, debounce: Duration) -> Self {
    Self {
      store,
      debounce,
      pending: None,
    }
  }
}

impl AsyncHook for QueryHandler {
  type Event = QueryEvent;

  fn handle_event(&mut self, event: QueryEvent, _deadline: Option<Instant>) -> Option<Instant> {
    match event {
      QueryEvent::Typed { workflow, text } => {
        self.pending = Some((workflow, text));
        Some(Instant::now() + self.debounce)
      },
      QueryEvent::Cancel => {
        self.pending = None;
        None
      },
    }
  }

  fn finish_debounce(&mut self) {
    let Some((workflow, text)) = self.pending.take() else {
      return;
    };
    if self.store.workflow() != workflow {
      log::debug!("dropping stale query commit for {workflow}");
      return;
    }
    self.store.set_query(workflow, text);
  }
}

/// The synchronous, per-workflow half of the query pipeline.
pub struct QueryPlugin {
  workflow: Workflow,
  tx:       Sender<QueryEvent>,
}

impl QueryPlugin {
  pub fn new(workflow: Workflow, tx: Sender<QueryEvent>) -> Self {
    Self { workflow, tx }
  }
}

impl OmniPlugin for QueryPlugin {
  fn text_changed(&mut self, cx: &mut PluginCx<'_>, event: &EditEvent) {
    // Canned-phrase transactions are guidance, not queries.
    if event.source == EditSource::Prefill {
      return;
    }
    if cx.store.workflow() != self.workflow {
      return;
    }
    let clean = sanitize(&event.text);
    if clean.is_empty() {
      cx.store.clear_query(self.workflow);
      send_blocking(&self.tx, QueryEvent::Cancel);
    } else {
      send_blocking(&self.tx, QueryEvent::Typed {
        workflow: self.workflow,
        text:     clean,
      });
    }
  }
}
