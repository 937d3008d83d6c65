//! Workflow state behind an observer interface.
//!
//! One [`WorkflowStore`] instance holds everything the omnibar UI reflects:
//! the current workflow, each workflow's last committed query, the selected
//! menu item, and the reduced-motion preference. It is an explicit,
//! `Arc`-shared container injected into whoever needs it; there is no
//! module-level singleton.
//!
//! Coupled fields change under one lock acquisition. Committing a query
//! clears the selection in the same call, and switching workflows clears
//! the outgoing query and the selection in the same call, so no observer
//! ever sees a selection that outlived the result set it was made against.
//! Listeners are notified after the lock is released and may freely read
//! the store from inside the callback.

use parking_lot::Mutex;

use crate::workflow::{
  MenuItem,
  Workflow,
};

/// Change notification delivered to [`WorkflowStore::subscribe`] listeners.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEvent {
  WorkflowChanged { old: Workflow, new: Workflow },
  QueryChanged { workflow: Workflow },
  SelectionChanged,
  MotionPrefChanged,
}

/// Plain data snapshot of the omnibar session state.
#[derive(Debug, Clone, Default)]
pub struct WorkflowState {
  pub workflow:      Workflow,
  queries:           [String; Workflow::COUNT],
  pub selected:      Option<MenuItem>,
  pub reduce_motion: bool,
}

impl WorkflowState {
  pub fn query(&self, workflow: Workflow) -> &str {
    &self.queries[workflow.as_index()]
  }
}

type Listener = Box<dyn Fn(&StoreEvent) + Send + Sync>;

#[derive(Default)]
pub struct WorkflowStore {
  state:     Mutex<WorkflowState>,
  listeners: Mutex<Vec<Listener>>,
}

impl WorkflowStore {
  pub fn new() -> Self {
    Self::default()
  }

  /// Register a change listener. Listeners run on whichever thread mutated
  /// the store, after the state lock has been dropped.
  pub fn subscribe(&self, listener: impl Fn(&StoreEvent) + Send + Sync + 'static) {
    self.listeners.lock().push(Box::new(listener));
  }

  pub fn snapshot(&self) -> WorkflowState {
    self.state.lock().clone()
  }

  pub fn workflow(&self) -> Workflow {
    self.state.lock().workflow
  }

  /// Switch the current workflow. Clears the outgoing workflow's stored
  /// query and the selection in the same lock so the switch is observed as
  /// one step. No-op when `new` is already current.
  pub fn set_workflow(&self, new: Workflow) {
    let mut events = Vec::new();
    {
      let mut state = self.state.lock();
      let old = state.workflow;
      if old == new {
        return;
      }
      if !state.queries[old.as_index()].is_empty() {
        state.queries[old.as_index()].clear();
        events.push(StoreEvent::QueryChanged { workflow: old });
      }
      if state.selected.take().is_some() {
        events.push(StoreEvent::SelectionChanged);
      }
      state.workflow = new;
      events.push(StoreEvent::WorkflowChanged { old, new });
    }
    self.emit(&events);
  }

  pub fn query(&self, workflow: Workflow) -> String {
    self.state.lock().queries[workflow.as_index()].clone()
  }

  /// Commit a query for `workflow`. A changed query invalidates whatever
  /// selection was made against the previous result set, so the selection
  /// is cleared under the same lock. Unchanged text is a no-op.
  pub fn set_query(&self, workflow: Workflow, text: impl Into<String>) {
    let text = text.into();
    let mut events = Vec::new();
    {
      let mut state = self.state.lock();
      if state.queries[workflow.as_index()] == text {
        return;
      }
      state.queries[workflow.as_index()] = text;
      events.push(StoreEvent::QueryChanged { workflow });
      if state.selected.take().is_some() {
        events.push(StoreEvent::SelectionChanged);
      }
    }
    self.emit(&events);
  }

  pub fn clear_query(&self, workflow: Workflow) {
    self.set_query(workflow, String::new());
  }

  pub fn selected(&self) -> Option<MenuItem> {
    self.state.lock().selected.clone()
  }

  pub fn set_selected(&self, selected: Option<MenuItem>) {
    {
      let mut state = self.state.lock();
      if state.selected == selected {
        return;
      }
      state.selected = selected;
    }
    self.emit(&[StoreEvent::SelectionChanged]);
  }

  pub fn reduce_motion(&self) -> bool {
    self.state.lock().reduce_motion
  }

  pub fn set_reduce_motion(&self, reduce: bool) {
    {
      let mut state = self.state.lock();
      if state.reduce_motion == reduce {
        return;
      }
      state.reduce_motion = reduce;
    }
    self.emit(&[StoreEvent::MotionPrefChanged]);
  }

  fn emit(&self, events: &[StoreEvent]) {
    let listeners = self.listeners.lock();
    for event in events {
      for listener in listeners.iter() {
        listener(event);
      }
    }
  }
}
