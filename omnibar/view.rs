//! Workflow views: what the list under the input shows.
//!
//! A view is derived state, recomputed from the store on demand: a
//! non-empty committed query yields search results, an empty one yields
//! the workflow's trending list. Where the items come from is someone
//! else's problem: front-ends inject a [`ResultSource`].

use crate::{
  store::WorkflowStore,
  workflow::{
    MenuItem,
    Workflow,
  },
};

/// Supplies items for a workflow. The implementation behind this seam
/// (HTTP, cache, fixtures) is out of scope for the dispatch core.
pub trait ResultSource {
  fn search(&self, workflow: Workflow, query: &str) -> Vec<MenuItem>;
  fn trending(&self, workflow: Workflow) -> Vec<MenuItem>;
}

/// What the list renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewContent {
  Results(Vec<MenuItem>),
  Trending(Vec<MenuItem>),
}

impl ViewContent {
  pub fn items(&self) -> &[MenuItem] {
    match self {
      ViewContent::Results(items) | ViewContent::Trending(items) => items,
    }
  }
}

/// Compute the current workflow's view content.
pub fn content(store: &WorkflowStore, source: &dyn ResultSource) -> ViewContent {
  let workflow = store.workflow();
  let query = store.query(workflow);
  if query.is_empty() {
    ViewContent::Trending(source.trending(workflow))
  } else {
    ViewContent::Results(source.search(workflow, &query))
  }
}

/// Move the selection forward through `content`, wrapping. Selecting from
/// the view's own items is what keeps the store invariant intact: a
/// selection always belongs to the result set currently shown.
pub fn select_next(store: &WorkflowStore, content: &ViewContent) {
  move_selection(store, content, 1);
}

/// Move the selection backward through `content`, wrapping.
pub fn select_prev(store: &WorkflowStore, content: &ViewContent) {
  move_selection(store, content, -1);
}

fn move_selection(store: &WorkflowStore, content: &ViewContent, step: isize) {
  let items = content.items();
  if items.is_empty() {
    store.set_selected(None);
    return;
  }
  let len = items.len() as isize;
  let next = match store.selected() {
    Some(current) => {
      match items.iter().position(|item| *item == current) {
        Some(idx) => (idx as isize + step).rem_euclid(len) as usize,
        // Stale selection (content changed under us): restart from the edge.
        None if step > 0 => 0,
        None => (len - 1) as usize,
      }
    },
    None if step > 0 => 0,
    None => (len - 1) as usize,
  };
  store.set_selected(Some(items[next].clone()));
}
