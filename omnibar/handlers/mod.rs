//! Async hooks backing the plugin layer.
//!
//! Plugins run synchronously on the input thread; anything that needs a
//! quiet period (query commits) is forwarded to a hook task through a
//! channel. [`Handlers`] bundles the sending halves and is cheap to clone
//! into whichever plugin needs one.

use std::{
  sync::Arc,
  time::Duration,
};

use omnibar_event::AsyncHook;
use tokio::sync::mpsc::Sender;

use crate::store::WorkflowStore;

pub mod query;

pub use query::{
  QueryEvent,
  QueryPlugin,
};

#[derive(Clone)]
pub struct Handlers {
  pub queries: Sender<QueryEvent>,
}

impl Handlers {
  /// Spawn the hook tasks against `store`.
  pub fn spawn(store: Arc<WorkflowStore>, debounce: Duration) -> Self {
    Self {
      queries: query::QueryHandler::new(store, debounce).spawn(),
    }
  }
}
