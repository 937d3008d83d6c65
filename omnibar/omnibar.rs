//! The facade tying buffer, plugins, views, and session together.

use std::{
  collections::VecDeque,
  sync::Arc,
  time::Instant,
};

use crate::{
  config::OmnibarConfig,
  dispatch::{
    PluginCx,
    PluginSet,
  },
  handlers::{
    Handlers,
    QueryPlugin,
  },
  input::{
    EditEvent,
    InputBuffer,
  },
  prefill::PrefillPlugin,
  session::{
    Phase,
    Router,
    Session,
  },
  store::WorkflowStore,
  view::{
    self,
    ResultSource,
    ViewContent,
  },
  workflow::Workflow,
};

/// One omnibar UI session.
///
/// Owns the input buffer, the static plugin list, and the close/navigate
/// session; shares the [`WorkflowStore`] with whoever else needs to
/// observe it. Front-ends call the methods here and render from
/// [`content`](Self::content) and the store.
pub struct Omnibar {
  store:   Arc<WorkflowStore>,
  buffer:  InputBuffer,
  plugins: PluginSet,
  session: Session,
  source:  Box<dyn ResultSource + Send>,
}

impl Omnibar {
  pub fn new(
    config: &OmnibarConfig,
    source: Box<dyn ResultSource + Send>,
    router: Arc<dyn Router>,
  ) -> Self {
    let store = Arc::new(WorkflowStore::new());
    store.set_reduce_motion(config.reduce_motion);

    let handlers = Handlers::spawn(Arc::clone(&store), config.debounce());

    // Prefill first so phrase swaps land before query plugins see the
    // follow-up events; one query plugin per workflow, all feeding the
    // same debounce hook.
    let mut plugins = PluginSet::new().with(Box::new(PrefillPlugin::new()));
    for workflow in Workflow::ALL {
      plugins = plugins.with(Box::new(QueryPlugin::new(workflow, handlers.queries.clone())));
    }

    let session = Session::new(Arc::clone(&store), router, config.close());

    let mut omnibar = Self {
      store,
      buffer: InputBuffer::new(),
      plugins,
      session,
      source,
    };
    omnibar.seed_prefill();
    omnibar
  }

  pub fn store(&self) -> &Arc<WorkflowStore> {
    &self.store
  }

  pub fn text(&self) -> &str {
    self.buffer.text()
  }

  pub fn cursor(&self) -> usize {
    self.buffer.cursor()
  }

  pub fn workflow(&self) -> Workflow {
    self.store.workflow()
  }

  pub fn phase(&self) -> Phase {
    self.session.phase()
  }

  pub fn insert_char(&mut self, ch: char) {
    let event = self.buffer.insert_char(ch);
    self.dispatch_edit(event);
  }

  pub fn insert_str(&mut self, s: &str) {
    let event = self.buffer.insert_str(s);
    self.dispatch_edit(event);
  }

  pub fn backspace(&mut self) {
    if let Some(event) = self.buffer.backspace() {
      self.dispatch_edit(event);
    }
  }

  pub fn clear(&mut self) {
    let event = self.buffer.clear();
    self.dispatch_edit(event);
  }

  /// Switch the current workflow. The store switch (which clears the
  /// outgoing query and selection) and the plugin pass (prefill swap)
  /// happen back to back; a no-op when already current.
  pub fn switch_workflow(&mut self, new: Workflow) {
    let old = self.store.workflow();
    if old == new {
      return;
    }
    self.store.set_workflow(new);
    self.run_workflow_pass(old, new);
  }

  pub fn content(&self) -> ViewContent {
    view::content(&self.store, &*self.source)
  }

  pub fn select_next(&mut self) {
    let content = self.content();
    view::select_next(&self.store, &content);
  }

  pub fn select_prev(&mut self) {
    let content = self.content();
    view::select_prev(&self.store, &content);
  }

  /// Enter. Begins the close-then-navigate sequence when an item is
  /// selected; returns whether a close was started.
  pub fn submit(&mut self) -> bool {
    let Some(item) = self.store.selected() else {
      return false;
    };
    self.session.begin_close(Some(item));
    true
  }

  /// Drive the close transition from the front-end's tick.
  pub fn poll(&mut self, now: Instant) {
    self.session.poll(now);
  }

  /// Force-complete the close (front-ends without a clock, tests).
  pub fn finish_close(&mut self) {
    self.session.finish_close();
  }

  /// Start a fresh omnibar session: open again, input reset, current
  /// workflow's query and selection cleared, prefill reapplied.
  pub fn reopen(&mut self) {
    self.session.reopen();
    self.buffer = InputBuffer::new();
    self.store.clear_query(self.store.workflow());
    self.seed_prefill();
  }

  fn seed_prefill(&mut self) {
    let current = self.store.workflow();
    self.run_workflow_pass(current, current);
  }

  fn run_workflow_pass(&mut self, old: Workflow, new: Workflow) {
    let mut emitted = Vec::new();
    {
      let mut cx = PluginCx {
        store:   &self.store,
        buffer:  &mut self.buffer,
        emitted: &mut emitted,
      };
      self.plugins.workflow_changed(&mut cx, old, new);
    }
    for event in emitted {
      self.dispatch_edit(event);
    }
  }

  fn dispatch_edit(&mut self, event: EditEvent) {
    let mut queue = VecDeque::from([event]);
    while let Some(event) = queue.pop_front() {
      let mut emitted = Vec::new();
      {
        let mut cx = PluginCx {
          store:   &self.store,
          buffer:  &mut self.buffer,
          emitted: &mut emitted,
        };
        self.plugins.text_changed(&mut cx, &event);
      }
      queue.extend(emitted);
    }
  }
}
