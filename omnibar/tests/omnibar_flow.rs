//! End-to-end flows: keystrokes through sanitize → debounce → store →
//! view → close-then-navigate.

use std::sync::{
  Arc,
  Mutex,
};

use omnibar::{
  ItemKind,
  MenuItem,
  Omnibar,
  OmnibarConfig,
  Phase,
  ResultSource,
  Router,
  ViewContent,
  Workflow,
};
use tokio::time::{
  Duration,
  sleep,
};

#[derive(Default)]
struct RecordingRouter {
  paths: Mutex<Vec<String>>,
}

impl Router for RecordingRouter {
  fn navigate(&self, path: &str) {
    self.paths.lock().unwrap().push(path.to_string());
  }
}

struct FixtureSource;

impl ResultSource for FixtureSource {
  fn search(&self, workflow: Workflow, query: &str) -> Vec<MenuItem> {
    match (workflow, query) {
      (Workflow::Story, "mars rover") => {
        vec![MenuItem::new(ItemKind::Story, "story-42", "Mars rover lands")]
      },
      _ => Vec::new(),
    }
  }

  fn trending(&self, _workflow: Workflow) -> Vec<MenuItem> {
    vec![MenuItem::new(ItemKind::Topic, "space", "Space")]
  }
}

fn omnibar_with_router() -> (Omnibar, Arc<RecordingRouter>) {
  let router = Arc::new(RecordingRouter::default());
  let omnibar = Omnibar::new(
    &OmnibarConfig::default(),
    Box::new(FixtureSource),
    Arc::clone(&router) as Arc<dyn Router>,
  );
  (omnibar, router)
}

fn type_text(omnibar: &mut Omnibar, text: &str) {
  for ch in text.chars() {
    omnibar.insert_char(ch);
  }
}

#[tokio::test(start_paused = true)]
async fn typing_commits_the_sanitized_query_after_the_quiet_period() {
  let (mut omnibar, _router) = omnibar_with_router();
  omnibar.switch_workflow(Workflow::Search);

  type_text(&mut omnibar, "  mars   rover ");
  assert_eq!(
    omnibar.store().query(Workflow::Search),
    "",
    "nothing committed before the debounce elapses"
  );

  sleep(Duration::from_millis(350)).await;
  assert_eq!(omnibar.store().query(Workflow::Search), "mars rover");
}

#[tokio::test(start_paused = true)]
async fn only_the_current_workflow_receives_commits() {
  let (mut omnibar, _router) = omnibar_with_router();
  omnibar.switch_workflow(Workflow::Search);
  type_text(&mut omnibar, "mars");
  sleep(Duration::from_millis(350)).await;

  for workflow in Workflow::ALL {
    if workflow != Workflow::Search {
      assert_eq!(omnibar.store().query(workflow), "");
    }
  }
}

#[tokio::test(start_paused = true)]
async fn switching_mid_debounce_drops_the_stale_commit() {
  let (mut omnibar, _router) = omnibar_with_router();
  omnibar.switch_workflow(Workflow::Search);
  type_text(&mut omnibar, "mars");

  // Switch away before the deadline; the in-flight commit must not land.
  omnibar.switch_workflow(Workflow::Chat);
  sleep(Duration::from_millis(500)).await;

  assert_eq!(omnibar.store().query(Workflow::Search), "");
}

#[tokio::test(start_paused = true)]
async fn emptying_the_input_clears_the_query_immediately() {
  let (mut omnibar, _router) = omnibar_with_router();
  omnibar.switch_workflow(Workflow::Search);
  type_text(&mut omnibar, "ab");
  sleep(Duration::from_millis(350)).await;
  assert_eq!(omnibar.store().query(Workflow::Search), "ab");

  omnibar.backspace();
  omnibar.backspace();

  // No debounce wait: the clear is synchronous.
  assert_eq!(omnibar.store().query(Workflow::Search), "");

  // And the canceled intermediate keystrokes never resurface.
  sleep(Duration::from_millis(500)).await;
  assert_eq!(omnibar.store().query(Workflow::Search), "");
}

#[tokio::test(start_paused = true)]
async fn prefill_follows_workflow_switches() {
  let (mut omnibar, _router) = omnibar_with_router();
  assert_eq!(omnibar.text(), "Ask anything", "initial chat prefill");

  omnibar.switch_workflow(Workflow::Story);
  assert_eq!(omnibar.text(), "Search stories");
  assert_eq!(omnibar.cursor(), omnibar.text().len());

  // Prefill text is not a query.
  sleep(Duration::from_millis(500)).await;
  assert_eq!(omnibar.store().query(Workflow::Story), "");

  omnibar.switch_workflow(Workflow::Search);
  assert_eq!(omnibar.text(), "", "no phrase for search");
}

#[tokio::test(start_paused = true)]
async fn user_text_is_never_replaced_by_prefill() {
  let (mut omnibar, _router) = omnibar_with_router();
  omnibar.clear();
  type_text(&mut omnibar, "mars rover");

  omnibar.switch_workflow(Workflow::Story);
  assert_eq!(omnibar.text(), "mars rover");
}

#[tokio::test(start_paused = true)]
async fn story_selection_navigates_once_after_the_close() {
  let (mut omnibar, router) = omnibar_with_router();
  omnibar.switch_workflow(Workflow::Story);
  omnibar.clear();
  type_text(&mut omnibar, "mars rover");
  sleep(Duration::from_millis(350)).await;
  assert_eq!(omnibar.store().query(Workflow::Story), "mars rover");

  let content = omnibar.content();
  assert!(
    matches!(content, ViewContent::Results(ref items) if items.len() == 1),
    "query shows results, got {content:?}"
  );
  omnibar.select_next();
  assert_eq!(omnibar.store().selected().unwrap().value, "story-42");

  assert!(omnibar.submit());
  assert_eq!(omnibar.phase(), Phase::Closing);
  assert!(
    router.paths.lock().unwrap().is_empty(),
    "navigation deferred until the close completes"
  );

  omnibar.finish_close();
  assert_eq!(omnibar.phase(), Phase::Closed);
  assert_eq!(*router.paths.lock().unwrap(), vec!["/stories/story-42"]);
  assert_eq!(omnibar.store().selected(), None);

  // Nothing fires twice.
  omnibar.finish_close();
  assert_eq!(router.paths.lock().unwrap().len(), 1);
}

#[tokio::test(start_paused = true)]
async fn submit_without_a_selection_keeps_the_omnibar_open() {
  let (mut omnibar, router) = omnibar_with_router();

  assert!(!omnibar.submit());
  assert_eq!(omnibar.phase(), Phase::Open);
  assert!(router.paths.lock().unwrap().is_empty());
}

#[tokio::test(start_paused = true)]
async fn reopen_starts_a_fresh_session() {
  let (mut omnibar, router) = omnibar_with_router();
  omnibar.switch_workflow(Workflow::Story);
  omnibar.clear();
  type_text(&mut omnibar, "mars rover");
  sleep(Duration::from_millis(350)).await;

  omnibar.select_next();
  omnibar.submit();
  omnibar.finish_close();
  assert_eq!(router.paths.lock().unwrap().len(), 1);

  omnibar.reopen();
  assert_eq!(omnibar.phase(), Phase::Open);
  assert_eq!(omnibar.store().query(Workflow::Story), "");
  assert_eq!(omnibar.text(), "Search stories", "prefill reapplied");
}
