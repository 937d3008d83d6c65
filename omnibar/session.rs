//! Close/navigate coordination.
//!
//! Picking an item must not navigate while the omnibar is still visibly
//! closing, so the dialog lifecycle is an explicit three-state machine
//! rather than a pair of booleans an effect watches:
//!
//! ```text
//! Open --begin_close(selection)--> Closing --finish_close--> Closed
//!   ^                                                          |
//!   +---------------------- reopen ---------------------------+
//! ```
//!
//! The pending selection rides along into `Closing` and is consumed by
//! `finish_close`, which performs the deferred navigation exactly once and
//! resets the store selection. With reduced motion enabled the close
//! completes inside `begin_close` itself.

use std::{
  sync::Arc,
  time::{
    Duration,
    Instant,
  },
};

use crate::{
  routes,
  store::WorkflowStore,
  workflow::MenuItem,
};

/// Default close transition length, in the popup-animation range.
pub const DEFAULT_CLOSE: Duration = Duration::from_millis(180);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
  #[default]
  Open,
  Closing,
  Closed,
}

/// Client-side navigation seam. The demo prints, tests record, a real
/// shell would push a route.
pub trait Router: Send + Sync {
  fn navigate(&self, path: &str);
}

/// Wall-clock timer for the close transition. Front-ends poll it to learn
/// when the visual close is over.
#[derive(Debug, Clone, Copy)]
pub struct CloseTransition {
  started_at: Instant,
  duration:   Duration,
}

impl CloseTransition {
  pub fn new(duration: Duration) -> Self {
    Self {
      started_at: Instant::now(),
      duration,
    }
  }

  pub fn is_complete(&self, now: Instant) -> bool {
    now.saturating_duration_since(self.started_at) >= self.duration
  }

  /// Elapsed fraction in `0.0..=1.0`, for front-ends that fade.
  pub fn progress(&self, now: Instant) -> f32 {
    let elapsed = now.saturating_duration_since(self.started_at).as_secs_f32();
    let total = self.duration.as_secs_f32().max(f32::EPSILON);
    (elapsed / total).clamp(0.0, 1.0)
  }
}

pub struct Session {
  store:          Arc<WorkflowStore>,
  router:         Arc<dyn Router>,
  phase:          Phase,
  pending:        Option<MenuItem>,
  transition:     Option<CloseTransition>,
  close_duration: Duration,
}

impl Session {
  pub fn new(store: Arc<WorkflowStore>, router: Arc<dyn Router>, close_duration: Duration) -> Self {
    Self {
      store,
      router,
      phase: Phase::Open,
      pending: None,
      transition: None,
      close_duration,
    }
  }

  pub fn phase(&self) -> Phase {
    self.phase
  }

  /// Start closing, keeping `selection` for the deferred navigation.
  /// Only meaningful while `Open`. With reduced motion the transition is
  /// skipped and the close completes before this returns.
  pub fn begin_close(&mut self, selection: Option<MenuItem>) {
    if self.phase != Phase::Open {
      return;
    }
    self.pending = selection;
    self.phase = Phase::Closing;
    if self.store.reduce_motion() {
      self.finish_close();
    } else {
      self.transition = Some(CloseTransition::new(self.close_duration));
    }
  }

  /// Drive the close transition; calls [`finish_close`](Self::finish_close)
  /// once the timer elapses.
  pub fn poll(&mut self, now: Instant) {
    if self.phase == Phase::Closing
      && self.transition.is_some_and(|t| t.is_complete(now))
    {
      self.finish_close();
    }
  }

  /// Complete the close. Navigates to the pending selection's resolved
  /// URL (at most once per `begin_close`) and clears the selection both
  /// here and in the store. No-op outside `Closing`.
  pub fn finish_close(&mut self) {
    if self.phase != Phase::Closing {
      return;
    }
    self.phase = Phase::Closed;
    self.transition = None;
    if let Some(item) = self.pending.take() {
      let path = routes::resolve(&item);
      log::info!("omnibar closed, navigating to {path}");
      self.router.navigate(&path);
      self.store.set_selected(None);
    }
  }

  pub fn transition(&self) -> Option<CloseTransition> {
    self.transition
  }

  /// Back to `Open`, dropping any stale pending selection.
  pub fn reopen(&mut self) {
    self.phase = Phase::Open;
    self.pending = None;
    self.transition = None;
  }
}
