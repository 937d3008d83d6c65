use std::time::Duration;

use futures_executor::block_on;
use tokio::{
  sync::mpsc::{
    self,
    Sender,
    error::TrySendError,
  },
  time::Instant,
};

/// Upper bound on how long a synchronous caller may block on a full
/// channel. Past this the event is dropped; a lost debounce tick is
/// cheaper than a stalled input thread.
const FULL_CHANNEL_BLOCK_MS: u64 = 2;

/// A debounce-capable event handler running as a background tokio task.
///
/// Implementors receive every event immediately via [`handle_event`] and
/// return the deadline the task should wait for: `None` acts (or discards)
/// right away, `Some(instant)` arms or extends the trailing timer. When the
/// deadline passes with no further events, [`finish_debounce`] fires once.
///
/// [`handle_event`]: AsyncHook::handle_event
/// [`finish_debounce`]: AsyncHook::finish_debounce
pub trait AsyncHook: Sync + Send + 'static + Sized {
  type Event: Sync + Send + 'static;

  /// React to an incoming event. The current deadline (if a debounce is
  /// already pending) is passed in so the hook can keep it, replace it, or
  /// drop it.
  fn handle_event(&mut self, event: Self::Event, deadline: Option<Instant>) -> Option<Instant>;

  /// Called exactly once each time an armed deadline elapses without
  /// further events.
  fn finish_debounce(&mut self);

  /// Spawn the hook's worker task and return the sending half.
  ///
  /// Outside a tokio runtime no worker is spawned: the receiving half is
  /// dropped, the channel closes, and every send is quietly discarded.
  /// This keeps hooks constructible from plain unit tests that never
  /// exercise the async side.
  fn spawn(self) -> mpsc::Sender<Self::Event> {
    // Sized for bursts of keystrokes between worker wakeups.
    let (tx, rx) = mpsc::channel(128);
    if tokio::runtime::Handle::try_current().is_ok() {
      tokio::spawn(drive(self, rx));
    }
    tx
  }
}

async fn drive<H: AsyncHook>(mut hook: H, mut rx: mpsc::Receiver<H::Event>) {
  let mut deadline: Option<Instant> = None;
  loop {
    let event = match deadline {
      Some(at) => {
        match tokio::time::timeout_at(at, rx.recv()).await {
          Ok(event) => event,
          Err(_) => {
            // Quiet period elapsed.
            deadline = None;
            hook.finish_debounce();
            continue;
          },
        }
      },
      None => rx.recv().await,
    };
    let Some(event) = event else {
      // All senders dropped; a still-armed deadline dies with them.
      return;
    };
    deadline = hook.handle_event(event, deadline);
  }
}

/// Send an event from synchronous code, blocking at most briefly.
///
/// Tries a non-blocking send first; on a full channel it waits up to
/// [`FULL_CHANNEL_BLOCK_MS`] and then gives the event up rather than
/// freezing the caller.
pub fn send_blocking<T>(tx: &Sender<T>, event: T) {
  match tx.try_send(event) {
    Ok(()) => {},
    Err(TrySendError::Full(event)) => {
      let _ = block_on(tx.send_timeout(event, Duration::from_millis(FULL_CHANNEL_BLOCK_MS)));
    },
    Err(TrySendError::Closed(_)) => {
      log::warn!("dropping event for a closed async hook");
    },
  }
}

/// Non-blocking send. Returns whether the event was accepted.
pub fn try_send<T>(tx: &Sender<T>, event: T) -> bool {
  tx.try_send(event).is_ok()
}

#[cfg(test)]
mod tests {
  use std::sync::{
    Arc,
    Mutex,
  };

  use tokio::time::{
    Duration,
    Instant,
    sleep,
  };

  use super::*;

  /// Collects the values that survive a 50ms trailing debounce.
  struct Collector {
    pending: Option<u32>,
    fired:   Arc<Mutex<Vec<u32>>>,
  }

  impl AsyncHook for Collector {
    type Event = u32;

    fn handle_event(&mut self, event: u32, _deadline: Option<Instant>) -> Option<Instant> {
      self.pending = Some(event);
      Some(Instant::now() + Duration::from_millis(50))
    }

    fn finish_debounce(&mut self) {
      if let Some(value) = self.pending.take() {
        self.fired.lock().unwrap().push(value);
      }
    }
  }

  #[tokio::test(start_paused = true)]
  async fn trailing_debounce_keeps_only_last_event() {
    let fired = Arc::new(Mutex::new(Vec::new()));
    let tx = Collector {
      pending: None,
      fired: Arc::clone(&fired),
    }
    .spawn();

    for value in [1, 2, 3] {
      tx.send(value).await.unwrap();
      sleep(Duration::from_millis(10)).await;
    }
    sleep(Duration::from_millis(100)).await;

    assert_eq!(*fired.lock().unwrap(), vec![3]);
  }

  #[tokio::test(start_paused = true)]
  async fn separate_quiet_periods_fire_separately() {
    let fired = Arc::new(Mutex::new(Vec::new()));
    let tx = Collector {
      pending: None,
      fired: Arc::clone(&fired),
    }
    .spawn();

    tx.send(7).await.unwrap();
    sleep(Duration::from_millis(100)).await;
    tx.send(8).await.unwrap();
    sleep(Duration::from_millis(100)).await;

    assert_eq!(*fired.lock().unwrap(), vec![7, 8]);
  }

  #[test]
  fn spawn_without_runtime_discards_events() {
    let tx = Collector {
      pending: None,
      fired: Arc::new(Mutex::new(Vec::new())),
    }
    .spawn();

    // No worker means a closed channel: sends are rejected, not queued,
    // and the blocking variant returns without panicking.
    assert!(tx.is_closed());
    assert!(!try_send(&tx, 1));
    send_blocking(&tx, 2);
  }
}
