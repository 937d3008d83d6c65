//! Async hook plumbing for the omnibar.
//!
//! UI input arrives on the caller's thread as plain synchronous calls, but
//! some reactions (most importantly query updates) must wait out a quiet
//! period before taking effect. This crate provides the small framework for
//! that: an [`AsyncHook`] runs as a background tokio task fed through a
//! bounded channel, and decides per event whether to act now or push a
//! debounce deadline forward.

mod debounce;

pub use debounce::{
  AsyncHook,
  send_blocking,
  try_send,
};
