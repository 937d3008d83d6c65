//! Workflow dispatch core for an omnibar-style launcher.
//!
//! The omnibar is a single text input shared by several mutually exclusive
//! *workflows* (chat, search, story, image). Typing feeds the current
//! workflow's search query through sanitize → debounce → store; switching
//! workflows swaps canned starter phrases in and out of the input; picking
//! a result runs a close-then-navigate sequence that defers the navigation
//! until the close transition has finished.
//!
//! Everything here is headless. The state lives in an injectable
//! [`WorkflowStore`] behind an observer interface, editor reactions are a
//! static list of [`OmniPlugin`]s run in sequence by the [`Omnibar`]
//! facade, and the close/navigate coordination is an explicit
//! [`session::Phase`] machine. Front-ends supply a [`Router`] and a
//! [`ResultSource`] and drive the facade with plain method calls.

pub mod config;
pub mod dispatch;
pub mod handlers;
pub mod input;
mod omnibar;
pub mod prefill;
pub mod routes;
pub mod sanitize;
pub mod session;
pub mod store;
pub mod view;
pub mod workflow;

pub use config::{
  ConfigLoadError,
  OmnibarConfig,
};
pub use input::{
  EditEvent,
  EditSource,
  InputBuffer,
};
pub use omnibar::Omnibar;
pub use session::{
  Phase,
  Router,
  Session,
};
pub use store::{
  StoreEvent,
  WorkflowState,
  WorkflowStore,
};
pub use view::{
  ResultSource,
  ViewContent,
};
pub use workflow::{
  ItemKind,
  MenuItem,
  Workflow,
};
