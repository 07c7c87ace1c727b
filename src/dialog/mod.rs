//! Dialog toolkit boundary
//!
//! Bubbles never draw anything themselves. They describe a dialog with a
//! [`DialogConfig`] and hand it to a [`DialogBackend`], which blocks until the
//! user is done and answers with a resolved [`Pane`].
//!
//! The module is structured in layers:
//! - `interface`: the backend trait and the declarative dialog description
//! - `pane`: the completed dialog and its control values
//! - `dialoguer`: terminal implementation using the dialoguer library
//! - `scripted`: predefined answers for automation and tests

pub mod dialoguer;
pub mod interface;
pub mod pane;
pub mod scripted;

pub use self::dialoguer::DialoguerBackend;
pub use interface::*;
pub use pane::{ControlValue, Outcome, Pane};
pub use scripted::{ScriptedBackend, ScriptedResponse};
