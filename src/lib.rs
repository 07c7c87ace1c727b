/// Handles argument parsing and the demo runner.
pub mod cli;

/// Defines custom error types.
pub mod error;

/// Shared constants.
pub mod constants;

/// Labels for objects shown in a selection list.
pub mod displayable;

/// Dismissible, selectable UI units.
pub mod bubble;

/// The dialog toolkit boundary and its backends.
pub mod dialog;

/// Construction of bubbles backed by dialogs.
pub mod factory;

pub use bubble::{Bubble, BubbleType, ControllerBubble, SelectorBubble};
pub use displayable::Displayable;
pub use factory::BubbleFactory;
