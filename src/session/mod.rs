//! # Session Module
//!
//! State the explorer keeps for the lifetime of the process and the
//! controller that turns user actions into API calls.
//!
//! ## Components
//!
//! - [`TokenVault`] - One in-memory token slot per [`crate::types::TokenCategory`]
//!   plus the entry field being edited. Nothing is persisted.
//! - [`AccountSelection`] - The account list from the last successful
//!   listing and the selected account id that scopes member and group calls.
//! - [`Controller`] - The `Idle -> Running -> Idle` state machine. It checks
//!   local preconditions, spawns one worker per action and renders the single
//!   result of that worker into a [`DisplaySink`].
//!
//! ## Dispatch Pattern
//!
//! ```text
//! dispatch(action)
//!     ├── busy? -> Busy error, nothing rendered
//!     ├── status "<label>...", "== <label> ==" in the log
//!     ├── precondition failed -> error event, no network call
//!     └── tokio::spawn(worker) -> exactly one ActionEvent
//!              ↓ mpsc channel
//! apply(event)
//!     ├── status "Ready."
//!     ├── Ok  -> formatted lines, account list replaced on List Accounts
//!     └── Err -> "[ERROR] <label>: <message>" + blocking dialog
//! ```
//!
//! A failed call never touches the account list or the selection.

mod controller;
mod display;
mod format;
mod state;
mod tokens;

pub use controller::Action;
pub use controller::ActionEvent;
pub use controller::Controller;
pub use controller::Outcome;
pub use controller::STATUS_READY;
pub use display::DisplaySink;
pub use display::SecretInput;
pub use state::AccountSelection;
pub use tokens::TokenVault;
