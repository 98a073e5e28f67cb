//! # CLI Module
//!
//! Terminal front end of the explorer. It provides the concrete display sink
//! and secret input the session controller renders into, and the interactive
//! menu that triggers actions.
//!
//! ## Components
//!
//! - [`session`] - The interactive loop: initial token prompt, then a menu of
//!   token type, token value, show/hide, Verify Token, List Accounts, account
//!   selection, List Members and List IAM User Groups.
//! - [`TerminalDisplay`] - Prints the output log, shows a spinner as status
//!   indicator while an action runs and blocks on error alerts.
//! - [`TerminalSecretInput`] - Reads tokens, hidden unless the entry is shown.
//!
//! ## Usage Patterns
//!
//! ```bash
//! cfiamcli                           # start a session
//! cfiamcli session --account <id>    # start with an account selected
//! cfiamcli session --show-token      # start with the token entry unmasked
//! ```
//!
//! Tokens are only ever typed or pasted into the session and live in memory
//! until the process exits.

mod session;
mod terminal;

pub use session::session;
pub use terminal::TerminalDisplay;
pub use terminal::TerminalSecretInput;
