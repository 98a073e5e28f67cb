//! Cloudflare IAM Explorer CLI Library
//!
//! This library provides functionality for exploring Cloudflare accounts and
//! their identity data. It includes modules for API communication, the
//! interactive session state machine, configuration management and a terminal
//! front end that renders results into an append-only output log.
//!
//! # Modules
//!
//! - `cli` - Interactive terminal front end (display sink, secret input, menu)
//! - `cloudflare` - Cloudflare v4 REST API client and envelope handling
//! - `config` - Configuration management and environment variables
//! - `error` - Error types raised by the client and the session controller
//! - `session` - Token vault, account selection and action dispatch
//! - `types` - Data structures and type definitions
//!
//! # Example
//!
//! ```
//! use cfiamcli::{cloudflare::ClientSettings, config};
//!
//! #[tokio::main]
//! async fn main() -> cfiamcli::Res<()> {
//!     config::load_env().await?;
//!     let settings = ClientSettings::from_env();
//!     // Build a session controller with the settings...
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod cloudflare;
pub mod config;
pub mod error;
pub mod session;
pub mod types;

/// A convenient Result type alias for operations that may fail.
///
/// Used for process-level plumbing such as loading configuration. API calls
/// and session actions use the typed [`error::ClientError`] instead.
///
/// # Type Parameters
///
/// - `T` - The success type returned on successful operations
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational message with a blue bullet point.
///
/// # Example
///
/// ```
/// info!("Starting session...");
/// info!("Using API endpoint {}", url);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// Used to provide positive feedback when operations complete successfully.
///
/// # Example
///
/// ```
/// success!("Token verified");
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// # Behavior
///
/// This macro will cause the program to exit immediately after printing
/// the error message. It is reserved for start-up failures; errors raised by
/// session actions are rendered into the output log instead.
///
/// # Example
///
/// ```
/// error!("Failed to start the async runtime");
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Used for recoverable issues that users should notice.
///
/// # Example
///
/// ```
/// warning!("List Accounts is still running");
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
