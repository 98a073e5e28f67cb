//! Configuration management for the Cloudflare IAM Explorer.
//!
//! This module handles loading and accessing configuration values from environment
//! variables and `.env` files. Only connection settings live here; API tokens are
//! never read from the environment and never written to disk.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Application defaults

use std::{env, path::PathBuf, time::Duration};

use crate::Res;

/// Default base URL of the Cloudflare v4 REST API.
pub const DEFAULT_API_URL: &str = "https://api.cloudflare.com/client/v4";

/// Default per-request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Account id the token verification endpoint is pinned to.
pub const DEFAULT_VERIFY_ACCOUNT_ID: &str = "3ef9aca3e663821dd1413c72b4ae0db8";

/// Default number of entries requested per list call.
pub const DEFAULT_PAGE_SIZE: u32 = 50;

/// Loads environment variables from a `.env` file in the local data directory.
///
/// Creates the directory structure if it doesn't exist and loads variables
/// from `cfiamcli/.env` below the platform-specific local data directory:
/// - Linux: `~/.local/share/cfiamcli/.env`
/// - macOS: `~/Library/Application Support/cfiamcli/.env`
/// - Windows: `%LOCALAPPDATA%/cfiamcli/.env`
///
/// A missing `.env` file is not an error, every setting has a default.
///
/// # Errors
///
/// Returns an error if the parent directory cannot be created or if an
/// existing `.env` file cannot be parsed.
pub async fn load_env() -> Res<()> {
    let path = env_path();
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent).await?;
    }

    if !path.is_file() {
        return Ok(());
    }

    dotenv::from_path(&path).map_err(|e| format!("{}: {}", path.display(), e))?;
    Ok(())
}

fn env_path() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("cfiamcli/.env");
    path
}

/// Returns the Cloudflare API base URL without a trailing slash.
///
/// Reads `CLOUDFLARE_API_URL`, falling back to [`DEFAULT_API_URL`].
pub fn api_url() -> String {
    env::var("CLOUDFLARE_API_URL")
        .ok()
        .map(|v| v.trim().trim_end_matches('/').to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| DEFAULT_API_URL.to_string())
}

/// Returns the per-request timeout.
///
/// Reads `CLOUDFLARE_API_TIMEOUT_SECS`; unparsable or zero values fall back
/// to [`DEFAULT_TIMEOUT_SECS`].
pub fn request_timeout() -> Duration {
    let secs = env::var("CLOUDFLARE_API_TIMEOUT_SECS")
        .ok()
        .and_then(|v| v.trim().parse::<u64>().ok())
        .filter(|v| *v > 0)
        .unwrap_or(DEFAULT_TIMEOUT_SECS);
    Duration::from_secs(secs)
}

/// Returns the account id used by the token verification call.
///
/// The verification endpoint is pinned to this id regardless of the account
/// selected in the session. Reads `CLOUDFLARE_VERIFY_ACCOUNT_ID`.
pub fn verify_account_id() -> String {
    env::var("CLOUDFLARE_VERIFY_ACCOUNT_ID")
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| DEFAULT_VERIFY_ACCOUNT_ID.to_string())
}

/// Returns the `per_page` value sent with list calls.
///
/// Reads `CLOUDFLARE_PAGE_SIZE`; unparsable or zero values fall back to
/// [`DEFAULT_PAGE_SIZE`].
pub fn page_size() -> u32 {
    env::var("CLOUDFLARE_PAGE_SIZE")
        .ok()
        .and_then(|v| v.trim().parse::<u32>().ok())
        .filter(|v| *v > 0)
        .unwrap_or(DEFAULT_PAGE_SIZE)
}
