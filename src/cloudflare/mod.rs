//! # Cloudflare Integration Module
//!
//! This module provides the interface to the Cloudflare v4 REST API used by the
//! explorer. It owns all HTTP communication: building an authenticated client,
//! issuing requests and validating the provider's standard response envelope.
//!
//! ## Architecture
//!
//! ```text
//! Session Controller (dispatch, display)
//!          ↓
//! Cloudflare Integration Layer
//!     ├── Client (auth headers, timeout, envelope validation)
//!     ├── Tokens (token verification)
//!     ├── Accounts (account listing)
//!     └── IAM (members, user groups)
//!          ↓
//! HTTP Layer (reqwest, JSON)
//!          ↓
//! Cloudflare API
//! ```
//!
//! ## Envelope Handling
//!
//! Every Cloudflare response is wrapped as
//! `{ success, errors, messages, result, result_info }`. A call only succeeds
//! when the HTTP status is 2xx **and** `success` is `true`; the two signals
//! are independent. Failures keep the provider's `errors` and `messages`
//! payloads verbatim. Bodies that are not JSON are reported with the status
//! code and the first 200 characters of the raw text.
//!
//! ## API Coverage
//!
//! - `GET /accounts/{verify_account_id}/tokens/verify` - Token verification
//! - `GET /accounts` - Accounts visible to the token
//! - `GET /accounts/{account_id}/members` - Account members
//! - `GET /accounts/{account_id}/iam/user_groups` - IAM user groups
//!
//! Only the first page of each list is requested. There is no retry policy
//! and no rate-limit handling; the per-request timeout is the only bound.
//!
//! ## Usage Patterns
//!
//! ```rust
//! let client = CloudflareClient::new(&ClientSettings::from_env(), token)?;
//! let envelope = client.list_accounts(Page::default()).await?;
//! for account in envelope.result.unwrap_or_default() {
//!     println!("{} ({})", account.name, account.id);
//! }
//! ```

mod accounts;
mod client;
mod iam;
mod tokens;

use std::time::Duration;

use crate::{config, types::Page};

pub use client::CloudflareClient;
pub use client::decode_envelope;

/// Connection settings shared by every client built during a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientSettings {
    pub base_url: String,
    pub timeout: Duration,
    pub verify_account_id: String,
    pub per_page: u32,
}

impl ClientSettings {
    /// Reads the settings from the environment, see [`crate::config`].
    pub fn from_env() -> Self {
        ClientSettings {
            base_url: config::api_url(),
            timeout: config::request_timeout(),
            verify_account_id: config::verify_account_id(),
            per_page: config::page_size(),
        }
    }

    /// Settings pointing at another base URL with default values otherwise.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        ClientSettings {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            ..ClientSettings::default()
        }
    }

    pub fn first_page(&self) -> Page {
        Page::first(self.per_page)
    }
}

impl Default for ClientSettings {
    fn default() -> Self {
        ClientSettings {
            base_url: config::DEFAULT_API_URL.to_string(),
            timeout: Duration::from_secs(config::DEFAULT_TIMEOUT_SECS),
            verify_account_id: config::DEFAULT_VERIFY_ACCOUNT_ID.to_string(),
            per_page: config::DEFAULT_PAGE_SIZE,
        }
    }
}
