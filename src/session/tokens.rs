use std::{collections::HashMap, fmt};

use crate::{
    error::{ClientError, ClientResult},
    types::TokenCategory,
};

const MASK_CHAR: char = '•';

/// In-memory token slots, one per category, plus the token entry field.
///
/// Only the entry holds the token being edited; switching categories writes
/// the entry back into the slot of the category that was active.
pub struct TokenVault {
    slots: HashMap<TokenCategory, String>,
    active: TokenCategory,
    entry: String,
    masked: bool,
}

impl TokenVault {
    pub fn new() -> Self {
        TokenVault {
            slots: TokenCategory::ALL
                .into_iter()
                .map(|c| (c, String::new()))
                .collect(),
            active: TokenCategory::default(),
            entry: String::new(),
            masked: true,
        }
    }

    /// Vault with a token pre-filled into the `Account Read` slot.
    pub fn with_initial_token(token: &str) -> Self {
        let mut vault = TokenVault::new();
        vault.set(TokenCategory::AccountRead, token);
        vault
    }

    pub fn active(&self) -> TokenCategory {
        self.active
    }

    /// Saves the entry into the active slot and loads `category` into the entry.
    pub fn select(&mut self, category: TokenCategory) {
        self.commit_entry();
        self.active = category;
        self.entry = self.get(category).to_string();
    }

    pub fn entry(&self) -> &str {
        &self.entry
    }

    pub fn set_entry(&mut self, text: &str) {
        self.entry = text.to_string();
    }

    /// Writes the trimmed entry into the active slot.
    pub fn commit_entry(&mut self) {
        let value = self.entry.trim().to_string();
        self.slots.insert(self.active, value);
    }

    pub fn get(&self, category: TokenCategory) -> &str {
        self.slots.get(&category).map(String::as_str).unwrap_or("")
    }

    pub fn set(&mut self, category: TokenCategory, token: &str) {
        self.slots.insert(category, token.trim().to_string());
        if category == self.active {
            self.entry = self.get(category).to_string();
        }
    }

    /// Commits the entry and returns the active token.
    ///
    /// # Errors
    ///
    /// `Validation` if the active slot is empty.
    pub fn active_token(&mut self) -> ClientResult<String> {
        self.commit_entry();
        let token = self.get(self.active);
        if token.is_empty() {
            return Err(ClientError::validation("Please paste a token first."));
        }
        Ok(token.to_string())
    }

    pub fn is_masked(&self) -> bool {
        self.masked
    }

    pub fn toggle_masked(&mut self) -> bool {
        self.masked = !self.masked;
        self.masked
    }

    /// Entry text as it should be rendered, bullets while masked.
    pub fn display_entry(&self) -> String {
        if self.masked {
            self.entry.chars().map(|_| MASK_CHAR).collect()
        } else {
            self.entry.clone()
        }
    }
}

impl Default for TokenVault {
    fn default() -> Self {
        TokenVault::new()
    }
}

impl fmt::Debug for TokenVault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let filled: Vec<&str> = TokenCategory::ALL
            .iter()
            .filter(|c| !self.get(**c).is_empty())
            .map(|c| c.label())
            .collect();
        f.debug_struct("TokenVault")
            .field("active", &self.active)
            .field("filled", &filled)
            .field("masked", &self.masked)
            .finish_non_exhaustive()
    }
}
