use crate::{
    error::{ClientError, ClientResult},
    types::Account,
};

/// Accounts returned by the last successful listing and the selected id.
#[derive(Debug, Default)]
pub struct AccountSelection {
    accounts: Vec<Account>,
    selected_id: String,
    selected_index: Option<usize>,
}

impl AccountSelection {
    /// Starts with an optional pre-selected account id and an empty list.
    pub fn new(initial_id: Option<String>) -> Self {
        AccountSelection {
            accounts: Vec::new(),
            selected_id: initial_id.map(|id| id.trim().to_string()).unwrap_or_default(),
            selected_index: None,
        }
    }

    /// Replaces the list wholesale and selects the first account.
    ///
    /// An empty list leaves the selected id as it was. Returns the newly
    /// selected id, if any.
    pub fn replace(&mut self, accounts: Vec<Account>) -> Option<&str> {
        self.accounts = accounts;
        self.selected_index = None;
        self.select(0)
    }

    /// Selects the account at `index`; `None` if there is no such account.
    pub fn select(&mut self, index: usize) -> Option<&str> {
        let account = self.accounts.get(index)?;
        self.selected_id = account.id.clone();
        self.selected_index = Some(index);
        Some(&self.selected_id)
    }

    pub fn selected_id(&self) -> &str {
        &self.selected_id
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected_index
    }

    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    /// Picker labels, one per account in list order.
    pub fn labels(&self) -> Vec<String> {
        self.accounts.iter().map(Account::display_label).collect()
    }

    /// Returns the selected id for calls scoped to an account.
    ///
    /// # Errors
    ///
    /// `Validation` when no account is selected.
    pub fn require_selected(&self) -> ClientResult<String> {
        let id = self.selected_id.trim();
        if id.is_empty() {
            return Err(ClientError::validation(
                "List accounts and select an account first.",
            ));
        }
        Ok(id.to_string())
    }
}
