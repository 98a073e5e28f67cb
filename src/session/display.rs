use crate::types::TokenCategory;

/// Output surface the session controller renders into.
///
/// All methods are called from the interactive side only, never from a
/// worker task.
pub trait DisplaySink {
    /// Appends one line (which may contain newlines) to the output log.
    fn append_line(&mut self, text: &str);

    /// Replaces the status indicator text.
    fn set_status(&mut self, text: &str);

    /// Shows a blocking alert.
    fn show_error_dialog(&mut self, title: &str, text: &str);

    /// Replaces the entries of the account picker.
    fn set_account_choices(&mut self, labels: &[String]);

    /// Lets the user pick from the entries last passed to
    /// [`DisplaySink::set_account_choices`], returning the chosen index.
    fn choose_account(&mut self, current: usize) -> Option<usize>;
}

/// Source of pasted secrets.
pub trait SecretInput {
    /// Reads a token for `category`; `None` leaves the entry unchanged.
    fn read_secret(&mut self, category: TokenCategory, masked: bool) -> Option<String>;
}
