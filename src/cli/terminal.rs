use std::time::Duration;

use colored::Colorize;
use dialoguer::{Input, Password, Select};
use indicatif::{ProgressBar, ProgressStyle};

use crate::{
    session::{DisplaySink, STATUS_READY, SecretInput},
    types::TokenCategory,
};

/// Display sink writing the output log to stdout.
///
/// The status indicator is a spinner while an action runs; lines appended
/// meanwhile are printed above it.
#[derive(Default)]
pub struct TerminalDisplay {
    spinner: Option<ProgressBar>,
    status: String,
    account_choices: Vec<String>,
}

impl TerminalDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    fn clear_spinner(&mut self) {
        if let Some(pb) = self.spinner.take() {
            pb.finish_and_clear();
        }
    }
}

impl DisplaySink for TerminalDisplay {
    fn append_line(&mut self, text: &str) {
        let rendered = if text.starts_with("[ERROR]") {
            text.red().to_string()
        } else if text.starts_with("== ") {
            text.bold().to_string()
        } else {
            text.to_string()
        };

        match &self.spinner {
            Some(pb) => pb.println(rendered),
            None => println!("{}", rendered),
        }
    }

    fn set_status(&mut self, text: &str) {
        self.status = text.to_string();
        if text == STATUS_READY {
            self.clear_spinner();
            return;
        }

        let pb = self.spinner.take().unwrap_or_else(ProgressBar::new_spinner);
        pb.set_message(text.to_string());
        pb.enable_steady_tick(Duration::from_millis(100));
        if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
            pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
        }
        self.spinner = Some(pb);
    }

    fn show_error_dialog(&mut self, title: &str, text: &str) {
        self.clear_spinner();
        eprintln!();
        eprintln!("{}", format!("[{}]", title).red().bold());
        for line in text.lines() {
            eprintln!("  {}", line);
        }
        // blocks until acknowledged
        let _ = Select::new()
            .with_prompt(title)
            .items(&["OK"])
            .default(0)
            .interact_opt();
    }

    fn set_account_choices(&mut self, labels: &[String]) {
        self.account_choices = labels.to_vec();
    }

    fn choose_account(&mut self, current: usize) -> Option<usize> {
        if self.account_choices.is_empty() {
            return None;
        }

        Select::new()
            .with_prompt("Selected account")
            .items(&self.account_choices)
            .default(current.min(self.account_choices.len() - 1))
            .interact_opt()
            .ok()
            .flatten()
    }
}

/// Reads tokens from the terminal, hidden while masked.
#[derive(Debug, Default)]
pub struct TerminalSecretInput;

impl SecretInput for TerminalSecretInput {
    fn read_secret(&mut self, category: TokenCategory, masked: bool) -> Option<String> {
        let prompt = format!("{} token value", category);
        let value = if masked {
            Password::new()
                .with_prompt(prompt)
                .allow_empty_password(true)
                .interact()
        } else {
            Input::<String>::new()
                .with_prompt(prompt)
                .allow_empty(true)
                .interact_text()
        };
        value.ok()
    }
}
