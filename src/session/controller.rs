use std::future::Future;

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::{
    cloudflare::{ClientSettings, CloudflareClient},
    error::{ClientError, ClientResult},
    session::{
        AccountSelection, TokenVault,
        display::{DisplaySink, SecretInput},
        format,
    },
    types::{Account, Envelope, Member, Page, TokenCategory, TokenStatus, UserGroup},
};

pub const STATUS_READY: &str = "Ready.";

/// User-triggered actions that reach the network.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    VerifyToken,
    ListAccounts,
    ListMembers,
    ListUserGroups,
}

impl Action {
    pub const ALL: [Action; 4] = [
        Action::VerifyToken,
        Action::ListAccounts,
        Action::ListMembers,
        Action::ListUserGroups,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Action::VerifyToken => "Verify Token",
            Action::ListAccounts => "List Accounts",
            Action::ListMembers => "List Members",
            Action::ListUserGroups => "List IAM User Groups",
        }
    }
}

/// Successful result of an action, carrying the full envelope.
#[derive(Debug)]
pub enum Outcome {
    Verified(Envelope<TokenStatus>),
    Accounts(Envelope<Vec<Account>>),
    Members(Envelope<Vec<Member>>),
    UserGroups(Envelope<Vec<UserGroup>>),
}

/// Message sent from a worker back to the interactive loop.
#[derive(Debug)]
pub struct ActionEvent {
    pub action: Action,
    pub result: ClientResult<Outcome>,
}

enum Call {
    Verify,
    Accounts(Page),
    Members(String, Page),
    UserGroups(String, Page),
}

async fn execute(client: CloudflareClient, call: Call) -> ClientResult<Outcome> {
    match call {
        Call::Verify => client.verify_token().await.map(Outcome::Verified),
        Call::Accounts(page) => client.list_accounts(page).await.map(Outcome::Accounts),
        Call::Members(account_id, page) => client
            .list_members(&account_id, page)
            .await
            .map(Outcome::Members),
        Call::UserGroups(account_id, page) => client
            .list_user_groups(&account_id, page)
            .await
            .map(Outcome::UserGroups),
    }
}

/// Runs `work` on its own task and sends its single event on `tx`.
///
/// A worker that panics is reported as a `Worker` error so the interactive
/// side always gets the event it waits for.
fn spawn_worker<F>(tx: UnboundedSender<ActionEvent>, action: Action, work: F)
where
    F: Future<Output = ClientResult<Outcome>> + Send + 'static,
{
    tokio::spawn(async move {
        let result = match tokio::spawn(work).await {
            Ok(result) => result,
            Err(e) => Err(ClientError::Worker(e.to_string())),
        };
        // the receiver only goes away with the controller
        let _ = tx.send(ActionEvent { action, result });
    });
}

/// Session state machine: `Idle -> Running(action) -> Idle`.
///
/// The controller lives on the interactive side together with its display.
/// Each dispatched action yields exactly one [`ActionEvent`] on the internal
/// channel; workers only ever hold a sender.
pub struct Controller<D: DisplaySink> {
    settings: ClientSettings,
    tokens: TokenVault,
    accounts: AccountSelection,
    display: D,
    running: Option<Action>,
    events_tx: UnboundedSender<ActionEvent>,
    events_rx: UnboundedReceiver<ActionEvent>,
}

impl<D: DisplaySink> Controller<D> {
    pub fn new(settings: ClientSettings, display: D) -> Self {
        Self::with_session(settings, display, TokenVault::new(), AccountSelection::default())
    }

    pub fn with_session(
        settings: ClientSettings,
        mut display: D,
        tokens: TokenVault,
        accounts: AccountSelection,
    ) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        display.set_status(STATUS_READY);
        Controller {
            settings,
            tokens,
            accounts,
            display,
            running: None,
            events_tx,
            events_rx,
        }
    }

    pub fn settings(&self) -> &ClientSettings {
        &self.settings
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn display_mut(&mut self) -> &mut D {
        &mut self.display
    }

    pub fn tokens(&self) -> &TokenVault {
        &self.tokens
    }

    pub fn tokens_mut(&mut self) -> &mut TokenVault {
        &mut self.tokens
    }

    pub fn accounts(&self) -> &AccountSelection {
        &self.accounts
    }

    pub fn running(&self) -> Option<Action> {
        self.running
    }

    pub fn is_busy(&self) -> bool {
        self.running.is_some()
    }

    pub fn select_category(&mut self, category: TokenCategory) {
        self.tokens.select(category);
    }

    /// Reads a new token for the active category into the entry.
    pub fn edit_token<I: SecretInput>(&mut self, input: &mut I) -> bool {
        let category = self.tokens.active();
        match input.read_secret(category, self.tokens.is_masked()) {
            Some(token) => {
                self.tokens.set_entry(&token);
                self.tokens.commit_entry();
                true
            }
            None => false,
        }
    }

    /// Selects the account at `index` and reports it; no-op when out of range.
    pub fn select_account(&mut self, index: usize) -> Option<String> {
        let id = self.accounts.select(index)?.to_string();
        self.display
            .append_line(&format!("Selected account_id = {}", id));
        Some(id)
    }

    /// Asks the display for an account and selects it.
    pub fn choose_account(&mut self) -> Option<String> {
        if self.accounts.is_empty() {
            return None;
        }
        let current = self.accounts.selected_index().unwrap_or(0);
        let index = self.display.choose_account(current)?;
        self.select_account(index)
    }

    /// Starts `action`.
    ///
    /// Local preconditions are checked before anything is spawned; a failed
    /// check is still delivered as the action's single event.
    ///
    /// # Errors
    ///
    /// `Busy` if another action has not been applied yet. Nothing is rendered
    /// in that case.
    pub fn dispatch(&mut self, action: Action) -> ClientResult<()> {
        if let Some(running) = self.running {
            return Err(ClientError::Busy(running.label().to_string()));
        }

        self.running = Some(action);
        self.display
            .set_status(&format!("{}...", action.label()));
        self.display.append_line("");
        self.display
            .append_line(&format!("== {} ==", action.label()));

        let tx = self.events_tx.clone();
        match self.prepare(action) {
            Ok((client, call)) => spawn_worker(tx, action, execute(client, call)),
            Err(e) => {
                let _ = tx.send(ActionEvent {
                    action,
                    result: Err(e),
                });
            }
        }

        Ok(())
    }

    fn prepare(&mut self, action: Action) -> ClientResult<(CloudflareClient, Call)> {
        let page = self.settings.first_page();
        let call = match action {
            Action::VerifyToken => Call::Verify,
            Action::ListAccounts => Call::Accounts(page),
            Action::ListMembers => Call::Members(self.accounts.require_selected()?, page),
            Action::ListUserGroups => Call::UserGroups(self.accounts.require_selected()?, page),
        };

        let token = self.tokens.active_token()?;
        let client = CloudflareClient::new(&self.settings, &token)?;
        Ok((client, call))
    }

    /// Waits for the next worker event.
    pub async fn next_event(&mut self) -> Option<ActionEvent> {
        self.events_rx.recv().await
    }

    /// Renders an event and returns the controller to idle.
    pub fn apply(&mut self, event: ActionEvent) {
        self.running = None;
        self.display.set_status(STATUS_READY);

        match event.result {
            Ok(outcome) => self.apply_outcome(outcome),
            Err(e) => {
                let label = event.action.label();
                self.display
                    .append_line(&format!("[ERROR] {}: {}", label, e));
                self.display
                    .show_error_dialog("Error", &format!("{} failed:\n\n{}", label, e));
            }
        }
    }

    fn apply_outcome(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Verified(envelope) => {
                self.display
                    .append_line(&format::token_status(envelope.result.as_ref()));
            }
            Outcome::Accounts(envelope) => {
                let accounts = envelope.result.unwrap_or_default();
                let note = format::page_note(envelope.result_info.as_ref(), accounts.len());
                let text = format::accounts(&accounts);

                self.accounts.replace(accounts);
                self.display
                    .set_account_choices(&self.accounts.labels());
                self.display.append_line(&text);
                if let Some(note) = note {
                    self.display.append_line(&note);
                }
                self.select_account(0);
            }
            Outcome::Members(envelope) => {
                let members = envelope.result.unwrap_or_default();
                self.display.append_line(&format::members(&members));
                if let Some(note) = format::page_note(envelope.result_info.as_ref(), members.len())
                {
                    self.display.append_line(&note);
                }
            }
            Outcome::UserGroups(envelope) => {
                let groups = envelope.result.unwrap_or_default();
                self.display.append_line(&format::user_groups(&groups));
                if let Some(note) = format::page_note(envelope.result_info.as_ref(), groups.len()) {
                    self.display.append_line(&note);
                }
            }
        }
    }

    /// Applies events until no action is running.
    pub async fn settle(&mut self) {
        while self.running.is_some() {
            match self.events_rx.recv().await {
                Some(event) => self.apply(event),
                None => break,
            }
        }
    }

    /// Dispatches `action` and waits for its result to be rendered.
    pub async fn run(&mut self, action: Action) -> ClientResult<()> {
        self.dispatch(action)?;
        self.settle().await;
        Ok(())
    }
}
