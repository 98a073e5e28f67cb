use dialoguer::Select;

use crate::{
    cli::{TerminalDisplay, TerminalSecretInput},
    cloudflare::ClientSettings,
    info,
    session::{AccountSelection, Action, Controller, SecretInput, TokenVault},
    success,
    types::TokenCategory,
    warning,
};

#[derive(Debug, Clone, Copy)]
enum MenuItem {
    TokenType,
    EditToken,
    ToggleShow,
    Run(Action),
    SelectAccount,
    Exit,
}

const MENU: [MenuItem; 9] = [
    MenuItem::TokenType,
    MenuItem::EditToken,
    MenuItem::ToggleShow,
    MenuItem::Run(Action::VerifyToken),
    MenuItem::Run(Action::ListAccounts),
    MenuItem::SelectAccount,
    MenuItem::Run(Action::ListMembers),
    MenuItem::Run(Action::ListUserGroups),
    MenuItem::Exit,
];

impl MenuItem {
    fn label(&self, controller: &Controller<TerminalDisplay>) -> String {
        let tokens = controller.tokens();
        match self {
            MenuItem::TokenType => format!("Token type: {}", tokens.active()),
            MenuItem::EditToken => "Token value".to_string(),
            MenuItem::ToggleShow => {
                if tokens.is_masked() {
                    "Show token".to_string()
                } else {
                    "Hide token".to_string()
                }
            }
            MenuItem::Run(action) => action.label().to_string(),
            MenuItem::SelectAccount => {
                format!("Select account ({} listed)", controller.accounts().accounts().len())
            }
            MenuItem::Exit => "Exit".to_string(),
        }
    }
}

/// Runs the interactive explorer session.
///
/// Asks for the initial `Account Read` token first, then loops over the
/// action menu until the user exits. The menu is not shown while an action
/// runs, so actions never overlap.
///
/// # Arguments
///
/// * `settings` - Connection settings used for every API call
/// * `account` - Optional account id selected before any listing
/// * `show_token` - Start with the token entry unmasked
pub async fn session(settings: ClientSettings, account: Option<String>, show_token: bool) {
    info!("Cloudflare IAM Explorer ({})", settings.base_url);
    info!("Paste an {} token or leave it empty.", TokenCategory::AccountRead);

    let mut input = TerminalSecretInput;
    let initial = input
        .read_secret(TokenCategory::AccountRead, !show_token)
        .unwrap_or_default();

    let mut tokens = TokenVault::with_initial_token(&initial);
    if show_token {
        tokens.toggle_masked();
    }

    let mut controller = Controller::with_session(
        settings,
        TerminalDisplay::new(),
        tokens,
        AccountSelection::new(account),
    );

    loop {
        print_header(&controller);

        let labels: Vec<String> = MENU.iter().map(|m| m.label(&controller)).collect();
        let choice = match Select::new()
            .with_prompt("Action")
            .items(&labels)
            .default(0)
            .interact_opt()
        {
            Ok(Some(index)) => MENU[index],
            Ok(None) | Err(_) => break,
        };

        match choice {
            MenuItem::TokenType => {
                if let Some(category) = choose_category(controller.tokens().active()) {
                    controller.select_category(category);
                }
            }
            MenuItem::EditToken => {
                controller.edit_token(&mut input);
            }
            MenuItem::ToggleShow => {
                controller.tokens_mut().toggle_masked();
            }
            MenuItem::Run(action) => {
                if let Err(e) = controller.dispatch(action) {
                    warning!("{}", e);
                    continue;
                }
                controller.settle().await;
            }
            MenuItem::SelectAccount => {
                if controller.accounts().is_empty() {
                    warning!("No accounts listed yet. Run {} first.", Action::ListAccounts.label());
                    continue;
                }
                controller.choose_account();
            }
            MenuItem::Exit => break,
        }
    }

    success!("Bye.");
}

fn print_header(controller: &Controller<TerminalDisplay>) {
    let tokens = controller.tokens();
    let entry = tokens.display_entry();
    let selected = controller.accounts().selected_id();

    println!();
    info!(
        "Token type: {} | Token value: {} | Selected account: {} | {}",
        tokens.active(),
        if entry.is_empty() { "(empty)" } else { entry.as_str() },
        if selected.is_empty() { "(none)" } else { selected },
        controller.display().status()
    );
}

fn choose_category(current: TokenCategory) -> Option<TokenCategory> {
    let labels: Vec<&str> = TokenCategory::ALL.iter().map(|c| c.label()).collect();
    let default = TokenCategory::ALL
        .iter()
        .position(|c| *c == current)
        .unwrap_or(0);

    Select::new()
        .with_prompt("Token type")
        .items(&labels)
        .default(default)
        .interact_opt()
        .ok()
        .flatten()
        .map(|index| TokenCategory::ALL[index])
}
