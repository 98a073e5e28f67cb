use crate::types::{Account, Member, ResultInfo, TokenStatus, UserGroup};

const MISSING: &str = "(none)";

pub fn token_status(status: Option<&TokenStatus>) -> String {
    let state = status
        .and_then(|s| s.status.as_deref())
        .unwrap_or("unknown");
    let name = status.and_then(|s| s.name.as_deref()).unwrap_or("");

    let mut out = format!("Token status: {}\nToken name: {}", state, name);
    if let Some(expires) = status.and_then(|s| s.expires_on) {
        out.push_str(&format!("\nToken expires: {}", expires.to_rfc3339()));
    }
    out
}

pub fn accounts(accounts: &[Account]) -> String {
    if accounts.is_empty() {
        return "No accounts returned.".to_string();
    }

    let mut lines = vec!["Accounts:".to_string()];
    lines.extend(
        accounts
            .iter()
            .map(|a| format!("- {} | id={}", a.name, a.id)),
    );
    lines.join("\n")
}

pub fn members(members: &[Member]) -> String {
    if members.is_empty() {
        return "No members returned.".to_string();
    }

    let mut lines = vec!["Members:".to_string()];
    lines.extend(members.iter().map(|m| {
        let email = m
            .user
            .as_ref()
            .and_then(|u| u.email.as_deref())
            .unwrap_or("(no email)");
        format!(
            "- {} | status={} | member_id={}",
            email,
            m.status.as_deref().unwrap_or(MISSING),
            m.id.as_deref().unwrap_or(MISSING)
        )
    }));
    lines.join("\n")
}

pub fn user_groups(groups: &[UserGroup]) -> String {
    if groups.is_empty() {
        return "No IAM user groups returned (or none exist).".to_string();
    }

    let mut lines = vec!["IAM User Groups:".to_string()];
    lines.extend(groups.iter().map(|g| {
        format!(
            "- {} | id={}",
            g.name.as_deref().unwrap_or(MISSING),
            g.id.as_deref().unwrap_or(MISSING)
        )
    }));
    lines.join("\n")
}

/// Notes that only the first page was fetched when the provider reports more.
pub fn page_note(info: Option<&ResultInfo>, returned: usize) -> Option<String> {
    let total = info?.total_count?;
    if total > returned as u64 {
        Some(format!(
            "Showing {} of {} (first page only).",
            returned, total
        ))
    } else {
        None
    }
}
