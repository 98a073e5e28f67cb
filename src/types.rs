use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::config;

/// Permission scope a pasted token belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TokenCategory {
    #[default]
    AccountRead,
    AccountEdit,
    GroupRead,
    GroupEdit,
}

impl TokenCategory {
    pub const ALL: [TokenCategory; 4] = [
        TokenCategory::AccountRead,
        TokenCategory::AccountEdit,
        TokenCategory::GroupRead,
        TokenCategory::GroupEdit,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            TokenCategory::AccountRead => "Account Read",
            TokenCategory::AccountEdit => "Account Edit",
            TokenCategory::GroupRead => "Group Read",
            TokenCategory::GroupEdit => "Group Edit",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.label() == label)
    }
}

impl fmt::Display for TokenCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Standard Cloudflare response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub success: bool,
    pub result: Option<T>,
    #[serde(default)]
    pub errors: Value,
    #[serde(default)]
    pub messages: Value,
    #[serde(default)]
    pub result_info: Option<ResultInfo>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResultInfo {
    pub page: Option<u64>,
    pub per_page: Option<u64>,
    pub count: Option<u64>,
    pub total_count: Option<u64>,
    pub total_pages: Option<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub page: u32,
    pub per_page: u32,
}

impl Page {
    pub fn first(per_page: u32) -> Self {
        Page { page: 1, per_page }
    }

    pub fn query(&self) -> [(&'static str, String); 2] {
        [
            ("page", self.page.to_string()),
            ("per_page", self.per_page.to_string()),
        ]
    }
}

impl Default for Page {
    fn default() -> Self {
        Page::first(config::DEFAULT_PAGE_SIZE)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub id: String,
    pub name: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Account {
    /// Label shown in the account picker.
    pub fn display_label(&self) -> String {
        format!("{}  ({})", self.name, self.id)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Member {
    pub id: Option<String>,
    pub status: Option<String>,
    #[serde(default)]
    pub user: Option<MemberUser>,
    #[serde(default)]
    pub roles: Vec<MemberRole>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemberUser {
    pub id: Option<String>,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemberRole {
    pub id: Option<String>,
    pub name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserGroup {
    pub id: Option<String>,
    pub name: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenStatus {
    pub id: Option<String>,
    pub status: Option<String>,
    pub name: Option<String>,
    pub not_before: Option<DateTime<Utc>>,
    pub expires_on: Option<DateTime<Utc>>,
}
