//! AccessLevel and request literal enums

use serde::{Deserialize, Serialize};

/// Authenticated API namespace
///
/// Selects the URL path prefix. The server decides which operations each
/// namespace permits; nothing is enforced locally beyond routing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum AccessLevel {
    /// `/api/v2` - trading and account operations
    #[default]
    FullAccess,
    /// `/api/v2/ro` - read-only account queries
    ReadOnly,
}

impl AccessLevel {
    /// Path segment appended after the version segment
    pub fn path_suffix(&self) -> &'static str {
        match self {
            Self::FullAccess => "",
            Self::ReadOnly => "/ro",
        }
    }

    /// Returns true for the read-only namespace
    pub fn is_read_only(&self) -> bool {
        matches!(self, Self::ReadOnly)
    }
}

impl std::fmt::Display for AccessLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::FullAccess => write!(f, "full_access"),
            Self::ReadOnly => write!(f, "read_only"),
        }
    }
}

/// Unit an order or quote amount is expressed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AmountType {
    /// Amount is in coins
    Coin,
    /// Amount is in AUD
    Aud,
}

/// Direction of tolerated rate movement for "now" orders
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Direction {
    /// Accept rate moving up
    Up,
    /// Accept rate moving down
    Down,
    /// Accept movement either way
    Both,
}

/// Whether a withdrawal waits for email confirmation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum EmailConfirm {
    /// Send a confirmation email first
    Yes,
    /// Withdraw without confirmation
    #[default]
    No,
}

/// Whether a single-coin balance query reports the available amount
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Availability {
    /// Include available balance
    #[default]
    Yes,
    /// Total balance only
    No,
}

impl Availability {
    /// Value used in the `available` query parameter
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Yes => "yes",
            Self::No => "no",
        }
    }
}
