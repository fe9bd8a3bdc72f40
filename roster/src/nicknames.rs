//! Per-match nickname configuration

use serde::{Deserialize, Serialize};

/// Nicknames registered for each side of a match.
///
/// Order matters: within a side, earlier names are checked first, and the
/// "mine" list is always consulted before "opponent". An empty set is
/// valid and simply matches nothing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NicknameSet {
    pub mine: Vec<String>,
    pub opponent: Vec<String>,
}

impl NicknameSet {
    pub fn new(mine: Vec<String>, opponent: Vec<String>) -> Self {
        NicknameSet { mine, opponent }
    }

    /// Build from two free-form form fields, one per side.
    pub fn from_fields(mine: &str, opponent: &str) -> Self {
        NicknameSet {
            mine: split_name_field(mine),
            opponent: split_name_field(opponent),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.mine.is_empty() && self.opponent.is_empty()
    }
}

/// Split a free-form nickname field on newlines and commas, trimming each
/// entry and dropping blanks.
pub fn split_name_field(field: &str) -> Vec<String> {
    field
        .split(['\n', ','])
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(str::to_string)
        .collect()
}
