//! `[person]` configuration: the site author.

use serde::{Deserialize, Serialize};

/// Author identity used in structured data.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonConfig {
    /// Display name.
    pub name: String,

    /// Avatar path relative to the site root (e.g., "/images/avatar.jpg").
    pub avatar: String,
}
