// third-party imports
use serde::{Deserialize, Serialize};

// local imports
use crate::matcher::WILDCARD;

// ---

/// Matcher configuration, usually embedded into an application's settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct Settings {
    /// The token matching any sequence of characters.
    pub wildcard: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            wildcard: WILDCARD.to_owned(),
        }
    }
}
