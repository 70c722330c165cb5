//! Wildcard matching with a single wildcard token.
//!
//! The wildcard (`*` by default) matches any sequence of characters, including
//! an empty one. Besides the match result, [`matches_with_difference`] reports
//! how many characters of the subject were consumed by wildcards.
//!
//! Literal segments are located greedily, leftmost first, without backtracking.

// public modules
pub mod error;
pub mod settings;

// private modules
mod matcher;

// public uses
pub use error::{Error, Result};
pub use matcher::{Matcher, WILDCARD, matches, matches_with_difference};
pub use settings::Settings;
