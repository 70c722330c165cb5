// third-party imports
use memchr::memmem;

// local imports
use crate::error::{Error, Result};
use crate::settings::Settings;

// ---

/// The default wildcard token, matching any sequence of characters.
pub const WILDCARD: &str = "*";

/// Tests whether `subject` matches `pattern` using the default wildcard `*`.
///
/// # Examples
///
/// ```
/// assert!(starglob::matches("foo*bar", "foo and bar"));
/// assert!(starglob::matches("*bar", "foobar"));
/// assert!(!starglob::matches("foo*", "xfoobar"));
/// ```
#[inline]
pub fn matches(pattern: &str, subject: &str) -> bool {
    evaluate(WILDCARD, pattern, subject).0
}

/// Tests whether `subject` matches `pattern` using the default wildcard `*`
/// and reports how many characters of `subject` were consumed by wildcards.
///
/// The difference is measured in characters, not bytes, and is `0` whenever
/// the subject does not match.
///
/// # Examples
///
/// ```
/// use starglob::matches_with_difference;
///
/// assert_eq!(matches_with_difference("foo*", "foobarbaz"), (true, 6));
/// assert_eq!(matches_with_difference("*", "héllo"), (true, 5));
/// assert_eq!(matches_with_difference("foo", "foo"), (true, 0));
/// assert_eq!(matches_with_difference("foo*bar", "barfoo"), (false, 0));
/// ```
#[inline]
pub fn matches_with_difference(pattern: &str, subject: &str) -> (bool, usize) {
    evaluate(WILDCARD, pattern, subject)
}

// ---

/// Matches subjects against patterns using a configurable wildcard token.
///
/// The matcher keeps only the token, patterns are not compiled.
///
/// ```
/// use starglob::Matcher;
///
/// let matcher = Matcher::new("%")?;
/// assert!(matcher.matches("50%", "50 percent"));
/// assert!(matcher.matches("a*b", "a*b"));
/// assert!(!matcher.matches("a*b", "axb"));
/// # Ok::<(), starglob::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matcher {
    wildcard: String,
}

impl Matcher {
    /// Creates a matcher using the given wildcard token.
    ///
    /// Returns [`Error::EmptyWildcard`] if the token is empty.
    pub fn new(wildcard: impl Into<String>) -> Result<Self> {
        let wildcard = wildcard.into();
        if wildcard.is_empty() {
            return Err(Error::EmptyWildcard);
        }
        log::debug!("wildcard matcher uses token {wildcard:?}");
        Ok(Self { wildcard })
    }

    /// Creates a matcher from settings.
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        Self::new(settings.wildcard.as_str())
    }

    /// Returns the wildcard token.
    #[inline]
    pub fn wildcard(&self) -> &str {
        &self.wildcard
    }

    /// Tests whether `subject` matches `pattern`.
    #[inline]
    pub fn matches(&self, pattern: &str, subject: &str) -> bool {
        evaluate(&self.wildcard, pattern, subject).0
    }

    /// Tests whether `subject` matches `pattern` and returns the number of
    /// characters consumed by wildcards, see [`matches_with_difference`].
    #[inline]
    pub fn matches_with_difference(&self, pattern: &str, subject: &str) -> (bool, usize) {
        evaluate(&self.wildcard, pattern, subject)
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self {
            wildcard: WILDCARD.to_owned(),
        }
    }
}

impl TryFrom<&Settings> for Matcher {
    type Error = Error;

    fn try_from(settings: &Settings) -> Result<Self> {
        Self::from_settings(settings)
    }
}

// ---

fn evaluate(wildcard: &str, pattern: &str, subject: &str) -> (bool, usize) {
    if pattern.is_empty() {
        return (subject.is_empty(), 0);
    }

    if pattern == wildcard {
        return (true, subject.chars().count());
    }

    if memmem::find(pattern.as_bytes(), wildcard.as_bytes()).is_none() {
        return (pattern == subject, 0);
    }

    let leading = pattern.starts_with(wildcard);
    let trailing = pattern.ends_with(wildcard);

    let mut difference = subject.chars().count();
    let mut view = subject;

    let mut segments = pattern.split(wildcard);
    let mut segment = segments.next().unwrap_or_default();

    // Every segment but the last one is searched for, `segment` trails by one.
    for (i, next) in segments.enumerate() {
        let position = match memmem::find(view.as_bytes(), segment.as_bytes()) {
            Some(position) if i != 0 || leading || position == 0 => position,
            _ => {
                log::trace!("pattern {pattern:?}: segment {i} {segment:?} not matched in {view:?}");
                return (false, 0);
            }
        };

        difference -= segment.chars().count();
        view = &view[position + segment.len()..];
        segment = next;
    }

    if trailing {
        return (true, difference);
    }

    if !view.ends_with(segment) {
        log::trace!("pattern {pattern:?}: {view:?} does not end with {segment:?}");
        return (false, 0);
    }

    (true, difference - segment.chars().count())
}
