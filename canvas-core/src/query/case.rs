/// A request token folded to lowercase once, then compared against many
/// stored values that are folded the same way.
///
/// Folding is plain Unicode lowercasing with no locale rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseFolded(String);

impl CaseFolded {
    pub fn new(token: &str) -> Self {
        Self(token.to_lowercase())
    }

    /// `true` when the token occurs anywhere in `haystack`.
    pub fn is_contained_in(&self, haystack: &str) -> bool {
        haystack.to_lowercase().contains(&self.0)
    }

    /// `true` when `other` is the same text ignoring case.
    pub fn matches_exactly(&self, other: &str) -> bool {
        other.to_lowercase() == self.0
    }
}
