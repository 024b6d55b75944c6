/// A normalized configuration key.
///
/// Hyphens are replaced with underscores so `pre-commit` and `pre_commit`
/// compare equal. Case is preserved.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NormalizedKey(pub(crate) String);

impl NormalizedKey {
    /// Normalize a raw key. Idempotent.
    pub fn new(raw: &str) -> Self {
        NormalizedKey(raw.replace('-', "_"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for NormalizedKey {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for NormalizedKey {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl std::fmt::Display for NormalizedKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
