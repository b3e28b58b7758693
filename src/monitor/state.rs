use std::collections::HashMap;

/// Last-seen headline per symbol.
///
/// Dedup is by exact string equality, per symbol only. The map lives for the
/// process lifetime and is never persisted.
#[derive(Debug, Default)]
pub struct NewsState {
    seen: HashMap<String, String>,
}

impl NewsState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `headline` for `symbol`.
    ///
    /// Returns `true` when the headline is new for this symbol (nothing
    /// stored yet, or a different string), in which case the stored value is
    /// replaced.
    pub fn observe(&mut self, symbol: &str, headline: &str) -> bool {
        match self.seen.get(symbol) {
            Some(prev) if prev == headline => false,
            _ => {
                self.seen.insert(symbol.to_owned(), headline.to_owned());
                true
            }
        }
    }

    /// The headline most recently recorded for `symbol`, if any.
    #[must_use]
    pub fn last_headline(&self, symbol: &str) -> Option<&str> {
        self.seen.get(symbol).map(String::as_str)
    }
}
