//! Prefix allow-list of vectors that are intentionally not run.

/// Ordered, immutable list of excluded path prefixes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExclusionList {
    prefixes: Vec<String>,
}

impl ExclusionList {
    pub fn new<I, S>(prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            prefixes: prefixes.into_iter().map(Into::into).collect(),
        }
    }

    /// Index of the first prefix that `canonical` starts with.
    ///
    /// Later entries are not checked once one matches.
    pub fn position(&self, canonical: &str) -> Option<usize> {
        self.prefixes
            .iter()
            .position(|prefix| canonical.starts_with(prefix.as_str()))
    }

    pub fn prefixes(&self) -> &[String] {
        &self.prefixes
    }

    pub fn len(&self) -> usize {
        self.prefixes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prefixes.is_empty()
    }
}
