//! Classification of on-disk vectors against the accessed set.
//!
//! Every walked file ends up in exactly one bucket:
//!
//! - **passed**: its canonical path is in the [`AccessedSet`].
//! - **excluded**: not accessed, but prefixed by an [`ExclusionList`] entry.
//! - **missed**: neither.
//!
//! Accessed membership is checked first, so an accessed file under an excluded
//! prefix still counts as passed.

use crate::core::accessed::AccessedSet;
use crate::core::exclusions::ExclusionList;
use crate::core::path::{NormalizeError, normalize};

/// Bucket a single canonical path falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    Passed,
    /// Index into the exclusion list of the first matching prefix.
    Excluded(usize),
    Missed,
}

/// Running tally of a reconciliation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Reconciliation {
    pub passed: usize,
    pub excluded: usize,
    /// Missed canonical paths in discovery order.
    pub missed: Vec<String>,
    exclusion_hits: Vec<usize>,
}

impl Reconciliation {
    pub fn total(&self) -> usize {
        self.passed + self.excluded + self.missed.len()
    }

    pub fn is_clean(&self) -> bool {
        self.missed.is_empty()
    }

    /// Number of files each exclusion entry absorbed, in list order.
    pub fn exclusion_hits(&self) -> &[usize] {
        &self.exclusion_hits
    }
}

/// Classifies walked files against an accessed set and exclusion list.
#[derive(Debug, Clone)]
pub struct Reconciler {
    marker: String,
    accessed: AccessedSet,
    exclusions: ExclusionList,
}

impl Reconciler {
    pub fn new(
        marker: impl Into<String>,
        accessed: AccessedSet,
        exclusions: ExclusionList,
    ) -> Self {
        Self {
            marker: marker.into(),
            accessed,
            exclusions,
        }
    }

    pub fn exclusions(&self) -> &ExclusionList {
        &self.exclusions
    }

    /// Start an empty tally sized for this reconciler's exclusion list.
    pub fn tally(&self) -> Reconciliation {
        Reconciliation {
            exclusion_hits: vec![0; self.exclusions.len()],
            ..Reconciliation::default()
        }
    }

    pub fn classify(&self, canonical: &str) -> Classification {
        if self.accessed.contains(canonical) {
            return Classification::Passed;
        }
        match self.exclusions.position(canonical) {
            Some(index) => Classification::Excluded(index),
            None => Classification::Missed,
        }
    }

    /// Normalize `raw_path`, classify it and record it in `tally`.
    ///
    /// `on_missed` is called with the canonical path as soon as a miss is
    /// recorded.
    pub fn observe<F>(
        &self,
        tally: &mut Reconciliation,
        raw_path: &str,
        on_missed: &mut F,
    ) -> Result<Classification, NormalizeError>
    where
        F: FnMut(&str),
    {
        let canonical = normalize(raw_path, &self.marker)?;
        let classification = self.classify(canonical);
        match classification {
            Classification::Passed => tally.passed += 1,
            Classification::Excluded(index) => {
                tally.excluded += 1;
                if let Some(hits) = tally.exclusion_hits.get_mut(index) {
                    *hits += 1;
                }
            }
            Classification::Missed => {
                on_missed(canonical);
                tally.missed.push(canonical.to_string());
            }
        }
        Ok(classification)
    }

    /// Exclusion prefixes that matched no file in `tally`.
    pub fn unused_exclusions<'a>(&'a self, tally: &'a Reconciliation) -> Vec<&'a str> {
        self.exclusions
            .prefixes()
            .iter()
            .zip(tally.exclusion_hits())
            .filter(|(_, hits)| **hits == 0)
            .map(|(prefix, _)| prefix.as_str())
            .collect()
    }
}
