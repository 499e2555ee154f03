//! Coverage audit: load the access log, walk the vectors, reconcile.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::core::reconcile::{Reconciler, Reconciliation};
use crate::io::access_log::load_accessed;
use crate::io::config::AuditConfig;
use crate::io::walk::for_each_file;

/// Verdict of a completed audit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuditOutcome {
    /// Every vector was either accessed or intentionally excluded.
    Clean { passed: usize, excluded: usize },
    /// At least one vector was neither accessed nor excluded.
    Missed {
        passed: usize,
        excluded: usize,
        /// Canonical paths in discovery order.
        missed: Vec<String>,
    },
}

impl AuditOutcome {
    fn from_tally(tally: Reconciliation) -> Self {
        if tally.is_clean() {
            AuditOutcome::Clean {
                passed: tally.passed,
                excluded: tally.excluded,
            }
        } else {
            AuditOutcome::Missed {
                passed: tally.passed,
                excluded: tally.excluded,
                missed: tally.missed,
            }
        }
    }

    /// Line printed when the audit succeeds or fails.
    pub fn summary(&self) -> String {
        match self {
            AuditOutcome::Clean { passed, excluded } => {
                format!("Passed {passed} tests ({excluded} intentionally excluded)")
            }
            AuditOutcome::Missed { missed, .. } => format!("{} missed tests", missed.len()),
        }
    }
}

/// Run the audit for `accessed_log` against every file under `vectors_dir`.
///
/// `on_missed` receives each missed canonical path as soon as it is found.
/// Errors are configuration or input problems (unreadable files, paths
/// without the root marker); missed vectors are reported through
/// [`AuditOutcome::Missed`] instead.
pub fn run_audit<F>(
    accessed_log: &Path,
    vectors_dir: &Path,
    config: &AuditConfig,
    mut on_missed: F,
) -> Result<AuditOutcome>
where
    F: FnMut(&str),
{
    let accessed = load_accessed(accessed_log, &config.root_marker)?;
    let reconciler = Reconciler::new(&config.root_marker, accessed, config.exclusion_list());
    debug!(exclusions = reconciler.exclusions().len(), "reconciling vectors");

    let mut tally = reconciler.tally();
    let files = for_each_file(vectors_dir, |path| {
        let classification = reconciler
            .observe(&mut tally, path, &mut |canonical: &str| {
                debug!(path = canonical, "vector not accessed");
                on_missed(canonical);
            })
            .context("normalize vector path")?;
        debug!(path, ?classification, "classified vector");
        Ok(())
    })?;

    debug_assert_eq!(files, tally.total());
    for prefix in reconciler.unused_exclusions(&tally) {
        info!(prefix, "exclusion matched no vectors");
    }
    info!(
        files,
        passed = tally.passed,
        excluded = tally.excluded,
        missed = tally.missed.len(),
        "audit complete"
    );
    Ok(AuditOutcome::from_tally(tally))
}
