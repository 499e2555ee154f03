//! Audit configuration compiled in from `config/exclusions.toml`.

use std::collections::HashSet;

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};

use crate::core::exclusions::ExclusionList;

const BUILTIN_CONFIG: &str = include_str!("../../config/exclusions.toml");

/// Root marker and intentionally excluded vectors (TOML).
///
/// The list is maintained by hand as vectors are deliberately left unrun.
/// It is not read at runtime from outside the binary.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AuditConfig {
    /// Directory segment that anchors canonical paths (e.g. `eth2.0-spec-tests/`).
    pub root_marker: String,

    pub excluded: Vec<ExclusionGroup>,
}

/// Excluded prefixes sharing one reason.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExclusionGroup {
    pub reason: String,
    pub prefixes: Vec<String>,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            root_marker: "eth2.0-spec-tests/".to_string(),
            excluded: Vec::new(),
        }
    }
}

impl AuditConfig {
    /// Parse and validate the configuration built into the binary.
    pub fn builtin() -> Result<Self> {
        Self::parse(BUILTIN_CONFIG).context("parse builtin exclusions")
    }

    pub fn parse(contents: &str) -> Result<Self> {
        let cfg: AuditConfig = toml::from_str(contents).context("parse audit config toml")?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<()> {
        if self.root_marker.is_empty() {
            return Err(anyhow!("root_marker must be non-empty"));
        }
        let mut seen = HashSet::new();
        for group in &self.excluded {
            if group.reason.trim().is_empty() {
                return Err(anyhow!("excluded group reason must be non-empty"));
            }
            for prefix in &group.prefixes {
                if prefix.is_empty() {
                    return Err(anyhow!("empty prefix in excluded group '{}'", group.reason));
                }
                if !seen.insert(prefix.as_str()) {
                    return Err(anyhow!("duplicate excluded prefix '{prefix}'"));
                }
            }
        }
        Ok(())
    }

    /// Flatten the groups into a single ordered list.
    pub fn exclusion_list(&self) -> ExclusionList {
        ExclusionList::new(
            self.excluded
                .iter()
                .flat_map(|group| group.prefixes.iter().cloned()),
        )
    }
}
