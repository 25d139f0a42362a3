//! Errata domain types

use serde::{Deserialize, Serialize};

/// A pending advisory reported for a single host
///
/// Only `errata_id` and `reboot_suggested` drive scheduling decisions. The
/// descriptive fields feed the plan output and may be absent or empty
/// depending on the server version.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Erratum {
    /// Advisory identifier, e.g. "RHSA-2017:3071"
    pub errata_id: String,
    /// Whether installing this advisory calls for a reboot
    #[serde(default)]
    pub reboot_suggested: bool,
    #[serde(default)]
    pub title: Option<String>,
    /// "security", "bugfix" or "enhancement"
    #[serde(rename = "type", default)]
    pub errata_type: Option<String>,
    #[serde(default)]
    pub severity: Option<String>,
}

impl Erratum {
    /// Short classification for display, e.g. "security/Important"
    pub fn kind(&self) -> String {
        match (&self.errata_type, &self.severity) {
            (Some(kind), Some(severity)) if !severity.is_empty() => {
                format!("{}/{}", kind, severity)
            }
            (Some(kind), _) => kind.clone(),
            (None, Some(severity)) if !severity.is_empty() => severity.clone(),
            _ => "unclassified".to_string(),
        }
    }
}
