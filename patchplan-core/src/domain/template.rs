//! Job template domain types
//!
//! The scheduler drives a fixed set of remote-execution templates, resolved
//! by name from the server's template list before any host is touched.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Template that installs a list of errata on a host
pub const ERRATA_TEMPLATE: &str = "Install Errata - Katello SSH Default";
/// Template that performs power actions (used here for reboots)
pub const POWER_TEMPLATE: &str = "Power Action - SSH Default";
/// Template that runs an arbitrary command; resolved alongside the others
/// but never scheduled by this tool
pub const COMMAND_TEMPLATE: &str = "Run Command - SSH Default";

/// A remote-execution job template on the patch server
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobTemplate {
    pub id: u32,
    pub name: String,
}

/// The fixed templates the scheduler needs, resolved to their server ids
#[derive(Debug, Clone)]
pub struct TemplateSet {
    pub errata: JobTemplate,
    pub power: JobTemplate,
    pub command: JobTemplate,
}

/// A required job template was absent from the server's template list
#[derive(Debug, Error, PartialEq, Eq)]
#[error("{0} job template not found")]
pub struct MissingTemplate(pub String);

impl TemplateSet {
    /// Resolve the fixed templates by exact name from a server listing
    ///
    /// Fails with the first missing template's name, checked in the order
    /// errata, power, command. Nothing gets scheduled in that case.
    pub fn resolve(templates: Vec<JobTemplate>) -> Result<TemplateSet, MissingTemplate> {
        let mut errata = None;
        let mut power = None;
        let mut command = None;

        for template in templates {
            match template.name.as_str() {
                ERRATA_TEMPLATE => errata = Some(template),
                POWER_TEMPLATE => power = Some(template),
                COMMAND_TEMPLATE => command = Some(template),
                _ => {}
            }
        }

        Ok(TemplateSet {
            errata: errata.ok_or_else(|| MissingTemplate(ERRATA_TEMPLATE.to_string()))?,
            power: power.ok_or_else(|| MissingTemplate(POWER_TEMPLATE.to_string()))?,
            command: command.ok_or_else(|| MissingTemplate(COMMAND_TEMPLATE.to_string()))?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn template(id: u32, name: &str) -> JobTemplate {
        JobTemplate {
            id,
            name: name.to_string(),
        }
    }

    fn all_templates() -> Vec<JobTemplate> {
        vec![
            template(90, "Puppet Run Once - SSH Default"),
            template(101, ERRATA_TEMPLATE),
            template(102, POWER_TEMPLATE),
            template(103, COMMAND_TEMPLATE),
        ]
    }

    #[test]
    fn test_resolve_maps_ids() {
        let set = TemplateSet::resolve(all_templates()).unwrap();
        assert_eq!(set.errata.id, 101);
        assert_eq!(set.power.id, 102);
        assert_eq!(set.command.id, 103);
    }

    #[test]
    fn test_resolve_missing_errata_template() {
        let templates = vec![template(102, POWER_TEMPLATE), template(103, COMMAND_TEMPLATE)];
        let err = TemplateSet::resolve(templates).unwrap_err();
        assert_eq!(err, MissingTemplate(ERRATA_TEMPLATE.to_string()));
    }

    #[test]
    fn test_resolve_missing_power_template() {
        let templates = vec![template(101, ERRATA_TEMPLATE), template(103, COMMAND_TEMPLATE)];
        let err = TemplateSet::resolve(templates).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Power Action - SSH Default job template not found"
        );
    }

    #[test]
    fn test_resolve_missing_command_template() {
        let templates = vec![template(101, ERRATA_TEMPLATE), template(102, POWER_TEMPLATE)];
        let err = TemplateSet::resolve(templates).unwrap_err();
        assert_eq!(err, MissingTemplate(COMMAND_TEMPLATE.to_string()));
    }

    #[test]
    fn test_resolve_ignores_listing_order() {
        let mut templates = all_templates();
        templates.reverse();
        let set = TemplateSet::resolve(templates).unwrap();
        assert_eq!(set.errata.id, 101);
        assert_eq!(set.power.id, 102);
    }
}
