//! Per-run plan types
//!
//! A plan is rebuilt from scratch on every run, from the hosts of the target
//! collection and their pending errata. Nothing is persisted between runs.

use serde::{Deserialize, Serialize};

use crate::domain::errata::Erratum;
use crate::domain::host::Host;

/// Start times for the two job kinds, in the "YYYY-MM-DD HH:MM:SS" form the
/// server expects. Passed through verbatim; the server validates them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Schedule {
    pub apply_at: String,
    pub reboot_at: String,
}

/// One host's slice of the plan
#[derive(Debug, Clone)]
pub struct HostPlan {
    pub host: Host,
    /// Pending errata in the order the server returned them
    pub errata: Vec<Erratum>,
    /// True when at least one erratum suggests a reboot
    pub reboot_suggested: bool,
}

impl HostPlan {
    /// Build the plan for one host from its pending errata
    pub fn new(host: Host, errata: Vec<Erratum>) -> Self {
        let reboot_suggested = errata.iter().any(|erratum| erratum.reboot_suggested);
        Self {
            host,
            errata,
            reboot_suggested,
        }
    }

    /// Whether this host gets an errata install job
    pub fn has_errata(&self) -> bool {
        !self.errata.is_empty()
    }

    /// Advisory identifiers in server order
    pub fn errata_ids(&self) -> Vec<&str> {
        self.errata
            .iter()
            .map(|erratum| erratum.errata_id.as_str())
            .collect()
    }
}

/// The whole run's plan, accumulated host by host
#[derive(Debug, Clone, Default)]
pub struct PatchPlan {
    pub hosts: Vec<HostPlan>,
}

impl PatchPlan {
    pub fn push(&mut self, host_plan: HostPlan) {
        self.hosts.push(host_plan);
    }

    /// Hosts that get an errata install job
    pub fn install_jobs(&self) -> usize {
        self.hosts.iter().filter(|plan| plan.has_errata()).count()
    }

    /// Hosts that get a reboot job
    pub fn reboot_jobs(&self) -> usize {
        self.hosts.iter().filter(|plan| plan.reboot_suggested).count()
    }

    /// Total job invocations the plan produces
    pub fn job_count(&self) -> usize {
        self.install_jobs() + self.reboot_jobs()
    }
}
