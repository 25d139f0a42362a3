//! Configuration module
//!
//! Everything a run needs, resolved from the command line up front and
//! handed explicitly to the run flow.

use patchplan_core::domain::plan::Schedule;

/// CLI configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the patch server
    pub url: String,
    /// Basic-auth username
    pub username: String,
    /// Basic-auth password
    pub password: String,
    /// Organization expected to exist on the server
    pub organization: String,
    /// Host collection whose members get patched
    pub host_collection: String,
    /// Start time for the errata install jobs, passed to the server unparsed
    pub apply_time: String,
    /// Start time for the reboot jobs, passed to the server unparsed
    pub reboot_time: String,
    /// Submit the jobs instead of only printing the plan
    pub do_apply: bool,
}

impl Config {
    /// The schedule slice of the configuration
    pub fn schedule(&self) -> Schedule {
        Schedule {
            apply_at: self.apply_time.clone(),
            reboot_at: self.reboot_time.clone(),
        }
    }
}
