//! Job invocation payloads
//!
//! Outbound bodies for the remote-execution endpoint, plus the lenient
//! acknowledgement it answers with. Invocations target hosts through a
//! dynamic name query resolved by the server at execution time, not through
//! static host id lists.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Targeting mode that resolves the search query when the job starts
pub const DYNAMIC_QUERY: &str = "dynamic_query";
/// Power action submitted by reboot jobs
pub const REBOOT_ACTION: &str = "restart";

/// Envelope the job-invocation endpoint expects
#[derive(Debug, Clone, Serialize)]
pub struct JobInvocationRequest {
    pub job_invocation: JobInvocation,
}

/// A single remote-execution job to be scheduled
#[derive(Debug, Clone, Serialize)]
pub struct JobInvocation {
    /// Sent as a string; the endpoint also accepts a number
    pub job_template_id: String,
    pub targeting_type: String,
    pub search_query: String,
    /// Template inputs, e.g. `errata` or `action`
    pub inputs: HashMap<String, String>,
    pub scheduling: Scheduling,
}

/// When the job should start
#[derive(Debug, Clone, Serialize)]
pub struct Scheduling {
    pub start_at: String,
}

impl JobInvocationRequest {
    /// Install job covering every pending erratum of one host
    ///
    /// The template's `errata` input is the comma-joined advisory list, in
    /// the order given.
    pub fn errata_install(
        template_id: u32,
        host_name: &str,
        errata_ids: &[&str],
        start_at: &str,
    ) -> Self {
        let mut inputs = HashMap::new();
        inputs.insert("errata".to_string(), errata_ids.join(","));
        Self::build(template_id, host_name, inputs, start_at)
    }

    /// Reboot job for one host
    pub fn reboot(template_id: u32, host_name: &str, start_at: &str) -> Self {
        let mut inputs = HashMap::new();
        inputs.insert("action".to_string(), REBOOT_ACTION.to_string());
        Self::build(template_id, host_name, inputs, start_at)
    }

    fn build(
        template_id: u32,
        host_name: &str,
        inputs: HashMap<String, String>,
        start_at: &str,
    ) -> Self {
        Self {
            job_invocation: JobInvocation {
                job_template_id: template_id.to_string(),
                targeting_type: DYNAMIC_QUERY.to_string(),
                search_query: format!("name = {}", host_name),
                inputs,
                scheduling: Scheduling {
                    start_at: start_at.to_string(),
                },
            },
        }
    }
}

/// Acknowledgement returned when an invocation is created
///
/// Servers differ in how much they echo back, so everything is optional.
#[derive(Debug, Clone, Deserialize)]
pub struct ScheduledJob {
    #[serde(default)]
    pub id: Option<u32>,
    #[serde(default)]
    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_errata_install_payload() {
        let request = JobInvocationRequest::errata_install(
            101,
            "web01.example.com",
            &["RHSA-2017:3071", "RHBA-2017:2930"],
            "2017-11-11 11:11:11",
        );
        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(
            body,
            json!({
                "job_invocation": {
                    "job_template_id": "101",
                    "targeting_type": "dynamic_query",
                    "search_query": "name = web01.example.com",
                    "inputs": {"errata": "RHSA-2017:3071,RHBA-2017:2930"},
                    "scheduling": {"start_at": "2017-11-11 11:11:11"},
                }
            })
        );
    }

    #[test]
    fn test_single_erratum_has_no_trailing_comma() {
        let request = JobInvocationRequest::errata_install(
            101,
            "web01.example.com",
            &["RHSA-2017:3071"],
            "2017-11-11 11:11:11",
        );
        assert_eq!(
            request.job_invocation.inputs.get("errata").map(String::as_str),
            Some("RHSA-2017:3071")
        );
    }

    #[test]
    fn test_reboot_payload() {
        let request =
            JobInvocationRequest::reboot(102, "web01.example.com", "2017-11-11 12:12:12");
        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(
            body,
            json!({
                "job_invocation": {
                    "job_template_id": "102",
                    "targeting_type": "dynamic_query",
                    "search_query": "name = web01.example.com",
                    "inputs": {"action": "restart"},
                    "scheduling": {"start_at": "2017-11-11 12:12:12"},
                }
            })
        );
    }

    #[test]
    fn test_scheduled_job_parses_bare_response() {
        let job: ScheduledJob = serde_json::from_value(json!({})).unwrap();
        assert!(job.id.is_none());
        assert!(job.description.is_none());
    }

    #[test]
    fn test_scheduled_job_parses_echo() {
        let job: ScheduledJob = serde_json::from_value(json!({
            "id": 118,
            "description": "Install errata rhsa-2017:3071, rhba-2017:2930",
            "succeeded": 0,
        }))
        .unwrap();
        assert_eq!(job.id, Some(118));
        assert_eq!(
            job.description.as_deref(),
            Some("Install errata rhsa-2017:3071, rhba-2017:2930")
        );
    }
}
