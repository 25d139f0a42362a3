//! The scheduling run
//!
//! One sequential pass over the target collection: resolve the organization
//! and the job templates, enumerate the hosts, then inspect each host's
//! pending errata and print its slice of the plan. Jobs are only submitted
//! with --apply; a dry run prints the payloads that would have been sent.

use anyhow::{Context, Result, anyhow};
use colored::*;
use tracing::{debug, info};

use patchplan_client::SatelliteClient;
use patchplan_core::domain::errata::Erratum;
use patchplan_core::domain::host::{Host, collection_search};
use patchplan_core::domain::organization::Organization;
use patchplan_core::domain::plan::{HostPlan, PatchPlan, Schedule};
use patchplan_core::domain::template::TemplateSet;
use patchplan_core::dto::invocation::JobInvocationRequest;

use crate::config::Config;

/// Execute one scheduling run
pub async fn run(config: &Config) -> Result<()> {
    let client = SatelliteClient::new(&config.url, &config.username, &config.password)
        .context("Failed to set up the API client")?;

    // The organization is only an existence check; no later request uses
    // its id.
    let orgs = client
        .list_organizations()
        .await
        .context("Failed to fetch organizations")?;
    let org = Organization::find_by_name(&orgs, &config.organization)
        .ok_or_else(|| anyhow!("Organization {} does not exist", config.organization))?;
    info!("Resolved organization {} (id {})", org.name, org.id);

    let templates = TemplateSet::resolve(
        client
            .list_job_templates()
            .await
            .context("Failed to fetch job templates")?,
    )?;
    info!(
        "Resolved job templates: errata {}, power {}, command {}",
        templates.errata.id, templates.power.id, templates.command.id
    );

    let search = collection_search(&config.host_collection);
    debug!("Host search: {}", search);
    let hosts = client
        .search_hosts(&search)
        .await
        .context("Failed to fetch hosts")?;

    if hosts.is_empty() {
        println!("{}", "No hosts found.".yellow());
    } else {
        println!(
            "{}",
            format!(
                "Found {} host(s) in collection {}:",
                hosts.len(),
                config.host_collection
            )
            .bold()
        );
        println!();
    }

    let schedule = config.schedule();
    let mut plan = PatchPlan::default();

    for host in hosts {
        let host_plan = process_host(&client, config, &templates, &schedule, host).await?;
        plan.push(host_plan);
    }

    print_summary(&plan, config);

    Ok(())
}

/// Inspect one host's pending errata and handle its job invocations
async fn process_host(
    client: &SatelliteClient,
    config: &Config,
    templates: &TemplateSet,
    schedule: &Schedule,
    host: Host,
) -> Result<HostPlan> {
    let errata = client
        .host_errata(host.id)
        .await
        .with_context(|| format!("Failed to fetch errata for host {}", host.name))?;
    let host_plan = HostPlan::new(host, errata);
    let name = host_plan.host.name.as_str();

    if host_plan.has_errata() {
        println!(
            "{}: Schedule errata install at {} for erratas: {}",
            name.bold(),
            schedule.apply_at,
            host_plan.errata_ids().join(", ").cyan()
        );
        for erratum in &host_plan.errata {
            println!("    {}", erratum_line(erratum).dimmed());
        }
        let request = JobInvocationRequest::errata_install(
            templates.errata.id,
            name,
            &host_plan.errata_ids(),
            &schedule.apply_at,
        );
        dispatch(client, config, name, &request).await?;
    } else {
        println!("{}: {}", name.bold(), "No erratas available".yellow());
    }

    if host_plan.reboot_suggested {
        println!("{}: Schedule reboot at {}", name.bold(), schedule.reboot_at);
        let request = JobInvocationRequest::reboot(templates.power.id, name, &schedule.reboot_at);
        dispatch(client, config, name, &request).await?;
    }

    Ok(host_plan)
}

/// Submit one invocation, or print its payload on a dry run
async fn dispatch(
    client: &SatelliteClient,
    config: &Config,
    host_name: &str,
    request: &JobInvocationRequest,
) -> Result<()> {
    if !config.do_apply {
        print_payload(request);
        return Ok(());
    }

    let job = client
        .schedule_job(request)
        .await
        .with_context(|| format!("Failed to schedule job for host {}", host_name))?;
    match job.id {
        Some(id) => println!("    {}", format!("✓ Scheduled job invocation {}", id).green()),
        None => println!("    {}", "✓ Scheduled job invocation".green()),
    }

    Ok(())
}

/// One detail line per erratum: id, classification, title, reboot marker
fn erratum_line(erratum: &Erratum) -> String {
    let mut line = format!("{}  {}", erratum.errata_id, erratum.kind());
    if let Some(title) = &erratum.title {
        line.push_str("  ");
        line.push_str(title);
    }
    if erratum.reboot_suggested {
        line.push_str("  (reboot suggested)");
    }
    line
}

/// Print the payload a dry run would have submitted
fn print_payload(request: &JobInvocationRequest) {
    match serde_json::to_string_pretty(request) {
        Ok(json) => {
            for line in json.lines() {
                println!("      {}", line.dimmed());
            }
        }
        Err(_) => println!("      {}", "<unprintable payload>".dimmed()),
    }
}

/// Print the aggregate counts and, on a dry run, the reminder
fn print_summary(plan: &PatchPlan, config: &Config) {
    println!();
    println!(
        "{}",
        format!(
            "Plan: {} host(s), {} errata install job(s), {} reboot job(s)",
            plan.hosts.len(),
            plan.install_jobs(),
            plan.reboot_jobs()
        )
        .bold()
    );

    if config.do_apply {
        println!(
            "{}",
            format!("✓ {} job invocation(s) scheduled", plan.job_count())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            "Dry run: nothing was scheduled. Re-run with --apply to submit the plan.".yellow()
        );
    }
}
