//! Patchplan CLI
//!
//! One-shot scheduler for patching a host collection: it looks up every
//! pending erratum for the collection's hosts and schedules errata install
//! jobs, plus reboot jobs for the hosts whose updates call for one. Without
//! --apply the run only prints the plan.

mod config;
mod run;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use config::Config;

#[derive(Parser)]
#[command(name = "patchplan")]
#[command(about = "Schedule errata install and reboot jobs for a host collection", long_about = None)]
struct Cli {
    /// Patch server base URL
    #[arg(long, env = "PATCHPLAN_URL", default_value = "https://localhost/")]
    url: String,

    /// Username to authenticate to the API
    #[arg(short, long, env = "PATCHPLAN_USERNAME")]
    username: String,

    /// Password to authenticate to the API
    #[arg(short, long, env = "PATCHPLAN_PASSWORD")]
    password: String,

    /// Organization the hosts are registered under
    #[arg(short, long)]
    organization: String,

    /// Host collection whose members get patched
    #[arg(short = 'c', long)]
    host_collection: String,

    /// Start time for the errata installs, e.g. "2017-11-11 11:11:11"
    #[arg(short = 't', long)]
    apply_time: String,

    /// Start time for the reboots, e.g. "2017-11-11 12:12:12"
    #[arg(short = 'r', long)]
    reboot_time: String,

    /// Schedule the jobs instead of only printing the plan
    #[arg(short, long)]
    apply: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Diagnostics go to stderr; stdout carries the plan
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = Config {
        url: cli.url,
        username: cli.username,
        password: cli.password,
        organization: cli.organization,
        host_collection: cli.host_collection,
        apply_time: cli.apply_time,
        reboot_time: cli.reboot_time,
        do_apply: cli.apply,
    };

    run::run(&config).await
}
