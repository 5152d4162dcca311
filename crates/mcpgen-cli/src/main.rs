//! mcpgen - MCP Configuration Manager
//!
//! Usage:
//!   mcpgen            # Generate all client configs from the master config
//!   mcpgen --sync     # Same as above
//!   mcpgen --list     # List configured servers

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use mcpgen_core::commands::{ListCommand, SyncCommand, SyncReport, WriteMode};
use mcpgen_core::context::AppContext;
use mcpgen_core::master::{MasterConfig, MasterConfigError};

#[derive(Parser)]
#[command(name = "mcpgen")]
#[command(about = "MCP Configuration Manager", long_about = None)]
#[command(after_help = "Master config location: ~/.ccs/shared/master-config.json\n\n\
To add or modify servers, edit the master-config.json file directly.")]
struct Cli {
    /// Generate all configs (default action)
    #[arg(long)]
    sync: bool,

    /// List all configured servers without writing anything; wins over --sync
    #[arg(long)]
    list: bool,
}

fn main() -> Result<ExitCode> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "error".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let ctx = AppContext::with_defaults()?;
    tracing::debug!(home = %ctx.home_dir().display(), "Resolved home directory");

    Ok(ExitCode::from(run(&cli, &ctx)))
}

const EXIT_SUCCESS: u8 = 0;
const EXIT_FAILURE: u8 = 1;

/// Only an unusable master configuration fails the run.
fn run(cli: &Cli, ctx: &AppContext) -> u8 {
    let master = match ctx.load_master() {
        Ok(master) => master,
        Err(err) => {
            print_load_error(ctx, &err);
            return EXIT_FAILURE;
        }
    };

    if cli.list {
        print!("{}", ListCommand::new().render(&master));
    } else {
        run_sync(ctx, &master);
    }

    EXIT_SUCCESS
}

fn print_load_error(ctx: &AppContext, err: &MasterConfigError) {
    match err {
        MasterConfigError::NotFound { .. } => {
            println!(
                "❌ Error: master-config.json not found at {}",
                ctx.paths().shared_dir().display()
            );
        }
        MasterConfigError::Malformed { source, .. } => {
            println!("❌ Error: Invalid JSON in master-config.json: {source}");
        }
        MasterConfigError::Read { .. } => {
            println!("❌ Error: {err}");
        }
    }
}

fn run_sync(ctx: &AppContext, master: &MasterConfig) {
    println!("🔄 Generating AI CLI configurations...");
    println!();
    println!(
        "📋 Loaded master config with {} servers",
        master.mcp_servers.len()
    );
    println!();

    let report = SyncCommand::from_context(ctx).execute(master);
    print_sync_report(&report);
}

fn print_sync_report(report: &SyncReport) {
    for warning in &report.warnings {
        println!("⚠️ Warning: {warning}");
    }

    for target in &report.targets {
        let label = match target.mode {
            WriteMode::Overwrite => target.label.to_string(),
            WriteMode::Merge => format!("{} (merged)", target.label),
        };
        match &target.error {
            None => println!("✅ {}: {}", label, target.path.display()),
            Some(error) => println!("❌ {}: {} ({})", label, target.path.display(), error),
        }
    }

    println!();
    if report.failed().next().is_none() {
        println!("🎉 All configs generated successfully!");
    } else {
        println!(
            "⚠️ {} of {} configs could not be written",
            report.failed().count(),
            report.targets.len()
        );
    }
    println!();
    println!("Next steps:");
    println!("  - Restart Claude Code / OpenCode / Warp to load new configs");
    println!("  - Verify with: claude mcp list / opencode mcp list");
}
