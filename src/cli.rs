//! CLI argument parsing with clap derive.
//!
//! Subcommand names keep the snake_case surface the tool has always had
//! (`eip_addresses`, `stop_instance`, …); multi-word flags additionally
//! accept their underscore spellings (`--instance_type`) as hidden aliases.

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::app::{AppContext, AppFlags};
use crate::commands;

/// Aliyun ECS command-line client
#[derive(Parser, Debug)]
#[command(
    name = "ecsx",
    version,
    disable_version_flag = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Skip confirmation prompts
    #[arg(short = 'y', long, global = true)]
    pub yes: bool,

    /// Print version
    #[arg(short = 'v', long = "version", action = clap::ArgAction::Version)]
    #[allow(dead_code)] // set by clap, acted on during parsing
    version: Option<bool>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
#[command(rename_all = "snake_case")]
pub enum Command {
    /// List regions
    Regions,

    /// List images
    Images(commands::NameFilterArgs),

    /// List instances
    Instances(commands::NameFilterArgs),

    /// List snapshots
    Snapshots(commands::NameArgs),

    /// List disks
    Disks(commands::NameFilterArgs),

    /// List elastic IP addresses
    EipAddresses(commands::EipFilterArgs),

    /// Release elastic IP addresses
    ReleaseEipAddresses(commands::EipFilterArgs),

    /// Create an instance
    CreateInstance(commands::CreateInstanceArgs),

    /// Create an image from each instance matching a name
    CreateImage(commands::NameArgs),

    /// Copy images to another region
    CopyImage(commands::CopyImageArgs),

    /// Clone instances via a fresh image
    Copy(commands::CopyArgs),

    /// Delete images by name
    DeleteImage(commands::NameArgs),

    /// Delete snapshots by name
    DeleteSnapshot(commands::NameArgs),

    /// Delete disks by name
    DeleteDisk(commands::NameArgs),

    /// Delete instances by name
    DeleteInstance(commands::NameArgs),

    /// Stop instances by name
    StopInstance(commands::NameArgs),

    /// Show version
    Version,
}

impl Cli {
    /// Execute the CLI command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be resolved or the command
    /// fails.
    pub async fn run(self) -> Result<()> {
        let Cli {
            json,
            quiet,
            no_color,
            yes,
            command,
            ..
        } = self;

        // `version` needs neither credentials nor a region.
        if matches!(command, Command::Version) {
            commands::version::run(json);
            return Ok(());
        }

        let app = AppContext::new(&AppFlags {
            quiet,
            no_color,
            yes,
        })?;

        match command {
            Command::Regions => commands::regions::run(&app).await,
            Command::Images(args) => commands::images::list(&app, &args).await,
            Command::Instances(args) => commands::instances::list(&app, &args).await,
            Command::Snapshots(args) => commands::snapshots::list(&app, &args).await,
            Command::Disks(args) => commands::disks::list(&app, &args).await,
            Command::EipAddresses(args) => commands::eip::list(&app, &args).await,
            Command::ReleaseEipAddresses(args) => commands::eip::release(&app, &args).await,
            Command::CreateInstance(args) => commands::instances::create(&app, &args).await,
            Command::CreateImage(args) => commands::images::create(&app, &args).await,
            Command::CopyImage(args) => commands::images::copy(&app, &args).await,
            Command::Copy(args) => commands::copy::run(&app, &args).await,
            Command::DeleteImage(args) => commands::images::delete(&app, &args).await,
            Command::DeleteSnapshot(args) => commands::snapshots::delete(&app, &args).await,
            Command::DeleteDisk(args) => commands::disks::delete(&app, &args).await,
            Command::DeleteInstance(args) => commands::instances::delete(&app, &args).await,
            Command::StopInstance(args) => commands::instances::stop(&app, &args).await,
            Command::Version => Ok(()), // handled above
        }
    }
}
