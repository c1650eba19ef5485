//! Command implementations.

pub mod copy;
pub mod disks;
pub mod eip;
pub mod images;
pub mod instances;
pub mod regions;
pub mod snapshots;
pub mod version;

use clap::Args;

/// Optional name filter shared by listing commands.
#[derive(Args, Debug)]
pub struct NameFilterArgs {
    /// Filter by resource name
    #[arg(short = 'n', long)]
    pub name: Option<String>,
}

/// Required resource name.
#[derive(Args, Debug)]
pub struct NameArgs {
    /// Resource name
    #[arg(short = 'n', long)]
    pub name: String,
}

/// Optional elastic IP address filter.
#[derive(Args, Debug)]
pub struct EipFilterArgs {
    /// Filter by elastic IP address
    #[arg(short = 'e', long, alias = "eip_address")]
    pub eip_address: Option<String>,
}

/// Arguments for `create_instance`.
#[derive(Args, Debug)]
pub struct CreateInstanceArgs {
    /// Instance type, e.g. ecs.g6.large
    #[arg(long, alias = "instance_type")]
    pub instance_type: String,

    /// Image to boot from
    #[arg(long, alias = "image_id")]
    pub image_id: String,

    /// Security group for the new instance
    #[arg(long, alias = "security_group_id")]
    pub security_group_id: String,
}

/// Arguments for `copy_image`.
#[derive(Args, Debug)]
pub struct CopyImageArgs {
    /// Image name
    #[arg(short = 'n', long)]
    pub name: String,

    /// Region to copy the image into
    #[arg(long, alias = "destination_region_id")]
    pub destination_region_id: String,
}

/// Arguments for `copy`.
#[derive(Args, Debug)]
pub struct CopyArgs {
    /// Instance name
    #[arg(short = 'n', long)]
    pub name: String,

    /// Raw API parameter overrides, e.g. -p InstanceType=ecs.t5-lc1m1.small
    #[arg(short = 'p', long = "params", value_name = "KEY=VAL", value_parser = parse_key_val)]
    pub params: Vec<(String, String)>,

    /// Delete each source instance once its image is taken
    #[arg(short = 'r', long)]
    pub renew: bool,
}

/// Parse a `KEY=VAL` override into a pair.
fn parse_key_val(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(format!("expected KEY=VAL, got '{raw}'")),
    }
}
