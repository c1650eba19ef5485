//! Port trait definitions for the Application layer.
//!
//! Ports are the interfaces (contracts) that infrastructure must fulfill.
//! This file imports only from `crate::domain` — never from `crate::infra`,
//! `crate::commands`, or `crate::output`.

use anyhow::Result;

use crate::domain::resources::{
    Disk, EipAddress, EipAllocation, Image, Instance, Region, Snapshot,
};

// ── Query Types ───────────────────────────────────────────────────────────────

/// Server-side instance filter. `instance_ids` is sent as a JSON array
/// string, the shape `DescribeInstances` expects.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstanceQuery {
    pub region_id: String,
    pub instance_name: Option<String>,
    pub instance_ids: Vec<String>,
}

/// Server-side image filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageQuery {
    pub region_id: String,
    pub image_name: Option<String>,
}

/// Server-side snapshot filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SnapshotQuery {
    pub region_id: String,
    pub snapshot_name: Option<String>,
}

/// Server-side disk filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiskQuery {
    pub region_id: String,
    pub disk_name: Option<String>,
}

/// Server-side elastic IP filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EipQuery {
    pub region_id: String,
    pub eip_address: Option<String>,
}

// ── Mutation Parameter Types ──────────────────────────────────────────────────

/// Parameters for `CreateInstance`.
///
/// `overrides` carries raw API parameter pairs (`-p KEY=VAL` on the CLI);
/// they are appended after the derived parameters and win on key collision.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateInstanceParams {
    pub region_id: String,
    pub image_id: String,
    pub instance_type: String,
    pub security_group_id: String,
    pub instance_name: Option<String>,
    pub zone_id: Option<String>,
    pub host_name: Option<String>,
    pub v_switch_id: Option<String>,
    pub description: Option<String>,
    pub system_disk_category: Option<String>,
    pub overrides: Vec<(String, String)>,
}

/// Parameters for `CreateImage`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateImageParams {
    pub region_id: String,
    pub instance_id: String,
    pub image_name: String,
    pub description: String,
}

/// Parameters for `CopyImage`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CopyImageParams {
    pub region_id: String,
    pub image_id: String,
    pub destination_region_id: String,
    pub destination_image_name: String,
    pub destination_description: String,
}

// ── ECS API Port ──────────────────────────────────────────────────────────────

/// The ECS API surface this client consumes — one method per remote
/// operation. The production implementation signs RPC requests over HTTP;
/// tests substitute recording stubs.
#[allow(async_fn_in_trait)]
pub trait EcsApi {
    /// `DescribeRegions` — the only call that takes no region.
    async fn describe_regions(&self) -> Result<Vec<Region>>;

    /// `DescribeInstances` filtered by name and/or IDs.
    async fn describe_instances(&self, query: &InstanceQuery) -> Result<Vec<Instance>>;

    /// `DescribeImages` filtered by name.
    async fn describe_images(&self, query: &ImageQuery) -> Result<Vec<Image>>;

    /// `DescribeSnapshots` filtered by name.
    async fn describe_snapshots(&self, query: &SnapshotQuery) -> Result<Vec<Snapshot>>;

    /// `DescribeDisks` filtered by name.
    async fn describe_disks(&self, query: &DiskQuery) -> Result<Vec<Disk>>;

    /// `DescribeEipAddresses` filtered by address.
    async fn describe_eip_addresses(&self, query: &EipQuery) -> Result<Vec<EipAddress>>;

    /// `CreateInstance` — returns the new `InstanceId`.
    async fn create_instance(&self, params: &CreateInstanceParams) -> Result<String>;

    /// `StartInstance`.
    async fn start_instance(&self, region_id: &str, instance_id: &str) -> Result<()>;

    /// `StopInstance` — only requests the transition; completion is observed
    /// by re-querying.
    async fn stop_instance(&self, region_id: &str, instance_id: &str) -> Result<()>;

    /// `DeleteInstance` — the instance must already be stopped.
    async fn delete_instance(&self, region_id: &str, instance_id: &str) -> Result<()>;

    /// `CreateImage` — returns the new `ImageId`; the image is not usable
    /// until it shows up in `DescribeImages`.
    async fn create_image(&self, params: &CreateImageParams) -> Result<String>;

    /// `CopyImage` — returns the `ImageId` in the destination region.
    async fn copy_image(&self, params: &CopyImageParams) -> Result<String>;

    /// `DeleteImage`.
    async fn delete_image(&self, region_id: &str, image_id: &str) -> Result<()>;

    /// `DeleteSnapshot`.
    async fn delete_snapshot(&self, region_id: &str, snapshot_id: &str) -> Result<()>;

    /// `DeleteDisk`.
    async fn delete_disk(&self, region_id: &str, disk_id: &str) -> Result<()>;

    /// `AllocateEipAddress` — returns the new allocation.
    async fn allocate_eip_address(&self, region_id: &str) -> Result<EipAllocation>;

    /// `AssociateEipAddress` — binds an allocated EIP to an instance.
    async fn associate_eip_address(
        &self,
        region_id: &str,
        allocation_id: &str,
        instance_id: &str,
    ) -> Result<()>;

    /// `ReleaseEipAddress`.
    async fn release_eip_address(&self, region_id: &str, allocation_id: &str) -> Result<()>;
}

// ── Progress Reporting Port ───────────────────────────────────────────────────

/// Abstracts progress reporting so services can emit informational traces
/// without depending on the Presentation layer. Sync trait — no async needed.
pub trait ProgressReporter {
    /// Emit an in-progress step message.
    fn step(&self, message: &str);
    /// Emit a success message.
    fn success(&self, message: &str);
    /// Emit a warning message.
    fn warn(&self, message: &str);
}
