//! Typed ECS resources.
//!
//! Field names map 1:1 onto the wire shapes the ECS API returns (PascalCase
//! on the wire, e.g. `InstanceId`, `AllocationId`, `ZoneId`). These types are
//! read-only snapshots of remote state; the only fields this client ever
//! sends back are the IDs.

use serde::{Deserialize, Serialize};

/// A geographic deployment zone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Region {
    pub region_id: String,
    #[serde(default)]
    pub local_name: String,
}

/// A machine image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Image {
    pub image_id: String,
    pub image_name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub status: String,
}

/// Lifecycle state of an instance as reported by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InstanceStatus {
    Pending,
    Starting,
    Running,
    Stopping,
    Stopped,
    /// Forward compatibility with statuses this client does not know about.
    #[serde(other)]
    Unknown,
}

impl InstanceStatus {
    /// Terminal state for creation and stop waits.
    #[must_use]
    pub fn is_stopped(self) -> bool {
        self == Self::Stopped
    }
}

/// Security group membership of an instance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SecurityGroupIds {
    #[serde(default)]
    pub security_group_id: Vec<String>,
}

/// Private IP addresses of an instance inside its VPC.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct IpAddressSet {
    #[serde(default)]
    pub ip_address: Vec<String>,
}

/// VPC placement of an instance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct VpcAttributes {
    #[serde(default)]
    pub v_switch_id: String,
    #[serde(default)]
    pub private_ip_address: IpAddressSet,
}

/// Elastic IP bound to an instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EipBinding {
    #[serde(default)]
    pub allocation_id: String,
    #[serde(default)]
    pub ip_address: String,
}

/// A virtual machine instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Instance {
    pub instance_id: String,
    pub instance_name: String,
    pub status: InstanceStatus,
    #[serde(default)]
    pub zone_id: String,
    #[serde(default)]
    pub instance_type: String,
    #[serde(default)]
    pub host_name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub security_group_ids: SecurityGroupIds,
    #[serde(default)]
    pub vpc_attributes: VpcAttributes,
    #[serde(default)]
    pub eip_address: Option<EipBinding>,
}

impl Instance {
    /// Allocation ID of the bound elastic IP, if the instance has one.
    ///
    /// The API reports an empty binding object for instances without an EIP,
    /// so an empty `AllocationId` counts as absent.
    #[must_use]
    pub fn eip_allocation_id(&self) -> Option<&str> {
        self.eip_address
            .as_ref()
            .map(|eip| eip.allocation_id.as_str())
            .filter(|id| !id.is_empty())
    }
}

/// A disk snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Snapshot {
    pub snapshot_id: String,
    pub snapshot_name: String,
    #[serde(default)]
    pub status: String,
}

/// A cloud disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Disk {
    pub disk_id: String,
    pub disk_name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub size: u32,
}

/// A standalone elastic IP address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EipAddress {
    pub allocation_id: String,
    pub ip_address: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub instance_id: String,
}

/// Result of allocating a fresh elastic IP.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EipAllocation {
    pub allocation_id: String,
    pub eip_address: String,
}
