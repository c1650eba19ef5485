//! Resource accessors — list remote resources with optional server-side
//! filters. Every query carries the configured region.

use anyhow::Result;

use super::Ecs;
use crate::application::ports::{
    DiskQuery, EcsApi, EipQuery, ImageQuery, InstanceQuery, SnapshotQuery,
};
use crate::domain::resources::{Disk, EipAddress, Image, Instance, Region, Snapshot};

impl<A: EcsApi> Ecs<A> {
    /// List all regions.
    ///
    /// # Errors
    ///
    /// Returns an error if the API call fails.
    pub async fn regions(&self) -> Result<Vec<Region>> {
        self.api.describe_regions().await
    }

    /// List images, optionally filtered by name.
    ///
    /// # Errors
    ///
    /// Returns an error if the API call fails.
    pub async fn images(&self, name: Option<&str>) -> Result<Vec<Image>> {
        let query = ImageQuery {
            region_id: self.region.clone(),
            image_name: name.map(str::to_string),
        };
        self.api.describe_images(&query).await
    }

    /// List instances, optionally filtered by name.
    ///
    /// # Errors
    ///
    /// Returns an error if the API call fails.
    pub async fn instances(&self, name: Option<&str>) -> Result<Vec<Instance>> {
        let query = InstanceQuery {
            region_id: self.region.clone(),
            instance_name: name.map(str::to_string),
            instance_ids: Vec::new(),
        };
        self.api.describe_instances(&query).await
    }

    /// Look up a single instance by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the API call fails.
    pub async fn instance_by_id(&self, instance_id: &str) -> Result<Option<Instance>> {
        let query = InstanceQuery {
            region_id: self.region.clone(),
            instance_name: None,
            instance_ids: vec![instance_id.to_string()],
        };
        Ok(self.api.describe_instances(&query).await?.into_iter().next())
    }

    /// List snapshots, optionally filtered by name.
    ///
    /// # Errors
    ///
    /// Returns an error if the API call fails.
    pub async fn snapshots(&self, name: Option<&str>) -> Result<Vec<Snapshot>> {
        let query = SnapshotQuery {
            region_id: self.region.clone(),
            snapshot_name: name.map(str::to_string),
        };
        self.api.describe_snapshots(&query).await
    }

    /// List disks, optionally filtered by name.
    ///
    /// # Errors
    ///
    /// Returns an error if the API call fails.
    pub async fn disks(&self, name: Option<&str>) -> Result<Vec<Disk>> {
        let query = DiskQuery {
            region_id: self.region.clone(),
            disk_name: name.map(str::to_string),
        };
        self.api.describe_disks(&query).await
    }

    /// List elastic IP addresses, optionally filtered by address.
    ///
    /// # Errors
    ///
    /// Returns an error if the API call fails.
    pub async fn eip_addresses(&self, address: Option<&str>) -> Result<Vec<EipAddress>> {
        let query = EipQuery {
            region_id: self.region.clone(),
            eip_address: address.map(str::to_string),
        };
        self.api.describe_eip_addresses(&query).await
    }
}
