//! Snapshot and disk deletion.

use anyhow::Result;

use super::Ecs;
use crate::application::ports::EcsApi;

impl<A: EcsApi> Ecs<A> {
    /// Delete a snapshot by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the API call fails.
    pub async fn delete_snapshot(&self, snapshot_id: &str) -> Result<()> {
        self.api.delete_snapshot(&self.region, snapshot_id).await
    }

    /// Delete a disk by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the API call fails.
    pub async fn delete_disk(&self, disk_id: &str) -> Result<()> {
        self.api.delete_disk(&self.region, disk_id).await
    }
}
