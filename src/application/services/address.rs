//! Elastic IP operations — associate (allocating on demand) and release.

use anyhow::Result;

use super::Ecs;
use crate::application::ports::{EcsApi, ProgressReporter};

impl<A: EcsApi> Ecs<A> {
    /// Associate an elastic IP with an instance.
    ///
    /// When `allocation_id` is given it is passed through unchanged — this is
    /// how a clone inherits the source instance's address. Otherwise a fresh
    /// EIP is allocated first and the allocation is traced.
    ///
    /// Returns the allocation ID that was associated.
    ///
    /// # Errors
    ///
    /// Returns an error if the allocate or associate call fails.
    pub async fn associate_eip(
        &self,
        instance_id: &str,
        allocation_id: Option<&str>,
        reporter: &impl ProgressReporter,
    ) -> Result<String> {
        let allocation_id = match allocation_id {
            Some(id) => id.to_string(),
            None => {
                let allocation = self.api.allocate_eip_address(&self.region).await?;
                reporter.step(&format!(
                    "allocated {} ({})",
                    allocation.allocation_id, allocation.eip_address
                ));
                allocation.allocation_id
            }
        };
        self.api
            .associate_eip_address(&self.region, &allocation_id, instance_id)
            .await?;
        Ok(allocation_id)
    }

    /// Release an elastic IP by allocation ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the API call fails.
    pub async fn release_eip_address(&self, allocation_id: &str) -> Result<()> {
        self.api
            .release_eip_address(&self.region, allocation_id)
            .await
    }
}
