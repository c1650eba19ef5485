//! Instance lifecycle — create, stop, start, delete.
//!
//! Creation and stop are asynchronous on the remote side: the API call only
//! requests the transition, and completion is observed by re-querying the
//! instance until it reports `Stopped`.

use anyhow::Result;

use super::Ecs;
use crate::application::poll::Settled;
use crate::application::ports::{CreateInstanceParams, EcsApi, ProgressReporter};
use crate::domain::resources::Instance;

impl<A: EcsApi> Ecs<A> {
    /// Create an instance and wait until it is ready.
    ///
    /// Newly created instances land in `Stopped`; the wait polls the returned
    /// `InstanceId` until that state is observed and returns the snapshot.
    ///
    /// # Errors
    ///
    /// Returns an error if the create call fails or the wait times out.
    pub async fn create_instance_and_wait(
        &self,
        mut params: CreateInstanceParams,
        reporter: &impl ProgressReporter,
    ) -> Result<Instance> {
        params.region_id = self.region.clone();
        let instance_id = self.api.create_instance(&params).await?;
        reporter.step(&format!("creating instance {instance_id}..."));
        let instance = self
            .poller
            .wait_for(&format!("instance {instance_id} creation"), || {
                let id = instance_id.clone();
                async move {
                    Ok(self
                        .instance_by_id(&id)
                        .await?
                        .filter(|found| found.status.is_stopped()))
                }
            })
            .await?;
        reporter.success(&format!("created {}", instance.instance_id));
        Ok(instance)
    }

    /// Stop an instance and wait until it reports `Stopped`.
    ///
    /// If the instance is already stopped the stop call is never issued and
    /// the current snapshot is returned after a single query.
    ///
    /// # Errors
    ///
    /// Returns an error if a query or the stop call fails, or the wait
    /// times out.
    pub async fn stop_instance_and_wait(
        &self,
        instance_id: &str,
        reporter: &impl ProgressReporter,
    ) -> Result<Instance> {
        let settled = self
            .poller
            .ensure(
                &format!("instance {instance_id} to stop"),
                || {
                    let id = instance_id.to_string();
                    async move {
                        Ok(self
                            .instance_by_id(&id)
                            .await?
                            .filter(|found| found.status.is_stopped()))
                    }
                },
                || async move { self.api.stop_instance(&self.region, instance_id).await },
            )
            .await?;
        match &settled {
            Settled::Already(_) => reporter.step(&format!("{instance_id} already stopped")),
            Settled::Transitioned(_) => reporter.success(&format!("stopped {instance_id}")),
        }
        Ok(settled.into_inner())
    }

    /// Stop an instance if needed, then delete it.
    ///
    /// # Errors
    ///
    /// Returns an error if the stop wait or the delete call fails.
    pub async fn delete_instance_by_id(
        &self,
        instance_id: &str,
        reporter: &impl ProgressReporter,
    ) -> Result<()> {
        self.stop_instance_and_wait(instance_id, reporter).await?;
        self.api.delete_instance(&self.region, instance_id).await?;
        reporter.success(&format!("deleted {instance_id}"));
        Ok(())
    }

    /// Start a stopped instance.
    ///
    /// # Errors
    ///
    /// Returns an error if the API call fails.
    pub async fn start_instance(&self, instance_id: &str) -> Result<()> {
        self.api.start_instance(&self.region, instance_id).await
    }
}
