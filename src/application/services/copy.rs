//! Instance cloning — image the source, recreate it, rewire the elastic IP,
//! start the clone.

use anyhow::{Context, Result};

use super::Ecs;
use crate::application::ports::{CreateInstanceParams, EcsApi, ProgressReporter};
use crate::domain::resources::Instance;

/// Disk category for recreated instances.
const SYSTEM_DISK_CATEGORY: &str = "cloud_efficiency";

/// Options for the clone composite.
#[derive(Debug, Clone, Default)]
pub struct CopyOptions {
    /// Raw API parameter overrides applied on top of the derived parameters.
    pub overrides: Vec<(String, String)>,
    /// Delete the source instance once its image is taken.
    pub renew: bool,
}

impl<A: EcsApi> Ecs<A> {
    /// Clone one instance.
    ///
    /// Fixed sequence: capture an image of the source; with `renew`, stop and
    /// delete the source; create the replacement from the image with the
    /// source's placement and shape (overridable via `overrides`); associate
    /// an elastic IP — reusing the source's allocation when it has one,
    /// allocating a fresh one otherwise; start the replacement.
    ///
    /// Each step's output feeds the next. There is no rollback: a failure
    /// mid-chain leaves the resources created so far in place.
    ///
    /// # Errors
    ///
    /// Returns an error if any step fails or a wait times out.
    pub async fn copy_instance(
        &self,
        instance: &Instance,
        options: &CopyOptions,
        reporter: &impl ProgressReporter,
    ) -> Result<Instance> {
        let image = self.create_image_from_instance(instance, reporter).await?;
        if options.renew {
            self.delete_instance_by_id(&instance.instance_id, reporter)
                .await?;
        }
        let security_group_id = instance
            .security_group_ids
            .security_group_id
            .first()
            .cloned()
            .with_context(|| {
                format!("instance {} has no security group", instance.instance_id)
            })?;
        let params = CreateInstanceParams {
            image_id: image.image_id.clone(),
            instance_type: instance.instance_type.clone(),
            security_group_id,
            instance_name: Some(instance.instance_name.clone()),
            zone_id: Some(instance.zone_id.clone()),
            host_name: Some(instance.host_name.clone()),
            v_switch_id: Some(instance.vpc_attributes.v_switch_id.clone()),
            description: Some(instance.description.clone()),
            system_disk_category: Some(SYSTEM_DISK_CATEGORY.to_string()),
            overrides: options.overrides.clone(),
            ..Default::default()
        };
        let created = self.create_instance_and_wait(params, reporter).await?;
        self.associate_eip(
            &created.instance_id,
            instance.eip_allocation_id(),
            reporter,
        )
        .await?;
        self.start_instance(&created.instance_id).await?;
        reporter.success(&format!("started {}", created.instance_id));
        Ok(created)
    }
}
