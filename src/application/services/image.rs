//! Image operations — create from an instance, copy across regions, delete.

use anyhow::Result;
use chrono::{DateTime, Utc};

use super::Ecs;
use crate::application::ports::{
    CopyImageParams, CreateImageParams, EcsApi, ProgressReporter,
};
use crate::domain::resources::{Image, Instance};

/// Image name for a point-in-time capture of an instance:
/// `{instance_name}.{YYYYmmddHHMMSS}`.
#[must_use]
pub fn image_name_for(instance_name: &str, now: DateTime<Utc>) -> String {
    format!("{instance_name}.{}", now.format("%Y%m%d%H%M%S"))
}

impl<A: EcsApi> Ecs<A> {
    /// Capture an instance into a new image and wait until it is visible.
    ///
    /// The source instance's shape (private IP, host name, zone, type, …) is
    /// stored as JSON in the image description.
    ///
    /// # Errors
    ///
    /// Returns an error if the create call fails or the wait times out.
    pub async fn create_image_from_instance(
        &self,
        instance: &Instance,
        reporter: &impl ProgressReporter,
    ) -> Result<Image> {
        let image_name = image_name_for(&instance.instance_name, Utc::now());
        let description = serde_json::json!({
            "PrivateIpAddress": instance.vpc_attributes.private_ip_address.ip_address.first(),
            "Description": instance.description,
            "HostName": instance.host_name,
            "InstanceName": instance.instance_name,
            "ZoneId": instance.zone_id,
            "InstanceType": instance.instance_type,
        })
        .to_string();
        self.create_image_and_wait(&instance.instance_id, &image_name, &description, reporter)
            .await
    }

    /// Request an image of an instance and poll until it shows up in
    /// `DescribeImages`. Returns the first observed snapshot of the image.
    ///
    /// # Errors
    ///
    /// Returns an error if the create call fails or the wait times out.
    pub async fn create_image_and_wait(
        &self,
        instance_id: &str,
        image_name: &str,
        description: &str,
        reporter: &impl ProgressReporter,
    ) -> Result<Image> {
        let params = CreateImageParams {
            region_id: self.region.clone(),
            instance_id: instance_id.to_string(),
            image_name: image_name.to_string(),
            description: description.to_string(),
        };
        self.api.create_image(&params).await?;
        reporter.step(&format!("creating image {image_name}..."));
        let image = self
            .poller
            .wait_for(&format!("image {image_name}"), || {
                let name = image_name.to_string();
                async move { Ok(self.images(Some(&name)).await?.into_iter().next()) }
            })
            .await?;
        reporter.success(&format!("image {} ready", image.image_id));
        Ok(image)
    }

    /// Copy an image to another region, carrying its name and description.
    ///
    /// # Errors
    ///
    /// Returns an error if the API call fails.
    pub async fn copy_image_to_region(
        &self,
        image: &Image,
        destination_region_id: &str,
    ) -> Result<String> {
        let params = CopyImageParams {
            region_id: self.region.clone(),
            image_id: image.image_id.clone(),
            destination_region_id: destination_region_id.to_string(),
            destination_image_name: image.image_name.clone(),
            destination_description: image.description.clone(),
        };
        self.api.copy_image(&params).await
    }

    /// Delete an image by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the API call fails.
    pub async fn delete_image(&self, image_id: &str) -> Result<()> {
        self.api.delete_image(&self.region, image_id).await
    }
}
