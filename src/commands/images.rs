//! `ecsx images` family — list, create from instances, copy across regions,
//! delete.

use anyhow::Result;

use crate::app::AppContext;
use crate::commands::{CopyImageArgs, NameArgs, NameFilterArgs};
use crate::output::json;

/// Run `ecsx images [-n NAME]`.
///
/// # Errors
///
/// Returns an error if the API call fails.
pub async fn list(app: &AppContext, args: &NameFilterArgs) -> Result<()> {
    let images = app.ecs.images(args.name.as_deref()).await?;
    json::print(&images)
}

/// Run `ecsx create_image -n NAME` — one image per matching instance.
///
/// # Errors
///
/// Returns an error if a query or image creation fails.
pub async fn create(app: &AppContext, args: &NameArgs) -> Result<()> {
    let instances = app.ecs.instances(Some(&args.name)).await?;
    if instances.is_empty() {
        app.output
            .warn(&format!("no instances named '{}'", args.name));
        return Ok(());
    }
    let reporter = app.reporter();
    for instance in &instances {
        app.ecs
            .create_image_from_instance(instance, &reporter)
            .await?;
    }
    Ok(())
}

/// Run `ecsx copy_image -n NAME --destination-region-id REGION`.
///
/// # Errors
///
/// Returns an error if a query or copy call fails.
pub async fn copy(app: &AppContext, args: &CopyImageArgs) -> Result<()> {
    let images = app.ecs.images(Some(&args.name)).await?;
    if images.is_empty() {
        app.output.warn(&format!("no images named '{}'", args.name));
        return Ok(());
    }
    for image in &images {
        let copied = app
            .ecs
            .copy_image_to_region(image, &args.destination_region_id)
            .await?;
        app.output.success(&format!(
            "copying {} to {} as {copied}",
            image.image_id, args.destination_region_id
        ));
    }
    Ok(())
}

/// Run `ecsx delete_image -n NAME`.
///
/// # Errors
///
/// Returns an error if a query or delete call fails.
pub async fn delete(app: &AppContext, args: &NameArgs) -> Result<()> {
    let images = app.ecs.images(Some(&args.name)).await?;
    if images.is_empty() {
        app.output.warn(&format!("no images named '{}'", args.name));
        return Ok(());
    }
    let prompt = format!("Delete {} image(s) named '{}'?", images.len(), args.name);
    if !app.confirm(&prompt)? {
        app.output.info("Cancelled.");
        return Ok(());
    }
    for image in &images {
        app.ecs.delete_image(&image.image_id).await?;
        app.output.success(&format!("deleted {}", image.image_id));
    }
    Ok(())
}
