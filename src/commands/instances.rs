//! `ecsx instances` family — list, create, stop, delete.

use anyhow::Result;

use crate::app::AppContext;
use crate::application::ports::CreateInstanceParams;
use crate::commands::{CreateInstanceArgs, NameArgs, NameFilterArgs};
use crate::output::json;

/// Run `ecsx instances [-n NAME]`.
///
/// # Errors
///
/// Returns an error if the API call fails.
pub async fn list(app: &AppContext, args: &NameFilterArgs) -> Result<()> {
    let instances = app.ecs.instances(args.name.as_deref()).await?;
    json::print(&instances)
}

/// Run `ecsx create_instance`.
///
/// Creates the instance and waits until it reports `Stopped`; start it with
/// the console or a follow-up `copy`-style workflow.
///
/// # Errors
///
/// Returns an error if the create call fails or the wait times out.
pub async fn create(app: &AppContext, args: &CreateInstanceArgs) -> Result<()> {
    let reporter = app.reporter();
    let params = CreateInstanceParams {
        image_id: args.image_id.clone(),
        instance_type: args.instance_type.clone(),
        security_group_id: args.security_group_id.clone(),
        ..Default::default()
    };
    app.ecs.create_instance_and_wait(params, &reporter).await?;
    Ok(())
}

/// Run `ecsx stop_instance -n NAME`.
///
/// # Errors
///
/// Returns an error if a query, the stop call, or the wait fails.
pub async fn stop(app: &AppContext, args: &NameArgs) -> Result<()> {
    let instances = app.ecs.instances(Some(&args.name)).await?;
    if instances.is_empty() {
        app.output
            .warn(&format!("no instances named '{}'", args.name));
        return Ok(());
    }
    let reporter = app.reporter();
    for instance in &instances {
        app.ecs
            .stop_instance_and_wait(&instance.instance_id, &reporter)
            .await?;
    }
    Ok(())
}

/// Run `ecsx delete_instance -n NAME`.
///
/// # Errors
///
/// Returns an error if a query, the stop wait, or a delete call fails.
pub async fn delete(app: &AppContext, args: &NameArgs) -> Result<()> {
    let instances = app.ecs.instances(Some(&args.name)).await?;
    if instances.is_empty() {
        app.output
            .warn(&format!("no instances named '{}'", args.name));
        return Ok(());
    }
    let prompt = format!(
        "Delete {} instance(s) named '{}'?",
        instances.len(),
        args.name
    );
    if !app.confirm(&prompt)? {
        app.output.info("Cancelled.");
        return Ok(());
    }
    let reporter = app.reporter();
    for instance in &instances {
        app.ecs
            .delete_instance_by_id(&instance.instance_id, &reporter)
            .await?;
    }
    Ok(())
}
