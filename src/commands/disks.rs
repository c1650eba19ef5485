//! `ecsx disks` family — list and delete.

use anyhow::Result;

use crate::app::AppContext;
use crate::commands::{NameArgs, NameFilterArgs};
use crate::output::json;

/// Run `ecsx disks [-n NAME]`.
///
/// # Errors
///
/// Returns an error if the API call fails.
pub async fn list(app: &AppContext, args: &NameFilterArgs) -> Result<()> {
    let disks = app.ecs.disks(args.name.as_deref()).await?;
    json::print(&disks)
}

/// Run `ecsx delete_disk -n NAME`.
///
/// # Errors
///
/// Returns an error if a query or delete call fails.
pub async fn delete(app: &AppContext, args: &NameArgs) -> Result<()> {
    let disks = app.ecs.disks(Some(&args.name)).await?;
    if disks.is_empty() {
        app.output.warn(&format!("no disks named '{}'", args.name));
        return Ok(());
    }
    let prompt = format!("Delete {} disk(s) named '{}'?", disks.len(), args.name);
    if !app.confirm(&prompt)? {
        app.output.info("Cancelled.");
        return Ok(());
    }
    for disk in &disks {
        app.ecs.delete_disk(&disk.disk_id).await?;
        app.output.success(&format!("deleted {}", disk.disk_id));
    }
    Ok(())
}
