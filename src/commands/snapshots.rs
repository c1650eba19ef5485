//! `ecsx snapshots` family — list and delete.

use anyhow::Result;

use crate::app::AppContext;
use crate::commands::NameArgs;
use crate::output::json;

/// Run `ecsx snapshots -n NAME`.
///
/// # Errors
///
/// Returns an error if the API call fails.
pub async fn list(app: &AppContext, args: &NameArgs) -> Result<()> {
    let snapshots = app.ecs.snapshots(Some(&args.name)).await?;
    json::print(&snapshots)
}

/// Run `ecsx delete_snapshot -n NAME`.
///
/// # Errors
///
/// Returns an error if a query or delete call fails.
pub async fn delete(app: &AppContext, args: &NameArgs) -> Result<()> {
    let snapshots = app.ecs.snapshots(Some(&args.name)).await?;
    if snapshots.is_empty() {
        app.output
            .warn(&format!("no snapshots named '{}'", args.name));
        return Ok(());
    }
    let prompt = format!(
        "Delete {} snapshot(s) named '{}'?",
        snapshots.len(),
        args.name
    );
    if !app.confirm(&prompt)? {
        app.output.info("Cancelled.");
        return Ok(());
    }
    for snapshot in &snapshots {
        app.ecs.delete_snapshot(&snapshot.snapshot_id).await?;
        app.output
            .success(&format!("deleted {}", snapshot.snapshot_id));
    }
    Ok(())
}
