//! `ecsx regions` — list available regions.

use anyhow::Result;

use crate::app::AppContext;
use crate::output::json;

/// Run `ecsx regions`.
///
/// # Errors
///
/// Returns an error if the API call fails.
pub async fn run(app: &AppContext) -> Result<()> {
    let regions = app.ecs.regions().await?;
    json::print(&regions)
}
