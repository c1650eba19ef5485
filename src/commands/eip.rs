//! `ecsx eip_addresses` / `ecsx release_eip_addresses` — list and release
//! elastic IP addresses.

use anyhow::Result;

use crate::app::AppContext;
use crate::commands::EipFilterArgs;
use crate::output::json;

/// Run `ecsx eip_addresses [-e ADDR]`.
///
/// # Errors
///
/// Returns an error if the API call fails.
pub async fn list(app: &AppContext, args: &EipFilterArgs) -> Result<()> {
    let eips = app.ecs.eip_addresses(args.eip_address.as_deref()).await?;
    json::print(&eips)
}

/// Run `ecsx release_eip_addresses [-e ADDR]` — release every matching EIP.
///
/// # Errors
///
/// Returns an error if a query or release call fails.
pub async fn release(app: &AppContext, args: &EipFilterArgs) -> Result<()> {
    let eips = app.ecs.eip_addresses(args.eip_address.as_deref()).await?;
    if eips.is_empty() {
        app.output.warn("no elastic IP addresses matched");
        return Ok(());
    }
    let prompt = format!("Release {} elastic IP address(es)?", eips.len());
    if !app.confirm(&prompt)? {
        app.output.info("Cancelled.");
        return Ok(());
    }
    for eip in &eips {
        app.ecs.release_eip_address(&eip.allocation_id).await?;
        app.output.success(&format!(
            "released {} ({})",
            eip.allocation_id, eip.ip_address
        ));
    }
    Ok(())
}
