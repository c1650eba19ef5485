//! `ecsx copy` — clone instances via a fresh image.

use anyhow::Result;

use crate::app::AppContext;
use crate::application::services::CopyOptions;
use crate::commands::CopyArgs;

/// Run `ecsx copy -n NAME [-p KEY=VAL]... [-r]`.
///
/// For each instance matching the name: capture an image, optionally retire
/// the original (`--renew`), recreate the instance from the image, rewire
/// the elastic IP, and start the clone.
///
/// # Errors
///
/// Returns an error if any step of the chain fails or a wait times out.
pub async fn run(app: &AppContext, args: &CopyArgs) -> Result<()> {
    let instances = app.ecs.instances(Some(&args.name)).await?;
    if instances.is_empty() {
        app.output
            .warn(&format!("no instances named '{}'", args.name));
        return Ok(());
    }
    if args.renew {
        let prompt = format!(
            "Replace {} instance(s) named '{}'? The originals are deleted once imaged.",
            instances.len(),
            args.name
        );
        if !app.confirm(&prompt)? {
            app.output.info("Cancelled.");
            return Ok(());
        }
    }
    let options = CopyOptions {
        overrides: args.params.clone(),
        renew: args.renew,
    };
    let reporter = app.reporter();
    for instance in &instances {
        app.ecs.copy_instance(instance, &options, &reporter).await?;
    }
    Ok(())
}
