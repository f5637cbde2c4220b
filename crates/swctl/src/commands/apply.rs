//! `swctl apply`: compile the VLAN file and push it.

use swctl_core::{apply_plan, save_config};
use tracing::info;

use crate::cli::{ApplyArgs, GlobalOpts};
use crate::config::Config;
use crate::error::CliError;
use crate::output;

use super::{connect, load_plan};

pub async fn handle(args: ApplyArgs, global: &GlobalOpts, cfg: &Config) -> Result<(), CliError> {
    // Validate before logging in so a bad file never touches the switch.
    let plan = load_plan(args.conf, global, cfg)?;
    let switch = connect(global, cfg).await?;

    let compiled = apply_plan(&switch, &plan).await?;
    output::success(
        global,
        &format!("Updated port config ({} ports)", compiled.membership.len()),
    );
    output::success(
        global,
        &format!(
            "Applied VLAN configuration ({} cross-connects)",
            compiled.tag_cross.len()
        ),
    );

    if args.save {
        save_config(&switch).await?;
        output::success(global, "Saved VLAN configuration to flash");
    } else {
        info!("running configuration not saved; run `swctl save` to persist");
    }
    Ok(())
}
