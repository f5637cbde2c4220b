//! `swctl status` and `swctl save`.

use swctl_core::{SwitchTransport, save_config};

use crate::cli::GlobalOpts;
use crate::config::Config;
use crate::error::CliError;
use crate::output;

use super::connect;

pub async fn handle(global: &GlobalOpts, cfg: &Config) -> Result<(), CliError> {
    let switch = connect(global, cfg).await?;
    let status = switch.status().await?;

    let out = output::render_single(
        &global.output,
        &status,
        output::render_json_pretty,
        output::render_json_compact,
    );
    output::print_output(&out, global.quiet);
    Ok(())
}

pub async fn handle_save(global: &GlobalOpts, cfg: &Config) -> Result<(), CliError> {
    let switch = connect(global, cfg).await?;
    save_config(&switch).await?;
    output::success(global, "Saved VLAN configuration to flash");
    Ok(())
}
