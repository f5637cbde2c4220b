//! Command handlers, one module per top-level subcommand.

pub mod apply;
pub mod config_cmd;
pub mod plan;
pub mod status;

use std::path::PathBuf;

use swctl_core::{Switch, VlanPlan};
use tracing::debug;

use crate::cli::GlobalOpts;
use crate::config::{self, Config};
use crate::error::CliError;

/// Locate, read and validate the VLAN file. Runs before any network call.
pub fn load_plan(
    conf: Option<PathBuf>,
    global: &GlobalOpts,
    cfg: &Config,
) -> Result<VlanPlan, CliError> {
    let path = config::resolve_vlan_file(conf, global, cfg);
    debug!(path = %path.display(), "reading vlan file");
    Ok(swctl_config::load_vlan_file(&path)?)
}

/// Resolve credentials for the active profile and log in.
pub async fn connect(global: &GlobalOpts, cfg: &Config) -> Result<Switch, CliError> {
    let switch_config = config::resolve_switch_config(global, cfg)?;
    Ok(Switch::connect(&switch_config).await?)
}
