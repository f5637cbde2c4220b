// VLAN configuration endpoints
//
// The two pages of the web UI that together define bridge membership:
// per-port FID assignment and the tagged cross-connect table.

use tracing::debug;

use crate::client::SwitchClient;
use crate::error::Error;
use crate::forms::{PortVlanForm, TagVlanForm};

const PORT_VLAN_CFG: &str = "port_vlan_cfg.json";
const TAG_VLAN_CFG: &str = "tag_vlan_cfg.json";

impl SwitchClient {
    /// Replace the port membership table.
    ///
    /// `POST /port_vlan_cfg.json`
    pub async fn set_port_vlans(&self, form: &PortVlanForm) -> Result<(), Error> {
        debug!(ports = form.entries.len(), "pushing port membership");
        self.post_json(PORT_VLAN_CFG, form).await
    }

    /// Replace the tagged cross-connect table.
    ///
    /// `POST /tag_vlan_cfg.json`
    pub async fn set_tag_vlans(&self, form: &TagVlanForm) -> Result<(), Error> {
        debug!(rows = form.entries.len(), "pushing tag cross-connects");
        self.post_json(TAG_VLAN_CFG, form).await
    }
}
