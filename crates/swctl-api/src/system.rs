// System endpoints
//
// Status document and persisting the running VLAN maps to flash.

use serde_json::json;
use tracing::debug;

use crate::client::SwitchClient;
use crate::error::Error;

/// Which running map a save request persists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VlanMap {
    Port,
    Tag,
}

impl VlanMap {
    /// Both maps, in the order the web UI saves them.
    pub const ALL: [Self; 2] = [Self::Port, Self::Tag];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Port => "port",
            Self::Tag => "tag",
        }
    }

    fn save_path(self) -> String {
        format!("save_{}_vlan_map.json", self.as_str())
    }
}

impl SwitchClient {
    /// Get the switch status document.
    ///
    /// `GET /status.json`
    ///
    /// Returns loosely-typed JSON because the field set varies by firmware.
    pub async fn get_status(&self) -> Result<serde_json::Value, Error> {
        debug!("fetching status");
        self.get_json("status.json").await
    }

    /// Persist one running VLAN map to flash.
    ///
    /// `POST /save_{port,tag}_vlan_map.json` with `{}`
    pub async fn save_vlan_map(&self, map: VlanMap) -> Result<(), Error> {
        debug!(map = map.as_str(), "saving vlan map");
        self.post_json(&map.save_path(), &json!({})).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_paths() {
        assert_eq!(VlanMap::Port.save_path(), "save_port_vlan_map.json");
        assert_eq!(VlanMap::Tag.save_path(), "save_tag_vlan_map.json");
    }
}
