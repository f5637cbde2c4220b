// Wire encodings of the VLAN configuration forms.
//
// The web UI posts its VLAN pages as one flat JSON object whose keys embed
// the row they belong to (`fidName_3`, `brName_0`, ...) and whose values are
// all strings. These types carry typed rows and flatten them on serialize.

use serde::ser::{Serialize, SerializeMap, Serializer};

const ON: &str = "on";

/// One row of the port membership page (`port_vlan_cfg.json`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PortVlanEntry {
    /// Wire port address (already swapped for ports 9/10).
    pub port: u8,
    /// Bridge group (FID) the port is enabled in.
    pub bridge: u16,
    /// Strip tags on egress (access ports).
    pub untagged: bool,
}

/// Body of a `port_vlan_cfg.json` post.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PortVlanForm {
    pub entries: Vec<PortVlanEntry>,
}

/// One row of the tagged VLAN cross-connect page (`tag_vlan_cfg.json`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagVlanEntry {
    /// Table slot on the device.
    pub slot: usize,
    /// Wire port address of the trunk.
    pub port: u8,
    /// Destination bridge group.
    pub bridge: u16,
    /// Outer VLAN id carried on the trunk.
    pub vlan: u16,
}

/// Body of a `tag_vlan_cfg.json` post.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagVlanForm {
    pub entries: Vec<TagVlanEntry>,
}

impl Serialize for PortVlanForm {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let untagged = self.entries.iter().filter(|e| e.untagged).count();
        let mut map = serializer.serialize_map(Some(self.entries.len() * 2 + untagged))?;
        for entry in &self.entries {
            let p = entry.port;
            map.serialize_entry(&format!("checkbox_{p}"), ON)?;
            map.serialize_entry(&format!("fidName_{p}"), &entry.bridge.to_string())?;
            if entry.untagged {
                map.serialize_entry(&format!("checkboxTag_{p}"), ON)?;
            }
        }
        map.end()
    }
}

impl Serialize for TagVlanForm {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len() * 5))?;
        for entry in &self.entries {
            let c = entry.slot;
            map.serialize_entry(&format!("bpCboxName_{c}"), ON)?;
            // 0 selects plain 802.1Q (no QinQ outer tag).
            map.serialize_entry(&format!("vtypeName_{c}"), "0")?;
            map.serialize_entry(&format!("ppName_{c}"), &entry.port.to_string())?;
            map.serialize_entry(&format!("brName_{c}"), &entry.bridge.to_string())?;
            map.serialize_entry(&format!("oVidName_{c}"), &entry.vlan.to_string())?;
        }
        map.end()
    }
}
