// ── Compiler records -> wire forms ──
//
// The API crate knows the device's form encoding, the core crate knows the
// records. These conversions are the only place the two meet.

use swctl_api::{PortVlanEntry, PortVlanForm, TagVlanEntry, TagVlanForm};

use crate::compile::{MembershipRecord, TagCrossRecord};

impl From<&MembershipRecord> for PortVlanEntry {
    fn from(record: &MembershipRecord) -> Self {
        Self {
            port: record.wire_port,
            bridge: record.bridge.get(),
            untagged: record.untagged,
        }
    }
}

impl From<&TagCrossRecord> for TagVlanEntry {
    fn from(record: &TagCrossRecord) -> Self {
        Self {
            slot: record.index,
            port: record.wire_port,
            bridge: record.bridge.get(),
            vlan: record.vlan.get(),
        }
    }
}

pub fn port_vlan_form(records: &[MembershipRecord]) -> PortVlanForm {
    PortVlanForm {
        entries: records.iter().map(PortVlanEntry::from).collect(),
    }
}

pub fn tag_vlan_form(records: &[TagCrossRecord]) -> TagVlanForm {
    TagVlanForm {
        entries: records.iter().map(TagVlanEntry::from).collect(),
    }
}
