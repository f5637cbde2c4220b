// ── Tag-cross pass ──
//
// For every trunk VLAN, the first other port (ascending) that carries the
// VLAN decides where the tagged frames go. A VLAN shared by three or more
// distinct groupings therefore only reaches the first one.

use tracing::trace;

use crate::bridge::{BridgeKey, BridgeTable};
use crate::compile::TagCrossRecord;
use crate::model::{PortVlanConfig, VlanId, VlanPlan};
use crate::native::NativeVlans;
use crate::physical::physical;

/// Emit one tagged cross-connect per (trunk port, VLAN) that has a peer.
///
/// Record indices run from 0 across the whole pass. Expects `bridges` to
/// already hold the VLAN-set groups from [`compile_membership`](super::compile_membership).
pub fn compile_tag_cross(plan: &VlanPlan, bridges: &mut BridgeTable) -> Vec<TagCrossRecord> {
    let natives = NativeVlans::from_plan(plan);
    let mut records = Vec::new();

    for (port, trunk) in plan.iter().filter(|(_, cfg)| cfg.is_trunk()) {
        for &vlan in trunk.vlans() {
            let Some(dest) = first_peer(plan, &natives, trunk, vlan) else {
                trace!(%port, %vlan, "no peer for trunk vlan");
                continue;
            };

            // A native VLAN only ever finds a destination carrying it alone, so
            // the trunk's own native never reaches the per-VLAN branch. A
            // destination trunk's declared native is not consulted.
            let key = if !dest.is_singleton_of(vlan) {
                BridgeKey::Vlan(vlan)
            } else {
                BridgeKey::vlan_set(dest)
            };

            records.push(TagCrossRecord {
                index: records.len(),
                port,
                wire_port: physical(port),
                bridge: bridges.get_or_create(key),
                vlan,
            });
        }
    }

    records
}

/// First port whose VLAN set differs from the trunk's and that may receive
/// `vlan` tagged.
///
/// A native VLAN only crosses over to a port that carries it alone; any
/// other grouping already gets it untagged.
fn first_peer<'a>(
    plan: &'a VlanPlan,
    natives: &NativeVlans,
    trunk: &PortVlanConfig,
    vlan: VlanId,
) -> Option<&'a PortVlanConfig> {
    let native = natives.is_native(vlan, trunk.native());
    plan.configs()
        .filter(|dest| dest.vlans() != trunk.vlans())
        .filter(|dest| !native || dest.is_singleton_of(vlan))
        .find(|dest| dest.carries(vlan))
}
