// ── Port-membership pass ──

use crate::bridge::{BridgeKey, BridgeTable};
use crate::compile::MembershipRecord;
use crate::model::VlanPlan;
use crate::physical::physical;

/// Assign every configured port to the bridge group of its VLAN set.
///
/// Ports with identical VLAN lists share a group. Groups are allocated in
/// ascending port order; unassigned ports are skipped.
pub fn compile_membership(plan: &VlanPlan, bridges: &mut BridgeTable) -> Vec<MembershipRecord> {
    plan.iter()
        .filter(|(_, cfg)| !cfg.is_unassigned())
        .map(|(port, cfg)| MembershipRecord {
            port,
            wire_port: physical(port),
            bridge: bridges.get_or_create(BridgeKey::vlan_set(cfg)),
            untagged: cfg.is_access(),
        })
        .collect()
}
