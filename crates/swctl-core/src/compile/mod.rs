// ── VLAN-to-bridge-group compiler ──
//
// Two passes over the same plan, sharing one bridge table:
//
// 1. `membership` puts every configured port into the bridge group of its
//    VLAN set and marks access ports untagged.
// 2. `tag_cross` links each trunk VLAN to the group of another port that
//    carries it, isolating tagged-only VLANs into per-VLAN groups.
//
// The second pass reads ids allocated by the first, so the order is fixed.

mod membership;
mod tag_cross;

use serde::Serialize;
use tracing::debug;

pub use membership::compile_membership;
pub use tag_cross::compile_tag_cross;

use crate::bridge::{BridgeId, BridgeTable};
use crate::model::{PortNumber, VlanId, VlanPlan};

/// Enable a port in a bridge group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MembershipRecord {
    pub port: PortNumber,
    pub wire_port: u8,
    pub bridge: BridgeId,
    /// Access port: frames leave untagged.
    pub untagged: bool,
}

/// Carry `vlan` tagged between a trunk port and a bridge group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TagCrossRecord {
    /// Row in the device's cross-connect table, contiguous from 0.
    pub index: usize,
    pub port: PortNumber,
    pub wire_port: u8,
    pub bridge: BridgeId,
    pub vlan: VlanId,
}

/// Both payloads plus the bridge table they were compiled against.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompiledPlan {
    pub membership: Vec<MembershipRecord>,
    pub tag_cross: Vec<TagCrossRecord>,
    pub bridges: BridgeTable,
}

/// Compile a plan against a fresh bridge table.
pub fn compile(plan: &VlanPlan) -> CompiledPlan {
    let mut bridges = BridgeTable::new();
    let membership = compile_membership(plan, &mut bridges);
    let tag_cross = compile_tag_cross(plan, &mut bridges);

    debug!(
        ports = membership.len(),
        cross_connects = tag_cross.len(),
        bridges = bridges.len(),
        "compiled vlan plan"
    );

    CompiledPlan {
        membership,
        tag_cross,
        bridges,
    }
}
