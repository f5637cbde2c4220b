// ── Native VLAN resolution ──
//
// A VLAN is native (travels untagged) when some port carries it alone, or
// when it is the declared native VLAN of the trunk being compiled.

use std::collections::BTreeSet;

use crate::model::{VlanId, VlanPlan};

/// VLANs that are the sole VLAN of at least one port.
///
/// Computed once per plan so the tag-cross loop does a set lookup instead of
/// rescanning every port.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NativeVlans {
    access: BTreeSet<VlanId>,
}

impl NativeVlans {
    pub fn from_plan(plan: &VlanPlan) -> Self {
        let access = plan
            .configs()
            .filter(|cfg| cfg.is_access())
            .flat_map(|cfg| cfg.vlans().iter().copied())
            .collect();
        Self { access }
    }

    pub fn is_native(&self, vlan: VlanId, trunk_native: Option<VlanId>) -> bool {
        trunk_native == Some(vlan) || self.access.contains(&vlan)
    }
}

/// Whether `vlan` is native in the context of a trunk declaring `trunk_native`.
pub fn is_native(plan: &VlanPlan, vlan: VlanId, trunk_native: Option<VlanId>) -> bool {
    NativeVlans::from_plan(plan).is_native(vlan, trunk_native)
}
