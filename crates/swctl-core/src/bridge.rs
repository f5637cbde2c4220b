// ── Bridge group allocator ──
//
// Bridge groups (FIDs on the device) are numbered from 2 upwards; 0 and 1
// belong to the firmware. Ids are handed out as `max(assigned ∪ {0, 1}) + 1`
// and a key keeps its id for the rest of the run.

use std::fmt;

use indexmap::IndexMap;
use serde::Serialize;
use tracing::trace;

use crate::model::{PortVlanConfig, VlanId};

/// Bridge group ids reserved by the firmware.
pub const RESERVED_BRIDGES: [BridgeId; 2] = [BridgeId(0), BridgeId(1)];

/// Device bridge group (FID) identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct BridgeId(u16);

impl BridgeId {
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    pub fn get(self) -> u16 {
        self.0
    }
}

impl fmt::Display for BridgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// What a bridge group was allocated for.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", content = "key", rename_all = "kebab-case")]
pub enum BridgeKey {
    /// Ports sharing an identical VLAN list (`"10,20"`).
    VlanSet(String),
    /// A tagged-only VLAN isolated into its own group.
    Vlan(VlanId),
}

impl BridgeKey {
    pub fn vlan_set(config: &PortVlanConfig) -> Self {
        Self::VlanSet(config.set_key())
    }
}

impl fmt::Display for BridgeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::VlanSet(key) => write!(f, "[{key}]"),
            Self::Vlan(vlan) => write!(f, "vlan {vlan}"),
        }
    }
}

/// Allocation key -> bridge id, in allocation order.
///
/// Grows monotonically during one compilation run and is discarded after.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BridgeTable {
    entries: IndexMap<BridgeKey, BridgeId>,
}

impl BridgeTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// The id the next allocation would receive.
    pub fn next_id(&self) -> BridgeId {
        let max = self
            .entries
            .values()
            .chain(RESERVED_BRIDGES.iter())
            .copied()
            .max()
            .unwrap_or(RESERVED_BRIDGES[1]);
        BridgeId(max.0 + 1)
    }

    pub fn get(&self, key: &BridgeKey) -> Option<BridgeId> {
        self.entries.get(key).copied()
    }

    /// Look up `key`, allocating the next free id on first use.
    pub fn get_or_create(&mut self, key: BridgeKey) -> BridgeId {
        if let Some(id) = self.get(&key) {
            return id;
        }
        let id = self.next_id();
        trace!(%key, bridge = id.0, "allocated bridge group");
        self.entries.insert(key, id);
        id
    }

    /// Entries in allocation order.
    pub fn iter(&self) -> impl Iterator<Item = (&BridgeKey, BridgeId)> {
        self.entries.iter().map(|(key, id)| (key, *id))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Seed a table with existing groups (allocation continues above the max).
impl FromIterator<(BridgeKey, BridgeId)> for BridgeTable {
    fn from_iter<I: IntoIterator<Item = (BridgeKey, BridgeId)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::tests::vlan;

    fn set(key: &str) -> BridgeKey {
        BridgeKey::VlanSet(key.into())
    }

    #[test]
    fn first_id_is_two() {
        let mut table = BridgeTable::new();
        assert_eq!(table.next_id(), BridgeId(2));
        assert_eq!(table.get_or_create(set("10")), BridgeId(2));
    }

    #[test]
    fn ids_strictly_increase() {
        let mut table = BridgeTable::new();
        let ids: Vec<u16> = ["10", "20", "10,20", "30"]
            .into_iter()
            .map(|k| table.get_or_create(set(k)).get())
            .collect();
        assert_eq!(ids, vec![2, 3, 4, 5]);
    }

    #[test]
    fn same_key_same_id() {
        let mut table = BridgeTable::new();
        let a = table.get_or_create(set("10,20"));
        table.get_or_create(set("30"));
        assert_eq!(table.get_or_create(set("10,20")), a);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn set_and_vlan_keys_are_distinct() {
        let mut table = BridgeTable::new();
        let by_set = table.get_or_create(set("20"));
        let by_vlan = table.get_or_create(BridgeKey::Vlan(vlan(20)));
        assert_ne!(by_set, by_vlan);
    }

    #[test]
    fn seeded_table_allocates_above_max() {
        let mut table: BridgeTable = [(set("10"), BridgeId(7)), (set("20"), BridgeId(4))]
            .into_iter()
            .collect();
        assert_eq!(table.get_or_create(set("30")), BridgeId(8));
    }

    #[test]
    fn seeded_reserved_ids_are_never_reissued() {
        let mut table: BridgeTable = [(set("10"), BridgeId(0))].into_iter().collect();
        assert_eq!(table.get_or_create(set("20")), BridgeId(2));
    }

    #[test]
    fn iter_keeps_allocation_order() {
        let mut table = BridgeTable::new();
        table.get_or_create(set("30"));
        table.get_or_create(BridgeKey::Vlan(vlan(5)));
        table.get_or_create(set("10"));
        let keys: Vec<String> = table.iter().map(|(k, _)| k.to_string()).collect();
        assert_eq!(keys, vec!["[30]", "vlan 5", "[10]"]);
    }
}
