// ── Port / VLAN domain types ──
//
// Value types describing which VLANs each front-panel port carries.
// Range checks live in the `TryFrom` impls so that a `VlanPlan` can only
// ever hold ports 1..=10 and VLAN ids 1..=4094.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Number of front-panel ports on the target hardware (8x 2.5G + 2x SFP+).
pub const PORT_COUNT: usize = 10;

// ── PortNumber ──────────────────────────────────────────────────────

/// A logical front-panel port number, as printed on the chassis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct PortNumber(u8);

impl PortNumber {
    pub const MIN: u8 = 1;
    #[allow(clippy::cast_possible_truncation, clippy::as_conversions)]
    pub const MAX: u8 = PORT_COUNT as u8;

    pub fn get(self) -> u8 {
        self.0
    }

    /// Every port on the chassis, ascending.
    pub fn all() -> impl Iterator<Item = Self> {
        (Self::MIN..=Self::MAX).map(Self)
    }
}

impl TryFrom<u8> for PortNumber {
    type Error = ModelError;

    fn try_from(port: u8) -> Result<Self, Self::Error> {
        if (Self::MIN..=Self::MAX).contains(&port) {
            Ok(Self(port))
        } else {
            Err(ModelError::PortOutOfRange { port: port.into() })
        }
    }
}

impl From<PortNumber> for u8 {
    fn from(port: PortNumber) -> Self {
        port.0
    }
}

impl fmt::Display for PortNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ── VlanId ──────────────────────────────────────────────────────────

/// An 802.1Q VLAN id (1..=4094).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct VlanId(u16);

impl VlanId {
    pub const MIN: u16 = 1;
    pub const MAX: u16 = 4094;

    pub fn get(self) -> u16 {
        self.0
    }
}

impl TryFrom<u16> for VlanId {
    type Error = ModelError;

    fn try_from(vlan: u16) -> Result<Self, Self::Error> {
        if (Self::MIN..=Self::MAX).contains(&vlan) {
            Ok(Self(vlan))
        } else {
            Err(ModelError::VlanOutOfRange { vlan: vlan.into() })
        }
    }
}

impl From<VlanId> for u16 {
    fn from(vlan: VlanId) -> Self {
        vlan.0
    }
}

impl fmt::Display for VlanId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ── PortVlanConfig ──────────────────────────────────────────────────

/// VLAN membership of a single port.
///
/// One VLAN makes an access port (carried untagged), more than one makes a
/// trunk. `native` is only consulted for trunks. An empty list leaves the
/// port out of both payloads.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PortVlanConfig {
    vlans: Vec<VlanId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    native: Option<VlanId>,
}

impl PortVlanConfig {
    /// Build a port config, rejecting repeated VLAN ids.
    pub fn new(vlans: Vec<VlanId>, native: Option<VlanId>) -> Result<Self, ModelError> {
        for (i, vlan) in vlans.iter().enumerate() {
            if vlans[..i].contains(vlan) {
                return Err(ModelError::DuplicateVlan { vlan: vlan.get() });
            }
        }
        Ok(Self { vlans, native })
    }

    /// Access port carrying a single untagged VLAN.
    pub fn access(vlan: VlanId) -> Self {
        Self {
            vlans: vec![vlan],
            native: None,
        }
    }

    pub fn vlans(&self) -> &[VlanId] {
        &self.vlans
    }

    pub fn native(&self) -> Option<VlanId> {
        self.native
    }

    pub fn is_access(&self) -> bool {
        self.vlans.len() == 1
    }

    pub fn is_trunk(&self) -> bool {
        self.vlans.len() > 1
    }

    pub fn is_unassigned(&self) -> bool {
        self.vlans.is_empty()
    }

    pub fn carries(&self, vlan: VlanId) -> bool {
        self.vlans.contains(&vlan)
    }

    /// `true` if this port carries exactly `[vlan]` and nothing else.
    pub fn is_singleton_of(&self, vlan: VlanId) -> bool {
        self.vlans == [vlan]
    }

    /// Canonical VLAN-set key: the VLAN list joined with commas, in the
    /// order it was configured (`[10, 20]` -> `"10,20"`).
    pub fn set_key(&self) -> String {
        self.vlans
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(",")
    }
}

// ── VlanPlan ────────────────────────────────────────────────────────

/// The full switch configuration: port number -> VLAN membership.
///
/// Backed by a `BTreeMap`, so every walk over the plan visits ports in
/// ascending order. Bridge ids depend on that order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct VlanPlan {
    ports: BTreeMap<PortNumber, PortVlanConfig>,
}

impl VlanPlan {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a port's membership, returning the previous one if any.
    pub fn insert(&mut self, port: PortNumber, config: PortVlanConfig) -> Option<PortVlanConfig> {
        self.ports.insert(port, config)
    }

    pub fn get(&self, port: PortNumber) -> Option<&PortVlanConfig> {
        self.ports.get(&port)
    }

    /// Ports in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = (PortNumber, &PortVlanConfig)> {
        self.ports.iter().map(|(port, cfg)| (*port, cfg))
    }

    /// Port configs in ascending port order.
    pub fn configs(&self) -> impl Iterator<Item = &PortVlanConfig> {
        self.ports.values()
    }

    pub fn len(&self) -> usize {
        self.ports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ports.is_empty()
    }
}

impl FromIterator<(PortNumber, PortVlanConfig)> for VlanPlan {
    fn from_iter<I: IntoIterator<Item = (PortNumber, PortVlanConfig)>>(iter: I) -> Self {
        Self {
            ports: iter.into_iter().collect(),
        }
    }
}
