//! VLAN-to-bridge-group compiler for the XikeStor SKS3200 switch family.
//!
//! The switch has no notion of "port X carries VLANs A and B". It models
//! forwarding as *bridge groups* (FIDs) plus a table of tagged
//! cross-connects. This crate turns a declarative per-port VLAN description
//! into those two tables:
//!
//! - **[`model`]**: [`PortNumber`], [`VlanId`], [`PortVlanConfig`] and the
//!   ordered [`VlanPlan`].
//! - **[`physical`]**: logical port number to wire address (ports 9 and 10
//!   are swapped in firmware).
//! - **[`bridge`]**: the [`BridgeTable`] allocator, keyed by VLAN-set or by
//!   a single VLAN.
//! - **[`native`]**: native (untagged) VLAN resolution.
//! - **[`compile`]**: the port-membership and tag-cross compilers,
//!   combined by [`compile()`](compile::compile) into a [`CompiledPlan`].
//! - **[`switch`]**: the [`SwitchTransport`] seam, the reqwest-backed
//!   [`Switch`], and the ordered [`apply_plan`] / [`save_config`] runs.

pub mod bridge;
pub mod compile;
pub mod config;
pub mod convert;
pub mod error;
pub mod model;
pub mod native;
pub mod physical;
pub mod switch;

// ── Primary re-exports ──────────────────────────────────────────────
pub use bridge::{BridgeId, BridgeKey, BridgeTable};
pub use compile::{
    CompiledPlan, MembershipRecord, TagCrossRecord, compile, compile_membership,
    compile_tag_cross,
};
pub use config::{SwitchConfig, TlsVerification};
pub use error::{CoreError, ModelError};
pub use model::{PORT_COUNT, PortNumber, PortVlanConfig, VlanId, VlanPlan};
pub use native::{NativeVlans, is_native};
pub use physical::physical;
pub use switch::{Payload, Switch, SwitchTransport, apply_plan, save_config};
