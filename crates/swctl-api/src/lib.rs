// swctl-api: Async Rust client for the XikeStor SKS3200 web configuration API

pub mod auth;
pub mod client;
pub mod error;
pub mod forms;
pub mod system;
pub mod transport;
pub mod vlan;

pub use client::SwitchClient;
pub use error::Error;
pub use forms::{PortVlanEntry, PortVlanForm, TagVlanEntry, TagVlanForm};
pub use system::VlanMap;
pub use transport::{TlsMode, TransportConfig};
