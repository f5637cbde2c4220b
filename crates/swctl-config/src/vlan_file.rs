// ── Declarative VLAN file ──
//
// YAML, keyed by front-panel port:
//
//     vlan:
//       1: { vlan: [10] }
//       3: { vlan: [10, 20], native: 10 }
//
// Everything is range-checked here, so the compiler only ever sees a valid
// `VlanPlan`.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, warn};

use swctl_core::{ModelError, PortNumber, PortVlanConfig, VlanId, VlanPlan};

use crate::ConfigError;

pub const DEFAULT_VLAN_FILE: &str = "vlan.yml";

#[derive(Debug, Deserialize)]
struct VlanFile {
    #[serde(default)]
    vlan: BTreeMap<i64, Option<PortEntry>>,
}

#[derive(Debug, Default, Deserialize)]
struct PortEntry {
    #[serde(default)]
    vlan: Option<Vec<i64>>,
    native: Option<i64>,
}

/// Read and validate a VLAN file.
pub fn load_vlan_file(path: &Path) -> Result<VlanPlan, ConfigError> {
    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadVlanFile {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), "loaded vlan file");
    parse_vlan_yaml(&contents)
}

/// Parse and validate VLAN file contents.
pub fn parse_vlan_yaml(contents: &str) -> Result<VlanPlan, ConfigError> {
    let file: VlanFile = serde_yaml::from_str(contents)?;

    let mut plan = VlanPlan::new();
    for (raw_port, entry) in file.vlan {
        let port = port_number(raw_port)?;
        let entry = entry.unwrap_or_default();
        let config = port_config(port, &entry)
            .map_err(|source| ConfigError::Port { port: port.get(), source })?;
        plan.insert(port, config);
    }
    Ok(plan)
}

fn port_number(raw: i64) -> Result<PortNumber, ModelError> {
    let port = u8::try_from(raw).map_err(|_| ModelError::PortOutOfRange { port: raw })?;
    PortNumber::try_from(port)
}

fn vlan_id(raw: i64) -> Result<VlanId, ModelError> {
    let vlan = u16::try_from(raw).map_err(|_| ModelError::VlanOutOfRange { vlan: raw })?;
    VlanId::try_from(vlan)
}

fn port_config(port: PortNumber, entry: &PortEntry) -> Result<PortVlanConfig, ModelError> {
    let vlans = entry
        .vlan
        .as_deref()
        .unwrap_or_default()
        .iter()
        .map(|v| vlan_id(*v))
        .collect::<Result<Vec<_>, _>>()?;
    let native = entry.native.map(vlan_id).transpose()?;

    if let Some(native) = native {
        if vlans.len() < 2 {
            warn!(%port, %native, "native vlan ignored on non-trunk port");
        } else if !vlans.contains(&native) {
            warn!(%port, %native, "native vlan is not in the port's vlan list");
        }
    }

    PortVlanConfig::new(vlans, native)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn port(n: u8) -> PortNumber {
        PortNumber::try_from(n).unwrap()
    }

    fn vlans(plan: &VlanPlan, n: u8) -> Vec<u16> {
        plan.get(port(n))
            .unwrap()
            .vlans()
            .iter()
            .map(|v| v.get())
            .collect()
    }

    #[test]
    fn parses_access_and_trunk_ports() {
        let plan = parse_vlan_yaml(
            "vlan:\n  1:\n    vlan: [10]\n  3:\n    vlan: [10, 20]\n    native: 10\n",
        )
        .unwrap();

        assert_eq!(plan.len(), 2);
        assert_eq!(vlans(&plan, 1), vec![10]);
        assert_eq!(vlans(&plan, 3), vec![10, 20]);
        assert_eq!(plan.get(port(3)).unwrap().native().map(VlanId::get), Some(10));
    }

    #[test]
    fn port_out_of_range_is_rejected() {
        let err = parse_vlan_yaml("vlan:\n  11:\n    vlan: [10]\n").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Model(ModelError::PortOutOfRange { port: 11 })
        ));
        assert!(err.to_string().contains("Port 11 out of range"));
    }

    #[test]
    fn port_zero_and_negative_are_rejected() {
        assert!(parse_vlan_yaml("vlan:\n  0:\n    vlan: [10]\n").is_err());
        assert!(matches!(
            parse_vlan_yaml("vlan:\n  -1:\n    vlan: [10]\n").unwrap_err(),
            ConfigError::Model(ModelError::PortOutOfRange { port: -1 })
        ));
    }

    #[test]
    fn vlan_out_of_range_names_the_port() {
        let err = parse_vlan_yaml("vlan:\n  4:\n    vlan: [10, 5000]\n").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Port {
                port: 4,
                source: ModelError::VlanOutOfRange { vlan: 5000 }
            }
        ));
    }

    #[test]
    fn duplicate_vlan_is_rejected() {
        let err = parse_vlan_yaml("vlan:\n  2:\n    vlan: [10, 10]\n").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Port {
                port: 2,
                source: ModelError::DuplicateVlan { vlan: 10 }
            }
        ));
    }

    #[test]
    fn empty_or_missing_vlan_list_leaves_port_unassigned() {
        let plan = parse_vlan_yaml("vlan:\n  5:\n  6:\n    vlan: []\n").unwrap();
        assert!(plan.get(port(5)).unwrap().is_unassigned());
        assert!(plan.get(port(6)).unwrap().is_unassigned());
    }

    #[test]
    fn missing_vlan_section_is_an_empty_plan() {
        assert!(parse_vlan_yaml("{}").unwrap().is_empty());
    }

    #[test]
    fn load_reports_missing_file() {
        let err = load_vlan_file(Path::new("/nonexistent/swctl/vlan.yml")).unwrap_err();
        assert!(matches!(err, ConfigError::ReadVlanFile { .. }));
    }

    #[test]
    fn load_reads_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vlan.yml");
        std::fs::write(&path, "vlan:\n  9:\n    vlan: [30]\n").unwrap();

        let plan = load_vlan_file(&path).unwrap();
        assert_eq!(vlans(&plan, 9), vec![30]);
    }
}
