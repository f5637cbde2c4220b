// ── Switch transport and apply orchestration ──
//
// `SwitchTransport` is the seam between the compiler and the network: push a
// payload, persist to flash, fetch status. `Switch` implements it over an
// authenticated `SwitchClient`; tests implement it in memory.
//
// An apply run is strictly ordered: membership, then tag-cross. The
// cross-connect rows reference bridge groups the membership push creates.
// Nothing is retried and nothing is rolled back; a failed push ends the run
// and may leave the device partially configured.

use std::future::Future;

use tracing::{debug, info};

use swctl_api::{SwitchClient, VlanMap};

use crate::compile::{CompiledPlan, MembershipRecord, TagCrossRecord, compile};
use crate::config::SwitchConfig;
use crate::convert::{port_vlan_form, tag_vlan_form};
use crate::error::CoreError;
use crate::model::VlanPlan;

/// A compiled payload, ready to be encoded for the device.
#[derive(Debug, Clone, Copy)]
pub enum Payload<'a> {
    Membership(&'a [MembershipRecord]),
    TagCross(&'a [TagCrossRecord]),
}

/// Whatever can deliver compiled payloads to a switch.
pub trait SwitchTransport {
    fn apply(&self, payload: Payload<'_>) -> impl Future<Output = Result<(), CoreError>> + Send;

    /// Persist the running VLAN maps to non-volatile storage.
    fn save(&self) -> impl Future<Output = Result<(), CoreError>> + Send;

    fn status(&self) -> impl Future<Output = Result<serde_json::Value, CoreError>> + Send;
}

// ── Switch ──────────────────────────────────────────────────────────

/// An authenticated session with one switch.
pub struct Switch {
    client: SwitchClient,
}

impl Switch {
    /// Build the HTTP client and log in.
    pub async fn connect(config: &SwitchConfig) -> Result<Self, CoreError> {
        let client = SwitchClient::new(config.url.clone(), &config.transport())?;
        debug!(url = %config.url, "connecting to switch");
        client.login(&config.username, &config.password).await?;
        info!(url = %config.url, "logged in");
        Ok(Self { client })
    }
}

impl SwitchTransport for Switch {
    async fn apply(&self, payload: Payload<'_>) -> Result<(), CoreError> {
        match payload {
            Payload::Membership(records) => {
                let form = port_vlan_form(records);
                debug!(body = %serde_json::to_string(&form).unwrap_or_default(), "port membership form");
                self.client.set_port_vlans(&form).await?;
            }
            Payload::TagCross(records) => {
                let form = tag_vlan_form(records);
                debug!(body = %serde_json::to_string(&form).unwrap_or_default(), "tag cross-connect form");
                self.client.set_tag_vlans(&form).await?;
            }
        }
        Ok(())
    }

    async fn save(&self) -> Result<(), CoreError> {
        for map in VlanMap::ALL {
            self.client
                .save_vlan_map(map)
                .await
                .map_err(|e| CoreError::SaveFailed {
                    map: map.as_str().into(),
                    source: Box::new(CoreError::from(e)),
                })?;
            info!(map = map.as_str(), "saved vlan map");
        }
        Ok(())
    }

    async fn status(&self) -> Result<serde_json::Value, CoreError> {
        Ok(self.client.get_status().await?)
    }
}

// ── Runs ────────────────────────────────────────────────────────────

/// Compile `plan` and push it: membership first, then tag-cross.
///
/// Returns the compiled plan that was sent.
pub async fn apply_plan<T: SwitchTransport + Sync>(
    transport: &T,
    plan: &VlanPlan,
) -> Result<CompiledPlan, CoreError> {
    let compiled = compile(plan);

    transport
        .apply(Payload::Membership(&compiled.membership))
        .await
        .map_err(|e| CoreError::MembershipPushFailed {
            source: Box::new(e),
        })?;
    info!(ports = compiled.membership.len(), "updated port config");

    transport
        .apply(Payload::TagCross(&compiled.tag_cross))
        .await
        .map_err(|e| CoreError::TagPushFailed {
            source: Box::new(e),
        })?;
    info!(rows = compiled.tag_cross.len(), "applied vlan configuration");

    Ok(compiled)
}

/// Persist the running configuration.
pub async fn save_config<T: SwitchTransport + Sync>(transport: &T) -> Result<(), CoreError> {
    transport.save().await.map_err(|e| match e {
        already @ CoreError::SaveFailed { .. } => already,
        other => CoreError::SaveFailed {
            map: "vlan".into(),
            source: Box::new(other),
        },
    })
}
