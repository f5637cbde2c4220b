//! `swctl plan`: offline compilation preview.

use std::fmt::Write as _;

use serde::Serialize;
use tabled::Tabled;

use swctl_core::convert::{port_vlan_form, tag_vlan_form};
use swctl_core::{BridgeId, CompiledPlan, MembershipRecord, TagCrossRecord, compile};

use crate::cli::{GlobalOpts, PlanArgs};
use crate::config::Config;
use crate::error::CliError;
use crate::output;

use super::load_plan;

// ── Views ───────────────────────────────────────────────────────────

#[derive(Serialize)]
struct BridgeView {
    id: BridgeId,
    key: String,
}

#[derive(Serialize)]
struct PlanView<'a> {
    bridges: Vec<BridgeView>,
    membership: &'a [MembershipRecord],
    tag_cross: &'a [TagCrossRecord],
}

impl<'a> PlanView<'a> {
    fn new(compiled: &'a CompiledPlan) -> Self {
        Self {
            bridges: compiled
                .bridges
                .iter()
                .map(|(key, id)| BridgeView {
                    id,
                    key: key.to_string(),
                })
                .collect(),
            membership: &compiled.membership,
            tag_cross: &compiled.tag_cross,
        }
    }
}

// ── Table rows ──────────────────────────────────────────────────────

#[derive(Tabled)]
struct BridgeRow {
    #[tabled(rename = "Bridge")]
    id: BridgeId,
    #[tabled(rename = "Key")]
    key: String,
}

#[derive(Tabled)]
struct MembershipRow {
    #[tabled(rename = "Port")]
    port: u8,
    #[tabled(rename = "Wire")]
    wire: u8,
    #[tabled(rename = "Bridge")]
    bridge: BridgeId,
    #[tabled(rename = "Mode")]
    mode: &'static str,
}

#[derive(Tabled)]
struct TagCrossRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "Port")]
    port: u8,
    #[tabled(rename = "Wire")]
    wire: u8,
    #[tabled(rename = "Bridge")]
    bridge: BridgeId,
    #[tabled(rename = "VLAN")]
    vlan: u16,
}

fn mode(untagged: bool) -> &'static str {
    if untagged { "untagged" } else { "tagged" }
}

fn detail(view: &PlanView<'_>) -> String {
    let bridges: Vec<BridgeRow> = view
        .bridges
        .iter()
        .map(|b| BridgeRow {
            id: b.id,
            key: b.key.clone(),
        })
        .collect();
    let membership: Vec<MembershipRow> = view
        .membership
        .iter()
        .map(|m| MembershipRow {
            port: m.port.get(),
            wire: m.wire_port,
            bridge: m.bridge,
            mode: mode(m.untagged),
        })
        .collect();
    let tag_cross: Vec<TagCrossRow> = view
        .tag_cross
        .iter()
        .map(|t| TagCrossRow {
            index: t.index,
            port: t.port.get(),
            wire: t.wire_port,
            bridge: t.bridge,
            vlan: t.vlan.get(),
        })
        .collect();

    let mut out = String::new();
    let _ = writeln!(out, "Bridge groups\n{}", output::render_table(&bridges));
    let _ = writeln!(out, "\nPort membership\n{}", output::render_table(&membership));
    if tag_cross.is_empty() {
        let _ = write!(out, "\nTag cross-connects: none");
    } else {
        let _ = write!(out, "\nTag cross-connects\n{}", output::render_table(&tag_cross));
    }
    out
}

/// `membership <port> <bridge> <mode>` and `tag <index> <port> <bridge> <vlan>`.
fn plain(view: &PlanView<'_>) -> String {
    let membership = view
        .membership
        .iter()
        .map(|m| format!("membership {} {} {}", m.port, m.bridge, mode(m.untagged)));
    let tag_cross = view
        .tag_cross
        .iter()
        .map(|t| format!("tag {} {} {} {}", t.index, t.port, t.bridge, t.vlan));
    membership.chain(tag_cross).collect::<Vec<_>>().join("\n")
}

// ── Wire bodies ─────────────────────────────────────────────────────

#[derive(Serialize)]
struct WireView<P: Serialize, T: Serialize> {
    #[serde(rename = "port_vlan_cfg.json")]
    port_vlan: P,
    #[serde(rename = "tag_vlan_cfg.json")]
    tag_vlan: T,
}

// ── Handler ─────────────────────────────────────────────────────────

#[allow(clippy::needless_pass_by_value)]
pub fn handle(args: PlanArgs, global: &GlobalOpts, cfg: &Config) -> Result<(), CliError> {
    let plan = load_plan(args.conf, global, cfg)?;
    let compiled = compile(&plan);

    let out = if args.wire {
        let wire = WireView {
            port_vlan: port_vlan_form(&compiled.membership),
            tag_vlan: tag_vlan_form(&compiled.tag_cross),
        };
        output::render_single(
            &global.output,
            &wire,
            output::render_json_pretty,
            output::render_json_compact,
        )
    } else {
        output::render_single(&global.output, &PlanView::new(&compiled), detail, plain)
    };

    output::print_output(&out, global.quiet);
    Ok(())
}
