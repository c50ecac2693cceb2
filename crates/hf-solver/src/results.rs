//! Calculation result structures.
//!
//! Pressures are in bar and flows in L/min throughout; conversion to the
//! configured display unit is left to the presentation layer.

use hf_hydraulics::FlowRegime;
use hf_network::NodeKind;
use serde::{Deserialize, Serialize};

/// Hydraulic result for one pipe segment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SegmentResult {
    pub edge_id: String,
    pub from_node: String,
    pub to_node: String,
    pub flow_lpm: f64,
    pub flow_m3s: f64,
    pub velocity_ms: f64,
    pub reynolds: f64,
    /// Darcy friction factor
    pub friction_factor: f64,
    pub delta_p_major_bar: f64,
    pub delta_p_minor_bar: f64,
    pub delta_p_total_bar: f64,
    pub flow_regime: FlowRegime,
}

/// Resolved state of one node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeResult {
    pub node_id: String,
    #[serde(rename = "type")]
    pub kind: NodeKind,
    pub elevation_m: f64,
    /// Declared demand, or 0 for an inactive node.
    pub demand_lpm: f64,
    pub pressure_bar: f64,
    pub is_active: bool,
    #[serde(default)]
    pub distance_from_source_m: f64,
}

/// Source-to-hydrant route ending at the lowest-pressure active hydrant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CriticalPath {
    pub path_nodes: Vec<String>,
    pub path_edges: Vec<String>,
    pub total_length_m: f64,
    pub critical_hydrant: String,
    pub critical_pressure_bar: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    pub success: bool,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub segments: Vec<SegmentResult>,
    #[serde(default)]
    pub nodes: Vec<NodeResult>,
    #[serde(default)]
    pub critical_path: Option<CriticalPath>,
    #[serde(default)]
    pub total_demand_lpm: f64,
    #[serde(default)]
    pub warnings: Vec<String>,
}

impl CalculationResult {
    /// Failed calculation carrying only a message and the warnings so far.
    pub fn failure(message: impl Into<String>, warnings: Vec<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            segments: Vec::new(),
            nodes: Vec::new(),
            critical_path: None,
            total_demand_lpm: 0.0,
            warnings,
        }
    }

    pub fn segment(&self, edge_id: &str) -> Option<&SegmentResult> {
        self.segments.iter().find(|s| s.edge_id == edge_id)
    }

    pub fn node(&self, node_id: &str) -> Option<&NodeResult> {
        self.nodes.iter().find(|n| n.node_id == node_id)
    }
}
