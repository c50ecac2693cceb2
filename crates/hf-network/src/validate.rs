//! Network validation logic.
//!
//! Every check runs and every failure is collected, so a user sees all
//! defects of a configuration at once. The order of the checks is stable:
//! identifiers, references, source, values, loops, connectivity, demand.

use std::collections::{HashMap, HashSet};
use std::fmt;

use hf_core::NodeId;
use hf_graph::{Graph, GraphBuilder, GraphResult, NameIndex, traverse};

use crate::schema::{NetworkConfig, NodeKind};

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Duplicate node IDs found: {}", .ids.join(", "))]
    DuplicateNodeIds { ids: Vec<String> },

    #[error("Duplicate edge IDs found: {}", .ids.join(", "))]
    DuplicateEdgeIds { ids: Vec<String> },

    #[error("Edge '{edge}' references non-existent from_node '{node}'")]
    MissingFromNode { edge: String, node: String },

    #[error("Edge '{edge}' references non-existent to_node '{node}'")]
    MissingToNode { edge: String, node: String },

    #[error("No source node found. Network must have exactly one source.")]
    NoSource,

    #[error(
        "Multiple source nodes found: {}. Network must have exactly one source.",
        .ids.join(", ")
    )]
    MultipleSources { ids: Vec<String> },

    #[error("Edge '{edge}' has invalid length: {value} m")]
    InvalidLength { edge: String, value: f64 },

    #[error("Edge '{edge}' has invalid diameter: {value} mm")]
    InvalidDiameter { edge: String, value: f64 },

    #[error("Edge '{edge}' has invalid roughness: {value} mm")]
    InvalidRoughness { edge: String, value: f64 },

    #[error("Edge '{edge}' has invalid minor loss coefficient: K = {value}")]
    InvalidMinorK { edge: String, value: f64 },

    #[error("Edge '{edge}' component '{component}' has invalid K: {value}")]
    InvalidComponentK {
        edge: String,
        component: String,
        value: f64,
    },

    #[error("Node '{node}' has negative demand: {value} L/min")]
    NegativeDemand { node: String, value: f64 },

    #[error("Node '{node}' has invalid demand: {value} L/min")]
    InvalidDemand { node: String, value: f64 },

    #[error("Node '{node}' has invalid elevation: {value} m")]
    InvalidElevation { node: String, value: f64 },

    #[error("Source pressure must be positive: {value} bar")]
    InvalidSourcePressure { value: f64 },

    #[error("Fluid {property} must be positive: {value}")]
    InvalidFluidProperty { property: &'static str, value: f64 },

    #[error("Loop detected: edge '{edge}' creates cycle at node '{node}'")]
    Loop { edge: String, node: String },

    #[error(
        "Network has {edges} edges but only {nodes} nodes. A tree should have {expected} edges. This may indicate loops.",
        expected = .nodes.saturating_sub(1)
    )]
    TooManyEdges { edges: usize, nodes: usize },

    #[error(
        "Network has {edges} edges for {nodes} nodes. A tree should have {expected} edges. This may indicate disconnected nodes.",
        expected = .nodes.saturating_sub(1)
    )]
    TooFewEdges { edges: usize, nodes: usize },

    #[error(
        "The following nodes are not reachable from source '{source_id}': {}",
        .nodes.join(", ")
    )]
    Unreachable { source_id: String, nodes: Vec<String> },

    #[error("Cannot validate connectivity: no source node found")]
    ConnectivityWithoutSource,

    #[error("Cannot analyse network topology: {what}")]
    Topology { what: String },

    #[error("No active hydrants found. Activate at least one hydrant with demand > 0.")]
    NoActiveHydrants,

    #[error("Total demand is zero. Set positive demand for active hydrants.")]
    ZeroTotalDemand,
}

/// Outcome of validating a network: all errors found, in check order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationReport {
    pub errors: Vec<ValidationError>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.messages().join("; "))
    }
}

impl std::error::Error for ValidationReport {}

/// Run every structural and value check against `config`.
pub fn validate(config: &NetworkConfig) -> ValidationReport {
    let mut errors = Vec::new();

    check_unique_ids(config, &mut errors);
    check_edge_references(config, &mut errors);
    check_single_source(config, &mut errors);
    check_values(config, &mut errors);

    match topology(config) {
        Ok(graph) => {
            check_no_loops(&graph, &mut errors);
            check_edge_count(config, &mut errors);
            check_connected_from_source(config, &graph, &mut errors);
        }
        Err(e) => errors.push(ValidationError::Topology {
            what: e.to_string(),
        }),
    }
    check_hydrant_demands(config, &mut errors);

    ValidationReport { errors }
}

/// Validity flag and human-readable messages.
pub fn validate_network(config: &NetworkConfig) -> (bool, Vec<String>) {
    let report = validate(config);
    (report.is_valid(), report.messages())
}

fn duplicates<'a>(ids: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut dups: Vec<String> = ids
        .filter(|id| !seen.insert(*id))
        .map(str::to_string)
        .collect();
    dups.sort();
    dups.dedup();
    dups
}

fn check_unique_ids(config: &NetworkConfig, errors: &mut Vec<ValidationError>) {
    let ids = duplicates(config.nodes.iter().map(|n| n.id.as_str()));
    if !ids.is_empty() {
        errors.push(ValidationError::DuplicateNodeIds { ids });
    }

    let ids = duplicates(config.edges.iter().map(|e| e.id.as_str()));
    if !ids.is_empty() {
        errors.push(ValidationError::DuplicateEdgeIds { ids });
    }
}

fn check_edge_references(config: &NetworkConfig, errors: &mut Vec<ValidationError>) {
    let node_ids: HashSet<&str> = config.nodes.iter().map(|n| n.id.as_str()).collect();

    for edge in &config.edges {
        if !node_ids.contains(edge.from_node.as_str()) {
            errors.push(ValidationError::MissingFromNode {
                edge: edge.id.clone(),
                node: edge.from_node.clone(),
            });
        }
        if !node_ids.contains(edge.to_node.as_str()) {
            errors.push(ValidationError::MissingToNode {
                edge: edge.id.clone(),
                node: edge.to_node.clone(),
            });
        }
    }
}

fn check_single_source(config: &NetworkConfig, errors: &mut Vec<ValidationError>) {
    let ids: Vec<String> = config
        .nodes
        .iter()
        .filter(|n| n.kind == NodeKind::Source)
        .map(|n| n.id.clone())
        .collect();

    match ids.len() {
        0 => errors.push(ValidationError::NoSource),
        1 => {}
        _ => errors.push(ValidationError::MultipleSources { ids }),
    }
}

fn is_positive(v: f64) -> bool {
    v.is_finite() && v > 0.0
}

fn is_non_negative(v: f64) -> bool {
    v.is_finite() && v >= 0.0
}

fn check_values(config: &NetworkConfig, errors: &mut Vec<ValidationError>) {
    for edge in &config.edges {
        if !is_positive(edge.length_m) {
            errors.push(ValidationError::InvalidLength {
                edge: edge.id.clone(),
                value: edge.length_m,
            });
        }
        if !is_positive(edge.diameter_mm) {
            errors.push(ValidationError::InvalidDiameter {
                edge: edge.id.clone(),
                value: edge.diameter_mm,
            });
        }
        if !is_non_negative(edge.roughness_mm) {
            errors.push(ValidationError::InvalidRoughness {
                edge: edge.id.clone(),
                value: edge.roughness_mm,
            });
        }
        if !is_non_negative(edge.minor_k) {
            errors.push(ValidationError::InvalidMinorK {
                edge: edge.id.clone(),
                value: edge.minor_k,
            });
        }
        for component in edge.minor_components.iter().flatten() {
            if !is_non_negative(component.k) {
                errors.push(ValidationError::InvalidComponentK {
                    edge: edge.id.clone(),
                    component: component.name.clone(),
                    value: component.k,
                });
            }
        }
    }

    for node in &config.nodes {
        if node.demand_lpm < 0.0 {
            errors.push(ValidationError::NegativeDemand {
                node: node.id.clone(),
                value: node.demand_lpm,
            });
        } else if !node.demand_lpm.is_finite() {
            errors.push(ValidationError::InvalidDemand {
                node: node.id.clone(),
                value: node.demand_lpm,
            });
        }
        if !node.elevation_m.is_finite() {
            errors.push(ValidationError::InvalidElevation {
                node: node.id.clone(),
                value: node.elevation_m,
            });
        }
    }

    if !is_positive(config.source_pressure_bar) {
        errors.push(ValidationError::InvalidSourcePressure {
            value: config.source_pressure_bar,
        });
    }
    if !is_positive(config.fluid.density_kg_m3) {
        errors.push(ValidationError::InvalidFluidProperty {
            property: "density",
            value: config.fluid.density_kg_m3,
        });
    }
    if !is_positive(config.fluid.viscosity_pa_s) {
        errors.push(ValidationError::InvalidFluidProperty {
            property: "viscosity",
            value: config.fluid.viscosity_pa_s,
        });
    }
}

/// Directed graph of the configuration for the topology checks.
///
/// Duplicate node ids collapse onto their first declaration; edges with a
/// missing endpoint are left out (they are reported separately).
fn topology(config: &NetworkConfig) -> GraphResult<Graph> {
    let mut builder = GraphBuilder::new();
    let mut ids: HashMap<&str, NodeId> = HashMap::new();
    for node in &config.nodes {
        if !ids.contains_key(node.id.as_str()) {
            ids.insert(node.id.as_str(), builder.add_node(node.id.as_str()));
        }
    }

    for edge in &config.edges {
        if let (Some(&from), Some(&to)) = (
            ids.get(edge.from_node.as_str()),
            ids.get(edge.to_node.as_str()),
        ) {
            builder.add_link(edge.id.as_str(), from, to);
        }
    }

    builder.build()
}

fn check_no_loops(graph: &Graph, errors: &mut Vec<ValidationError>) {
    if let Some(witness) = traverse::find_cycle(graph) {
        let edge = graph.link(witness.link).map(|l| l.name.clone());
        let node = graph.node(witness.node).map(|n| n.name.clone());
        if let (Some(edge), Some(node)) = (edge, node) {
            errors.push(ValidationError::Loop { edge, node });
        }
    }
}

fn check_edge_count(config: &NetworkConfig, errors: &mut Vec<ValidationError>) {
    let nodes = config.nodes.len();
    let edges = config.edges.len();
    let expected = nodes.saturating_sub(1);
    if edges > expected {
        errors.push(ValidationError::TooManyEdges { edges, nodes });
    } else if edges < expected {
        errors.push(ValidationError::TooFewEdges { edges, nodes });
    }
}

fn check_connected_from_source(
    config: &NetworkConfig,
    graph: &Graph,
    errors: &mut Vec<ValidationError>,
) {
    let Some(source) = config.source() else {
        errors.push(ValidationError::ConnectivityWithoutSource);
        return;
    };
    let Ok(start) = NameIndex::from_graph(graph).node_id(&source.id) else {
        return;
    };

    let mut nodes: Vec<String> = traverse::unreachable_from(graph, start)
        .into_iter()
        .filter_map(|id| graph.node(id).map(|n| n.name.clone()))
        .collect();
    if !nodes.is_empty() {
        nodes.sort();
        errors.push(ValidationError::Unreachable {
            source_id: source.id.clone(),
            nodes,
        });
    }
}

fn check_hydrant_demands(config: &NetworkConfig, errors: &mut Vec<ValidationError>) {
    let mut active = config.active_hydrants().peekable();
    if active.peek().is_none() {
        errors.push(ValidationError::NoActiveHydrants);
    } else if active.map(|n| n.demand_lpm).sum::<f64>() == 0.0 {
        errors.push(ValidationError::ZeroTotalDemand);
    }
}
