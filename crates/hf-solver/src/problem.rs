//! Problem definition for tree network solving.

use std::collections::HashMap;

use hf_core::units::{convert, m, mm};
use hf_core::{LinkId, NodeId};
use hf_graph::{Graph, GraphBuilder, GraphError};
use hf_hydraulics::{Fluid, FrictionModel, PipeSegment};
use hf_network::{NetworkConfig, NodeKind};

use crate::error::{SolverError, SolverResult};

/// Tree network problem in solver form.
///
/// Node slots follow the declaration order of the configuration's nodes and
/// link slots follow its edges, so `graph.links()[i]` is `config.edges[i]`.
pub struct TreeProblem<'a> {
    pub config: &'a NetworkConfig,

    /// Network topology
    pub graph: Graph,

    /// Node with the fixed (source) pressure
    pub source: NodeId,

    /// Demand counted at each node, L/min (0 unless an active hydrant)
    pub demand_lpm: Vec<f64>,

    /// Node elevations, m
    pub elevation_m: Vec<f64>,

    /// Pipe segments indexed by link slot
    pub segments: Vec<PipeSegment>,

    pub fluid: Fluid,
    pub friction_model: FrictionModel,
    pub include_elevation: bool,
    pub source_pressure_bar: f64,
}

impl<'a> TreeProblem<'a> {
    /// Build the solver form of `config`.
    ///
    /// Only the minimum needed to index the network is checked here; the full
    /// structural validation lives in `hf_network::validate`.
    pub fn from_config(config: &'a NetworkConfig) -> SolverResult<Self> {
        let mut builder = GraphBuilder::new();
        let mut ids: HashMap<&str, NodeId> = HashMap::new();
        for node in &config.nodes {
            let id = builder.add_node(node.id.as_str());
            ids.entry(node.id.as_str()).or_insert(id);
        }
        let lookup = |name: &str| {
            ids.get(name).copied().ok_or_else(|| GraphError::NameNotFound {
                what: "Node",
                name: name.to_string(),
            })
        };

        for edge in &config.edges {
            builder.add_link(edge.id.as_str(), lookup(&edge.from_node)?, lookup(&edge.to_node)?);
        }
        let graph = builder.build()?;

        let source_name = config
            .source()
            .map(|n| n.id.as_str())
            .ok_or_else(|| SolverError::ProblemSetup {
                what: "no source node".to_string(),
            })?;
        let source = lookup(source_name)?;

        let segments = config
            .edges
            .iter()
            .map(|edge| {
                PipeSegment::new(
                    edge.id.clone(),
                    m(edge.length_m),
                    mm(edge.diameter_mm),
                    mm(edge.roughness_mm),
                    edge.total_k(),
                )
            })
            .collect();

        Ok(Self {
            config,
            graph,
            source,
            demand_lpm: config.nodes.iter().map(|n| n.effective_demand_lpm()).collect(),
            elevation_m: config.nodes.iter().map(|n| n.elevation_m).collect(),
            segments,
            fluid: config.fluid.to_fluid()?,
            friction_model: config.friction_model,
            include_elevation: config.include_elevation,
            source_pressure_bar: config.source_pressure_bar,
        })
    }

    pub fn node_name(&self, node: NodeId) -> &str {
        self.graph.node(node).map(|n| n.name.as_str()).unwrap_or("?")
    }

    pub fn node_kind(&self, node: NodeId) -> Option<NodeKind> {
        self.config.nodes.get(node.slot()).map(|n| n.kind)
    }

    pub fn segment(&self, link: LinkId) -> SolverResult<&PipeSegment> {
        self.segments
            .get(link.slot())
            .ok_or_else(|| SolverError::InvalidState {
                what: format!("no pipe segment for link {link}"),
            })
    }

    pub fn length_m(&self, link: LinkId) -> f64 {
        self.segments
            .get(link.slot())
            .map(|s| s.length.value)
            .unwrap_or(0.0)
    }

    /// Elevation change along `link` in bar, 0 when elevation is disabled.
    pub fn elevation_drop_bar(&self, from: NodeId, to: NodeId) -> f64 {
        if !self.include_elevation {
            return 0.0;
        }
        let z = |n: NodeId| self.elevation_m.get(n.slot()).copied().unwrap_or(0.0);
        let dp = hf_hydraulics::elevation_loss(z(to) - z(from), self.fluid.density.value);
        convert::pa_to_bar(dp)
    }
}
