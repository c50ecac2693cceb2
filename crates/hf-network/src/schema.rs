//! Network schema definitions.
//!
//! Field names follow the on-disk format (`node_id`, `type`, `minor_K`, ...);
//! numeric fields carry their display unit in the name.

use hf_core::units::convert;
use hf_hydraulics::{Fluid, FrictionModel, HydraulicsResult, k_factor};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Source,
    Junction,
    Hydrant,
}

impl NodeKind {
    pub fn label(self) -> &'static str {
        match self {
            NodeKind::Source => "source",
            NodeKind::Junction => "junction",
            NodeKind::Hydrant => "hydrant",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Node {
    #[serde(rename = "node_id")]
    pub id: String,
    #[serde(rename = "type")]
    pub kind: NodeKind,
    #[serde(default)]
    pub elevation_m: f64,
    /// Only counted for active hydrants.
    #[serde(default)]
    pub demand_lpm: f64,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

impl Node {
    fn with_kind(id: impl Into<String>, kind: NodeKind) -> Self {
        Self {
            id: id.into(),
            kind,
            elevation_m: 0.0,
            demand_lpm: 0.0,
            is_active: true,
        }
    }

    pub fn source(id: impl Into<String>) -> Self {
        Self::with_kind(id, NodeKind::Source)
    }

    pub fn junction(id: impl Into<String>) -> Self {
        Self::with_kind(id, NodeKind::Junction)
    }

    pub fn hydrant(id: impl Into<String>, demand_lpm: f64) -> Self {
        Self {
            demand_lpm,
            ..Self::with_kind(id, NodeKind::Hydrant)
        }
    }

    pub fn at_elevation(mut self, elevation_m: f64) -> Self {
        self.elevation_m = elevation_m;
        self
    }

    pub fn inactive(mut self) -> Self {
        self.is_active = false;
        self
    }

    /// Active hydrant whose demand enters the flow balance.
    pub fn is_demand_point(&self) -> bool {
        self.kind == NodeKind::Hydrant && self.is_active
    }

    /// Demand as counted by the calculation: 0 unless an active hydrant.
    pub fn effective_demand_lpm(&self) -> f64 {
        if self.is_demand_point() {
            self.demand_lpm
        } else {
            0.0
        }
    }
}

/// Named fitting with its own loss coefficient.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MinorLossComponent {
    pub name: String,
    #[serde(rename = "K")]
    pub k: f64,
}

impl MinorLossComponent {
    pub fn new(name: impl Into<String>, k: f64) -> Self {
        Self {
            name: name.into(),
            k,
        }
    }

    /// Build a component from the standard K-factor table.
    pub fn from_catalog(name: &str) -> Option<Self> {
        k_factor(name).map(|k| Self::new(name, k))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Edge {
    #[serde(rename = "edge_id")]
    pub id: String,
    pub from_node: String,
    pub to_node: String,
    pub length_m: f64,
    pub diameter_mm: f64,
    #[serde(default = "default_roughness_mm")]
    pub roughness_mm: f64,
    #[serde(rename = "minor_K", default)]
    pub minor_k: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minor_components: Option<Vec<MinorLossComponent>>,
}

impl Edge {
    pub fn new(
        id: impl Into<String>,
        from_node: impl Into<String>,
        to_node: impl Into<String>,
        length_m: f64,
        diameter_mm: f64,
    ) -> Self {
        Self {
            id: id.into(),
            from_node: from_node.into(),
            to_node: to_node.into(),
            length_m,
            diameter_mm,
            roughness_mm: default_roughness_mm(),
            minor_k: 0.0,
            minor_components: None,
        }
    }

    pub fn with_k(mut self, k: f64) -> Self {
        self.minor_k = k;
        self
    }

    pub fn with_components(mut self, components: Vec<MinorLossComponent>) -> Self {
        self.minor_components = Some(components);
        self
    }

    /// Total minor-loss coefficient.
    ///
    /// A non-empty component list replaces `minor_K`; the two are never added.
    pub fn total_k(&self) -> f64 {
        match &self.minor_components {
            Some(components) if !components.is_empty() => {
                components.iter().map(|c| c.k).sum()
            }
            _ => self.minor_k,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct FluidProperties {
    #[serde(default = "default_density")]
    pub density_kg_m3: f64,
    #[serde(default = "default_viscosity")]
    pub viscosity_pa_s: f64,
}

impl Default for FluidProperties {
    fn default() -> Self {
        Self {
            density_kg_m3: default_density(),
            viscosity_pa_s: default_viscosity(),
        }
    }
}

impl FluidProperties {
    pub fn to_fluid(&self) -> HydraulicsResult<Fluid> {
        Fluid::new(self.density_kg_m3, self.viscosity_pa_s)
    }
}

/// Display unit for pressures. Calculations always run in bar/Pa.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PressureUnit {
    #[default]
    #[serde(rename = "bar")]
    Bar,
    #[serde(rename = "kPa")]
    KPa,
    #[serde(rename = "MPa")]
    MPa,
}

impl PressureUnit {
    pub fn from_bar(self, value_bar: f64) -> f64 {
        match self {
            PressureUnit::Bar => value_bar,
            PressureUnit::KPa => convert::bar_to_kpa(value_bar),
            PressureUnit::MPa => convert::bar_to_mpa(value_bar),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PressureUnit::Bar => "bar",
            PressureUnit::KPa => "kPa",
            PressureUnit::MPa => "MPa",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NetworkConfig {
    #[serde(default)]
    pub nodes: Vec<Node>,
    #[serde(default)]
    pub edges: Vec<Edge>,
    pub source_pressure_bar: f64,
    #[serde(default)]
    pub fluid: FluidProperties,
    #[serde(default = "default_true")]
    pub include_elevation: bool,
    #[serde(default)]
    pub pressure_unit: PressureUnit,
    #[serde(default)]
    pub friction_model: FrictionModel,
}

impl NetworkConfig {
    pub fn new(source_pressure_bar: f64, nodes: Vec<Node>, edges: Vec<Edge>) -> Self {
        Self {
            nodes,
            edges,
            source_pressure_bar,
            fluid: FluidProperties::default(),
            include_elevation: true,
            pressure_unit: PressureUnit::default(),
            friction_model: FrictionModel::default(),
        }
    }

    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// First declared source node.
    pub fn source(&self) -> Option<&Node> {
        self.nodes.iter().find(|n| n.kind == NodeKind::Source)
    }

    pub fn active_hydrants(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter().filter(|n| n.is_demand_point())
    }

    pub fn total_active_demand_lpm(&self) -> f64 {
        self.active_hydrants().map(|n| n.demand_lpm).sum()
    }
}

fn default_true() -> bool {
    true
}

fn default_roughness_mm() -> f64 {
    0.045
}

fn default_density() -> f64 {
    hf_hydraulics::fluid::WATER_20C_DENSITY
}

fn default_viscosity() -> f64 {
    hf_hydraulics::fluid::WATER_20C_VISCOSITY
}
