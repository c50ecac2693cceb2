//! Built-in demonstration network.

use crate::schema::{Edge, MinorLossComponent, NetworkConfig, Node};

fn fittings(names: &[&str]) -> Vec<MinorLossComponent> {
    names
        .iter()
        .filter_map(|name| MinorLossComponent::from_catalog(name))
        .collect()
}

/// Source S at 8 bar feeding two 500 L/min hydrants through junctions J1/J2.
///
/// ```text
/// S --P1--> J1 --P2--> J2 (+2 m) --P4--> H2 (+3 m)
///            \
///             --P3--> H1
/// ```
pub fn demo_network() -> NetworkConfig {
    let nodes = vec![
        Node::source("S"),
        Node::junction("J1"),
        Node::junction("J2").at_elevation(2.0),
        Node::hydrant("H1", 500.0),
        Node::hydrant("H2", 500.0).at_elevation(3.0),
    ];

    let edges = vec![
        Edge::new("P1", "S", "J1", 50.0, 150.0)
            .with_k(0.5)
            .with_components(fittings(&["gate_valve_open", "tee_run"])),
        Edge::new("P2", "J1", "J2", 30.0, 100.0)
            .with_k(1.3)
            .with_components(fittings(&["elbow_90_standard", "tee_run", "gate_valve_open"])),
        Edge::new("P3", "J1", "H1", 20.0, 65.0)
            .with_k(3.4)
            .with_components(fittings(&["tee_branch", "elbow_90_standard", "hydrant_outlet"])),
        Edge::new("P4", "J2", "H2", 25.0, 65.0)
            .with_k(4.4)
            .with_components(fittings(&["tee_branch", "elbow_90_standard", "hydrant_outlet"])),
    ];

    NetworkConfig::new(8.0, nodes, edges)
}
