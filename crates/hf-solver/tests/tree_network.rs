//! End-to-end calculations on small hand-checkable networks.

use hf_hydraulics::{FlowRegime, FrictionModel};
use hf_network::{Edge, NetworkConfig, Node, demo_network};
use hf_solver::{SUCCESS_MESSAGE, calculate, calculate_many, calculate_unvalidated};

fn single_pipe() -> NetworkConfig {
    NetworkConfig::new(
        8.0,
        vec![Node::source("S"), Node::hydrant("H1", 500.0)],
        vec![Edge::new("P1", "S", "H1", 100.0, 100.0).with_k(2.0)],
    )
}

fn branched() -> NetworkConfig {
    NetworkConfig::new(
        8.0,
        vec![
            Node::source("S"),
            Node::junction("J1"),
            Node::junction("J2").at_elevation(2.0),
            Node::hydrant("H1", 500.0),
            Node::hydrant("H2", 500.0).at_elevation(3.0),
        ],
        vec![
            Edge::new("P1", "S", "J1", 50.0, 150.0),
            Edge::new("P2", "J1", "H1", 20.0, 65.0),
            Edge::new("P3", "J1", "J2", 30.0, 100.0),
            Edge::new("P4", "J2", "H2", 25.0, 65.0),
        ],
    )
}

#[test]
fn single_pipe_scenario() {
    let result = calculate(&single_pipe());
    assert!(result.success, "{}", result.message);
    assert_eq!(result.message, SUCCESS_MESSAGE);

    let seg = result.segment("P1").unwrap();
    assert_eq!(seg.flow_lpm, 500.0);
    assert!((seg.flow_m3s - 500.0 / 60_000.0).abs() < 1e-15);
    assert_eq!(seg.flow_regime, FlowRegime::Turbulent);
    assert!(seg.reynolds > 100_000.0);
    assert!(
        (seg.delta_p_total_bar - (seg.delta_p_major_bar + seg.delta_p_minor_bar)).abs() < 1e-15
    );

    let h1 = result.node("H1").unwrap();
    assert!(h1.pressure_bar > 0.0 && h1.pressure_bar < 8.0);
    assert!((h1.pressure_bar - (8.0 - seg.delta_p_total_bar)).abs() < 1e-12);
    assert_eq!(h1.distance_from_source_m, 100.0);
    assert_eq!(result.total_demand_lpm, 500.0);
    assert!(result.warnings.is_empty());
}

#[test]
fn branched_scenario() {
    let result = calculate(&branched());
    assert!(result.success, "{}", result.message);

    let flows: Vec<f64> = result.segments.iter().map(|s| s.flow_lpm).collect();
    assert_eq!(flows, vec![1000.0, 500.0, 500.0, 500.0]);

    let p = |id: &str| result.node(id).unwrap().pressure_bar;
    assert!(p("S") > p("J1"));
    assert!(p("J1") > p("H1"));
    assert!(p("J1") > p("J2"));
    assert!(p("J2") > p("H2"));

    let path = result.critical_path.as_ref().unwrap();
    assert_eq!(path.critical_hydrant, "H2");
    assert_eq!(path.path_nodes, vec!["S", "J1", "J2", "H2"]);
    assert_eq!(path.path_edges, vec!["P1", "P3", "P4"]);
    assert_eq!(path.total_length_m, 105.0);
    assert_eq!(path.critical_pressure_bar, p("H2"));
    assert_eq!(result.total_demand_lpm, 1000.0);
}

#[test]
fn elevation_flag_changes_pressures() {
    let with = calculate(&branched());
    let mut config = branched();
    config.include_elevation = false;
    let without = calculate(&config);

    let h2_with = with.node("H2").unwrap().pressure_bar;
    let h2_without = without.node("H2").unwrap().pressure_bar;
    let head = 998.0 * 9.81 * 3.0 / 1e5;
    assert!((h2_without - h2_with - head).abs() < 1e-9);
}

#[test]
fn nodes_in_bfs_order_segments_in_edge_order() {
    let result = calculate(&branched());
    let nodes: Vec<&str> = result.nodes.iter().map(|n| n.node_id.as_str()).collect();
    assert_eq!(nodes, vec!["S", "J1", "H1", "J2", "H2"]);
    let edges: Vec<&str> = result.segments.iter().map(|s| s.edge_id.as_str()).collect();
    assert_eq!(edges, vec!["P1", "P2", "P3", "P4"]);
}

#[test]
fn inactive_hydrant_contributes_nothing() {
    let mut config = branched();
    config.nodes[4].is_active = false;
    let result = calculate(&config);
    assert!(result.success, "{}", result.message);

    assert_eq!(result.segment("P4").unwrap().flow_lpm, 0.0);
    assert_eq!(result.segment("P3").unwrap().flow_lpm, 0.0);
    assert_eq!(result.segment("P1").unwrap().flow_lpm, 500.0);
    assert_eq!(result.total_demand_lpm, 500.0);

    let h2 = result.node("H2").unwrap();
    assert_eq!(h2.demand_lpm, 0.0);
    assert!(!h2.is_active);
    assert_eq!(result.critical_path.unwrap().critical_hydrant, "H1");
}

#[test]
fn zero_flow_edges_have_zero_losses() {
    let mut config = branched();
    config.nodes[4].is_active = false;
    let result = calculate(&config);

    for id in ["P3", "P4"] {
        let seg = result.segment(id).unwrap();
        assert_eq!(seg.delta_p_major_bar, 0.0);
        assert_eq!(seg.delta_p_minor_bar, 0.0);
        assert_eq!(seg.delta_p_total_bar, 0.0);
        assert_eq!(seg.velocity_ms, 0.0);
        assert_eq!(seg.flow_regime, FlowRegime::Laminar);
    }
}

#[test]
fn negative_pressure_is_a_warning_not_a_failure() {
    let mut config = single_pipe();
    config.source_pressure_bar = 0.05;
    let result = calculate(&config);

    assert!(result.success);
    let h1 = result.node("H1").unwrap().pressure_bar;
    assert!(h1 < 0.0);
    assert_eq!(
        result.warnings,
        vec![format!("Warning: Negative gauge pressure at node H1 ({h1:.2} bar)")]
    );
}

#[test]
fn loop_is_rejected_by_name() {
    let mut config = branched();
    config.edges.push(Edge::new("P5", "H2", "J1", 10.0, 65.0));
    let result = calculate(&config);

    assert!(!result.success);
    assert!(result.message.starts_with("Network validation failed: "));
    assert!(result.message.contains("Loop detected: edge 'P5' creates cycle at node 'J1'"));
    assert!(result.segments.is_empty());
    assert!(result.critical_path.is_none());
}

#[test]
fn no_active_hydrants_does_not_crash() {
    let mut config = branched();
    config.nodes[3].is_active = false;
    config.nodes[4].is_active = false;

    let checked = calculate(&config);
    assert!(!checked.success);
    assert!(checked.message.contains("No active hydrants found"));

    let result = calculate_unvalidated(&config);
    assert!(result.success, "{}", result.message);
    assert!(result.critical_path.is_none());
    assert_eq!(result.total_demand_lpm, 0.0);
    assert!(result.segments.iter().all(|s| s.delta_p_total_bar == 0.0));
}

#[test]
fn internal_failure_becomes_unsuccessful_result() {
    let mut config = single_pipe();
    config.edges[0].to_node = "missing".into();

    let result = calculate_unvalidated(&config);
    assert!(!result.success);
    assert!(result.message.starts_with("Calculation error: "));
    assert!(result.message.contains("missing"));
}

#[test]
fn colebrook_option_tracks_swamee_jain() {
    let sj = calculate(&demo_network());
    let mut config = demo_network();
    config.friction_model = FrictionModel::Colebrook;
    let cw = calculate(&config);
    assert!(cw.success, "{}", cw.message);
    assert!(cw.warnings.is_empty());

    for (a, b) in sj.segments.iter().zip(&cw.segments) {
        let rel = (a.friction_factor - b.friction_factor).abs() / b.friction_factor;
        assert!(rel < 0.03, "{}: {} vs {}", a.edge_id, a.friction_factor, b.friction_factor);
    }
    let h2_sj = sj.node("H2").unwrap().pressure_bar;
    let h2_cw = cw.node("H2").unwrap().pressure_bar;
    assert!((h2_sj - h2_cw).abs() < 0.05);
}

#[test]
fn batch_keeps_input_order() {
    let mut low = single_pipe();
    low.source_pressure_bar = 4.0;
    let configs = vec![single_pipe(), demo_network(), low, branched()];

    let results = calculate_many(&configs);
    assert_eq!(results.len(), 4);
    assert!(results.iter().all(|r| r.success));
    assert_eq!(results[0], calculate(&configs[0]));
    assert_eq!(results[1].nodes.len(), 5);
    assert!(results[2].node("H1").unwrap().pressure_bar < 4.0);
    assert_eq!(results[3], calculate(&configs[3]));
}

#[test]
fn result_serializes_with_wire_names() {
    let result = calculate(&demo_network());
    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(json["success"], true);
    assert_eq!(json["segments"][0]["flow_regime"], "turbulent");
    assert_eq!(json["nodes"][0]["type"], "source");
    assert_eq!(json["critical_path"]["critical_hydrant"], "H2");

    let back: hf_solver::CalculationResult = serde_json::from_value(json).unwrap();
    assert_eq!(back.nodes.len(), result.nodes.len());
    assert_eq!(back.critical_path.unwrap().path_edges, vec!["P1", "P2", "P4"]);
}
