use clap::{Parser, Subcommand};
use hf_hydraulics::{FrictionModel, K_FACTORS};
use hf_network::{NetworkConfig, NetworkResult, PressureUnit, demo_network, load, validate};
use hf_solver::{CalculationResult, calculate};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "hf-cli")]
#[command(about = "HydrantFlow CLI - Tree hydrant network calculator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate network file structure
    Validate {
        /// Path to the network file (.yaml or .json)
        network_path: PathBuf,
    },
    /// Calculate flows and pressures
    Calculate {
        /// Path to the network file (.yaml or .json)
        network_path: PathBuf,
        /// Use Colebrook-White instead of Swamee-Jain for turbulent friction
        #[arg(long)]
        colebrook: bool,
        /// Print the full result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the built-in demo network
    Demo {
        /// Print as JSON instead of YAML
        #[arg(long)]
        json: bool,
    },
    /// List standard minor-loss K factors
    KFactors,
}

fn main() -> NetworkResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { network_path } => cmd_validate(&network_path),
        Commands::Calculate {
            network_path,
            colebrook,
            json,
        } => cmd_calculate(&network_path, colebrook, json),
        Commands::Demo { json } => cmd_demo(json),
        Commands::KFactors => {
            cmd_k_factors();
            Ok(())
        }
    }
}

fn cmd_validate(network_path: &Path) -> NetworkResult<()> {
    println!("Validating network: {}", network_path.display());
    let config = load(network_path)?;
    let report = validate(&config);

    if report.is_valid() {
        println!("✓ Network is valid");
        return Ok(());
    }

    println!("✗ Network is invalid:");
    for message in report.messages() {
        println!("  - {message}");
    }
    std::process::exit(1);
}

fn cmd_calculate(network_path: &Path, colebrook: bool, json: bool) -> NetworkResult<()> {
    let mut config = load(network_path)?;
    if colebrook {
        config.friction_model = FrictionModel::Colebrook;
    }
    tracing::info!(
        nodes = config.nodes.len(),
        edges = config.edges.len(),
        "calculating network"
    );

    let result = calculate(&config);

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print_result(&config, &result);
    }

    if !result.success {
        std::process::exit(1);
    }
    Ok(())
}

fn cmd_demo(json: bool) -> NetworkResult<()> {
    let demo = demo_network();
    if json {
        println!("{}", serde_json::to_string_pretty(&demo)?);
    } else {
        print!("{}", serde_yaml::to_string(&demo)?);
    }
    Ok(())
}

fn cmd_k_factors() {
    println!("{:<24} {:>6}", "Component", "K");
    for (name, k) in K_FACTORS {
        println!("{name:<24} {k:>6.2}");
    }
}

fn print_result(config: &NetworkConfig, result: &CalculationResult) {
    if !result.success {
        println!("✗ {}", result.message);
        print_warnings(result);
        return;
    }

    let unit = config.pressure_unit;
    let p = |bar: f64| unit.from_bar(bar);
    let label = unit.label();
    // Loss columns use a finer resolution than node pressures.
    let loss_decimals = match unit {
        PressureUnit::Bar => 4,
        PressureUnit::KPa => 2,
        PressureUnit::MPa => 5,
    };

    println!("✓ {}", result.message);
    println!("  Total demand: {:.1} L/min", result.total_demand_lpm);
    println!();

    println!(
        "{:<10} {:<8} {:<8} {:>10} {:>8} {:>10} {:>8} {:>12} {:>12} {:>10}",
        "Segment",
        "From",
        "To",
        "Q [L/min]",
        "v [m/s]",
        "Re",
        "f",
        format!("dP maj [{label}]"),
        format!("dP min [{label}]"),
        "Regime"
    );
    for seg in &result.segments {
        println!(
            "{:<10} {:<8} {:<8} {:>10.1} {:>8.3} {:>10.0} {:>8.5} {:>12.prec$} {:>12.prec$} {:>10}",
            seg.edge_id,
            seg.from_node,
            seg.to_node,
            seg.flow_lpm,
            seg.velocity_ms,
            seg.reynolds,
            seg.friction_factor,
            p(seg.delta_p_major_bar),
            p(seg.delta_p_minor_bar),
            seg.flow_regime,
            prec = loss_decimals,
        );
    }
    println!();

    println!(
        "{:<10} {:<9} {:>8} {:>12} {:>12} {:>10}",
        "Node",
        "Type",
        "z [m]",
        "Q [L/min]",
        format!("p [{label}]"),
        "L [m]"
    );
    for node in &result.nodes {
        println!(
            "{:<10} {:<9} {:>8.2} {:>12.1} {:>12.3} {:>10.1}",
            node.node_id,
            node.kind.label(),
            node.elevation_m,
            node.demand_lpm,
            p(node.pressure_bar),
            node.distance_from_source_m
        );
    }

    if let Some(path) = &result.critical_path {
        println!();
        println!(
            "Critical hydrant: {} at {:.3} {label}",
            path.critical_hydrant,
            p(path.critical_pressure_bar)
        );
        println!("  Path: {}", path.path_nodes.join(" -> "));
        println!("  Pipes: {}", path.path_edges.join(", "));
        println!("  Length: {:.1} m", path.total_length_m);
    }

    print_warnings(result);
}

fn print_warnings(result: &CalculationResult) {
    if result.warnings.is_empty() {
        return;
    }
    println!();
    for warning in &result.warnings {
        println!("⚠ {warning}");
    }
}
