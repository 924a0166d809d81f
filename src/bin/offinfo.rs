//! OFF File Inspector
//!
//! A command-line tool for inspecting OFF polyhedron files using the
//! offmodel library. Prints element counts and colour usage, and can dump
//! the parsed model as JSON.

#![forbid(unsafe_code)]

use clap::Parser;
use offmodel::{ColorOverrides, DefaultColors, ParserConfig, PolyhedronModel, resolve_colors};
use std::path::PathBuf;

/// Command-line arguments for the OFF inspector
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the OFF file to inspect
    #[arg(value_name = "FILE")]
    file_path: PathBuf,

    /// Reject files whose first line is not "OFF"
    #[arg(long)]
    strict_header: bool,

    /// Do not check vertex references after parsing
    #[arg(long)]
    no_validate: bool,

    /// List every edge with its colour
    #[arg(short, long)]
    edges: bool,

    /// Print the parsed model as JSON instead of the summary
    #[arg(long)]
    json: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let mut config = ParserConfig::new();
    if args.strict_header {
        config = config.with_strict_header();
    }
    if args.no_validate {
        config = config.without_reference_validation();
    }

    log::info!("Loading {}", args.file_path.display());
    let model = PolyhedronModel::from_file_with_config(&args.file_path, &config)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&model)?);
        return Ok(());
    }

    display_summary(&model);
    if args.edges {
        display_edges(&model);
    }

    Ok(())
}

/// Display element counts and colour usage
fn display_summary(model: &PolyhedronModel) {
    let summary = model.summary();
    let colored = model.explicit_color_counts();
    let resolved = resolve_colors(model, &DefaultColors::default(), &ColorOverrides::new());

    println!("┌─ Polyhedron ───────────────────────────────────────────┐");
    println!(
        "│ Name:                 {:<34} │",
        model.name.as_deref().unwrap_or("-")
    );
    println!("│ Vertices:             {:<34} │", summary.vertices);
    println!("│ Edges:                {:<34} │", summary.edges);
    println!("│ Faces:                {:<34} │", summary.faces);
    println!("│{:─<56}│", "");
    println!("│ Coloured vertices:    {:<34} │", colored.vertices);
    println!("│ Coloured edges:       {:<34} │", colored.edges);
    println!("│ Coloured faces:       {:<34} │", colored.faces);
    println!(
        "│ Hidden (alpha 0):     {:<34} │",
        format!(
            "{}v {}e {}f",
            summary.vertices - resolved.visible_vertices().count(),
            summary.edges - resolved.visible_edges().count(),
            summary.faces - resolved.visible_faces().count()
        )
    );

    #[cfg(feature = "mesh-ops")]
    {
        use offmodel::mesh_ops;
        println!("│{:─<56}│", "");
        if let Some(c) = mesh_ops::centroid(model) {
            println!(
                "│ Centroid:             {:<34} │",
                format!("({:.3}, {:.3}, {:.3})", c.x, c.y, c.z)
            );
        }
        println!(
            "│ Bounding radius:      {:<34} │",
            format!("{:.4}", mesh_ops::bounding_radius(model))
        );
        match mesh_ops::mean_edge_length(model) {
            Ok(Some(len)) => println!("│ Mean edge length:     {:<34} │", format!("{:.4}", len)),
            Ok(None) => {}
            Err(e) => log::warn!("{}", e),
        }
    }

    println!("└────────────────────────────────────────────────────────┘");
}

/// Display every edge with its explicit colour, if any
fn display_edges(model: &PolyhedronModel) {
    println!();
    for (i, edge) in model.edges.iter().enumerate() {
        match model.edges_color.get(i).copied().flatten() {
            Some(color) => println!("{:>6}: {} - {}  {:?}", i, edge.v1, edge.v2, color.channels()),
            None => println!("{:>6}: {} - {}", i, edge.v1, edge.v2),
        }
    }
}
