mod authors;
mod errors;
mod ingest;
mod layout;
mod matrix;
mod models;
mod normalize;
mod roster;
mod transform;
mod viz_export;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::{debug, info};

use layout::{LayoutParams, SortMode};
use transform::OrderMode;

/// chord_areas - area-level co-authorship chord layout exporter
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Publications CSV (one row per paper, with a delimited co-author column)
    #[arg(long)]
    papers: PathBuf,

    /// Census CSV mapping full_name to Area_desc
    #[arg(long)]
    census: PathBuf,

    /// Output directory for the viz JSON files
    #[arg(short, long, default_value = "out")]
    output_dir: PathBuf,

    /// Restrict to these areas (repeatable, order preserved; default: all)
    #[arg(long = "include-area")]
    include_areas: Vec<String>,

    /// Minimum link weight; cells below it are zeroed (1 = keep everything)
    #[arg(long, default_value_t = 1)]
    min_link: u32,

    /// Row/column order of the exported matrix
    #[arg(long, value_enum, default_value = "original")]
    order: OrderMode,

    /// Sub-segment order within each arc
    #[arg(long, value_enum, default_value = "desc")]
    sort_subgroups: SortMode,

    /// Gap between adjacent arcs, in radians
    #[arg(long, default_value_t = 0.03)]
    pad_angle: f64,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .with_thread_ids(false)
        .with_line_number(true)
        .init();

    let args = Args::parse();
    info!(
        "Starting chord_areas - papers={}, census={}, output_dir={}",
        args.papers.display(),
        args.census.display(),
        args.output_dir.display()
    );

    let publications = ingest::load_publications(&args.papers)?;
    let census_rows = ingest::load_census(&args.census)?;

    let roster = roster::build_roster(&census_rows);
    let base = matrix::build_matrix(&publications, &roster);
    info!(
        "Base matrix - areas={}, total_weight={}",
        base.len(),
        base.total()
    );

    // views over the base matrix: filter -> threshold -> prune -> reorder
    let mat = transform::restrict(&base, &args.include_areas);
    let mat = transform::threshold(&mat, args.min_link);
    let mat = transform::prune_empty(&mat);
    let mat = transform::reorder(&mat, args.order);
    debug!(
        "Filtered matrix - areas={}, min_link={}, order={:?}",
        mat.len(),
        args.min_link,
        args.order
    );

    if mat.is_empty() {
        // soft empty state, distinct from a schema failure: still exported
        // so the renderer can show its own message
        info!("No links left with the current filters; include more areas or lower the threshold");
    }

    let params = LayoutParams {
        pad_angle: args.pad_angle,
        sort_subgroups: args.sort_subgroups,
    };
    let lay = layout::layout(&mat, &params);
    info!(
        "Layout computed - arcs={}, ribbons={}",
        lay.arcs.len(),
        lay.ribbons.len()
    );

    viz_export::write_chord_viz(&args.output_dir, publications.len(), &mat, &lay)?;
    info!("Viz written to {}", args.output_dir.display());

    Ok(())
}
