// src/viz_export.rs
use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::json;
use std::{fs, path::Path};

use crate::layout::{Arc, ChordLayout, Ribbon};
use crate::matrix::CollabMatrix;

/// Renderer-ready chord payload. Colors, fonts and label truncation belong
/// to the renderer and are deliberately absent.
#[derive(Serialize)]
struct VChord<'a> {
    generated: String,
    papers: usize,
    labels: &'a [String],
    matrix: &'a [Vec<u32>],
    totals: Vec<u64>,
    grand_total: u64,
    arcs: &'a [Arc],
    ribbons: &'a [Ribbon],
}

/// Write `viz.chord.json` (matrix + layout) and `viz.index.json` into
/// `out_dir`, creating the directory if needed.
pub fn write_chord_viz(
    out_dir: &Path,
    papers: usize,
    mat: &CollabMatrix,
    lay: &ChordLayout,
) -> Result<()> {
    fs::create_dir_all(out_dir).with_context(|| format!("create {:?}", out_dir))?;

    let generated = chrono::Local::now().format("%Y-%m-%d").to_string();
    let chord = VChord {
        generated: generated.clone(),
        papers,
        labels: mat.labels(),
        matrix: mat.cells(),
        totals: (0..mat.len()).map(|i| mat.row_total(i)).collect(),
        grand_total: mat.total(),
        arcs: &lay.arcs,
        ribbons: &lay.ribbons,
    };
    write_json(out_dir.join("viz.chord.json"), &chord)?;

    let idx = json!({
        "generated": generated,
        "version": 1,
        "counts": {
            "papers": papers,
            "areas": mat.len(),
            "links": lay.ribbons.len(),
        },
        "files": ["viz.chord.json"],
    });
    write_json(out_dir.join("viz.index.json"), &idx)?;

    Ok(())
}

fn write_json<P: AsRef<Path>, T: ?Sized + Serialize>(path: P, value: &T) -> Result<()> {
    fs::write(path, serde_json::to_vec_pretty(value)?)
        .map(|_| ())
        .map_err(|e| e.into())
}
