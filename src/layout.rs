//! Chord layout: turns the final labeled matrix into per-area arc spans and
//! per-pair ribbon geometries on the unit circle. Pure geometry, no state;
//! identical inputs always give identical angles. Matches the d3.chord
//! contract (padAngle between groups, optional descending subgroup sort) so
//! any chord renderer can consume the output directly.

use std::collections::HashMap;
use std::f64::consts::TAU;

use clap::ValueEnum;
use serde::Serialize;

use crate::matrix::CollabMatrix;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortMode {
    /// Sub-segments within each arc in index order.
    None,
    /// Sub-segments within each arc by descending value, ties by index.
    Desc,
}

#[derive(Debug, Clone, Copy)]
pub struct LayoutParams {
    /// Gap between adjacent arcs, in radians. Display parameter only.
    pub pad_angle: f64,
    pub sort_subgroups: SortMode,
}

impl Default for LayoutParams {
    fn default() -> Self {
        LayoutParams {
            pad_angle: 0.03,
            sort_subgroups: SortMode::Desc,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Arc {
    pub index: usize,
    pub label: String,
    /// Row total: the area's overall collaboration weight.
    pub value: u64,
    pub start_angle: f64,
    pub end_angle: f64,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct RibbonEnd {
    pub index: usize,
    pub start_angle: f64,
    pub end_angle: f64,
}

/// One ribbon per unordered nonzero pair. Source is the lower area index;
/// cells are symmetric so neither side has a larger value to prefer.
#[derive(Debug, Clone, Serialize)]
pub struct Ribbon {
    pub source: RibbonEnd,
    pub target: RibbonEnd,
    pub value: u32,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ChordLayout {
    pub arcs: Vec<Arc>,
    pub ribbons: Vec<Ribbon>,
}

/// Compute the circular layout for `mat`.
///
/// Every unit of cell value gets the same angular width:
/// `(2pi - pad * n) / total`. Arc i spans its row total in index order, with
/// one pad gap after each arc; within an arc, each nonzero cell (i, j) gets
/// a sub-span proportional to its value, and ribbon (i, j) connects the
/// (i, j) sub-span with the (j, i) sub-span. An empty or all-zero matrix
/// yields an empty layout.
pub fn layout(mat: &CollabMatrix, params: &LayoutParams) -> ChordLayout {
    let n = mat.len();
    let total = mat.total();
    if n == 0 || total == 0 {
        return ChordLayout::default();
    }

    // an oversized pad would make spans negative; cap it at a full circle
    // split across the gaps
    let pad = params.pad_angle.max(0.0).min(TAU / n as f64);
    let unit = (TAU - pad * n as f64) / total as f64;

    let mut arcs = Vec::with_capacity(n);
    let mut sub_spans: HashMap<(usize, usize), (f64, f64)> = HashMap::new();
    let mut x = 0.0_f64;

    for i in 0..n {
        let start = x;
        let mut cols: Vec<usize> = (0..n).filter(|&j| mat.get(i, j) > 0).collect();
        if params.sort_subgroups == SortMode::Desc {
            cols.sort_by(|&a, &b| mat.get(i, b).cmp(&mat.get(i, a)).then(a.cmp(&b)));
        }
        for j in cols {
            let width = mat.get(i, j) as f64 * unit;
            sub_spans.insert((i, j), (x, x + width));
            x += width;
        }
        let end = start + mat.row_total(i) as f64 * unit;
        arcs.push(Arc {
            index: i,
            label: mat.labels()[i].clone(),
            value: mat.row_total(i),
            start_angle: start,
            end_angle: end,
        });
        x = end + pad;
    }

    let mut ribbons = Vec::new();
    for i in 0..n {
        for j in (i + 1)..n {
            let value = mat.get(i, j);
            if value == 0 {
                continue;
            }
            let (s0, s1) = sub_spans[&(i, j)];
            let (t0, t1) = sub_spans[&(j, i)];
            ribbons.push(Ribbon {
                source: RibbonEnd {
                    index: i,
                    start_angle: s0,
                    end_angle: s1,
                },
                target: RibbonEnd {
                    index: j,
                    start_angle: t0,
                    end_angle: t1,
                },
                value,
            });
        }
    }

    ChordLayout { arcs, ribbons }
}
