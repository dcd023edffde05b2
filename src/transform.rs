//! View transforms over the base collaboration matrix. Each one takes a
//! matrix and returns a new one; none mutates its input. Rows and columns
//! are always re-indexed together, so symmetry survives any chain.
//! Practical order: restrict -> threshold -> prune_empty -> reorder.

use clap::ValueEnum;

use crate::matrix::CollabMatrix;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OrderMode {
    /// Keep the matrix's current index order.
    Original,
    /// Alphabetical by area label.
    Alpha,
    /// Descending total collaboration weight, ties by current position.
    Degree,
}

/// Restrict the matrix to the requested area labels, in the caller's order.
/// Labels not present in the matrix are ignored; an empty intersection
/// yields a 0x0 matrix, not an error. An empty request means "no filter".
pub fn restrict(mat: &CollabMatrix, include: &[String]) -> CollabMatrix {
    if include.is_empty() {
        return mat.clone();
    }
    let mut keep: Vec<usize> = Vec::new();
    for label in include {
        if let Some(idx) = mat.index_of(label) {
            if !keep.contains(&idx) {
                keep.push(idx);
            }
        }
    }
    select(mat, &keep)
}

/// Zero every cell strictly below `min`. A minimum of 1 or less is a no-op.
/// Cells are zeroed by value, so the symmetric counterpart goes with them.
pub fn threshold(mat: &CollabMatrix, min: u32) -> CollabMatrix {
    if min <= 1 {
        return mat.clone();
    }
    let cells = mat
        .cells()
        .iter()
        .map(|row| row.iter().map(|&v| if v < min { 0 } else { v }).collect())
        .collect();
    CollabMatrix::from_parts(mat.labels().to_vec(), cells)
}

/// Drop every area whose row total is zero. Meant to run after
/// thresholding, which can create new all-zero rows.
pub fn prune_empty(mat: &CollabMatrix) -> CollabMatrix {
    let keep: Vec<usize> = (0..mat.len()).filter(|&i| mat.row_total(i) > 0).collect();
    select(mat, &keep)
}

/// Re-index rows and columns simultaneously by the chosen key.
pub fn reorder(mat: &CollabMatrix, mode: OrderMode) -> CollabMatrix {
    let mut order: Vec<usize> = (0..mat.len()).collect();
    match mode {
        OrderMode::Original => return mat.clone(),
        OrderMode::Alpha => {
            order.sort_by(|&a, &b| mat.labels()[a].cmp(&mat.labels()[b]));
        }
        OrderMode::Degree => {
            // stable sort keeps original position as the tie-break
            order.sort_by(|&a, &b| mat.row_total(b).cmp(&mat.row_total(a)));
        }
    }
    select(mat, &order)
}

/// Project the matrix onto the given row/column indices, in that order.
fn select(mat: &CollabMatrix, keep: &[usize]) -> CollabMatrix {
    let labels = keep.iter().map(|&i| mat.labels()[i].clone()).collect();
    let cells = keep
        .iter()
        .map(|&i| keep.iter().map(|&j| mat.get(i, j)).collect())
        .collect();
    CollabMatrix::from_parts(labels, cells)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mat3(labels: [&str; 3], cells: [[u32; 3]; 3]) -> CollabMatrix {
        CollabMatrix::from_parts(
            labels.iter().map(|s| s.to_string()).collect(),
            cells.iter().map(|r| r.to_vec()).collect(),
        )
    }

    fn assert_symmetric(mat: &CollabMatrix) {
        for i in 0..mat.len() {
            for j in 0..mat.len() {
                assert_eq!(mat.get(i, j), mat.get(j, i));
            }
        }
    }

    #[test]
    fn restrict_keeps_requested_order() {
        let m = mat3(["A", "B", "C"], [[0, 2, 1], [2, 0, 3], [1, 3, 0]]);
        let out = restrict(&m, &["C".into(), "A".into()]);
        assert_eq!(out.labels(), ["C", "A"]);
        assert_eq!(out.get(0, 1), 1);
        assert_symmetric(&out);
    }

    #[test]
    fn restrict_unknown_label_yields_empty() {
        let m = mat3(["A", "B", "C"], [[0, 2, 1], [2, 0, 3], [1, 3, 0]]);
        let out = restrict(&m, &["Chemistry".into()]);
        assert!(out.is_empty());
        assert_eq!(out.cells().len(), 0);
    }

    #[test]
    fn restrict_empty_request_is_no_filter() {
        let m = mat3(["A", "B", "C"], [[0, 2, 1], [2, 0, 3], [1, 3, 0]]);
        assert_eq!(restrict(&m, &[]), m);
    }

    #[test]
    fn threshold_at_one_is_noop() {
        let m = mat3(["A", "B", "C"], [[0, 2, 1], [2, 0, 3], [1, 3, 0]]);
        assert_eq!(threshold(&m, 1), m);
        assert_eq!(threshold(&m, 0), m);
    }

    #[test]
    fn threshold_zeroes_below_min_symmetrically() {
        let m = mat3(["A", "B", "C"], [[0, 2, 1], [2, 0, 3], [1, 3, 0]]);
        let out = threshold(&m, 2);
        assert_eq!(out.get(0, 2), 0);
        assert_eq!(out.get(2, 0), 0);
        assert_eq!(out.get(0, 1), 2);
        assert_symmetric(&out);
    }

    #[test]
    fn threshold_monotonic_and_prune_never_resurrects() {
        let m = mat3(["A", "B", "C"], [[0, 2, 1], [2, 0, 3], [1, 3, 0]]);
        let mut prev_labels = usize::MAX;
        for min in 1..=5u32 {
            let out = prune_empty(&threshold(&m, min));
            // raising the threshold never increases a surviving cell
            for i in 0..out.len() {
                for j in 0..out.len() {
                    let oi = m.index_of(&out.labels()[i]).unwrap();
                    let oj = m.index_of(&out.labels()[j]).unwrap();
                    assert!(out.get(i, j) <= m.get(oi, oj));
                }
            }
            assert!(out.len() <= prev_labels, "pruned rows must not come back");
            prev_labels = out.len();
            assert_symmetric(&out);
        }
    }

    #[test]
    fn threshold_then_prune_can_empty_the_matrix() {
        // single Biology-Physics link of weight 1, threshold 2
        let m = mat3(["Bio", "Chem", "Phys"], [[0, 0, 1], [0, 0, 0], [1, 0, 0]]);
        let out = prune_empty(&threshold(&m, 2));
        assert!(out.is_empty());
    }

    #[test]
    fn prune_drops_isolated_areas() {
        let m = mat3(["A", "B", "C"], [[0, 2, 0], [2, 0, 0], [0, 0, 0]]);
        let out = prune_empty(&m);
        assert_eq!(out.labels(), ["A", "B"]);
        assert_symmetric(&out);
    }

    #[test]
    fn reorder_alpha() {
        let m = mat3(["C", "A", "B"], [[0, 1, 2], [1, 0, 3], [2, 3, 0]]);
        let out = reorder(&m, OrderMode::Alpha);
        assert_eq!(out.labels(), ["A", "B", "C"]);
        // A-B cell must carry the old value
        assert_eq!(out.get(0, 1), 3);
        assert_symmetric(&out);
    }

    #[test]
    fn reorder_degree_descending_with_stable_ties() {
        // row sums: A=5, B=9, C=2
        let m = mat3(["A", "B", "C"], [[0, 4, 1], [4, 0, 5], [1, 5, 0]]);
        let out = reorder(&m, OrderMode::Degree);
        assert_eq!(out.labels(), ["B", "A", "C"]);
        assert_symmetric(&out);

        // equal degrees keep their original relative order
        let tied = mat3(["X", "Y", "Z"], [[0, 1, 0], [1, 0, 0], [0, 0, 0]]);
        let out = reorder(&tied, OrderMode::Degree);
        assert_eq!(out.labels(), ["X", "Y", "Z"]);
    }

    #[test]
    fn reorder_original_is_identity() {
        let m = mat3(["C", "A", "B"], [[0, 1, 2], [1, 0, 3], [2, 3, 0]]);
        assert_eq!(reorder(&m, OrderMode::Original), m);
    }
}
