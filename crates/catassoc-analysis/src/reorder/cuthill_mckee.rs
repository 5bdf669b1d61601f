//! Reverse Cuthill–McKee ordering over a petgraph adjacency graph.
//!
//! A dense symmetric matrix is read as an undirected graph: every non-zero
//! off-diagonal entry is an edge. Connected components are seeded in
//! ascending (degree, index) order. During the BFS the unvisited neighbours
//! of each node are appended in index order and then stably sorted by
//! degree. The final order is reversed.

use catassoc_core::errors::MatrixError;
use petgraph::graph::{NodeIndex, UnGraph};

/// Build the undirected adjacency graph of a dense `size × size` matrix.
///
/// Node `i` carries row index `i`. An edge (i, j) exists when either
/// `values[i][j]` or `values[j][i]` is non-zero (NaN counts as non-zero).
/// The diagonal is ignored.
pub fn adjacency_graph(values: &[f64], size: usize) -> Result<UnGraph<usize, f64>, MatrixError> {
    check_dimensions(values, size)?;

    let mut graph = UnGraph::with_capacity(size, 0);
    for i in 0..size {
        graph.add_node(i);
    }
    for i in 0..size {
        for j in (i + 1)..size {
            let upper = values[i * size + j];
            let lower = values[j * size + i];
            if upper != 0.0 || lower != 0.0 {
                graph.add_edge(NodeIndex::new(i), NodeIndex::new(j), upper);
            }
        }
    }
    Ok(graph)
}

/// Compute the reverse Cuthill–McKee permutation of a dense symmetric matrix.
///
/// Returns `perm` such that `M[perm][:, perm]` has reduced bandwidth.
/// Deterministic: ties are broken by index. Fails when `values` does not
/// hold exactly `size * size` entries.
pub fn reverse_cuthill_mckee(values: &[f64], size: usize) -> Result<Vec<usize>, MatrixError> {
    let graph = adjacency_graph(values, size)?;

    let neighbors: Vec<Vec<usize>> = graph
        .node_indices()
        .map(|n| {
            let mut adj: Vec<usize> = graph.neighbors(n).map(|m| m.index()).collect();
            adj.sort_unstable();
            adj
        })
        .collect();
    let degree: Vec<usize> = neighbors.iter().map(Vec::len).collect();

    let mut seeds: Vec<usize> = (0..size).collect();
    seeds.sort_by_key(|&i| (degree[i], i));

    let mut visited = vec![false; size];
    let mut order = Vec::with_capacity(size);

    for &seed in &seeds {
        if visited[seed] {
            continue;
        }
        visited[seed] = true;
        order.push(seed);

        let mut level_start = order.len() - 1;
        let mut level_end = order.len();
        while level_start < level_end {
            for pos in level_start..level_end {
                let node = order[pos];
                let first_new = order.len();
                for &next in &neighbors[node] {
                    if !visited[next] {
                        visited[next] = true;
                        order.push(next);
                    }
                }
                order[first_new..].sort_by_key(|&n| degree[n]);
            }
            level_start = level_end;
            level_end = order.len();
        }

        if order.len() == size {
            break;
        }
    }

    order.reverse();
    Ok(order)
}

/// Bandwidth of a dense matrix: max |i - j| over non-zero off-diagonal entries.
pub fn bandwidth(values: &[f64], size: usize) -> Result<usize, MatrixError> {
    check_dimensions(values, size)?;
    Ok(dense_bandwidth(values, size))
}

/// [`bandwidth`] for callers that already hold a `size × size` buffer.
pub(crate) fn dense_bandwidth(values: &[f64], size: usize) -> usize {
    let mut width = 0;
    for i in 0..size {
        for j in 0..size {
            if i != j && values[i * size + j] != 0.0 {
                width = width.max(i.abs_diff(j));
            }
        }
    }
    width
}

fn check_dimensions(values: &[f64], size: usize) -> Result<(), MatrixError> {
    let expected = size.checked_mul(size).ok_or(MatrixError::DimensionMismatch {
        size,
        expected: usize::MAX,
        found: values.len(),
    })?;
    if values.len() != expected {
        return Err(MatrixError::DimensionMismatch {
            size,
            expected,
            found: values.len(),
        });
    }
    Ok(())
}
