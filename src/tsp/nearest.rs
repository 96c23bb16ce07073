//! Nearest-neighbor tour construction.

use super::types::{Route, TourCost};
use crate::error::{GraphError, GraphResult};

/// Builds a closed tour greedily from `start`.
///
/// At each step the candidates are scanned in increasing vertex order and
/// the first unvisited vertex with a strictly smaller cost wins, so equal
/// costs resolve to the lowest index. The returned distance sums the costs
/// of all legs, closing leg included.
///
/// # Errors
///
/// - [`GraphError::InvalidArgument`] if `costs` is empty or `start` is out
///   of range.
/// - [`GraphError::Disconnected`] if the scan is stranded (no unvisited
///   vertex has a cost from the current one) or the closing leg is missing.
///
/// # Examples
///
/// ```
/// use u_tsp::graph::{AdjMatrix, Graph};
/// use u_tsp::tsp::{nearest_neighbor, DirectWeights};
///
/// let mut g = AdjMatrix::new(3);
/// g.add_edge(0, 1, 1.0).unwrap();
/// g.add_edge(1, 2, 2.0).unwrap();
/// g.add_edge(0, 2, 4.0).unwrap();
///
/// let route = nearest_neighbor(&DirectWeights(&g), 0).unwrap();
/// assert_eq!(route.tour, vec![0, 1, 2, 0]);
/// assert_eq!(route.distance, 7.0);
/// ```
pub fn nearest_neighbor<C: TourCost>(costs: &C, start: usize) -> GraphResult<Route> {
    let n = costs.size();
    if n == 0 {
        return Err(GraphError::invalid("cannot build a tour on an empty graph"));
    }
    if start >= n {
        return Err(GraphError::invalid(format!(
            "start vertex {start} out of range for graph with {n} vertices"
        )));
    }

    let mut visited = vec![false; n];
    visited[start] = true;
    let mut tour = Vec::with_capacity(n + 1);
    tour.push(start);
    let mut distance = 0.0;
    let mut current = start;

    for step in 1..n {
        let mut nearest: Option<(usize, f64)> = None;
        for candidate in 0..n {
            if visited[candidate] {
                continue;
            }
            if let Some(cost) = costs.cost(current, candidate) {
                if nearest.is_none_or(|(_, best)| cost < best) {
                    nearest = Some((candidate, cost));
                }
            }
        }

        let Some((next, cost)) = nearest else {
            return Err(GraphError::Disconnected {
                unreachable: n - step,
            });
        };
        visited[next] = true;
        tour.push(next);
        distance += cost;
        current = next;
    }

    if n > 1 {
        distance += costs
            .cost(current, start)
            .ok_or(GraphError::Disconnected { unreachable: 1 })?;
    }
    tour.push(start);

    Ok(Route { tour, distance })
}
