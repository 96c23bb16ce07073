//! Solver entry points.

use std::time::{Duration, Instant};

use log::{debug, info, warn};

use super::config::TspConfig;
use super::nearest::nearest_neighbor;
use super::types::{DirectWeights, Route};
use crate::error::{GraphError, GraphResult};
use crate::graph::Graph;
use crate::shortest_path::{DistanceMatrix, FloydWarshall};

/// Result of a multi-start sweep.
#[derive(Debug, Clone)]
pub struct MultiStartResult {
    /// Shortest route found over all start vertices.
    pub best: Route,

    /// Start vertex that produced `best`. Ties go to the lowest start.
    pub best_start: usize,

    /// Tour distance from each start vertex, indexed by start.
    pub distances: Vec<f64>,

    /// Wall-clock time of the whole sweep.
    pub elapsed: Duration,
}

/// Runs the greedy TSP strategies.
pub struct TspRunner;

impl TspRunner {
    /// Nearest neighbor over shortest-path distances, starting at
    /// `config.start`.
    ///
    /// Computes the Floyd–Warshall matrix of `graph` first; see
    /// [`shortest_path_with`](Self::shortest_path_with).
    ///
    /// # Examples
    ///
    /// ```
    /// use u_tsp::graph::{AdjMatrix, Graph};
    /// use u_tsp::tsp::{TspConfig, TspRunner};
    ///
    /// let mut g = AdjMatrix::new(4);
    /// for (u, v, w) in [(0, 1, 10.0), (0, 2, 15.0), (0, 3, 20.0),
    ///                   (1, 2, 35.0), (1, 3, 25.0), (2, 3, 30.0)] {
    ///     g.add_edge(u, v, w).unwrap();
    /// }
    ///
    /// let route = TspRunner::shortest_path(&g, &TspConfig::default()).unwrap();
    /// assert_eq!(route.tour, vec![0, 1, 2, 3, 0]);
    /// assert_eq!(route.distance, 95.0);
    /// ```
    pub fn shortest_path<G: Graph>(graph: &G, config: &TspConfig) -> GraphResult<Route> {
        check_start(graph.vertex_count(), config.start)?;
        let dm = FloydWarshall::compute(graph);
        Self::shortest_path_with(graph, &dm, config.start)
    }

    /// Nearest neighbor over a precomputed distance matrix of `graph`.
    ///
    /// The next vertex is chosen by shortest-path distance, so it need not
    /// be adjacent to the current one. Each leg of the returned route is
    /// priced at its direct edge weight when that edge exists and at its
    /// shortest-path distance otherwise.
    ///
    /// # Errors
    ///
    /// - [`GraphError::InvalidArgument`] if `dm` does not match `graph` in
    ///   size, the graph is empty, or `start` is out of range.
    /// - [`GraphError::Disconnected`] if any vertex pair is unreachable.
    ///   This is checked before any construction starts.
    pub fn shortest_path_with<G: Graph>(
        graph: &G,
        dm: &DistanceMatrix,
        start: usize,
    ) -> GraphResult<Route> {
        let n = graph.vertex_count();
        if dm.size() != n {
            return Err(GraphError::invalid(format!(
                "distance matrix has {} vertices, graph has {n}",
                dm.size()
            )));
        }
        check_start(n, start)?;
        if !dm.is_complete() {
            let unreachable = dm.unreachable_pairs().len();
            warn!("refusing to build a tour: {unreachable} vertex pair(s) unreachable");
            return Err(GraphError::Disconnected { unreachable });
        }

        let mut route = nearest_neighbor(dm, start)?;
        route.distance = route
            .legs()
            .map(|(a, b)| graph.weight(a, b).unwrap_or_else(|| dm.get(a, b)))
            .sum();
        info!(
            "shortest-path tour from {start} over {n} vertices: distance {:.3}",
            route.distance
        );
        Ok(route)
    }

    /// Nearest neighbor over direct edge weights, for complete graphs.
    ///
    /// # Errors
    ///
    /// [`GraphError::InvalidArgument`] for an empty graph or bad `start`;
    /// [`GraphError::Disconnected`] if a missing edge strands the tour.
    pub fn direct<G: Graph>(graph: &G, start: usize) -> GraphResult<Route> {
        nearest_neighbor(&DirectWeights(graph), start)
    }

    /// Runs [`direct`](Self::direct) from every vertex and keeps the shortest
    /// tour, timing the whole sweep.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_tsp::generate::{CompleteGraphGenerator, WeightRange};
    /// use u_tsp::graph::AdjList;
    /// use u_tsp::tsp::{TspConfig, TspRunner};
    ///
    /// let g: AdjList = CompleteGraphGenerator::generate(8, &WeightRange::new(10.0, 100.0), Some(1)).unwrap();
    /// let result = TspRunner::multi_start(&g, &TspConfig::default()).unwrap();
    /// assert_eq!(result.distances.len(), 8);
    /// assert!(result.best.is_valid_tour(8));
    /// ```
    pub fn multi_start<G: Graph>(graph: &G, config: &TspConfig) -> GraphResult<MultiStartResult> {
        let n = graph.vertex_count();
        if n == 0 {
            return Err(GraphError::invalid("cannot build a tour on an empty graph"));
        }

        let started = Instant::now();
        let routes = sweep(graph, config.parallel)
            .into_iter()
            .collect::<GraphResult<Vec<Route>>>()?;
        let elapsed = started.elapsed();

        let mut best_start = 0;
        for (start, route) in routes.iter().enumerate() {
            debug!("start {start}: distance {:.3}", route.distance);
            if route.distance < routes[best_start].distance {
                best_start = start;
            }
        }

        let distances = routes.iter().map(|r| r.distance).collect();
        let best = routes.into_iter().nth(best_start).ok_or_else(|| {
            GraphError::invalid("multi-start sweep produced no routes")
        })?;
        info!(
            "multi-start over {n} vertices: best start {best_start}, distance {:.3}, {:?}",
            best.distance, elapsed
        );

        Ok(MultiStartResult {
            best,
            best_start,
            distances,
            elapsed,
        })
    }
}

fn check_start(n: usize, start: usize) -> GraphResult<()> {
    if n == 0 {
        return Err(GraphError::invalid("cannot build a tour on an empty graph"));
    }
    if start >= n {
        return Err(GraphError::invalid(format!(
            "start vertex {start} out of range for graph with {n} vertices"
        )));
    }
    Ok(())
}

/// Greedy tour from every start vertex, in start order.
#[cfg(feature = "parallel")]
fn sweep<G: Graph>(graph: &G, parallel: bool) -> Vec<GraphResult<Route>> {
    use rayon::prelude::*;

    let n = graph.vertex_count();
    if parallel {
        (0..n)
            .into_par_iter()
            .map(|start| TspRunner::direct(graph, start))
            .collect()
    } else {
        (0..n).map(|start| TspRunner::direct(graph, start)).collect()
    }
}

#[cfg(not(feature = "parallel"))]
fn sweep<G: Graph>(graph: &G, _parallel: bool) -> Vec<GraphResult<Route>> {
    (0..graph.vertex_count())
        .map(|start| TspRunner::direct(graph, start))
        .collect()
}
