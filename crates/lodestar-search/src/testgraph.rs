//! Small explicit graphs and a brute-force baseline for tests.

use proptest::prelude::*;

use crate::Cost;
use crate::traits::{AstarPather, Pather, WeightedPather};

/// Directed multigraph over vertices `0..n` with non-negative weights.
#[derive(Debug, Clone)]
pub(crate) struct Graph {
    pub(crate) n: usize,
    pub(crate) edges: Vec<(usize, usize, Cost)>,
}

impl Graph {
    pub(crate) fn new(n: usize, edges: &[(usize, usize, Cost)]) -> Self {
        Self {
            n,
            edges: edges.to_vec(),
        }
    }

    /// Cheapest parallel edge between two vertices.
    pub(crate) fn weight(&self, from: usize, to: usize) -> Option<Cost> {
        self.edges
            .iter()
            .filter(|&&(a, b, _)| a == from && b == to)
            .map(|&(_, _, w)| w)
            .min()
    }

    /// Bellman-Ford distances from the given seeded sources.
    pub(crate) fn distances(&self, sources: &[(usize, Cost)]) -> Vec<Option<Cost>> {
        relax_all(self.n, sources, self.edges.iter().copied())
    }

    /// Bellman-Ford distances *to* the given targets.
    pub(crate) fn distances_to(&self, targets: &[usize]) -> Vec<Option<Cost>> {
        let sources: Vec<_> = targets.iter().map(|&t| (t, 0)).collect();
        relax_all(self.n, &sources, self.edges.iter().map(|&(a, b, w)| (b, a, w)))
    }

    /// Sum of edge weights along `path`, or `None` if a hop is not an edge.
    pub(crate) fn path_cost(&self, path: &[usize]) -> Option<Cost> {
        path.windows(2)
            .map(|w| self.weight(w[0], w[1]))
            .sum::<Option<Cost>>()
    }
}

fn relax_all(
    n: usize,
    sources: &[(usize, Cost)],
    edges: impl Iterator<Item = (usize, usize, Cost)> + Clone,
) -> Vec<Option<Cost>> {
    let mut dist: Vec<Option<Cost>> = vec![None; n];
    for &(s, c) in sources {
        dist[s] = Some(dist[s].map_or(c, |d| d.min(c)));
    }
    for _ in 0..n {
        for (a, b, w) in edges.clone() {
            if let Some(da) = dist[a] {
                let cand = da + w;
                if dist[b].is_none_or(|db| cand < db) {
                    dist[b] = Some(cand);
                }
            }
        }
    }
    dist
}

impl Pather<usize> for Graph {
    fn neighbors(&self, v: &usize, buf: &mut Vec<usize>) {
        buf.extend(
            self.edges
                .iter()
                .filter(|&&(a, _, _)| a == *v)
                .map(|&(_, b, _)| b),
        );
    }
}

impl WeightedPather<usize> for Graph {
    fn cost(&self, from: &usize, to: &usize) -> Cost {
        self.weight(*from, *to).unwrap_or(Cost::MAX)
    }
}

impl AstarPather<usize> for Graph {}

/// Graph plus a precomputed per-vertex heuristic.
pub(crate) struct Guided<'a> {
    pub(crate) graph: &'a Graph,
    pub(crate) h: Vec<Cost>,
}

impl Pather<usize> for Guided<'_> {
    fn neighbors(&self, v: &usize, buf: &mut Vec<usize>) {
        self.graph.neighbors(v, buf);
    }
}

impl WeightedPather<usize> for Guided<'_> {
    fn cost(&self, from: &usize, to: &usize) -> Cost {
        self.graph.cost(from, to)
    }
}

impl AstarPather<usize> for Guided<'_> {
    fn estimate(&self, v: &usize) -> Cost {
        self.h[*v]
    }
}

/// Random graphs with up to 8 vertices and weights in `0..10`.
pub(crate) fn graph_strategy() -> impl Strategy<Value = Graph> {
    (1usize..8).prop_flat_map(|n| {
        prop::collection::vec((0..n, 0..n, 0 as Cost..10), 0..24)
            .prop_map(move |edges| Graph { n, edges })
    })
}
