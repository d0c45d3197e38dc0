use std::hash::Hash;

use log::debug;

use crate::Cost;
use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::frontier::Frontier;
use crate::settled::Settled;
use crate::traits::WeightedPather;

/// Compute a multi-source Dijkstra map over everything reachable.
///
/// Each start is seeded with its own initial cost, which lets callers
/// account for distance already travelled. A vertex listed twice keeps its
/// cheapest initial cost. The search runs until the frontier is empty.
pub fn search_all<T, P, I>(pather: &P, starts: I) -> MultiPath<T>
where
    T: Clone + Eq + Hash,
    P: WeightedPather<T> + ?Sized,
    I: IntoIterator<Item = (T, Cost)>,
{
    search_all_with(pather, starts, &SearchConfig::default())
}

/// [`search_all`] with explicit configuration.
///
/// Vertices whose cost would exceed [`SearchConfig::max_cost`] are never
/// recorded, so the resulting map only holds vertices within the bound.
pub fn search_all_with<T, P, I>(pather: &P, starts: I, config: &SearchConfig) -> MultiPath<T>
where
    T: Clone + Eq + Hash,
    P: WeightedPather<T> + ?Sized,
    I: IntoIterator<Item = (T, Cost)>,
{
    let mut settled = Settled::new();
    let mut open = Frontier::new();

    // Seed sources.
    for (v, cost) in starts {
        if cost > config.max_cost {
            continue;
        }
        if settled.seed(v.clone(), cost) {
            open.push(v, cost, 0);
        }
    }

    let mut nbuf = Vec::new();
    let mut expanded = 0;

    while let Some(current) = open.pop() {
        if settled.cost(&current.vertex).is_some_and(|g| current.g > g) {
            continue;
        }
        expanded += 1;

        nbuf.clear();
        pather.neighbors(&current.vertex, &mut nbuf);

        for next in nbuf.drain(..) {
            let step = pather.cost(&current.vertex, &next);
            debug_assert!(step >= 0, "negative edge cost {step}");
            let g = current.g.saturating_add(step);
            if g > config.max_cost {
                continue;
            }
            if settled.relax(&current.vertex, next.clone(), g) {
                open.push(next, g, 0);
            }
        }
    }

    debug!(
        "search_all reached {} vertices, {expanded} expanded",
        settled.len()
    );
    MultiPath { settled }
}

/// Result of [`search_all`]: cheapest costs and backpointers for every
/// reached vertex.
///
/// Every query on a vertex that was not reached fails with
/// [`SearchError::Unreached`].
#[derive(Debug, Clone)]
pub struct MultiPath<T> {
    settled: Settled<T>,
}

impl<T: Clone + Eq + Hash> MultiPath<T> {
    /// Cheapest cost from any start to `v`, initial cost included.
    pub fn cost(&self, v: &T) -> Result<Cost, SearchError<T>> {
        self.settled
            .cost(v)
            .ok_or_else(|| SearchError::Unreached(v.clone()))
    }

    /// Cheapest path to `v`, starting at the start it was reached from.
    pub fn path(&self, v: &T) -> Result<Vec<T>, SearchError<T>> {
        self.check(v)?;
        Ok(self.settled.path_to(v))
    }

    /// Nearest predecessor of `v` (excluding `v` itself) that satisfies
    /// `pred`, or `None` if the walk reaches a start without a match.
    pub fn ancestor_matching<F>(&self, v: &T, mut pred: F) -> Result<Option<T>, SearchError<T>>
    where
        F: FnMut(&T) -> bool,
    {
        self.check(v)?;
        Ok(self.settled.ancestors(v).find(|a| pred(a)).cloned())
    }

    /// The start vertex that `v`'s cheapest path begins at.
    pub fn root_of(&self, v: &T) -> Result<T, SearchError<T>> {
        self.check(v)?;
        Ok(self.settled.ancestors(v).last().unwrap_or(v).clone())
    }

    /// Whether `v` was reached.
    pub fn contains(&self, v: &T) -> bool {
        self.settled.contains(v)
    }

    /// Every reached vertex, in no particular order.
    pub fn reached(&self) -> impl ExactSizeIterator<Item = &T> {
        self.settled.vertices()
    }

    /// Every reached vertex with its cost, in no particular order.
    pub fn costs(&self) -> impl ExactSizeIterator<Item = (&T, Cost)> {
        self.settled.iter()
    }

    /// Number of reached vertices.
    pub fn len(&self) -> usize {
        self.settled.len()
    }

    /// Whether nothing was reached (no starts within the cost bound).
    pub fn is_empty(&self) -> bool {
        self.settled.len() == 0
    }

    fn check(&self, v: &T) -> Result<(), SearchError<T>> {
        if self.settled.contains(v) {
            Ok(())
        } else {
            Err(SearchError::Unreached(v.clone()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fn_pather::FnPather;
    use crate::testgraph::{Graph, graph_strategy};
    use lodestar_core::{Point, Range};
    use proptest::prelude::*;
    use std::collections::HashSet;

    /// Undirected path graph 0 - 1 - ... - (n-1) with unit weights.
    fn line(n: i32) -> FnPather<impl Fn(&i32) -> Vec<i32>> {
        FnPather::new(move |&v: &i32| {
            [v - 1, v + 1]
                .into_iter()
                .filter(|w| (0..n).contains(w))
                .collect::<Vec<_>>()
        })
    }

    #[test]
    fn two_sources_with_offsets() {
        let m = search_all(&line(7), [(0, 0), (6, 5)]);
        for v in 0..7 {
            assert_eq!(m.cost(&v), Ok(Cost::from(v.min(5 + (6 - v)))), "vertex {v}");
        }
        assert_eq!(m.root_of(&4), Ok(0));
        assert_eq!(m.root_of(&6), Ok(6));
        assert_eq!(m.path(&6), Ok(vec![6]));
        assert_eq!(m.path(&3), Ok(vec![0, 1, 2, 3]));
        assert_eq!(m.len(), 7);
    }

    #[test]
    fn start_reached_cheaper_through_another_start() {
        let g = Graph::new(2, &[(0, 1, 1)]);
        let m = search_all(&g, [(0, 0), (1, 10)]);
        assert_eq!(m.cost(&1), Ok(1));
        assert_eq!(m.root_of(&1), Ok(0));
        assert_eq!(m.path(&1), Ok(vec![0, 1]));
    }

    #[test]
    fn duplicate_start_keeps_cheapest_seed() {
        let m = search_all(&line(3), [(0, 9), (0, 2)]);
        assert_eq!(m.cost(&0), Ok(2));
        assert_eq!(m.cost(&2), Ok(4));
    }

    #[test]
    fn unreached_queries_name_the_vertex() {
        let g = Graph::new(3, &[(0, 1, 1)]);
        let m = search_all(&g, [(0, 0)]);
        assert!(!m.contains(&2));
        assert_eq!(m.cost(&2), Err(SearchError::Unreached(2)));
        assert_eq!(m.path(&2), Err(SearchError::Unreached(2)));
        assert_eq!(m.root_of(&2), Err(SearchError::Unreached(2)));
        assert_eq!(
            m.ancestor_matching(&2, |_| true),
            Err(SearchError::Unreached(2))
        );
        assert_eq!(
            m.cost(&2).unwrap_err().to_string(),
            "vertex 2 was not reached"
        );
    }

    #[test]
    fn reached_is_the_reachable_set() {
        let g = Graph::new(5, &[(0, 1, 2), (1, 2, 0), (3, 4, 1)]);
        let m = search_all(&g, [(0, 0)]);
        let reached: HashSet<_> = m.reached().copied().collect();
        assert_eq!(reached, HashSet::from([0, 1, 2]));
        let costs: HashSet<_> = m.costs().map(|(&v, c)| (v, c)).collect();
        assert_eq!(costs, HashSet::from([(0, 0), (1, 2), (2, 2)]));
    }

    #[test]
    fn ancestor_matching_walks_backwards() {
        let m = search_all(&line(10), [(0, 0)]);
        assert_eq!(m.ancestor_matching(&7, |&v| v % 3 == 0), Ok(Some(6)));
        // The vertex itself is not considered.
        assert_eq!(m.ancestor_matching(&6, |&v| v % 3 == 0), Ok(Some(3)));
        assert_eq!(m.ancestor_matching(&7, |&v| v > 100), Ok(None));
        assert_eq!(m.ancestor_matching(&0, |_| true), Ok(None));
    }

    #[test]
    fn ancestor_matching_terminates_on_large_map() {
        let rng = Range::new(0, 0, 40, 40);
        let pather = FnPather::new(move |p: &Point| {
            p.neighbors_8()
                .into_iter()
                .filter(|&q| rng.contains(q))
                .collect::<Vec<_>>()
        });
        let m = search_all(&pather, [(Point::ZERO, 0)]);
        assert_eq!(m.len(), 1600);
        let far = Point::new(39, 39);
        assert_eq!(m.cost(&far), Ok(39));
        assert_eq!(m.ancestor_matching(&far, |_| false), Ok(None));
        assert_eq!(m.root_of(&far), Ok(Point::ZERO));
    }

    #[test]
    fn bounded_map_stops_at_max_cost() {
        let m = search_all_with(&line(100), [(50, 0)], &SearchConfig::bounded(3));
        let mut reached: Vec<_> = m.reached().copied().collect();
        reached.sort();
        assert_eq!(reached, (47..=53).collect::<Vec<_>>());
        assert_eq!(m.cost(&54), Err(SearchError::Unreached(54)));

        let none = search_all_with(&line(5), [(0, 7)], &SearchConfig::bounded(3));
        assert!(none.is_empty());
    }

    proptest! {
        #[test]
        fn costs_match_brute_force(
            g in graph_strategy(),
            seeds in prop::collection::vec((0usize..8, 0 as Cost..6), 1..4),
        ) {
            let seeds: Vec<_> = seeds.into_iter().filter(|&(v, _)| v < g.n).collect();
            let dist = g.distances(&seeds);
            let m = search_all(&g, seeds.iter().copied());

            for v in 0..g.n {
                match dist[v] {
                    Some(d) => {
                        prop_assert_eq!(m.cost(&v), Ok(d));
                        let path = m.path(&v).unwrap();
                        let root = m.root_of(&v).unwrap();
                        prop_assert_eq!(path[0], root);
                        prop_assert_eq!(path.last(), Some(&v));
                        let seed_cost = seeds
                            .iter()
                            .filter(|&&(s, _)| s == root)
                            .map(|&(_, c)| c)
                            .min();
                        prop_assert!(seed_cost.is_some());
                        let walked = g.path_cost(&path).map(|c| c + seed_cost.unwrap_or(0));
                        prop_assert_eq!(walked, Some(d));
                    }
                    None => prop_assert!(!m.contains(&v)),
                }
            }
            prop_assert_eq!(m.len(), dist.iter().filter(|d| d.is_some()).count());
        }
    }
}
