use std::hash::Hash;

use log::{debug, trace};

use crate::Cost;
use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::frontier::Frontier;
use crate::settled::Settled;
use crate::traits::AstarPather;

/// Outcome of a successful single-target [`search`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Found<T> {
    /// The accepted vertex.
    pub end: T,
    /// Total cost from the start to `end`.
    pub cost: Cost,
    /// Vertices from the start to `end`, both included.
    pub path: Vec<T>,
    /// Number of vertices whose neighbours were expanded.
    pub expanded: usize,
}

/// Find the cheapest path from `start` to any vertex accepted by `is_end`.
///
/// `is_end` is tested when a vertex is popped from the frontier, not when it
/// is generated, so the first accepted vertex popped is the cheapest one
/// (given non-negative edge costs and an admissible estimate). With the
/// default zero estimate this is Dijkstra's algorithm; otherwise A*.
///
/// Returns [`SearchError::NoPath`] if the reachable graph holds no accepted
/// vertex. The graph must be finite for that to happen in finite time.
pub fn search<T, P, E>(pather: &P, start: T, is_end: E) -> Result<Found<T>, SearchError<T>>
where
    T: Clone + Eq + Hash,
    P: AstarPather<T> + ?Sized,
    E: FnMut(&T) -> bool,
{
    search_with(pather, start, is_end, &SearchConfig::default())
}

/// [`search`] with explicit configuration.
///
/// Entries costing more than [`SearchConfig::max_cost`] are discarded as
/// they are popped, so an accepted vertex beyond the bound is never
/// returned. Re-running with a tighter bound is how callers enumerate
/// cost-limited answers.
pub fn search_with<T, P, E>(
    pather: &P,
    start: T,
    mut is_end: E,
    config: &SearchConfig,
) -> Result<Found<T>, SearchError<T>>
where
    T: Clone + Eq + Hash,
    P: AstarPather<T> + ?Sized,
    E: FnMut(&T) -> bool,
{
    let mut settled = Settled::new();
    let mut open = Frontier::new();

    let h = pather.estimate(&start);
    settled.seed(start.clone(), 0);
    open.push(start, 0, h);

    let mut nbuf = Vec::new();
    let mut expanded = 0;
    let mut pruned = 0;

    let end = loop {
        let Some(current) = open.pop() else {
            debug!(
                "search exhausted: {} vertices seen, {expanded} expanded, {pruned} pruned",
                settled.len()
            );
            return Err(SearchError::NoPath);
        };

        // Skip entries superseded by a cheaper route.
        if settled.cost(&current.vertex).is_some_and(|g| current.g > g) {
            continue;
        }

        if current.g > config.max_cost {
            trace!("pruned entry at cost {} > {}", current.g, config.max_cost);
            pruned += 1;
            continue;
        }

        if is_end(&current.vertex) {
            break current;
        }

        expanded += 1;
        nbuf.clear();
        pather.neighbors(&current.vertex, &mut nbuf);

        for next in nbuf.drain(..) {
            let step = pather.cost(&current.vertex, &next);
            debug_assert!(step >= 0, "negative edge cost {step}");
            let g = current.g.saturating_add(step);
            if settled.relax(&current.vertex, next.clone(), g) {
                let h = pather.estimate(&next);
                open.push(next, g, h);
            }
        }
    };

    let path = settled.path_to(&end.vertex);
    debug!(
        "search found cost {} ({} steps): {} vertices seen, {expanded} expanded, {} left open",
        end.g,
        path.len() - 1,
        settled.len(),
        open.len()
    );

    Ok(Found {
        end: end.vertex,
        cost: end.g,
        path,
        expanded,
    })
}
